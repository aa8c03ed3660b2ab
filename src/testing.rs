use std::net::SocketAddr;

use axum::Router;

/// Serves `app` on an ephemeral local port and returns its base URL
pub async fn serve(app: Router) -> String {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    format!("http://{addr}")
}
