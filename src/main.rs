mod clients;
mod geocode;
mod net;
#[cfg(test)]
mod testing;
mod transport;
mod types;

use std::{net::SocketAddr, time::Duration};

use axum::{extract::Query, routing::get, Json, Router};
use clients::{
    get_forward_resolver, get_reqwest_client, get_reverse_resolver, FORWARD, REQWEST, REVERSE,
};
use color_eyre::eyre::eyre;
use geo_types::Point;
use geocode::{ForwardResolver, ForwardResult, ReverseResolver, ReverseResult};
use net::response::{ResponseError, Result};
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use transport::{NaverTransport, NAVER_BASE_URL};
use types::dto::{
    geocode::{GeocodeQuery, ResolvedAddress, ResolvedLocation},
    geom::PartialLatLng,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    init_reqwest_client()?;
    init_resolvers()?;

    let addr: SocketAddr = std::env::var("INCIDENT_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    info!("Running on {addr}");

    axum::Server::bind(&addr)
        .serve(app().into_make_service())
        .await?;

    Ok(())
}

fn app() -> Router {
    Router::new()
        .route("/geocode", get(forward_lookup))
        .route("/reverse-geocode", get(reverse_lookup))
        .layer(CorsLayer::permissive())
}

fn init_reqwest_client() -> color_eyre::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()?;
    REQWEST
        .set(client)
        .map_err(|_| eyre!("reqwest client already initialised"))?;
    Ok(())
}

fn init_resolvers() -> color_eyre::Result<()> {
    let client_id = std::env::var("INCIDENT_NAVER_CLIENT_ID")?;
    let client_secret = std::env::var("INCIDENT_NAVER_CLIENT_SECRET")?;
    let base_url =
        std::env::var("INCIDENT_NAVER_BASE_URL").unwrap_or_else(|_| NAVER_BASE_URL.to_string());
    info!(%base_url, "Using naver geocoding");

    let transport = NaverTransport::new(
        get_reqwest_client()?.clone(),
        base_url,
        client_id,
        client_secret,
    );
    FORWARD
        .set(ForwardResolver::new(transport.clone()))
        .map_err(|_| eyre!("forward resolver already initialised"))?;
    REVERSE
        .set(ReverseResolver::new(transport))
        .map_err(|_| eyre!("reverse resolver already initialised"))?;
    Ok(())
}

#[instrument]
async fn forward_lookup(Query(params): Query<GeocodeQuery>) -> Result<Json<ResolvedLocation>> {
    let result = get_forward_resolver()?.resolve(&params.query).await;
    if let Some(reason) = result.reason() {
        info!(%reason, "forward lookup failed");
    }
    match result {
        ForwardResult::Resolved {
            resolved_address,
            latitude,
            longitude,
        } => Ok(Json(ResolvedLocation {
            resolved_address,
            latitude,
            longitude,
        })),
        ForwardResult::Failed(err) => Err(ResponseError::resolve_failure(err)),
    }
}

#[instrument]
async fn reverse_lookup(Query(origin): Query<PartialLatLng>) -> Result<Json<ResolvedAddress>> {
    let point = Option::<Point<f64>>::from(origin)
        .ok_or(ResponseError::bad_request("lat and lon are both required"))?;
    let result = get_reverse_resolver()?.resolve(point.y(), point.x()).await;
    if let Some(reason) = result.reason() {
        info!(%reason, "reverse lookup failed");
    }
    match result {
        ReverseResult::Resolved { address } => Ok(Json(ResolvedAddress { address })),
        ReverseResult::Failed(err) => Err(ResponseError::resolve_failure(err)),
    }
}
