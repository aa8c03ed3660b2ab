use async_trait::async_trait;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::naver::{GeocodeResponse, ReverseGeocodeResponse};

pub const NAVER_BASE_URL: &str = "https://naveropenapi.apigw.ntruss.com";

/// Raw outcome of one provider call that reached the server
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse<T> {
    pub status: StatusCode,
    pub body: Option<T>,
    pub error_body: Option<String>,
}

#[cfg(test)]
impl<T> TransportResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body),
            error_body: None,
        }
    }
}

/// The call never produced an HTTP response we could read
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self(value.to_string())
    }
}

#[async_trait]
pub trait GeocodingTransport: Send + Sync {
    async fn forward_geocode(
        &self,
        query: &str,
    ) -> Result<TransportResponse<GeocodeResponse>, TransportError>;

    /// `coords` is `"<longitude>,<latitude>"`
    async fn reverse_geocode(
        &self,
        coords: &str,
    ) -> Result<TransportResponse<ReverseGeocodeResponse>, TransportError>;
}

#[derive(Clone)]
pub struct NaverTransport {
    client: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl NaverTransport {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header("X-NCP-APIGW-API-KEY-ID", &self.client_id)
            .header("X-NCP-APIGW-API-KEY", &self.client_secret)
            .header("Accept", "application/json")
    }
}

#[async_trait]
impl GeocodingTransport for NaverTransport {
    async fn forward_geocode(
        &self,
        query: &str,
    ) -> Result<TransportResponse<GeocodeResponse>, TransportError> {
        let request = self
            .get("/map-geocode/v2/geocode")
            .query(&[("query", query)]);
        send(request).await
    }

    async fn reverse_geocode(
        &self,
        coords: &str,
    ) -> Result<TransportResponse<ReverseGeocodeResponse>, TransportError> {
        let request = self.get("/map-reversegeocode/v2/gc").query(&[
            ("coords", coords),
            ("orders", "addr,roadaddr"),
            ("output", "json"),
        ]);
        send(request).await
    }
}

async fn send<T>(request: reqwest::RequestBuilder) -> Result<TransportResponse<T>, TransportError>
where
    T: DeserializeOwned,
{
    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    debug!(%status, bytes = text.len(), "provider responded");

    if !status.is_success() {
        return Ok(TransportResponse {
            status,
            body: None,
            error_body: (!text.trim().is_empty()).then_some(text),
        });
    }
    if text.trim().is_empty() || text.trim() == "null" {
        return Ok(TransportResponse {
            status,
            body: None,
            error_body: None,
        });
    }
    let body = serde_json::from_str::<T>(&text)
        .map_err(|e| TransportError(format!("failed to decode response body: {e}")))?;
    Ok(TransportResponse {
        status,
        body: Some(body),
        error_body: None,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::{extract::Query, http::HeaderMap, routing::get, Router};

    use super::*;
    use crate::testing::serve;

    type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

    fn transport(base_url: String) -> NaverTransport {
        NaverTransport::new(reqwest::Client::new(), base_url, "client-id", "client-secret")
    }

    /// Provider that answers every request with the given status and body
    async fn provider(status: StatusCode, body: &'static str) -> String {
        let reply = move || async move { (status, body) };
        serve(
            Router::new()
                .route("/map-geocode/v2/geocode", get(reply))
                .route("/map-reversegeocode/v2/gc", get(reply)),
        )
        .await
    }

    /// Provider that records query parameters and credentials of each call
    async fn recording_provider(seen: Seen) -> String {
        let record = move |Query(mut params): Query<HashMap<String, String>>, headers: HeaderMap| {
            let seen = seen.clone();
            async move {
                for key in ["X-NCP-APIGW-API-KEY-ID", "X-NCP-APIGW-API-KEY"] {
                    let value = headers
                        .get(key)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or_default();
                    params.insert(key.to_string(), value.to_string());
                }
                seen.lock().unwrap().push(params);
                r#"{"status":"OK","addresses":[],"results":[]}"#
            }
        };
        serve(
            Router::new()
                .route("/map-geocode/v2/geocode", get(record.clone()))
                .route("/map-reversegeocode/v2/gc", get(record)),
        )
        .await
    }

    #[tokio::test]
    async fn success_body_is_decoded() {
        let base = provider(
            StatusCode::OK,
            r#"{"status":"OK","addresses":[{"jibunAddress":"경기 화성시 향남읍 1-1","x":"126.92","y":"37.13"}]}"#,
        )
        .await;

        let response = transport(base).forward_geocode("향남읍").await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.error_body, None);
        let body = response.body.unwrap();
        assert_eq!(body.addresses[0].x.as_deref(), Some("126.92"));
        assert_eq!(body.addresses[0].y.as_deref(), Some("37.13"));
    }

    #[tokio::test]
    async fn blank_or_null_success_body_is_absent() {
        for text in ["", "  \n", "null"] {
            let base = provider(StatusCode::OK, text).await;

            let response = transport(base).reverse_geocode("126.92,37.13").await.unwrap();

            assert_eq!(response.status, StatusCode::OK);
            assert_eq!(response.body, None, "{text:?}");
            assert_eq!(response.error_body, None);
        }
    }

    #[tokio::test]
    async fn error_status_keeps_error_body() {
        let base = provider(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"errorCode":"200","message":"Authentication Failed"}}"#,
        )
        .await;

        let response = transport(base).forward_geocode("역삼동").await.unwrap();

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, None);
        assert_eq!(
            response.error_body.as_deref(),
            Some(r#"{"error":{"errorCode":"200","message":"Authentication Failed"}}"#)
        );
    }

    #[tokio::test]
    async fn error_status_with_blank_body_has_no_error_body() {
        let base = provider(StatusCode::SERVICE_UNAVAILABLE, " ").await;

        let response = transport(base).forward_geocode("역삼동").await.unwrap();

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.error_body, None);
    }

    #[tokio::test]
    async fn undecodable_success_body_is_a_transport_error() {
        let base = provider(StatusCode::OK, "<html>maintenance</html>").await;

        let err = transport(base).forward_geocode("역삼동").await.unwrap_err();

        assert!(
            err.0.starts_with("failed to decode response body"),
            "{}",
            err.0
        );
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = transport(format!("http://{addr}"))
            .forward_geocode("역삼동")
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn sends_query_parameters_and_credentials() {
        let seen = Seen::default();
        let base = recording_provider(seen.clone()).await;
        let transport = transport(format!("{base}/"));

        transport.forward_geocode("스타벅스 주소").await.unwrap();
        transport.reverse_geocode("126.92,37.13").await.unwrap();

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen[0]["query"], "스타벅스 주소");
        assert_eq!(seen[1]["coords"], "126.92,37.13");
        assert_eq!(seen[1]["orders"], "addr,roadaddr");
        assert_eq!(seen[1]["output"], "json");
        for params in &seen {
            assert_eq!(params["X-NCP-APIGW-API-KEY-ID"], "client-id");
            assert_eq!(params["X-NCP-APIGW-API-KEY"], "client-secret");
        }
    }
}
