use tracing::{debug, info, instrument};

use super::{http_failure, query::refine_query, ForwardResult, ResolveError};
use crate::transport::GeocodingTransport;
use crate::types::naver::Address;

const ERROR_EXCERPT_CHARS: usize = 300;

/// Resolves free text to coordinates, retrying once with a refined query.
pub struct ForwardResolver<T> {
    transport: T,
}

impl<T> ForwardResolver<T>
where
    T: GeocodingTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> ForwardResult {
        let query = query.trim();
        if query.is_empty() {
            return ForwardResult::Failed(ResolveError::EmptyInput);
        }

        let first = self.request(query).await;
        if first.is_resolved() {
            return first;
        }

        let refined = refine_query(query);
        if refined == query {
            return first;
        }
        info!(%refined, "first attempt failed, retrying with refined query");
        self.request(&refined).await
    }

    async fn request(&self, query: &str) -> ForwardResult {
        let response = match self.transport.forward_geocode(query).await {
            Ok(response) => response,
            Err(err) => return ForwardResult::Failed(ResolveError::Transport(err.0)),
        };
        if !response.status.is_success() {
            return ForwardResult::Failed(http_failure(
                response.status,
                response.error_body.as_deref(),
                ERROR_EXCERPT_CHARS,
            ));
        }
        let Some(body) = response.body else {
            return ForwardResult::Failed(ResolveError::EmptyBody {
                code: response.status.as_u16(),
            });
        };

        debug!(candidates = body.addresses.len(), "forward geocode answered");
        // TODO: surface the remaining ranked candidates once the search screen can list them
        match body.addresses.first() {
            Some(candidate) => resolve_candidate(candidate, query),
            None => ForwardResult::Failed(ResolveError::NoResults {
                query: query.to_string(),
            }),
        }
    }
}

fn resolve_candidate(candidate: &Address, query: &str) -> ForwardResult {
    let Some(latitude) = parse_coordinate(candidate.y.as_deref()) else {
        return ForwardResult::Failed(ResolveError::LatitudeParse);
    };
    let Some(longitude) = parse_coordinate(candidate.x.as_deref()) else {
        return ForwardResult::Failed(ResolveError::LongitudeParse);
    };
    let resolved_address = [&candidate.road_address, &candidate.jibun_address]
        .into_iter()
        .filter_map(|address| address.as_deref().map(str::trim))
        .find(|address| !address.is_empty())
        .unwrap_or(query)
        .to_string();

    ForwardResult::Resolved {
        resolved_address,
        latitude,
        longitude,
    }
}

fn parse_coordinate(text: Option<&str>) -> Option<f64> {
    text?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
