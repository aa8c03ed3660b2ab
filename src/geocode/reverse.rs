use tracing::{debug, instrument};

use super::{http_failure, join_non_blank, ResolveError, ReverseResult};
use crate::transport::GeocodingTransport;
use crate::types::naver::{Land, Region, ReverseGeocodeResult};

const ERROR_EXCERPT_CHARS: usize = 200;

/// Resolves a coordinate pair to a display address with a single request.
pub struct ReverseResolver<T> {
    transport: T,
}

impl<T> ReverseResolver<T>
where
    T: GeocodingTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, latitude: f64, longitude: f64) -> ReverseResult {
        // Provider takes longitude first
        let coords = format!("{longitude},{latitude}");

        let response = match self.transport.reverse_geocode(&coords).await {
            Ok(response) => response,
            Err(err) => return ReverseResult::Failed(ResolveError::Transport(err.0)),
        };
        if !response.status.is_success() {
            return ReverseResult::Failed(http_failure(
                response.status,
                response.error_body.as_deref(),
                ERROR_EXCERPT_CHARS,
            ));
        }
        let Some(body) = response.body else {
            return ReverseResult::Failed(ResolveError::EmptyBody {
                code: response.status.as_u16(),
            });
        };

        debug!(results = body.results.len(), "reverse geocode answered");
        match body.results.first() {
            Some(result) => ReverseResult::Resolved {
                address: compose_address(result, &coords),
            },
            None => ReverseResult::Failed(ResolveError::NoReverseResults),
        }
    }
}

/// Structured address, then the land addition, then the raw coordinates.
fn compose_address(result: &ReverseGeocodeResult, coords: &str) -> String {
    let area = result.region.as_ref().map(area_names).unwrap_or_default();
    let land = result.land.as_ref();
    let building = land
        .and_then(|land| land.name.as_deref())
        .unwrap_or_default();
    let lot = land.map(lot_number).unwrap_or_default();

    let structured = join_non_blank([area.as_str(), building, lot.as_str()]);
    if !structured.is_empty() {
        return structured;
    }

    let addition = land
        .and_then(|land| land.addition0.as_ref())
        .and_then(|addition| addition.value.as_deref())
        .map(str::trim)
        .unwrap_or_default();
    if !addition.is_empty() {
        return addition.to_string();
    }

    coords.to_string()
}

/// Area levels 1 to 4 joined. Repeated names are kept as the provider sent them.
fn area_names(region: &Region) -> String {
    join_non_blank(
        region
            .areas()
            .into_iter()
            .flatten()
            .filter_map(|area| area.name.as_deref()),
    )
}

fn lot_number(land: &Land) -> String {
    let non_blank = |number: &Option<String>| {
        number
            .as_deref()
            .map(str::trim)
            .filter(|number| !number.is_empty())
            .map(str::to_string)
    };
    match (non_blank(&land.number1), non_blank(&land.number2)) {
        (Some(primary), Some(secondary)) => format!("{primary}-{secondary}"),
        (Some(primary), None) => primary,
        _ => String::new(),
    }
}
