use geo_types::Point;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct PartialLatLng {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// `x` is longitude, `y` latitude. `None` unless both axes are present and
/// in WGS84 range.
impl From<PartialLatLng> for Option<Point<f64>> {
    fn from(value: PartialLatLng) -> Self {
        match (value.lat, value.lon) {
            (Some(lat), Some(lon))
                if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) =>
            {
                Some(Point::new(lon, lat))
            }
            _ => None,
        }
    }
}
