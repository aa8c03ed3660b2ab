use serde::{Deserialize, Serialize};

/// Body of `GET /map-geocode/v2/geocode`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,
}

/// One forward geocoding candidate. Coordinates come back as text,
/// `x` is longitude and `y` is latitude.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub road_address: Option<String>,
    #[serde(default)]
    pub jibun_address: Option<String>,
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub y: Option<String>,
}

/// Body of `GET /map-reversegeocode/v2/gc`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub results: Vec<ReverseGeocodeResult>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReverseGeocodeResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub land: Option<Land>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Region {
    #[serde(default)]
    pub area1: Option<Area>,
    #[serde(default)]
    pub area2: Option<Area>,
    #[serde(default)]
    pub area3: Option<Area>,
    #[serde(default)]
    pub area4: Option<Area>,
}

impl Region {
    /// Area levels 1 to 4, province first
    pub fn areas(&self) -> [Option<&Area>; 4] {
        [
            self.area1.as_ref(),
            self.area2.as_ref(),
            self.area3.as_ref(),
            self.area4.as_ref(),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Area {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Land {
    /// Building name
    #[serde(default)]
    pub name: Option<String>,
    /// Primary lot number
    #[serde(default)]
    pub number1: Option<String>,
    /// Secondary lot number
    #[serde(default)]
    pub number2: Option<String>,
    #[serde(default)]
    pub addition0: Option<Addition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Addition {
    #[serde(default, rename = "type")]
    pub addition_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}
