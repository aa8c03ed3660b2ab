use serde::{Deserialize, Serialize};

#[derive(Deserialize, Clone, Debug)]
pub struct GeocodeQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    pub resolved_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ResolvedAddress {
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_serializes_camel_case() {
        let location = ResolvedLocation {
            resolved_address: "경기 화성시 향남읍 1-1".to_string(),
            latitude: 37.13,
            longitude: 126.92,
        };
        assert_eq!(
            serde_json::to_value(&location).unwrap(),
            serde_json::json!({
                "resolvedAddress": "경기 화성시 향남읍 1-1",
                "latitude": 37.13,
                "longitude": 126.92
            })
        );
    }
}
