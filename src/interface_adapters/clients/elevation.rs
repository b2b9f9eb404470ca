use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{get_json, number_like};
use crate::domain::params::FetchOutcome;
use crate::domain::ports::ElevationOracle;

// Readings below this are EPQS "no data" sentinels, not real elevations.
const SENTINEL_FLOOR_M: f64 = -100_000.0;

// EPQS point-query client. Every failure mode reads as "no coverage"; the
// orchestrator decides what that means for the request.
pub struct EpqsClient {
    http: Client,
    base_url: String,
}

impl EpqsClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ElevationOracle for EpqsClient {
    async fn elevation_m(&self, lat: f64, lon: f64) -> Option<f64> {
        let query = [
            ("x", lon.to_string()),
            ("y", lat.to_string()),
            ("units", "Meters".to_string()),
            ("wkid", "4326".to_string()),
        ];

        let value = match get_json::<Value>(&self.http, &self.base_url, &query).await {
            FetchOutcome::Success(value) => value,
            outcome => {
                tracing::warn!(lat, lon, ?outcome, "elevation lookup failed");
                return None;
            }
        };

        extract_elevation(&value)
    }
}

// The service has shipped more than one response shape; accept the nested
// legacy layout as well as the flat `value`/`elevation` fields.
fn extract_elevation(value: &Value) -> Option<f64> {
    let raw = value
        .pointer("/USGS_Elevation_Point_Query_Service/Elevation_Query/Elevation")
        .or_else(|| value.get("value"))
        .or_else(|| value.get("elevation"))?;

    let elevation_m = number_like(raw)?;
    if elevation_m < SENTINEL_FLOOR_M {
        return None;
    }
    Some(elevation_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_the_flat_value_field() {
        assert_eq!(extract_elevation(&json!({"value": 329.17})), Some(329.17));
    }

    #[test]
    fn reads_the_nested_legacy_layout() {
        let payload = json!({
            "USGS_Elevation_Point_Query_Service": {
                "Elevation_Query": {"Elevation": "2134.5"}
            }
        });
        assert_eq!(extract_elevation(&payload), Some(2134.5));
    }

    #[test]
    fn treats_the_no_data_sentinel_as_missing() {
        assert_eq!(extract_elevation(&json!({"value": -1000000.0})), None);
    }

    #[test]
    fn treats_unparseable_payloads_as_missing() {
        assert_eq!(extract_elevation(&json!({"value": "n/a"})), None);
        assert_eq!(extract_elevation(&json!({})), None);
    }
}
