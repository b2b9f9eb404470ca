use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{get_json, number_like};
use crate::domain::params::{BodyRecord, FetchOutcome};
use crate::domain::ports::SmallBodyDatabase;

// JPL SSD client: SBDB for physical parameters, CAD for close-approach
// velocities. Both endpoints are keyless.
pub struct SsdClient {
    http: Client,
    base_url: String,
}

impl SsdClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SmallBodyDatabase for SsdClient {
    async fn fetch_body(&self, designation: &str) -> FetchOutcome<BodyRecord> {
        let url = format!("{}/sbdb.api", self.base_url);
        let query = [("sstr", designation.to_string())];

        get_json::<Value>(&self.http, &url, &query)
            .await
            .map(|value| parse_body(&value))
    }

    async fn fetch_approach_velocity_kms(&self, designation: &str) -> FetchOutcome<Option<f64>> {
        let url = format!("{}/cad.api", self.base_url);
        let query = [("sstr", designation.to_string()), ("limit", "1".to_string())];

        get_json::<Value>(&self.http, &url, &query)
            .await
            .map(|value| parse_approach_velocity(&value))
    }
}

// SBDB reports the diameter in kilometers under phys_par.
fn parse_body(value: &Value) -> BodyRecord {
    let diameter_m = value
        .pointer("/phys_par/diameter")
        .and_then(number_like)
        .map(|diameter_km| diameter_km * 1000.0);

    let object = value.get("object");
    let full_name = object
        .and_then(|object| object.get("fullname"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let designation = object
        .and_then(|object| object.get("des"))
        .and_then(Value::as_str)
        .map(str::to_string);

    BodyRecord {
        diameter_m,
        full_name,
        designation,
    }
}

// CAD rows are positional arrays; index 7 is the relative velocity in km/s.
fn parse_approach_velocity(value: &Value) -> Option<f64> {
    value
        .get("data")
        .and_then(Value::as_array)
        .and_then(|rows| rows.first())
        .and_then(Value::as_array)
        .and_then(|row| row.get(7))
        .and_then(number_like)
}
