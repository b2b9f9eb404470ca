use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{get_json, number_like};
use crate::domain::params::{FetchOutcome, NeoObject};
use crate::domain::ports::NeoCatalog;

// NeoWs object-catalog client (primary provider). Lookups need an API key;
// a missing key is reported as a credentials outcome and never retried.
pub struct NeoWsClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NeoWsClient {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct NeoWsObject {
    name: Option<String>,
    estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Deserialize)]
struct EstimatedDiameter {
    meters: DiameterRange,
}

#[derive(Debug, Deserialize)]
struct DiameterRange {
    estimated_diameter_min: f64,
    estimated_diameter_max: f64,
}

#[derive(Debug, Deserialize)]
struct CloseApproach {
    relative_velocity: Option<RelativeVelocity>,
}

#[derive(Debug, Deserialize)]
struct RelativeVelocity {
    // NeoWs serializes velocities as strings; keep the raw value and coerce.
    kilometers_per_second: Value,
}

#[async_trait]
impl NeoCatalog for NeoWsClient {
    async fn fetch_object(&self, neo_id: &str) -> FetchOutcome<NeoObject> {
        let Some(api_key) = self.api_key.as_deref().filter(|key| !key.is_empty()) else {
            return FetchOutcome::MissingCredentials;
        };

        let url = format!("{}/neo/rest/v1/neo/{}", self.base_url, neo_id);
        let query = [("api_key", api_key.to_string())];

        get_json::<NeoWsObject>(&self.http, &url, &query)
            .await
            .map(normalize)
    }
}

fn normalize(object: NeoWsObject) -> NeoObject {
    let approach_velocity_kms = object
        .close_approach_data
        .first()
        .and_then(|approach| approach.relative_velocity.as_ref())
        .and_then(|velocity| number_like(&velocity.kilometers_per_second));

    NeoObject {
        diameter_min_m: object.estimated_diameter.meters.estimated_diameter_min,
        diameter_max_m: object.estimated_diameter.meters.estimated_diameter_max,
        approach_velocity_kms,
        name: object.name,
    }
}
