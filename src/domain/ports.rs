use async_trait::async_trait;

use crate::domain::params::{BodyRecord, FetchOutcome, NeoObject};

// Handlers and use cases depend on these traits, not the concrete reqwest
// clients. Dependencies point inwards to the domain layer.

// Port for the primary NEO catalog (object lookup by identifier).
#[async_trait]
pub trait NeoCatalog: Send + Sync {
    async fn fetch_object(&self, neo_id: &str) -> FetchOutcome<NeoObject>;
}

// Port for the small-body database and its close-approach lookup, used as
// the fallback chain behind the primary catalog.
#[async_trait]
pub trait SmallBodyDatabase: Send + Sync {
    async fn fetch_body(&self, designation: &str) -> FetchOutcome<BodyRecord>;
    async fn fetch_approach_velocity_kms(&self, designation: &str) -> FetchOutcome<Option<f64>>;
}

// Port for the ground-elevation oracle. Every failure mode reads as "no
// data"; policy for what that means belongs to the orchestrator.
#[async_trait]
pub trait ElevationOracle: Send + Sync {
    async fn elevation_m(&self, lat: f64, lon: f64) -> Option<f64>;
}
