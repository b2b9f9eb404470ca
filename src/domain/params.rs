// Resolved physical inputs for the impact model. All three numeric fields
// are > 0 by the time a value of this type reaches the physics engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactParameters {
    pub diameter_m: f64,
    pub density_kg_m3: f64,
    pub velocity_kms: f64,
    pub display_name: Option<String>,
}

// Normalized record from the primary NEO catalog.
#[derive(Debug, Clone)]
pub struct NeoObject {
    pub diameter_min_m: f64,
    pub diameter_max_m: f64,
    pub approach_velocity_kms: Option<f64>,
    pub name: Option<String>,
}

// Normalized record from the small-body database fallback.
#[derive(Debug, Clone, Default)]
pub struct BodyRecord {
    pub diameter_m: Option<f64>,
    pub full_name: Option<String>,
    pub designation: Option<String>,
}

// Tagged outcome of a single provider call. Clients translate transport,
// status, and decode failures into these tags; the resolver dispatches on
// the tag instead of on error types.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Success(T),
    Timeout,
    HttpStatus(u16),
    MissingCredentials,
    Failed(String),
}

impl<T> FetchOutcome<T> {
    // Transform the success payload, preserving the failure tag.
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Success(value) => FetchOutcome::Success(transform(value)),
            FetchOutcome::Timeout => FetchOutcome::Timeout,
            FetchOutcome::HttpStatus(status) => FetchOutcome::HttpStatus(status),
            FetchOutcome::MissingCredentials => FetchOutcome::MissingCredentials,
            FetchOutcome::Failed(error) => FetchOutcome::Failed(error),
        }
    }
}
