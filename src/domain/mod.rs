// Domain layer: impact model types and rules.

pub mod errors;
pub mod geo;
pub mod params;
pub mod physics;
pub mod ports;
pub mod tuning;

pub use errors::SimulationError;
pub use params::{BodyRecord, FetchOutcome, ImpactParameters, NeoObject};
