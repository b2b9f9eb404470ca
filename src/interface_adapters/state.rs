use std::sync::Arc;

use crate::domain::ports::{ElevationOracle, NeoCatalog, SmallBodyDatabase};

// Shared application state for the HTTP handlers. Ports are held as
// Arc<dyn Trait> so any implementation can be injected (dependency
// injection; tests use scripted stubs).
pub struct AppState {
    pub elevation: Arc<dyn ElevationOracle>,
    pub catalog: Arc<dyn NeoCatalog>,
    pub small_body: Arc<dyn SmallBodyDatabase>,
}
