use std::fmt;

// Failure taxonomy for the simulation pipeline. Every upstream failure is
// translated into one of these at the resolver/gate boundary; raw transport
// errors never reach the HTTP layer.
#[derive(Debug)]
pub enum SimulationError {
    // Malformed or out-of-range request field; the message names it.
    Validation(String),
    // The elevation oracle has no data for the requested point.
    NoCoverage,
    // The requested point sits at or below sea level.
    OverWater,
    // The primary catalog credential is absent; not retried via fallback.
    MissingApiKey,
    // Definite HTTP error status from the primary catalog; no fallback.
    UpstreamHttp { status: u16 },
    // Primary timed out and the fallback chain also failed.
    UpstreamTimeout { reason: String },
    // Fallback chain exhausted on a non-timeout trigger.
    UpstreamUnavailable { reason: String },
    // Anything unclassified; the message carries the cause.
    Internal(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Validation(message) => write!(f, "{message}"),
            SimulationError::NoCoverage => write!(
                f,
                "Only continental U.S. allowed (no coverage outside the U.S.)."
            ),
            SimulationError::OverWater => write!(
                f,
                "Selected point is over water (elevation <= 0 m). Choose land in the U.S."
            ),
            SimulationError::MissingApiKey => {
                write!(f, "NASA_API_KEY is not configured on the server.")
            }
            SimulationError::UpstreamHttp { status } => {
                write!(f, "NeoWs HTTP {status}. Try Manual mode or retry.")
            }
            SimulationError::UpstreamTimeout { reason } => write!(
                f,
                "NeoWs timeout and SBDB/CAD unavailable ({reason}). Use Manual mode or try again."
            ),
            SimulationError::UpstreamUnavailable { reason } => {
                write!(f, "Could not fetch NEO data ({reason}). Use Manual mode.")
            }
            SimulationError::Internal(cause) => write!(f, "internal: {cause}"),
        }
    }
}

impl std::error::Error for SimulationError {}
