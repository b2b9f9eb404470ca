use serde::{Deserialize, Serialize};

use crate::domain::geo::FeatureCollection;
use crate::domain::physics::{BlastRings, TimeSeriesSample};

// Request payload for an impact simulation. Every field is optional at the
// wire level; the validator owns missing-field reporting per parameter mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulateRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub angle_deg: Option<f64>,
    pub name: Option<String>,
    pub neo_id: Option<String>,
    pub diameter_m: Option<f64>,
    pub density_kg_m3: Option<f64>,
    pub velocity_kms: Option<f64>,
}

// Response payload for a completed simulation.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub meta: Meta,
    pub kpis: Kpis,
    pub rings_m: BlastRings,
    pub geojson: FeatureCollection,
    pub time_series: Vec<TimeSeriesSample>,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    pub units: &'static str,
    pub source: &'static str,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Kpis {
    pub energy_mt: f64,
    pub crater_radius_m: f64,
}

// Health probe payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
