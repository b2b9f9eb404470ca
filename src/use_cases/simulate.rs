use std::sync::Arc;

use crate::domain::errors::SimulationError;
use crate::domain::ports::{ElevationOracle, NeoCatalog, SmallBodyDatabase};
use crate::domain::{geo, physics, tuning};
use crate::interface_adapters::protocol::{Kpis, Meta, SimulateRequest, SimulateResponse};
use crate::use_cases::resolve::ResolveParameters;
use crate::use_cases::validate::validate;

// Request orchestration: validate, gate on elevation, resolve parameters,
// run the physics, project the footprint, assemble the response.
pub struct SimulateUseCase {
    pub elevation: Arc<dyn ElevationOracle>,
    pub catalog: Arc<dyn NeoCatalog>,
    pub small_body: Arc<dyn SmallBodyDatabase>,
}

impl SimulateUseCase {
    pub async fn execute(
        &self,
        request: SimulateRequest,
    ) -> Result<SimulateResponse, SimulationError> {
        validate(&request)?;

        let Some((lat, lon)) = request.lat.zip(request.lon) else {
            return Err(SimulationError::Internal(
                "coordinates missing after validation".to_string(),
            ));
        };

        // Continental-US gate: no elevation data means no coverage, and an
        // elevation at or below sea level means open water.
        match self.elevation.elevation_m(lat, lon).await {
            None => return Err(SimulationError::NoCoverage),
            Some(elevation_m) if elevation_m <= 0.0 => return Err(SimulationError::OverWater),
            Some(_) => {}
        }

        let angle_deg = request
            .angle_deg
            .unwrap_or(tuning::DEFAULT_IMPACT_ANGLE_DEG);

        let resolver = ResolveParameters {
            catalog: self.catalog.clone(),
            small_body: self.small_body.clone(),
        };
        let params = resolver.execute(&request).await?;

        let mass_kg = physics::mass_kg(params.diameter_m, params.density_kg_m3);
        let energy_mt =
            physics::energy_megatons(physics::energy_joules(mass_kg, params.velocity_kms * 1000.0));
        let crater_radius_m = physics::crater_radius_m(energy_mt, angle_deg);
        let rings_m = physics::blast_rings_m(energy_mt, angle_deg);

        let geojson =
            geo::feature_collection(lat, lon, crater_radius_m, &rings_m, tuning::CIRCLE_STEPS);
        let time_series = physics::time_series(crater_radius_m);

        Ok(SimulateResponse {
            meta: Meta {
                units: "SI",
                source: "team-computed",
                name: params.display_name,
            },
            kpis: Kpis {
                // The headline energy figure is reported to 4 decimals.
                energy_mt: round4(energy_mt),
                crater_radius_m,
            },
            rings_m,
            geojson,
            time_series,
        })
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
