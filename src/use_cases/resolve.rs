use std::sync::Arc;

use crate::domain::errors::SimulationError;
use crate::domain::params::{FetchOutcome, ImpactParameters, NeoObject};
use crate::domain::ports::{NeoCatalog, SmallBodyDatabase};
use crate::domain::tuning;
use crate::interface_adapters::protocol::SimulateRequest;

// Parameter resolution: manual pass-through, or the NeoWs primary lookup
// with the SBDB/CAD fallback chain, dispatched on tagged call outcomes.
pub struct ResolveParameters {
    pub catalog: Arc<dyn NeoCatalog>,
    pub small_body: Arc<dyn SmallBodyDatabase>,
}

impl ResolveParameters {
    pub async fn execute(
        &self,
        request: &SimulateRequest,
    ) -> Result<ImpactParameters, SimulationError> {
        let Some(density_kg_m3) = request.density_kg_m3 else {
            return Err(SimulationError::Internal(
                "density missing after validation".to_string(),
            ));
        };

        // Manual mode carries every physical parameter in the request.
        let Some(neo_id) = request.neo_id.as_deref() else {
            return manual_passthrough(request, density_kg_m3);
        };

        match self.catalog.fetch_object(neo_id).await {
            FetchOutcome::Success(object) => {
                self.from_catalog_object(neo_id, object, density_kg_m3, request.name.clone())
                    .await
            }
            FetchOutcome::MissingCredentials => Err(SimulationError::MissingApiKey),
            // A definite upstream status short-circuits; only timeouts and
            // generic failures are worth the fallback chain.
            FetchOutcome::HttpStatus(status) => Err(SimulationError::UpstreamHttp { status }),
            FetchOutcome::Timeout => {
                tracing::warn!(neo_id, "catalog lookup timed out, trying small-body fallback");
                self.from_small_body(neo_id, density_kg_m3, request.name.clone())
                    .await
                    .map_err(|reason| SimulationError::UpstreamTimeout { reason })
            }
            FetchOutcome::Failed(error) => {
                tracing::warn!(neo_id, %error, "catalog lookup failed, trying small-body fallback");
                self.from_small_body(neo_id, density_kg_m3, request.name.clone())
                    .await
                    .map_err(|reason| SimulationError::UpstreamUnavailable { reason })
            }
        }
    }

    async fn from_catalog_object(
        &self,
        neo_id: &str,
        object: NeoObject,
        density_kg_m3: f64,
        client_name: Option<String>,
    ) -> Result<ImpactParameters, SimulationError> {
        let diameter_m = (object.diameter_min_m + object.diameter_max_m) / 2.0;

        // The catalog record may lack a close-approach velocity; a dedicated
        // close-approach lookup can still provide one before the default.
        let velocity_kms = match object.approach_velocity_kms {
            Some(velocity) => velocity,
            None => match self.small_body.fetch_approach_velocity_kms(neo_id).await {
                FetchOutcome::Success(Some(velocity)) => velocity,
                _ => tuning::DEFAULT_VELOCITY_KMS,
            },
        };

        ensure_positive(diameter_m, velocity_kms)
            .map_err(|reason| SimulationError::UpstreamUnavailable { reason })?;

        Ok(ImpactParameters {
            diameter_m,
            density_kg_m3,
            velocity_kms,
            display_name: client_name.or(object.name),
        })
    }

    // Fallback chain: SBDB for the diameter, CAD for the velocity. Diameter
    // is mandatory and has no default; velocity falls back to the policy
    // mean encounter speed.
    async fn from_small_body(
        &self,
        neo_id: &str,
        density_kg_m3: f64,
        client_name: Option<String>,
    ) -> Result<ImpactParameters, String> {
        let body = match self.small_body.fetch_body(neo_id).await {
            FetchOutcome::Success(body) => body,
            FetchOutcome::Timeout => return Err("SBDB timed out".to_string()),
            FetchOutcome::HttpStatus(status) => return Err(format!("SBDB HTTP {status}")),
            FetchOutcome::MissingCredentials => return Err("SBDB credentials missing".to_string()),
            FetchOutcome::Failed(error) => return Err(format!("SBDB unavailable: {error}")),
        };

        let Some(diameter_m) = body.diameter_m else {
            return Err(format!("SBDB has no diameter for '{neo_id}'"));
        };

        let velocity_kms = match self.small_body.fetch_approach_velocity_kms(neo_id).await {
            FetchOutcome::Success(Some(velocity)) => velocity,
            _ => tuning::DEFAULT_VELOCITY_KMS,
        };

        ensure_positive(diameter_m, velocity_kms)?;

        Ok(ImpactParameters {
            diameter_m,
            density_kg_m3,
            velocity_kms,
            display_name: client_name.or(body.full_name).or(body.designation),
        })
    }
}

fn manual_passthrough(
    request: &SimulateRequest,
    density_kg_m3: f64,
) -> Result<ImpactParameters, SimulationError> {
    match (request.diameter_m, request.velocity_kms) {
        (Some(diameter_m), Some(velocity_kms)) => Ok(ImpactParameters {
            diameter_m,
            density_kg_m3,
            velocity_kms,
            display_name: request.name.clone(),
        }),
        _ => Err(SimulationError::Internal(
            "manual parameters missing after validation".to_string(),
        )),
    }
}

// Provider data is untrusted; the physics engine requires strictly positive
// inputs.
fn ensure_positive(diameter_m: f64, velocity_kms: f64) -> Result<(), String> {
    if diameter_m <= 0.0 {
        return Err("provider returned a non-positive diameter".to_string());
    }
    if velocity_kms <= 0.0 {
        return Err("provider returned a non-positive velocity".to_string());
    }
    Ok(())
}
