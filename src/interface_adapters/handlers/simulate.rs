use crate::domain::errors::SimulationError;
use crate::interface_adapters::protocol::{
    ErrorResponse, HealthResponse, SimulateRequest, SimulateResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::simulate::SimulateUseCase;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Handler for running one impact simulation.
#[tracing::instrument(name = "simulate", skip_all, fields(neo_id = ?body.neo_id))]
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SimulateUseCase {
        elevation: state.elevation.clone(),
        catalog: state.catalog.clone(),
        small_body: state.small_body.clone(),
    };

    let response = use_case.execute(body).await.map_err(map_simulation_error)?;

    Ok(Json(response))
}

// Single translation table from the domain error taxonomy to HTTP statuses.
fn map_simulation_error(err: SimulationError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        SimulationError::Validation(_)
        | SimulationError::NoCoverage
        | SimulationError::OverWater => StatusCode::BAD_REQUEST,
        SimulationError::MissingApiKey
        | SimulationError::UpstreamHttp { .. }
        | SimulationError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
        SimulationError::UpstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        SimulationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %err, "simulation failed");
    } else {
        tracing::warn!(error = %err, "simulation rejected");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
