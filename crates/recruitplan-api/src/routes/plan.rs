use axum::Json;
use axum::extract::State;

use recruitplan_core::models::plan::{PlanInput, PlanReport};
use recruitplan_engine::build_plan;

use crate::error::ApiError;
use crate::state::AppState;

/// Run a full planning pass over the request body.
pub async fn create_plan(
    State(state): State<AppState>,
    Json(input): Json<PlanInput>,
) -> Result<Json<PlanReport>, ApiError> {
    let report = build_plan(&input, &state.store, &state.settings)?;
    Ok(Json(report))
}
