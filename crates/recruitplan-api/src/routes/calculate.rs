use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use recruitplan_core::error::ValidationError;
use recruitplan_core::models::demographic::{Dimension, DimensionProfile};
use recruitplan_core::models::enrollment::{CurrentDimension, SubgroupTarget};
use recruitplan_core::models::gap::{GapOrder, GapResult};
use recruitplan_core::models::screening::{ScreeningParameters, ScreeningResult};
use recruitplan_engine::gap;
use recruitplan_engine::ranking::{ScreeningKey, order_gaps, rank};
use recruitplan_engine::screening::compute_screening_need;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GapRequest {
    pub targets: DimensionProfile,
    pub target_total: i64,
    pub current: CurrentDimension,
    pub current_total: i64,
    #[serde(default)]
    pub order: GapOrder,
}

#[derive(Serialize)]
pub struct GapResponse {
    pub dimension: Dimension,
    pub gaps: Vec<GapResult>,
}

/// Gaps for a single dimension. Invalid proportions are rejected, not
/// normalized.
pub async fn compute_gaps(
    State(state): State<AppState>,
    Json(req): Json<GapRequest>,
) -> Result<Json<GapResponse>, ApiError> {
    let gaps = gap::compute_gaps(
        &req.targets,
        req.target_total,
        &req.current,
        req.current_total,
        state.settings.sum_tolerance,
    )?;

    Ok(Json(GapResponse {
        dimension: req.targets.dimension,
        gaps: order_gaps(gaps, req.order),
    }))
}

#[derive(Deserialize)]
pub struct ScreeningItem {
    pub target: SubgroupTarget,
    pub parameters: ScreeningParameters,
}

#[derive(Deserialize)]
pub struct ScreeningRequest {
    pub items: Vec<ScreeningItem>,
}

#[derive(Serialize)]
pub struct ScreeningResponse {
    pub results: Vec<ScreeningResult>,
    pub issues: Vec<ValidationError>,
}

/// Screening requirements, ranked by screen percent. An item with invalid
/// parameters is reported in `issues` without affecting the others.
pub async fn compute_screening(Json(req): Json<ScreeningRequest>) -> Json<ScreeningResponse> {
    let mut results = Vec::with_capacity(req.items.len());
    let mut issues = Vec::new();
    for item in &req.items {
        match item.parameters.validate() {
            Ok(()) => results.push(compute_screening_need(&item.target, &item.parameters)),
            Err(e) => issues.push(e),
        }
    }

    Json(ScreeningResponse {
        results: rank(results, ScreeningKey::ScreenPercent),
        issues,
    })
}
