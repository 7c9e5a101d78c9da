use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use recruitplan_reference::{ReferenceKey, ResolvedReference};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ReferenceSummary {
    disease: String,
    therapeutic_area: Option<String>,
    trials: Vec<String>,
}

pub async fn list_references(State(state): State<AppState>) -> Json<Vec<ReferenceSummary>> {
    let summaries = state
        .store
        .diseases()
        .into_iter()
        .map(|disease| ReferenceSummary {
            disease: disease.to_string(),
            therapeutic_area: state
                .store
                .latest(&ReferenceKey::disease(disease))
                .and_then(|r| r.therapeutic_area.clone()),
            trials: state
                .store
                .trials(disease)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();
    Json(summaries)
}

pub async fn get_reference(
    State(state): State<AppState>,
    Path(disease): Path<String>,
) -> Result<Json<ResolvedReference>, ApiError> {
    let resolved = state.store.resolve(&ReferenceKey::disease(disease))?;
    Ok(Json(resolved))
}
