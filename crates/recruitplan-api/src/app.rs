use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::middleware;
use crate::routes;
use crate::state::AppState;

/// Build the API router. Every route is a pure function of its request and
/// the read-only state, so no per-user session is kept.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Reference data (read-only)
        .route("/references", get(routes::references::list_references))
        .route(
            "/references/{disease}",
            get(routes::references::get_reference),
        )
        // Calculations
        .route("/gaps", post(routes::calculate::compute_gaps))
        .route("/screening", post(routes::calculate::compute_screening))
        .route("/plan", post(routes::plan::create_plan))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
