use std::sync::Arc;

use recruitplan_engine::PlannerSettings;
use recruitplan_reference::ReferenceStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Both fields are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReferenceStore>,
    pub settings: Arc<PlannerSettings>,
}

impl AppState {
    pub fn new(store: ReferenceStore, settings: PlannerSettings) -> Self {
        Self {
            store: Arc::new(store),
            settings: Arc::new(settings),
        }
    }
}
