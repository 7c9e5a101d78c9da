use tracing_subscriber::EnvFilter;

use recruitplan_api::state::AppState;
use recruitplan_api::{app, config};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = config::load_from_env()?;
    let store = config::build_store(&config);
    tracing::info!(
        diseases = store.diseases().len(),
        records = store.records().len(),
        "reference store ready"
    );

    let state = AppState::new(store, config.planner);
    lambda_http::run(app::router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
