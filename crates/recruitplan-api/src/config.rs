use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use recruitplan_engine::PlannerSettings;
use recruitplan_reference::{ReferenceRecord, ReferenceStore};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Environment variable naming the service config file.
pub const CONFIG_ENV: &str = "RECRUITPLAN_CONFIG";

/// Planner keys that v0 configs kept at the top level.
const V0_PLANNER_KEYS: [&str; 6] = [
    "tolerance",
    "default_screen_success",
    "focus_metric",
    "gap_order",
    "thresholds",
    "keyword_rules",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub planner: PlannerSettings,
    /// Extra reference records layered into the built-in store, such as
    /// trial snapshots for named time periods.
    #[serde(default)]
    pub reference_overlays: Vec<ReferenceRecord>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            planner: PlannerSettings::default(),
            reference_overlays: Vec::new(),
        }
    }
}

/// Load the config named by [`CONFIG_ENV`], or defaults when it is unset.
pub fn load_from_env() -> eyre::Result<ServiceConfig> {
    match env::var(CONFIG_ENV) {
        Ok(path) => load_config(Path::new(&path)),
        Err(_) => {
            tracing::info!("{CONFIG_ENV} not set, using default planner settings");
            Ok(ServiceConfig::default())
        }
    }
}

pub fn load_config(path: &Path) -> eyre::Result<ServiceConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version") {
        None | Some(serde_json::Value::Null) => 0,
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| eyre::eyre!("config_version {value} is not a supported version number"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: ServiceConfig = serde_json::from_value(migrated)?;
    tracing::info!(
        path = %path.display(),
        overlays = config.reference_overlays.len(),
        "config loaded"
    );
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: nest planner keys under "planner", rename tolerance → sum_tolerance
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let mut planner = serde_json::Map::new();
        for key in V0_PLANNER_KEYS {
            if let Some(value) = obj.remove(key) {
                let renamed = if key == "tolerance" { "sum_tolerance" } else { key };
                planner.insert(renamed.to_string(), value);
            }
        }
        obj.insert("planner".to_string(), serde_json::Value::Object(planner));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested planner settings)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

/// The built-in reference store with the config's overlays added.
pub fn build_store(config: &ServiceConfig) -> ReferenceStore {
    let mut store = recruitplan_reference::builtin().clone();
    for record in &config.reference_overlays {
        store.insert(record.clone());
    }
    store
}
