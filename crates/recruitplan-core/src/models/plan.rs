use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

use super::demographic::{DemographicProfile, Dimension};
use super::enrollment::{CurrentEnrollment, SubgroupTarget};
use super::gap::DimensionGaps;
use super::population::{AgeBand, DiseasePopulation};
use super::screening::DimensionScreening;
use super::strategy::{FocusMetric, FocusSubgroup, StrategyRecommendation};

/// Everything one planning pass needs, captured up front.
///
/// The pipeline reads only from this snapshot; nothing computed mid-pass is
/// fed back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanInput {
    pub disease: String,
    pub trial: Option<String>,
    pub time_period: Option<String>,
    /// Population age band; the disease's default band when unset.
    pub age_band: Option<AgeBand>,
    pub target_total: i64,
    /// Target distribution override; the reference targets when unset.
    pub targets: Option<DemographicProfile>,
    /// Screen success percentages (0–100) keyed by subgroup label.
    #[serde(default)]
    pub screen_success_percent: BTreeMap<String, f64>,
    /// Current enrollment; the reference snapshot (if any) when unset.
    pub current: Option<CurrentEnrollment>,
    pub focus_metric: Option<FocusMetric>,
}

impl PlanInput {
    pub fn new(disease: impl Into<String>, target_total: i64) -> Self {
        Self {
            disease: disease.into(),
            trial: None,
            time_period: None,
            age_band: None,
            target_total,
            targets: None,
            screen_success_percent: BTreeMap::new(),
            current: None,
            focus_metric: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionTargets {
    pub dimension: Dimension,
    pub subgroups: Vec<SubgroupTarget>,
}

/// Target share of one subgroup against the census baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CensusComparison {
    pub dimension: Dimension,
    pub label: String,
    pub target_percent: f64,
    pub census_percent: Option<f64>,
    /// Target minus census, in percentage points.
    pub difference: Option<f64>,
}

/// The full output of one planning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanReport {
    pub disease: String,
    pub trial: Option<String>,
    pub time_period: Option<String>,
    pub therapeutic_area: Option<String>,
    pub source: Option<String>,
    pub target_total: u64,
    pub population: DiseasePopulation,
    pub baseline_name: Option<String>,
    pub targets: Vec<DimensionTargets>,
    pub census_comparison: Vec<CensusComparison>,
    pub screening: Vec<DimensionScreening>,
    pub gaps: Vec<DimensionGaps>,
    pub focus: Vec<FocusSubgroup>,
    pub strategies: Vec<StrategyRecommendation>,
    pub motivators: Vec<String>,
    pub barriers: Vec<String>,
    /// Non-fatal input problems, reported rather than corrected.
    pub issues: Vec<ValidationError>,
}
