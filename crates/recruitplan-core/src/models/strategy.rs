use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::demographic::Dimension;

/// Metric used to rank focus populations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FocusMetric {
    #[default]
    ScreenPercent,
    AbsoluteGap,
    PercentGap,
}

/// The computed need that placed a subgroup at its rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "metric", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum NeedMetric {
    ScreenPercent(f64),
    ScreenedNeeded(u64),
    AbsoluteGap(i64),
    PercentGap(f64),
}

impl NeedMetric {
    pub fn value(&self) -> f64 {
        match *self {
            NeedMetric::ScreenPercent(v) | NeedMetric::PercentGap(v) => v,
            NeedMetric::ScreenedNeeded(v) => v as f64,
            NeedMetric::AbsoluteGap(v) => v as f64,
        }
    }
}

/// One entry of a ranked, de-duplicated focus population list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FocusSubgroup {
    pub label: String,
    pub dimension: Dimension,
    pub need: NeedMetric,
}

/// A supplementary block attached to recommendations mentioning a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Citation {
    pub title: String,
    pub note: String,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrategyRecommendation {
    pub subgroup_label: String,
    pub dimension: Dimension,
    pub need: NeedMetric,
    pub entries: Vec<String>,
    pub citations: Vec<Citation>,
}
