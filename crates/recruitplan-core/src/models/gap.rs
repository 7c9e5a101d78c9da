use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::demographic::Dimension;

/// Target vs. current enrollment for one subgroup.
///
/// Positive gaps mean the subgroup is under-enrolled. Gaps are never
/// clamped, so an over-enrolled subgroup has a negative gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GapResult {
    pub label: String,
    pub target_percent: f64,
    pub target_count: u64,
    pub current_percent: f64,
    pub current_count: u64,
    pub absolute_gap: i64,
    /// Target percent minus current percent, in percentage points.
    pub percent_gap: f64,
}

impl GapResult {
    /// The gap as a percentage of the total enrollment goal.
    pub fn share_of_enrollment(&self, target_total: u64) -> f64 {
        if target_total == 0 {
            0.0
        } else {
            self.absolute_gap as f64 / target_total as f64 * 100.0
        }
    }
}

/// Ordering requested for a gap list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GapOrder {
    /// The order subgroups were supplied in.
    #[default]
    Input,
    /// Descending absolute gap.
    AbsoluteGap,
    /// Descending percentage-point gap.
    PercentGap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionGaps {
    pub dimension: Dimension,
    pub gaps: Vec<GapResult>,
}
