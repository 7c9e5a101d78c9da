use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::demographic::{Dimension, SubgroupShare};

/// Relative slack for binary representation error (e.g. 0.29 × 10,000), a
/// few ulps of the product.
const RELATIVE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Number of whole people making up `percent` of `total`, rounded down.
pub fn share_count(percent: f64, total: u64) -> u64 {
    let product = percent * total as f64;
    ((product + product.abs() * RELATIVE_TOLERANCE) / 100.0)
        .floor()
        .max(0.0) as u64
}

/// Percentage `count` represents of `total`; 0 when `total` is 0.
pub fn percent_of_total(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// A subgroup's enrollment target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubgroupTarget {
    pub label: String,
    pub target_percent: f64,
    pub target_count: u64,
}

impl SubgroupTarget {
    /// Derive the target count for a share of the total enrollment goal.
    pub fn derive(share: &SubgroupShare, target_total: u64) -> Self {
        Self {
            label: share.label.clone(),
            target_percent: share.percent,
            target_count: share_count(share.percent, target_total),
        }
    }
}

/// A subgroup's current enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubgroupCurrent {
    pub label: String,
    pub current_count: u64,
    pub current_percent: f64,
}

impl SubgroupCurrent {
    pub fn from_count(label: impl Into<String>, count: u64, current_total: u64) -> Self {
        Self {
            label: label.into(),
            current_count: count,
            current_percent: percent_of_total(count, current_total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubgroupCount {
    pub label: String,
    pub count: i64,
}

impl SubgroupCount {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// How current enrollment for one dimension was reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum CurrentBreakdown {
    /// Raw counts. When `remainder_label` is set, everyone in the current
    /// total not covered by `counts` is attributed to that subgroup.
    Counts {
        counts: Vec<SubgroupCount>,
        remainder_label: Option<String>,
    },
    /// Percentages of the current total.
    Percentages { shares: Vec<SubgroupShare> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurrentDimension {
    pub dimension: Dimension,
    pub breakdown: CurrentBreakdown,
}

/// Current enrollment: the actual total and its per-dimension breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurrentEnrollment {
    pub total: i64,
    pub dimensions: Vec<CurrentDimension>,
}

impl CurrentEnrollment {
    pub fn dimension(&self, dimension: &Dimension) -> Option<&CurrentDimension> {
        self.dimensions.iter().find(|d| &d.dimension == dimension)
    }
}
