use serde::{Deserialize, Serialize};
use ts_rs::TS;

use recruitplan_core::models::gap::{GapOrder, GapResult};
use recruitplan_core::models::strategy::{Citation, FocusMetric};

/// Tunable planner behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PlannerSettings {
    /// Allowed deviation from 100 when summing a dimension's percentages.
    pub sum_tolerance: f64,
    /// Screen success rate (0–1) for subgroups with no input or reference rate.
    pub default_screen_success: f64,
    pub focus_metric: FocusMetric,
    pub gap_order: GapOrder,
    pub thresholds: SelectionThresholds,
    pub keyword_rules: Vec<KeywordRule>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            sum_tolerance: 0.01,
            default_screen_success: 0.5,
            focus_metric: FocusMetric::ScreenPercent,
            gap_order: GapOrder::AbsoluteGap,
            thresholds: SelectionThresholds::default(),
            keyword_rules: default_keyword_rules(),
        }
    }
}

/// Subgroup-level gates for strategy selection. Unset thresholds admit
/// every subgroup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SelectionThresholds {
    /// Percentage points the subgroup must be under-enrolled by.
    pub min_percent_gap: Option<f64>,
    /// Gap as a percentage of total enrollment the subgroup must exceed.
    pub min_gap_share: Option<f64>,
}

impl SelectionThresholds {
    /// Whether a subgroup with `gap` clears every configured threshold.
    pub fn admits(&self, gap: Option<&GapResult>, target_total: u64) -> bool {
        if self.min_percent_gap.is_none() && self.min_gap_share.is_none() {
            return true;
        }
        let Some(gap) = gap else {
            return false;
        };
        let percent_ok = self.min_percent_gap.is_none_or(|min| gap.percent_gap > min);
        let share_ok = self
            .min_gap_share
            .is_none_or(|min| gap.share_of_enrollment(target_total) > min);
        percent_ok && share_ok
    }
}

/// Attaches `citation` to any recommendation whose text mentions one of
/// `keywords` (case-insensitive substring match).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub citation: Citation,
}

impl KeywordRule {
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| !k.is_empty())
            .any(|k| text.contains(&k.to_lowercase()))
    }
}

fn default_keyword_rules() -> Vec<KeywordRule> {
    vec![KeywordRule {
        keywords: vec!["MMSE".to_string(), "logical memory".to_string()],
        citation: Citation {
            title: "Cognitive screening criteria".to_string(),
            note: "MMSE and logical memory cut-offs are sensitive to education and language. \
                   Consider adjusted norms or alternative measures where they drive screen \
                   failures in under-enrolled groups."
                .to_string(),
            source: None,
        },
    }]
}
