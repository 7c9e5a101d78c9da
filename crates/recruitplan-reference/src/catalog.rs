use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Condition a subgroup must meet for a strategy entry to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "gate", content = "threshold", rename_all = "snake_case")]
#[ts(export)]
pub enum EntryGate {
    /// Target percent exceeds current percent by more than this many points.
    PercentGapAbove(f64),
    /// Absolute gap exceeds this percentage of total enrollment.
    GapShareAbove(f64),
    /// More than this percentage of the eligible population must be screened.
    ScreenPercentAbove(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrategyEntry {
    pub text: String,
    pub gate: Option<EntryGate>,
}

impl StrategyEntry {
    pub fn always(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gate: None,
        }
    }

    pub fn gated(text: impl Into<String>, gate: EntryGate) -> Self {
        Self {
            text: text.into(),
            gate: Some(gate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubgroupStrategies {
    pub label: String,
    pub entries: Vec<StrategyEntry>,
}

/// Curated recruitment strategies keyed by subgroup label.
///
/// Catalogs are partial: a subgroup with no curated guidance has no entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrategyCatalog {
    pub subgroups: Vec<SubgroupStrategies>,
}

impl StrategyCatalog {
    /// Build a catalog of always-shown entries from `(label, texts)` lists.
    pub fn from_lists(lists: &[(&str, &[&str])]) -> Self {
        Self {
            subgroups: lists
                .iter()
                .map(|(label, texts)| SubgroupStrategies {
                    label: (*label).to_string(),
                    entries: texts.iter().map(|t| StrategyEntry::always(*t)).collect(),
                })
                .collect(),
        }
    }

    pub fn entries_for(&self, label: &str) -> Option<&[StrategyEntry]> {
        self.subgroups
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.entries.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.subgroups.is_empty()
    }
}
