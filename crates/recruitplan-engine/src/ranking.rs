use std::collections::HashSet;

use recruitplan_core::models::demographic::Dimension;
use recruitplan_core::models::gap::{GapOrder, GapResult};
use recruitplan_core::models::screening::ScreeningResult;
use recruitplan_core::models::strategy::{FocusSubgroup, NeedMetric};

/// A per-subgroup result that can be ordered by computed need.
pub trait Ranked {
    /// The metrics this result can be ranked by.
    type Key: Copy;

    fn label(&self) -> &str;

    fn need(&self, key: Self::Key) -> NeedMetric;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapKey {
    AbsoluteGap,
    PercentGap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningKey {
    ScreenPercent,
    ScreenedNeeded,
}

impl Ranked for GapResult {
    type Key = GapKey;

    fn label(&self) -> &str {
        &self.label
    }

    fn need(&self, key: GapKey) -> NeedMetric {
        match key {
            GapKey::AbsoluteGap => NeedMetric::AbsoluteGap(self.absolute_gap),
            GapKey::PercentGap => NeedMetric::PercentGap(self.percent_gap),
        }
    }
}

impl Ranked for ScreeningResult {
    type Key = ScreeningKey;

    fn label(&self) -> &str {
        &self.label
    }

    fn need(&self, key: ScreeningKey) -> NeedMetric {
        match key {
            ScreeningKey::ScreenPercent => NeedMetric::ScreenPercent(self.screen_percent),
            ScreeningKey::ScreenedNeeded => NeedMetric::ScreenedNeeded(self.screened_needed),
        }
    }
}

/// Sort by descending need. The sort is stable: equal needs keep their
/// input order, so ranking an already-ranked list is a no-op.
pub fn rank<T: Ranked>(mut items: Vec<T>, key: T::Key) -> Vec<T> {
    items.sort_by(|a, b| b.need(key).value().total_cmp(&a.need(key).value()));
    items
}

pub fn order_gaps(gaps: Vec<GapResult>, order: GapOrder) -> Vec<GapResult> {
    match order {
        GapOrder::Input => gaps,
        GapOrder::AbsoluteGap => rank(gaps, GapKey::AbsoluteGap),
        GapOrder::PercentGap => rank(gaps, GapKey::PercentGap),
    }
}

/// Merge several dimensions' results into one ranked focus list.
///
/// Subgroup pools overlap across dimensions, so a label is kept only at its
/// first occurrence after ranking. Sources are concatenated in the order
/// given before the stable sort.
pub fn focus_populations<'a, T>(
    sources: impl IntoIterator<Item = (&'a Dimension, &'a [T])>,
    key: T::Key,
) -> Vec<FocusSubgroup>
where
    T: Ranked + 'a,
{
    let mut combined: Vec<FocusSubgroup> = sources
        .into_iter()
        .flat_map(|(dimension, items)| {
            items.iter().map(move |item| FocusSubgroup {
                label: item.label().to_string(),
                dimension: dimension.clone(),
                need: item.need(key),
            })
        })
        .collect();
    combined.sort_by(|a, b| b.need.value().total_cmp(&a.need.value()));

    let mut seen = HashSet::new();
    combined.retain(|focus| seen.insert(focus.label.clone()));
    combined
}
