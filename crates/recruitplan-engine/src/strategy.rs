use tracing::debug;

use recruitplan_core::models::demographic::Dimension;
use recruitplan_core::models::gap::{DimensionGaps, GapResult};
use recruitplan_core::models::screening::{DimensionScreening, ScreeningResult};
use recruitplan_core::models::strategy::{FocusSubgroup, StrategyRecommendation};
use recruitplan_reference::catalog::{EntryGate, StrategyCatalog};

use crate::settings::PlannerSettings;

/// Computed figures the selector consults when evaluating gates.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub gaps: &'a [DimensionGaps],
    pub screening: &'a [DimensionScreening],
    pub target_total: u64,
}

impl<'a> SelectionContext<'a> {
    fn gap(&self, dimension: &Dimension, label: &str) -> Option<&'a GapResult> {
        self.gaps
            .iter()
            .filter(|d| &d.dimension == dimension)
            .flat_map(|d| &d.gaps)
            .find(|g| g.label == label)
    }

    fn screening(&self, dimension: &Dimension, label: &str) -> Option<&'a ScreeningResult> {
        self.screening
            .iter()
            .filter(|d| &d.dimension == dimension)
            .flat_map(|d| &d.results)
            .find(|s| s.label == label)
    }
}

/// Walk `ranked` in priority order and emit the catalog's recommendations
/// for each subgroup that has any.
///
/// Gates are evaluated per subgroup from that subgroup's own figures.
/// Subgroups missing from the catalog, failing the configured thresholds,
/// or left with no entries after gating are skipped.
pub fn select_strategies(
    ranked: &[FocusSubgroup],
    catalog: &StrategyCatalog,
    context: &SelectionContext<'_>,
    settings: &PlannerSettings,
) -> Vec<StrategyRecommendation> {
    if catalog.is_empty() {
        debug!("no curated strategies for this reference record");
        return Vec::new();
    }

    let mut recommendations = Vec::new();
    for focus in ranked {
        let Some(entries) = catalog.entries_for(&focus.label) else {
            continue;
        };

        let gap = context.gap(&focus.dimension, &focus.label);
        if !settings.thresholds.admits(gap, context.target_total) {
            debug!(subgroup = %focus.label, "below selection thresholds");
            continue;
        }
        let screening = context.screening(&focus.dimension, &focus.label);

        let texts: Vec<String> = entries
            .iter()
            .filter(|entry| {
                entry
                    .gate
                    .is_none_or(|gate| gate_passes(gate, gap, screening, context.target_total))
            })
            .map(|entry| entry.text.clone())
            .collect();
        if texts.is_empty() {
            continue;
        }

        let mut citations = Vec::new();
        for rule in &settings.keyword_rules {
            if texts.iter().any(|t| rule.matches(t)) && !citations.contains(&rule.citation) {
                citations.push(rule.citation.clone());
            }
        }

        recommendations.push(StrategyRecommendation {
            subgroup_label: focus.label.clone(),
            dimension: focus.dimension.clone(),
            need: focus.need,
            entries: texts,
            citations,
        });
    }

    recommendations
}

fn gate_passes(
    gate: EntryGate,
    gap: Option<&GapResult>,
    screening: Option<&ScreeningResult>,
    target_total: u64,
) -> bool {
    match gate {
        EntryGate::PercentGapAbove(threshold) => gap.is_some_and(|g| g.percent_gap > threshold),
        EntryGate::GapShareAbove(threshold) => {
            gap.is_some_and(|g| g.share_of_enrollment(target_total) > threshold)
        }
        EntryGate::ScreenPercentAbove(threshold) => screening
            .and_then(|s| s.screen_percent_value())
            .is_some_and(|p| p > threshold),
    }
}
