use std::collections::HashSet;

use tracing::{debug, info, warn};

use recruitplan_core::error::{ValidationError, non_negative_total};
use recruitplan_core::models::demographic::DemographicProfile;
use recruitplan_core::models::enrollment::{CurrentEnrollment, SubgroupTarget, share_count};
use recruitplan_core::models::gap::DimensionGaps;
use recruitplan_core::models::plan::{CensusComparison, DimensionTargets, PlanInput, PlanReport};
use recruitplan_core::models::population::DiseasePopulation;
use recruitplan_core::models::screening::{DimensionScreening, ScreeningParameters};
use recruitplan_core::models::strategy::FocusMetric;
use recruitplan_reference::record::CensusBaseline;
use recruitplan_reference::{ReferenceKey, ReferenceStore, ResolvedReference};

use crate::error::EngineError;
use crate::gap::compute_gaps;
use crate::ranking::{GapKey, ScreeningKey, focus_populations, order_gaps, rank};
use crate::screening::compute_screening_need;
use crate::settings::PlannerSettings;
use crate::strategy::{SelectionContext, select_strategies};

/// Run one full planning pass over an immutable input snapshot.
///
/// Only a negative enrollment target or unresolvable reference data fail
/// the pass. Every other problem is recorded in [`PlanReport::issues`] and
/// affects only the dimension or subgroup it concerns.
pub fn build_plan(
    input: &PlanInput,
    store: &ReferenceStore,
    settings: &PlannerSettings,
) -> Result<PlanReport, EngineError> {
    let target_total = non_negative_total("target_total", input.target_total)?;
    let key = ReferenceKey {
        disease: input.disease.clone(),
        trial: input.trial.clone(),
        time_period: input.time_period.clone(),
    };
    let reference = store.resolve(&key)?;
    let population = reference.population(input.age_band)?;
    let targets = input.targets.as_ref().unwrap_or(&reference.targets);

    let mut issues = Vec::new();
    for issue in targets.validate(settings.sum_tolerance) {
        record(&mut issues, issue);
    }

    let dimension_targets = derive_targets(targets, target_total, &mut issues);
    let census_comparison = compare_census(targets, reference.baseline.as_ref());
    let screening = screen_dimensions(
        &dimension_targets,
        input,
        &reference,
        population,
        settings,
        &mut issues,
    );

    let gaps = match input.current.as_ref().or(reference.snapshot.as_ref()) {
        Some(current) => gap_dimensions(targets, input.target_total, current, settings, &mut issues),
        None => Vec::new(),
    };

    let focus = match input.focus_metric.unwrap_or(settings.focus_metric) {
        FocusMetric::ScreenPercent => focus_populations(
            screening.iter().map(|d| (&d.dimension, d.results.as_slice())),
            ScreeningKey::ScreenPercent,
        ),
        FocusMetric::AbsoluteGap => focus_populations(
            gaps.iter().map(|d| (&d.dimension, d.gaps.as_slice())),
            GapKey::AbsoluteGap,
        ),
        FocusMetric::PercentGap => focus_populations(
            gaps.iter().map(|d| (&d.dimension, d.gaps.as_slice())),
            GapKey::PercentGap,
        ),
    };

    let context = SelectionContext {
        gaps: &gaps,
        screening: &screening,
        target_total,
    };
    let strategies = select_strategies(&focus, &reference.strategies, &context, settings);

    for issue in &issues {
        warn!(
            disease = %input.disease,
            dimension = ?issue.dimension(),
            %issue,
            "planning input issue"
        );
    }
    info!(
        disease = %input.disease,
        trial = ?input.trial,
        target_total,
        focus = focus.len(),
        strategies = strategies.len(),
        issues = issues.len(),
        "plan computed"
    );

    Ok(PlanReport {
        disease: input.disease.clone(),
        trial: input.trial.clone(),
        time_period: input.time_period.clone(),
        therapeutic_area: reference.therapeutic_area.clone(),
        source: reference.source.clone(),
        target_total,
        population,
        baseline_name: reference.baseline.as_ref().map(|b| b.name.clone()),
        targets: dimension_targets,
        census_comparison,
        screening,
        gaps,
        focus,
        strategies,
        motivators: reference.motivators.clone(),
        barriers: reference.barriers.clone(),
        issues,
    })
}

fn record(issues: &mut Vec<ValidationError>, issue: ValidationError) {
    if !issues.contains(&issue) {
        issues.push(issue);
    }
}

/// Target counts per subgroup. Repeated labels and shares outside [0, 100]
/// are reported and left out, so each label appears once per dimension.
fn derive_targets(
    targets: &DemographicProfile,
    target_total: u64,
    issues: &mut Vec<ValidationError>,
) -> Vec<DimensionTargets> {
    targets
        .dimensions
        .iter()
        .map(|profile| {
            let mut seen = HashSet::new();
            let mut subgroups = Vec::with_capacity(profile.subgroups.len());
            for share in &profile.subgroups {
                if !seen.insert(share.label.as_str()) {
                    record(
                        issues,
                        ValidationError::DuplicateLabel {
                            dimension: profile.dimension.clone(),
                            label: share.label.clone(),
                        },
                    );
                } else if (0.0..=100.0).contains(&share.percent) {
                    subgroups.push(SubgroupTarget::derive(share, target_total));
                } else {
                    record(
                        issues,
                        ValidationError::PercentOutOfRange {
                            dimension: profile.dimension.clone(),
                            label: share.label.clone(),
                            value: share.percent,
                        },
                    );
                }
            }
            DimensionTargets {
                dimension: profile.dimension.clone(),
                subgroups,
            }
        })
        .collect()
}

fn compare_census(
    targets: &DemographicProfile,
    baseline: Option<&CensusBaseline>,
) -> Vec<CensusComparison> {
    let Some(baseline) = baseline else {
        return Vec::new();
    };
    targets
        .dimensions
        .iter()
        .flat_map(|profile| {
            let census = baseline.distribution.dimension(&profile.dimension);
            let mut seen = HashSet::new();
            profile
                .subgroups
                .iter()
                .filter(move |&share| seen.insert(share.label.as_str()))
                .map(move |share| {
                    let census_percent = census.and_then(|c| c.percent_of(&share.label));
                    CensusComparison {
                        dimension: profile.dimension.clone(),
                        label: share.label.clone(),
                        target_percent: share.percent,
                        census_percent,
                        difference: census_percent.map(|c| share.percent - c),
                    }
                })
        })
        .collect()
}

/// Screening requirements per dimension, each ranked by screen percent.
///
/// Eligible populations come from the reference distribution for the
/// dimension, so a subgroup the reference data doesn't cover has none.
fn screen_dimensions(
    dimension_targets: &[DimensionTargets],
    input: &PlanInput,
    reference: &ResolvedReference,
    population: DiseasePopulation,
    settings: &PlannerSettings,
    issues: &mut Vec<ValidationError>,
) -> Vec<DimensionScreening> {
    dimension_targets
        .iter()
        .map(|dimension| {
            let basis = reference.targets.dimension(&dimension.dimension);
            let mut results = Vec::with_capacity(dimension.subgroups.len());
            for target in &dimension.subgroups {
                let rate = input
                    .screen_success_percent
                    .get(&target.label)
                    .map(|percent| percent / 100.0)
                    .or_else(|| reference.screen_success(&target.label))
                    .unwrap_or(settings.default_screen_success);
                let eligible_population = basis
                    .and_then(|b| b.percent_of(&target.label))
                    .map(|percent| share_count(percent, population.total))
                    .unwrap_or(0);

                let params = ScreeningParameters::new(&target.label, rate, eligible_population);
                if let Err(e) = params.validate() {
                    record(issues, e);
                    continue;
                }
                results.push(compute_screening_need(target, &params));
            }
            debug!(
                dimension = %dimension.dimension,
                subgroups = results.len(),
                "computed screening requirements"
            );
            DimensionScreening {
                dimension: dimension.dimension.clone(),
                results: rank(results, ScreeningKey::ScreenPercent),
            }
        })
        .collect()
}

/// Gaps for each target dimension that has a current breakdown. A dimension
/// that fails validation is reported and omitted.
fn gap_dimensions(
    targets: &DemographicProfile,
    target_total: i64,
    current: &CurrentEnrollment,
    settings: &PlannerSettings,
    issues: &mut Vec<ValidationError>,
) -> Vec<DimensionGaps> {
    let mut dimensions = Vec::new();
    for profile in &targets.dimensions {
        let Some(current_dimension) = current.dimension(&profile.dimension) else {
            debug!(dimension = %profile.dimension, "no current enrollment reported");
            continue;
        };
        match compute_gaps(
            profile,
            target_total,
            current_dimension,
            current.total,
            settings.sum_tolerance,
        ) {
            Ok(gaps) => dimensions.push(DimensionGaps {
                dimension: profile.dimension.clone(),
                gaps: order_gaps(gaps, settings.gap_order),
            }),
            Err(e) => record(issues, e),
        }
    }
    dimensions
}
