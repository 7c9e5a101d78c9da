use std::collections::HashSet;

use tracing::debug;

use recruitplan_core::error::{ValidationError, non_negative_total};
use recruitplan_core::models::demographic::{DimensionProfile, SubgroupShare};
use recruitplan_core::models::enrollment::{
    CurrentBreakdown, CurrentDimension, SubgroupCurrent, SubgroupTarget, share_count,
};
use recruitplan_core::models::gap::GapResult;

/// Turn one dimension's reported current enrollment into per-subgroup
/// counts and percentages of `current_total`.
pub fn resolve_current(
    current: &CurrentDimension,
    current_total: u64,
) -> Result<Vec<SubgroupCurrent>, ValidationError> {
    match &current.breakdown {
        CurrentBreakdown::Counts {
            counts,
            remainder_label,
        } => {
            let mut seen = HashSet::new();
            let mut resolved = Vec::with_capacity(counts.len() + 1);
            let mut sum: i64 = 0;
            for entry in counts {
                if !seen.insert(entry.label.as_str()) {
                    return Err(ValidationError::DuplicateLabel {
                        dimension: current.dimension.clone(),
                        label: entry.label.clone(),
                    });
                }
                let count = u64::try_from(entry.count).map_err(|_| ValidationError::NegativeCount {
                    dimension: current.dimension.clone(),
                    label: entry.label.clone(),
                    value: entry.count,
                })?;
                sum = sum.saturating_add(entry.count);
                resolved.push(SubgroupCurrent::from_count(&entry.label, count, current_total));
            }

            let total = i64::try_from(current_total).unwrap_or(i64::MAX);
            if sum > total {
                return Err(ValidationError::CountsExceedTotal {
                    dimension: current.dimension.clone(),
                    sum,
                    total,
                });
            }

            if let Some(label) = remainder_label {
                if seen.contains(label.as_str()) {
                    return Err(ValidationError::DuplicateLabel {
                        dimension: current.dimension.clone(),
                        label: label.clone(),
                    });
                }
                let remainder = (total - sum).unsigned_abs();
                resolved.push(SubgroupCurrent::from_count(label, remainder, current_total));
            }
            Ok(resolved)
        }
        CurrentBreakdown::Percentages { shares } => {
            DimensionProfile::new(current.dimension.clone(), shares.clone()).check_entries()?;
            Ok(shares
                .iter()
                .map(|share| SubgroupCurrent {
                    label: share.label.clone(),
                    current_count: share_count(share.percent, current_total),
                    current_percent: share.percent,
                })
                .collect())
        }
    }
}

/// Compare one dimension's targets against its current enrollment.
///
/// Results follow the target subgroups' input order, followed by any
/// subgroups reported only in the current enrollment (with a 0% target).
/// Rank them with [`crate::ranking::rank`].
pub fn compute_gaps(
    targets: &DimensionProfile,
    target_total: i64,
    current: &CurrentDimension,
    current_total: i64,
    tolerance: f64,
) -> Result<Vec<GapResult>, ValidationError> {
    let target_total = non_negative_total("target_total", target_total)?;
    let current_total = non_negative_total("current_total", current_total)?;
    targets.validate(tolerance)?;

    let currents = resolve_current(current, current_total)?;
    // An empty trial has no distribution to check.
    if current_total > 0 {
        let shares = currents
            .iter()
            .map(|c| SubgroupShare::new(&c.label, c.current_percent))
            .collect();
        DimensionProfile::new(current.dimension.clone(), shares).check_sum(tolerance)?;
    }

    let mut gaps: Vec<GapResult> = targets
        .subgroups
        .iter()
        .map(|share| {
            let target = SubgroupTarget::derive(share, target_total);
            let current = currents.iter().find(|c| c.label == share.label);
            gap_between(&target, current)
        })
        .collect();

    gaps.extend(
        currents
            .iter()
            .filter(|c| targets.percent_of(&c.label).is_none())
            .map(|c| {
                let target = SubgroupTarget {
                    label: c.label.clone(),
                    target_percent: 0.0,
                    target_count: 0,
                };
                gap_between(&target, Some(c))
            }),
    );

    debug!(
        dimension = %targets.dimension,
        subgroups = gaps.len(),
        target_total,
        current_total,
        "computed enrollment gaps"
    );
    Ok(gaps)
}

fn gap_between(target: &SubgroupTarget, current: Option<&SubgroupCurrent>) -> GapResult {
    let (current_count, current_percent) = current
        .map(|c| (c.current_count, c.current_percent))
        .unwrap_or((0, 0.0));
    GapResult {
        label: target.label.clone(),
        target_percent: target.target_percent,
        target_count: target.target_count,
        current_percent,
        current_count,
        absolute_gap: target.target_count as i64 - current_count as i64,
        percent_gap: target.target_percent - current_percent,
    }
}
