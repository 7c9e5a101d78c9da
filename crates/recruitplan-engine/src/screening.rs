use recruitplan_core::models::enrollment::SubgroupTarget;
use recruitplan_core::models::screening::{ScreeningParameters, ScreeningResult, ScreeningStatus};

/// Relative slack for binary representation error (e.g. 300 / 0.3), a few
/// ulps of the quotient.
const RELATIVE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// How many people must be screened to enroll `target`, and what share of
/// the eligible population that is.
///
/// Partial people cannot be screened, so the count rounds up. A zero success
/// rate or an empty eligible population yields a flagged sentinel instead of
/// a division by zero. Subgroups are computed independently of each other.
pub fn compute_screening_need(
    target: &SubgroupTarget,
    params: &ScreeningParameters,
) -> ScreeningResult {
    let rate = params.screen_success_rate;
    let sentinel = |status| ScreeningResult {
        label: target.label.clone(),
        target_count: target.target_count,
        screen_success_rate: rate,
        screened_needed: 0,
        eligible_population: params.eligible_population,
        screen_percent: 0.0,
        status,
    };

    if rate.is_nan() || rate <= 0.0 {
        return sentinel(ScreeningStatus::Unachievable);
    }

    let quotient = target.target_count as f64 / rate;
    let screened_needed = (quotient - quotient * RELATIVE_TOLERANCE).ceil().max(0.0) as u64;

    if params.eligible_population == 0 {
        return ScreeningResult {
            screened_needed,
            ..sentinel(ScreeningStatus::NoEligiblePopulation)
        };
    }

    ScreeningResult {
        screened_needed,
        screen_percent: screened_needed as f64 / params.eligible_population as f64 * 100.0,
        ..sentinel(ScreeningStatus::Computed)
    }
}
