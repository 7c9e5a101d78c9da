use recruitplan_core::models::population::AgeBand;

use crate::baselines;
use crate::record::{ReferenceKey, ReferenceRecord};

use super::{BUILTIN_VERSION, label, profile, uniform_rates};

pub const DISEASE: &str = "Bipolar Disorder";

/// Recorded as a 50% screen fail rate for every subgroup.
const SCREEN_SUCCESS: f64 = 0.5;

pub fn records() -> Vec<ReferenceRecord> {
    let base = ReferenceRecord::new(ReferenceKey::disease(DISEASE), BUILTIN_VERSION)
        .with_therapeutic_area("Neuro")
        .with_targets(profile(
            &[(label::FEMALE, 51.0), (label::MALE, 49.0)],
            &[
                (label::HISPANIC, 18.5),
                (label::WHITE_NH, 53.0),
                (label::AFRICAN_AMERICAN, 16.0),
                (label::ASIAN_NH, 7.0),
                (label::AIAN_NH, 1.0),
                (label::NHPI_NH, 0.5),
                (label::OTHER, 4.0),
            ],
        ))
        .with_screen_success(&uniform_rates(SCREEN_SUCCESS))
        .with_population(AgeBand::AllAges, 3_100_000)
        .with_baseline(baselines::us_census());

    vec![base]
}
