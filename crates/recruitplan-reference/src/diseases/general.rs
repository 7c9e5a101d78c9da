use recruitplan_core::models::population::AgeBand;

use crate::baselines;
use crate::record::{ReferenceKey, ReferenceRecord};

use super::BUILTIN_VERSION;

/// Diseases without curated data plan against the general population.
pub const DISEASE: &str = "Other";

pub fn records() -> Vec<ReferenceRecord> {
    let census = baselines::us_census();
    let base = ReferenceRecord::new(ReferenceKey::disease(DISEASE), BUILTIN_VERSION)
        .with_targets(census.distribution.clone())
        .with_population(AgeBand::AllAges, baselines::US_TOTAL_POPULATION)
        .with_baseline(census);

    vec![base]
}
