//! U.S. census distributions used as comparison baselines.

use recruitplan_core::models::population::AgeBand;

use crate::diseases::{label, profile};
use crate::record::CensusBaseline;

pub const US_TOTAL_POPULATION: u64 = 342_000_000;
pub const US_65_PLUS_POPULATION: u64 = 55_792_501;

/// U.S. census, all ages.
pub fn us_census() -> CensusBaseline {
    CensusBaseline {
        name: "US Census".to_string(),
        age_band: AgeBand::AllAges,
        total_population: US_TOTAL_POPULATION,
        distribution: profile(
            &[(label::FEMALE, 50.5), (label::MALE, 49.5)],
            &[
                (label::HISPANIC, 17.6),
                (label::WHITE_NH, 61.1),
                (label::AFRICAN_AMERICAN, 12.3),
                (label::ASIAN_NH, 6.3),
                (label::AIAN_NH, 0.7),
                (label::NHPI_NH, 0.2),
                (label::OTHER, 1.8),
            ],
        ),
    }
}

/// U.S. census, ages 65 and over.
pub fn us_65_plus() -> CensusBaseline {
    CensusBaseline {
        name: "US Census 65+".to_string(),
        age_band: AgeBand::Seniors65Plus,
        total_population: US_65_PLUS_POPULATION,
        distribution: profile(
            &[(label::FEMALE, 50.9), (label::MALE, 49.1)],
            &[
                (label::HISPANIC, 8.8),
                (label::WHITE_NH, 76.6),
                (label::AFRICAN_AMERICAN, 9.2),
                (label::ASIAN_NH, 4.5),
                (label::AIAN_NH, 0.7),
                (label::NHPI_NH, 0.1),
                (label::OTHER, 3.4),
            ],
        ),
    }
}
