use recruitplan_core::models::population::AgeBand;

use crate::baselines;
use crate::catalog::StrategyCatalog;
use crate::record::{ReferenceKey, ReferenceRecord};

use super::{BUILTIN_VERSION, label, profile};

pub const DISEASE: &str = "Alzheimer's";

pub const TRIAL_REVELI: &str = "Reveli";
pub const TRIAL_SOUTH_COMMONS: &str = "South Commons";
pub const TRIAL_CUSTOM: &str = "Custom";

/// Alzheimer's base record plus its trial overrides.
///
/// Target distribution from doi:10.1001/jamanetworkopen.2021.14364, which
/// does not cover every race (NHPI and AIAN figures are estimates).
pub fn records() -> Vec<ReferenceRecord> {
    let base = ReferenceRecord::new(ReferenceKey::disease(DISEASE), BUILTIN_VERSION)
        .with_therapeutic_area("Neuro")
        .with_source("doi: 10.1001/jamanetworkopen.2021.14364")
        .with_targets(profile(
            &[(label::FEMALE, 64.0), (label::MALE, 36.0)],
            &[
                (label::HISPANIC, 21.2),
                (label::WHITE_NH, 51.7),
                (label::AFRICAN_AMERICAN, 19.2),
                (label::ASIAN_NH, 5.9),
                (label::AIAN_NH, 0.8),
                (label::NHPI_NH, 0.3),
                (label::OTHER, 0.9),
            ],
        ))
        .with_screen_success(&[
            (label::FEMALE, 0.30),
            (label::MALE, 0.70),
            (label::WHITE_NH, 0.75),
            (label::AFRICAN_AMERICAN, 0.35),
            (label::HISPANIC, 0.28),
            (label::ASIAN_NH, 0.50),
            (label::AIAN_NH, 0.50),
            (label::NHPI_NH, 0.50),
            (label::OTHER, 0.50),
        ])
        .with_population(AgeBand::Adults18Plus, 7_100_000)
        .with_population(AgeBand::Seniors65Plus, 6_900_000)
        .with_default_age_band(AgeBand::Seniors65Plus)
        .with_baseline(baselines::us_65_plus())
        .with_motivators(&[
            "Trusted Voices",
            "Altruism",
            "Education & Disease Awareness",
            "Personal Benefit",
        ])
        .with_barriers(&[
            "Study Partner Requirement",
            "Procedure/Investigational Burden",
            "Disease Stigma",
            "Specific Population Injustices",
        ])
        .with_strategies(strategies());

    let reveli = ReferenceRecord::new(
        ReferenceKey::disease(DISEASE).with_trial(TRIAL_REVELI),
        BUILTIN_VERSION,
    );

    let south_commons = ReferenceRecord::new(
        ReferenceKey::disease(DISEASE).with_trial(TRIAL_SOUTH_COMMONS),
        BUILTIN_VERSION,
    )
    .with_targets(profile(
        &[(label::FEMALE, 50.0), (label::MALE, 50.0)],
        &[
            (label::HISPANIC, 18.0),
            (label::WHITE_NH, 48.0),
            (label::AFRICAN_AMERICAN, 28.0),
            (label::ASIAN_NH, 5.5),
            (label::AIAN_NH, 0.8),
            (label::NHPI_NH, 0.3),
            (label::OTHER, 0.9),
        ],
    ));

    // Race targets are left for the user to fill in.
    let custom = ReferenceRecord::new(
        ReferenceKey::disease(DISEASE).with_trial(TRIAL_CUSTOM),
        BUILTIN_VERSION,
    )
    .with_targets(profile(
        &[(label::FEMALE, 50.0), (label::MALE, 50.0)],
        &[
            (label::HISPANIC, 0.0),
            (label::WHITE_NH, 0.0),
            (label::AFRICAN_AMERICAN, 0.0),
            (label::ASIAN_NH, 0.0),
            (label::AIAN_NH, 0.0),
            (label::NHPI_NH, 0.0),
            (label::OTHER, 0.0),
        ],
    ));

    vec![base, reveli, south_commons, custom]
}

fn strategies() -> StrategyCatalog {
    StrategyCatalog::from_lists(&[
        (
            label::FEMALE,
            &[
                "Connect with women's health networks and caregiving support groups",
                "Partner with research registries",
                "Provide flexible study visit schedules or caregiver support",
            ],
        ),
        (
            label::MALE,
            &[
                "Target outreach through male-dominated environments such as sporting events",
                "Promote messaging around benefitting future generations",
                "Address stigma around mental health and participation",
            ],
        ),
        (
            label::AFRICAN_AMERICAN,
            &[
                "Engage trusted faith-based and civic leaders",
                "Highlight historical medical distrust and steps taken to ensure ethical practices",
                "Avoid or reassess the need for MMSE and logical memory scoring inclusion criteria as these can be inequitable barriers.",
            ],
        ),
        (
            label::HISPANIC,
            &[
                "Use Spanish-language materials and bilingual coordinators",
                "Partner with local Hispanic/Latino organizations and clinics",
                "Avoid or reassess the need for MMSE and logical memory scoring as these can be barriers.",
            ],
        ),
        (
            label::WHITE_NH,
            &["Collaborate with primary care and memory clinics in suburban and rural areas"],
        ),
        (
            label::AIAN_NH,
            &[
                "Partner with tribal health clinics and IHS facilities",
                "Provide culturally competent staff and materials",
                "Ensure trials accommodate rural residence or travel support",
            ],
        ),
        (
            label::NHPI_NH,
            &[
                "Engage local community leaders and churches",
                "Incorporate family-centered decision-making",
                "Use Pacific Islander liaisons for outreach",
            ],
        ),
        (
            label::ASIAN_NH,
            &[
                "Partner with Asian community health coalitions or clinics",
                "Promote awareness that dementia is not a normal part of aging",
            ],
        ),
    ])
}
