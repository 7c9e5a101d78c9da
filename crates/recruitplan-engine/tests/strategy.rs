use recruitplan_core::models::demographic::Dimension;
use recruitplan_core::models::gap::{DimensionGaps, GapResult};
use recruitplan_core::models::screening::{DimensionScreening, ScreeningResult, ScreeningStatus};
use recruitplan_core::models::strategy::{FocusSubgroup, NeedMetric};
use recruitplan_engine::PlannerSettings;
use recruitplan_engine::settings::SelectionThresholds;
use recruitplan_engine::strategy::{SelectionContext, select_strategies};
use recruitplan_reference::catalog::{EntryGate, StrategyCatalog, StrategyEntry, SubgroupStrategies};

fn focus(label: &str, dimension: Dimension, need: f64) -> FocusSubgroup {
    FocusSubgroup {
        label: label.to_string(),
        dimension,
        need: NeedMetric::ScreenPercent(need),
    }
}

fn gap(label: &str, absolute_gap: i64, percent_gap: f64) -> GapResult {
    GapResult {
        label: label.to_string(),
        target_percent: 0.0,
        target_count: 0,
        current_percent: 0.0,
        current_count: 0,
        absolute_gap,
        percent_gap,
    }
}

fn screening(label: &str, screen_percent: f64, status: ScreeningStatus) -> ScreeningResult {
    ScreeningResult {
        label: label.to_string(),
        target_count: 100,
        screen_success_rate: 0.5,
        screened_needed: 200,
        eligible_population: 1000,
        screen_percent,
        status,
    }
}

fn race_catalog() -> StrategyCatalog {
    StrategyCatalog::from_lists(&[
        (
            "African American",
            &[
                "Engage trusted faith-based and civic leaders",
                "Reassess MMSE and logical memory cut-offs",
            ],
        ),
        ("Hispanic", &["Use Spanish-language materials"]),
    ])
}

#[test]
fn follows_rank_order_and_skips_uncatalogued_subgroups() {
    let race = Dimension::race();
    let ranked = [
        focus("Hispanic", race.clone(), 9.0),
        focus("NHPI, NH", race.clone(), 7.0),
        focus("African American", race.clone(), 5.0),
    ];
    let context = SelectionContext {
        gaps: &[],
        screening: &[],
        target_total: 1000,
    };

    let recommendations =
        select_strategies(&ranked, &race_catalog(), &context, &PlannerSettings::default());

    let labels: Vec<&str> = recommendations
        .iter()
        .map(|r| r.subgroup_label.as_str())
        .collect();
    assert_eq!(labels, ["Hispanic", "African American"]);
    assert_eq!(recommendations[0].need, NeedMetric::ScreenPercent(9.0));
    assert_eq!(recommendations[1].entries.len(), 2);
}

#[test]
fn keyword_citation_is_attached_once() {
    let race = Dimension::race();
    let ranked = [focus("African American", race.clone(), 5.0), focus("Hispanic", race, 4.0)];
    let context = SelectionContext {
        gaps: &[],
        screening: &[],
        target_total: 1000,
    };
    let recommendations =
        select_strategies(&ranked, &race_catalog(), &context, &PlannerSettings::default());

    assert_eq!(recommendations[0].citations.len(), 1);
    assert_eq!(recommendations[0].citations[0].title, "Cognitive screening criteria");
    assert!(recommendations[1].citations.is_empty());
}

#[test]
fn gated_entries_use_the_subgroups_own_figures() {
    let gender = Dimension::gender();
    let catalog = StrategyCatalog {
        subgroups: vec![
            SubgroupStrategies {
                label: "Female".to_string(),
                entries: vec![
                    StrategyEntry::always("Partner with research registries"),
                    StrategyEntry::gated("Open an additional site", EntryGate::GapShareAbove(10.0)),
                    StrategyEntry::gated("Offer travel support", EntryGate::ScreenPercentAbove(1.0)),
                ],
            },
            SubgroupStrategies {
                label: "Male".to_string(),
                entries: vec![StrategyEntry::gated(
                    "Sports venue outreach",
                    EntryGate::PercentGapAbove(5.0),
                )],
            },
        ],
    };
    let gaps = [DimensionGaps {
        dimension: gender.clone(),
        gaps: vec![gap("Female", 150, 15.0), gap("Male", -150, -15.0)],
    }];
    let screening = [DimensionScreening {
        dimension: gender.clone(),
        results: vec![
            screening("Female", 0.0, ScreeningStatus::NoEligiblePopulation),
            screening("Male", 3.0, ScreeningStatus::Computed),
        ],
    }];
    let context = SelectionContext {
        gaps: &gaps,
        screening: &screening,
        target_total: 1000,
    };
    let ranked = [focus("Female", gender.clone(), 2.0), focus("Male", gender, 1.0)];

    let recommendations =
        select_strategies(&ranked, &catalog, &context, &PlannerSettings::default());

    // Male's only entry is gated out, so Male is dropped entirely.
    assert_eq!(recommendations.len(), 1);
    assert_eq!(
        recommendations[0].entries,
        ["Partner with research registries", "Open an additional site"]
    );
}

#[test]
fn thresholds_filter_subgroups() {
    let race = Dimension::race();
    let gaps = [DimensionGaps {
        dimension: race.clone(),
        gaps: vec![gap("Hispanic", 20, 2.0), gap("African American", 90, 9.0)],
    }];
    let context = SelectionContext {
        gaps: &gaps,
        screening: &[],
        target_total: 1000,
    };
    let settings = PlannerSettings {
        thresholds: SelectionThresholds {
            min_percent_gap: Some(5.0),
            min_gap_share: None,
        },
        ..PlannerSettings::default()
    };
    let ranked = [focus("Hispanic", race.clone(), 9.0), focus("African American", race, 5.0)];

    let recommendations = select_strategies(&ranked, &race_catalog(), &context, &settings);
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].subgroup_label, "African American");
}

#[test]
fn empty_catalog_yields_nothing() {
    let ranked = [focus("Female", Dimension::gender(), 1.0)];
    let context = SelectionContext {
        gaps: &[],
        screening: &[],
        target_total: 10,
    };
    assert!(
        select_strategies(
            &ranked,
            &StrategyCatalog::default(),
            &context,
            &PlannerSettings::default()
        )
        .is_empty()
    );
}
