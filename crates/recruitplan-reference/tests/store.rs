use recruitplan_core::models::demographic::Dimension;
use recruitplan_core::models::enrollment::{
    CurrentBreakdown, CurrentDimension, CurrentEnrollment, SubgroupCount,
};
use recruitplan_core::models::population::AgeBand;
use recruitplan_reference::diseases::{alzheimers, label, profile};
use recruitplan_reference::error::ReferenceError;
use recruitplan_reference::record::RecordVersion;
use recruitplan_reference::{ReferenceKey, ReferenceRecord, ReferenceStore, builtin};

fn version(revision: u32) -> RecordVersion {
    RecordVersion {
        revision,
        recorded_on: jiff::civil::date(2025, 9, 1),
    }
}

#[test]
fn builtin_lists_every_disease() {
    assert_eq!(
        builtin().diseases(),
        vec!["Alzheimer's", "Bipolar Disorder", "Schizophrenia", "Other"]
    );
    assert_eq!(
        builtin().trials(alzheimers::DISEASE),
        vec!["Reveli", "South Commons", "Custom"]
    );
}

#[test]
fn every_builtin_target_profile_sums_to_100() {
    for disease in builtin().diseases() {
        let resolved = builtin().resolve(&ReferenceKey::disease(disease)).unwrap();
        assert!(
            resolved.targets.validate(0.01).is_empty(),
            "{disease} targets do not sum to 100"
        );
    }
}

#[test]
fn alzheimers_defaults() {
    let resolved = builtin()
        .resolve(&ReferenceKey::disease(alzheimers::DISEASE))
        .unwrap();
    assert_eq!(resolved.screen_success(label::HISPANIC), Some(0.28));
    assert_eq!(resolved.screen_success(label::FEMALE), Some(0.30));
    assert_eq!(resolved.default_age_band, AgeBand::Seniors65Plus);
    assert_eq!(resolved.population(None).unwrap().total, 6_900_000);
    assert_eq!(
        resolved.population(Some(AgeBand::Adults18Plus)).unwrap().total,
        7_100_000
    );
    assert_eq!(resolved.motivators.len(), 4);
    assert!(resolved.strategies.entries_for(label::FEMALE).is_some());
    // Catalogs are partial.
    assert!(resolved.strategies.entries_for(label::OTHER).is_none());
}

#[test]
fn missing_age_band_is_an_error() {
    let resolved = builtin().resolve(&ReferenceKey::disease("Schizophrenia")).unwrap();
    assert!(matches!(
        resolved.population(Some(AgeBand::Seniors65Plus)),
        Err(ReferenceError::UnknownAgeBand { .. })
    ));
}

#[test]
fn schizophrenia_uses_half_success_everywhere() {
    let resolved = builtin().resolve(&ReferenceKey::disease("Schizophrenia")).unwrap();
    for label in label::ALL {
        assert_eq!(resolved.screen_success(label), Some(0.5), "{label}");
    }
    assert!(resolved.strategies.is_empty());
}

#[test]
fn trial_override_replaces_targets_and_keeps_base_fields() {
    let key = ReferenceKey::disease(alzheimers::DISEASE).with_trial(alzheimers::TRIAL_SOUTH_COMMONS);
    let resolved = builtin().resolve(&key).unwrap();
    let gender = resolved.targets.dimension(&Dimension::gender()).unwrap();
    assert_eq!(gender.percent_of(label::FEMALE), Some(50.0));
    assert_eq!(resolved.screen_success(label::MALE), Some(0.70));
    assert_eq!(resolved.population(None).unwrap().total, 6_900_000);
}

#[test]
fn published_tables_that_miss_100_are_reported() {
    let key = ReferenceKey::disease(alzheimers::DISEASE).with_trial(alzheimers::TRIAL_SOUTH_COMMONS);
    let resolved = builtin().resolve(&key).unwrap();
    let errors = resolved.targets.validate(0.01);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].dimension(), Some(&Dimension::race()));

    let baseline = resolved.baseline.unwrap();
    assert_eq!(baseline.name, "US Census 65+");
    assert_eq!(baseline.distribution.validate(0.01).len(), 1);
}

#[test]
fn reveli_inherits_base_targets() {
    let key = ReferenceKey::disease(alzheimers::DISEASE).with_trial(alzheimers::TRIAL_REVELI);
    let resolved = builtin().resolve(&key).unwrap();
    let base = builtin()
        .resolve(&ReferenceKey::disease(alzheimers::DISEASE))
        .unwrap();
    assert_eq!(resolved.targets, base.targets);
}

#[test]
fn custom_trial_race_targets_are_surfaced_not_fixed() {
    let key = ReferenceKey::disease(alzheimers::DISEASE).with_trial(alzheimers::TRIAL_CUSTOM);
    let resolved = builtin().resolve(&key).unwrap();
    let errors = resolved.targets.validate(0.01);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].dimension(), Some(&Dimension::race()));
}

#[test]
fn unknown_keys_are_errors() {
    assert_eq!(
        builtin().resolve(&ReferenceKey::disease("Gout")).unwrap_err(),
        ReferenceError::UnknownDisease("Gout".to_string())
    );
    assert!(matches!(
        builtin().resolve(&ReferenceKey::disease(alzheimers::DISEASE).with_trial("Nope")),
        Err(ReferenceError::UnknownTrial { .. })
    ));
    assert!(matches!(
        builtin().resolve(
            &ReferenceKey::disease(alzheimers::DISEASE)
                .with_trial(alzheimers::TRIAL_REVELI)
                .with_time_period("2025-Q3")
        ),
        Err(ReferenceError::UnknownTimePeriod { .. })
    ));
}

#[test]
fn time_period_snapshot_layers_over_trial() {
    let snapshot = CurrentEnrollment {
        total: 120,
        dimensions: vec![CurrentDimension {
            dimension: Dimension::gender(),
            breakdown: CurrentBreakdown::Counts {
                counts: vec![SubgroupCount::new(label::FEMALE, 70), SubgroupCount::new(label::MALE, 50)],
                remainder_label: None,
            },
        }],
    };
    let mut store = builtin().clone();
    store.insert(
        ReferenceRecord::new(
            ReferenceKey::disease(alzheimers::DISEASE)
                .with_trial(alzheimers::TRIAL_REVELI)
                .with_time_period("2025-Q3"),
            version(1),
        )
        .with_snapshot(snapshot.clone()),
    );

    let resolved = store
        .resolve(
            &ReferenceKey::disease(alzheimers::DISEASE)
                .with_trial(alzheimers::TRIAL_REVELI)
                .with_time_period("2025-Q3"),
        )
        .unwrap();
    assert_eq!(resolved.snapshot, Some(snapshot));
    assert_eq!(resolved.screen_success(label::HISPANIC), Some(0.28));
}

#[test]
fn highest_revision_wins() {
    let key = ReferenceKey::disease("Migraine");
    let first = ReferenceRecord::new(key.clone(), version(1))
        .with_targets(profile(&[("Female", 50.0), ("Male", 50.0)], &[("Other", 100.0)]))
        .with_population(AgeBand::AllAges, 1_000);
    let second = ReferenceRecord::new(key.clone(), version(2))
        .with_targets(profile(&[("Female", 70.0), ("Male", 30.0)], &[("Other", 100.0)]))
        .with_population(AgeBand::AllAges, 2_000);
    // Insertion order must not matter.
    let store = ReferenceStore::new(vec![second, first]);

    let resolved = store.resolve(&key).unwrap();
    assert_eq!(resolved.population(None).unwrap().total, 2_000);
    assert_eq!(store.latest(&key).unwrap().version.revision, 2);
}

#[test]
fn base_record_without_targets_is_incomplete() {
    let key = ReferenceKey::disease("Migraine");
    let store = ReferenceStore::new(vec![
        ReferenceRecord::new(key.clone(), version(1)).with_population(AgeBand::AllAges, 10),
    ]);
    assert!(matches!(
        store.resolve(&key),
        Err(ReferenceError::Incomplete { field, .. }) if field == "targets"
    ));
}

#[test]
fn overlay_record_json_fills_defaults() {
    let record: ReferenceRecord = serde_json::from_str(
        r#"{
            "key": { "disease": "Alzheimer's", "trial": "Reveli", "time_period": "2025-Q3" },
            "version": { "revision": 2, "recorded_on": "2025-09-30" },
            "therapeutic_area": null,
            "source": null,
            "targets": null,
            "default_age_band": null,
            "baseline": null,
            "snapshot": null,
            "strategies": null
        }"#,
    )
    .unwrap();
    assert_eq!(record.version.recorded_on, jiff::civil::date(2025, 9, 30));
    assert!(record.screen_success.is_empty());
    assert!(record.populations.is_empty());
    assert!(record.motivators.is_empty());
}
