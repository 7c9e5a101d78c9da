use std::collections::BTreeMap;

use tracing::debug;

use crate::error::ReferenceError;
use crate::record::{ReferenceKey, ReferenceRecord, ResolvedReference};

/// Read-only collection of reference records.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    records: Vec<ReferenceRecord>,
}

impl ReferenceStore {
    pub fn new(records: Vec<ReferenceRecord>) -> Self {
        Self { records }
    }

    /// Add a record. A higher revision for an existing key supersedes it.
    pub fn insert(&mut self, record: ReferenceRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    /// Diseases with a base record, in insertion order.
    pub fn diseases(&self) -> Vec<&str> {
        let mut diseases: Vec<&str> = Vec::new();
        for record in &self.records {
            let is_base = record.key.trial.is_none() && record.key.time_period.is_none();
            if is_base && !diseases.contains(&record.key.disease.as_str()) {
                diseases.push(&record.key.disease);
            }
        }
        diseases
    }

    /// Trials with records for `disease`, in insertion order.
    pub fn trials(&self, disease: &str) -> Vec<&str> {
        let mut trials: Vec<&str> = Vec::new();
        for record in self.records.iter().filter(|r| r.key.disease == disease) {
            if let Some(trial) = record.key.trial.as_deref()
                && !trials.contains(&trial)
            {
                trials.push(trial);
            }
        }
        trials
    }

    /// The highest revision recorded for exactly `key`.
    pub fn latest(&self, key: &ReferenceKey) -> Option<&ReferenceRecord> {
        self.records
            .iter()
            .filter(|r| &r.key == key)
            .max_by_key(|r| r.version)
    }

    /// Layer the base, trial, and time-period records for `key`.
    ///
    /// The most specific record that sets a field wins; screen success rates
    /// merge per label.
    pub fn resolve(&self, key: &ReferenceKey) -> Result<ResolvedReference, ReferenceError> {
        let base_key = ReferenceKey::disease(&key.disease);
        let base = self
            .latest(&base_key)
            .ok_or_else(|| ReferenceError::UnknownDisease(key.disease.clone()))?;

        let mut layers = vec![base];
        if let Some(trial) = &key.trial {
            let trial_key = base_key.clone().with_trial(trial);
            let record = self
                .latest(&trial_key)
                .ok_or_else(|| ReferenceError::UnknownTrial {
                    disease: key.disease.clone(),
                    trial: trial.clone(),
                })?;
            layers.push(record);
        }
        if let Some(time_period) = &key.time_period {
            let record = self
                .latest(key)
                .ok_or_else(|| ReferenceError::UnknownTimePeriod {
                    disease: key.disease.clone(),
                    time_period: time_period.clone(),
                })?;
            layers.push(record);
        }

        let mut therapeutic_area = None;
        let mut source = None;
        let mut targets = None;
        let mut screen_success = BTreeMap::new();
        let mut populations = Vec::new();
        let mut default_age_band = None;
        let mut baseline = None;
        let mut snapshot = None;
        let mut motivators = Vec::new();
        let mut barriers = Vec::new();
        let mut strategies = None;

        for layer in &layers {
            if layer.therapeutic_area.is_some() {
                therapeutic_area.clone_from(&layer.therapeutic_area);
            }
            if layer.source.is_some() {
                source.clone_from(&layer.source);
            }
            if layer.targets.is_some() {
                targets.clone_from(&layer.targets);
            }
            screen_success.extend(layer.screen_success.iter().map(|(k, v)| (k.clone(), *v)));
            if !layer.populations.is_empty() {
                populations.clone_from(&layer.populations);
            }
            if layer.default_age_band.is_some() {
                default_age_band = layer.default_age_band;
            }
            if layer.baseline.is_some() {
                baseline.clone_from(&layer.baseline);
            }
            if layer.snapshot.is_some() {
                snapshot.clone_from(&layer.snapshot);
            }
            if !layer.motivators.is_empty() {
                motivators.clone_from(&layer.motivators);
            }
            if !layer.barriers.is_empty() {
                barriers.clone_from(&layer.barriers);
            }
            if layer.strategies.is_some() {
                strategies.clone_from(&layer.strategies);
            }
        }

        let incomplete = |field: &str| ReferenceError::Incomplete {
            disease: key.disease.clone(),
            field: field.to_string(),
        };
        let targets = targets.ok_or_else(|| incomplete("targets"))?;
        let Some(first_population) = populations.first() else {
            return Err(incomplete("populations"));
        };
        let default_age_band = default_age_band.unwrap_or(first_population.age_band);

        debug!(
            disease = %key.disease,
            trial = ?key.trial,
            time_period = ?key.time_period,
            layers = layers.len(),
            "resolved reference record"
        );

        Ok(ResolvedReference {
            key: key.clone(),
            therapeutic_area,
            source,
            targets,
            screen_success,
            populations,
            default_age_band,
            baseline,
            snapshot,
            motivators,
            barriers,
            strategies: strategies.unwrap_or_default(),
        })
    }
}
