use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use recruitplan_core::models::demographic::DemographicProfile;
use recruitplan_core::models::enrollment::CurrentEnrollment;
use recruitplan_core::models::population::{AgeBand, DiseasePopulation};

use crate::catalog::StrategyCatalog;
use crate::error::ReferenceError;

/// Identifies a reference record. A record with no trial is the disease's
/// base record; trial and time-period records layer over it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceKey {
    pub disease: String,
    pub trial: Option<String>,
    pub time_period: Option<String>,
}

impl ReferenceKey {
    pub fn disease(disease: impl Into<String>) -> Self {
        Self {
            disease: disease.into(),
            trial: None,
            time_period: None,
        }
    }

    pub fn with_trial(mut self, trial: impl Into<String>) -> Self {
        self.trial = Some(trial.into());
        self
    }

    pub fn with_time_period(mut self, time_period: impl Into<String>) -> Self {
        self.time_period = Some(time_period.into());
        self
    }
}

/// Revision stamp for a reference record. Within one key the highest
/// revision wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordVersion {
    pub revision: u32,
    pub recorded_on: jiff::civil::Date,
}

/// Population distribution used as the comparison baseline for targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CensusBaseline {
    pub name: String,
    pub age_band: AgeBand,
    pub total_population: u64,
    pub distribution: DemographicProfile,
}

/// One versioned reference record. Every field except the key and version
/// is optional so that trial and time-period records carry only what they
/// override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRecord {
    pub key: ReferenceKey,
    pub version: RecordVersion,
    pub therapeutic_area: Option<String>,
    /// Citation for the target distribution.
    pub source: Option<String>,
    pub targets: Option<DemographicProfile>,
    /// Screen success rates (0–1) keyed by subgroup label.
    #[serde(default)]
    pub screen_success: BTreeMap<String, f64>,
    #[serde(default)]
    pub populations: Vec<DiseasePopulation>,
    pub default_age_band: Option<AgeBand>,
    pub baseline: Option<CensusBaseline>,
    /// Current-enrollment snapshot recorded for a trial or time period.
    pub snapshot: Option<CurrentEnrollment>,
    #[serde(default)]
    pub motivators: Vec<String>,
    #[serde(default)]
    pub barriers: Vec<String>,
    pub strategies: Option<StrategyCatalog>,
}

impl ReferenceRecord {
    pub fn new(key: ReferenceKey, version: RecordVersion) -> Self {
        Self {
            key,
            version,
            therapeutic_area: None,
            source: None,
            targets: None,
            screen_success: BTreeMap::new(),
            populations: Vec::new(),
            default_age_band: None,
            baseline: None,
            snapshot: None,
            motivators: Vec::new(),
            barriers: Vec::new(),
            strategies: None,
        }
    }

    pub fn with_therapeutic_area(mut self, area: impl Into<String>) -> Self {
        self.therapeutic_area = Some(area.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_targets(mut self, targets: DemographicProfile) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn with_screen_success(mut self, rates: &[(&str, f64)]) -> Self {
        self.screen_success.extend(
            rates
                .iter()
                .map(|(label, rate)| ((*label).to_string(), *rate)),
        );
        self
    }

    pub fn with_population(mut self, age_band: AgeBand, total: u64) -> Self {
        self.populations.push(DiseasePopulation { age_band, total });
        self
    }

    pub fn with_default_age_band(mut self, age_band: AgeBand) -> Self {
        self.default_age_band = Some(age_band);
        self
    }

    pub fn with_baseline(mut self, baseline: CensusBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn with_snapshot(mut self, snapshot: CurrentEnrollment) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn with_motivators(mut self, motivators: &[&str]) -> Self {
        self.motivators = motivators.iter().map(|m| (*m).to_string()).collect();
        self
    }

    pub fn with_barriers(mut self, barriers: &[&str]) -> Self {
        self.barriers = barriers.iter().map(|b| (*b).to_string()).collect();
        self
    }

    pub fn with_strategies(mut self, strategies: StrategyCatalog) -> Self {
        self.strategies = Some(strategies);
        self
    }
}

/// A disease base record with its trial and time-period overrides applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedReference {
    pub key: ReferenceKey,
    pub therapeutic_area: Option<String>,
    pub source: Option<String>,
    pub targets: DemographicProfile,
    pub screen_success: BTreeMap<String, f64>,
    pub populations: Vec<DiseasePopulation>,
    pub default_age_band: AgeBand,
    pub baseline: Option<CensusBaseline>,
    pub snapshot: Option<CurrentEnrollment>,
    pub motivators: Vec<String>,
    pub barriers: Vec<String>,
    pub strategies: StrategyCatalog,
}

impl ResolvedReference {
    /// Disease population for `age_band`, or the default band when unset.
    pub fn population(&self, age_band: Option<AgeBand>) -> Result<DiseasePopulation, ReferenceError> {
        let band = age_band.unwrap_or(self.default_age_band);
        self.populations
            .iter()
            .find(|p| p.age_band == band)
            .copied()
            .ok_or_else(|| ReferenceError::UnknownAgeBand {
                disease: self.key.disease.clone(),
                age_band: band,
            })
    }

    pub fn screen_success(&self, label: &str) -> Option<f64> {
        self.screen_success.get(label).copied()
    }
}
