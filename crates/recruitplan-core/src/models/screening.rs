use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

use super::demographic::Dimension;

/// Per-subgroup inputs to the screening requirement calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningParameters {
    pub label: String,
    /// Fraction of screened individuals who qualify and enroll (0–1).
    pub screen_success_rate: f64,
    /// People in the subgroup who have the disease and could be screened.
    pub eligible_population: u64,
}

impl ScreeningParameters {
    pub fn new(label: impl Into<String>, screen_success_rate: f64, eligible_population: u64) -> Self {
        Self {
            label: label.into(),
            screen_success_rate,
            eligible_population,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.screen_success_rate) {
            return Err(ValidationError::SuccessRateOutOfRange {
                label: self.label.clone(),
                rate: self.screen_success_rate,
            });
        }
        Ok(())
    }
}

/// Whether `screened_needed` and `screen_percent` are real figures or
/// sentinels standing in for a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScreeningStatus {
    Computed,
    /// Success rate is 0: no amount of screening enrolls anyone.
    Unachievable,
    /// Eligible population is 0: the screen percentage is undefined.
    NoEligiblePopulation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub label: String,
    pub target_count: u64,
    pub screen_success_rate: f64,
    pub screened_needed: u64,
    pub eligible_population: u64,
    /// Share of the eligible population that must be screened, in percent.
    pub screen_percent: f64,
    pub status: ScreeningStatus,
}

impl ScreeningResult {
    /// The screen percentage, or `None` when it is a sentinel ("N/A").
    pub fn screen_percent_value(&self) -> Option<f64> {
        match self.status {
            ScreeningStatus::Computed => Some(self.screen_percent),
            ScreeningStatus::Unachievable | ScreeningStatus::NoEligiblePopulation => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScreening {
    pub dimension: Dimension,
    pub results: Vec<ScreeningResult>,
}
