use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::models::demographic::Dimension;

/// A correctable problem with planning input.
///
/// Validation errors are reported to the user as-is. Invalid proportions are
/// never normalized away: a race distribution summing to 97% is reported as
/// summing to 97%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("{dimension} percentages sum to {sum:.2}, expected 100 (tolerance {tolerance})")]
    PercentSum {
        dimension: Dimension,
        sum: f64,
        tolerance: f64,
    },

    #[error("{dimension}: {label} percentage {value} is outside [0, 100]")]
    PercentOutOfRange {
        dimension: Dimension,
        label: String,
        value: f64,
    },

    #[error("{field} must not be negative (got {value})")]
    NegativeTotal { field: String, value: i64 },

    #[error("{dimension}: {label} count must not be negative (got {value})")]
    NegativeCount {
        dimension: Dimension,
        label: String,
        value: i64,
    },

    #[error("{dimension}: subgroup '{label}' appears more than once")]
    DuplicateLabel { dimension: Dimension, label: String },

    #[error("{dimension}: subgroup counts sum to {sum}, exceeding current total {total}")]
    CountsExceedTotal {
        dimension: Dimension,
        sum: i64,
        total: i64,
    },

    #[error("{label}: screen success rate {rate} is outside [0, 1]")]
    SuccessRateOutOfRange { label: String, rate: f64 },
}

impl ValidationError {
    /// The dimension this error concerns, if it is dimension-scoped.
    pub fn dimension(&self) -> Option<&Dimension> {
        match self {
            ValidationError::PercentSum { dimension, .. }
            | ValidationError::PercentOutOfRange { dimension, .. }
            | ValidationError::NegativeCount { dimension, .. }
            | ValidationError::DuplicateLabel { dimension, .. }
            | ValidationError::CountsExceedTotal { dimension, .. } => Some(dimension),
            ValidationError::NegativeTotal { .. }
            | ValidationError::SuccessRateOutOfRange { .. } => None,
        }
    }
}

/// Reject a negative total, returning it as an unsigned count otherwise.
pub fn non_negative_total(field: &str, value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::NegativeTotal {
        field: field.to_string(),
        value,
    })
}
