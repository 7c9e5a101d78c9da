use thiserror::Error;

use recruitplan_core::models::population::AgeBand;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReferenceError {
    #[error("unknown disease: {0}")]
    UnknownDisease(String),

    #[error("unknown trial '{trial}' for disease '{disease}'")]
    UnknownTrial { disease: String, trial: String },

    #[error("unknown time period '{time_period}' for disease '{disease}'")]
    UnknownTimePeriod {
        disease: String,
        time_period: String,
    },

    #[error("no {age_band:?} population figure for disease '{disease}'")]
    UnknownAgeBand { disease: String, age_band: AgeBand },

    #[error("reference data for '{disease}' is missing {field}")]
    Incomplete { disease: String, field: String },
}
