use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// A demographic axis (e.g., "Gender", "Race") whose subgroup percentages
/// should sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimension(pub String);

impl Dimension {
    pub const GENDER: &'static str = "Gender";
    pub const RACE: &'static str = "Race";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn gender() -> Self {
        Self::new(Self::GENDER)
    }

    pub fn race() -> Self {
        Self::new(Self::RACE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Dimension {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One subgroup's share of a dimension, in percent (0–100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubgroupShare {
    pub label: String,
    pub percent: f64,
}

impl SubgroupShare {
    pub fn new(label: impl Into<String>, percent: f64) -> Self {
        Self {
            label: label.into(),
            percent,
        }
    }
}

/// The subgroup distribution of a single dimension, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionProfile {
    pub dimension: Dimension,
    pub subgroups: Vec<SubgroupShare>,
}

impl DimensionProfile {
    pub fn new(dimension: Dimension, subgroups: Vec<SubgroupShare>) -> Self {
        Self {
            dimension,
            subgroups,
        }
    }

    /// Build a profile from `(label, percent)` pairs, keeping their order.
    pub fn from_pairs(dimension: impl Into<Dimension>, pairs: &[(&str, f64)]) -> Self {
        Self {
            dimension: dimension.into(),
            subgroups: pairs
                .iter()
                .map(|(label, percent)| SubgroupShare::new(*label, *percent))
                .collect(),
        }
    }

    pub fn total_percent(&self) -> f64 {
        self.subgroups.iter().map(|s| s.percent).sum()
    }

    pub fn percent_of(&self, label: &str) -> Option<f64> {
        self.subgroups
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.percent)
    }

    /// Check labels are unique and every percentage lies in [0, 100].
    pub fn check_entries(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for share in &self.subgroups {
            if !seen.insert(share.label.as_str()) {
                return Err(ValidationError::DuplicateLabel {
                    dimension: self.dimension.clone(),
                    label: share.label.clone(),
                });
            }
            if !(0.0..=100.0).contains(&share.percent) {
                return Err(ValidationError::PercentOutOfRange {
                    dimension: self.dimension.clone(),
                    label: share.label.clone(),
                    value: share.percent,
                });
            }
        }
        Ok(())
    }

    /// Check the percentages sum to 100 within `tolerance`.
    pub fn check_sum(&self, tolerance: f64) -> Result<(), ValidationError> {
        let sum = self.total_percent();
        let within = (sum - 100.0).abs() <= tolerance;
        if !within {
            return Err(ValidationError::PercentSum {
                dimension: self.dimension.clone(),
                sum,
                tolerance,
            });
        }
        Ok(())
    }

    pub fn validate(&self, tolerance: f64) -> Result<(), ValidationError> {
        self.check_entries()?;
        self.check_sum(tolerance)
    }
}

/// Percentages per subgroup, partitioned into independent dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemographicProfile {
    pub dimensions: Vec<DimensionProfile>,
}

impl DemographicProfile {
    pub fn new(dimensions: Vec<DimensionProfile>) -> Self {
        Self { dimensions }
    }

    pub fn dimension(&self, dimension: &Dimension) -> Option<&DimensionProfile> {
        self.dimensions.iter().find(|d| &d.dimension == dimension)
    }

    /// Validate every dimension, collecting one error per failing dimension.
    pub fn validate(&self, tolerance: f64) -> Vec<ValidationError> {
        self.dimensions
            .iter()
            .filter_map(|d| d.validate(tolerance).err())
            .collect()
    }
}
