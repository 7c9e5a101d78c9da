use recruitplan_core::models::demographic::{DemographicProfile, Dimension, DimensionProfile};

use crate::record::{RecordVersion, ReferenceRecord};

pub mod alzheimers;
pub mod bipolar;
pub mod general;
pub mod schizophrenia;

/// Subgroup labels shared by the built-in tables.
pub mod label {
    pub const FEMALE: &str = "Female";
    pub const MALE: &str = "Male";

    pub const HISPANIC: &str = "Hispanic";
    pub const WHITE_NH: &str = "White, NH";
    pub const AFRICAN_AMERICAN: &str = "African American";
    pub const ASIAN_NH: &str = "Asian, NH";
    pub const AIAN_NH: &str = "AIAN, NH";
    pub const NHPI_NH: &str = "NHPI, NH";
    pub const OTHER: &str = "Other";

    pub const ALL: [&str; 9] = [
        FEMALE,
        MALE,
        WHITE_NH,
        AFRICAN_AMERICAN,
        HISPANIC,
        ASIAN_NH,
        AIAN_NH,
        NHPI_NH,
        OTHER,
    ];
}

/// Revision stamp for the built-in tables.
pub const BUILTIN_VERSION: RecordVersion = RecordVersion {
    revision: 1,
    recorded_on: jiff::civil::date(2025, 7, 1),
};

/// Every built-in record.
pub fn all_records() -> Vec<ReferenceRecord> {
    let mut records = Vec::new();
    records.extend(alzheimers::records());
    records.extend(bipolar::records());
    records.extend(schizophrenia::records());
    records.extend(general::records());
    records
}

/// A Gender + Race profile from literal `(label, percent)` tables.
pub fn profile(gender: &[(&str, f64)], race: &[(&str, f64)]) -> DemographicProfile {
    DemographicProfile::new(vec![
        DimensionProfile::from_pairs(Dimension::GENDER, gender),
        DimensionProfile::from_pairs(Dimension::RACE, race),
    ])
}

/// The same rate for every built-in subgroup.
fn uniform_rates(rate: f64) -> Vec<(&'static str, f64)> {
    label::ALL.iter().map(|l| (*l, rate)).collect()
}
