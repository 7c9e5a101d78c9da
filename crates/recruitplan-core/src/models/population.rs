use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age band a population figure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeBand {
    AllAges,
    Adults18Plus,
    Seniors65Plus,
}

/// Estimated number of people living with a disease in one age band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseasePopulation {
    pub age_band: AgeBand,
    pub total: u64,
}
