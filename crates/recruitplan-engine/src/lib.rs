//! recruitplan-engine
//!
//! The enrollment planning calculations: gaps between target and current
//! enrollment, screening requirements, priority ranking, and strategy
//! selection. Every function is a pure recomputation from its inputs, so
//! callers may invoke them concurrently without synchronization.

pub mod error;
pub mod gap;
pub mod plan;
pub mod ranking;
pub mod screening;
pub mod settings;
pub mod strategy;

pub use error::EngineError;
pub use plan::build_plan;
pub use settings::PlannerSettings;
