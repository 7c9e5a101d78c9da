//! recruitplan-core
//!
//! Pure domain types for enrollment planning. No I/O. This is the shared
//! vocabulary of the recruitplan system: demographic profiles, targets,
//! current enrollment, and the gap / screening / strategy records the
//! presentation layer renders.

pub mod error;
pub mod models;
