//! recruitplan-reference
//!
//! Reference data for enrollment planning. Pure data, no I/O.
//! Target distributions, census baselines, disease population totals,
//! screening-success defaults, and curated recruitment strategies, stored as
//! versioned records keyed by disease, trial, and time period.

use std::sync::LazyLock;

pub mod baselines;
pub mod catalog;
pub mod diseases;
pub mod error;
pub mod record;
pub mod store;

pub use record::{ReferenceKey, ReferenceRecord, ResolvedReference};
pub use store::ReferenceStore;

/// The built-in reference store.
pub fn builtin() -> &'static ReferenceStore {
    static STORE: LazyLock<ReferenceStore> =
        LazyLock::new(|| ReferenceStore::new(diseases::all_records()));
    &STORE
}
