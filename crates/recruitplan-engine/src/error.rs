use thiserror::Error;

use recruitplan_core::error::ValidationError;
use recruitplan_reference::error::ReferenceError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("reference data: {0}")]
    Reference(#[from] ReferenceError),
}
