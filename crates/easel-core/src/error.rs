//! Error types for element operations.

use crate::elements::{ElementId, ElementType};
use thiserror::Error;

/// Result type for element operations.
pub type Result<T> = std::result::Result<T, ElementError>;

/// Errors raised by the factory and the board.
#[derive(Debug, Error)]
pub enum ElementError {
    /// The type tag is not one of the known element kinds.
    #[error("unknown element type: {0}")]
    UnknownType(String),

    /// Options of one kind were passed for an element of another kind.
    #[error("options for {found} element passed when creating {expected} element")]
    OptionsMismatch {
        expected: ElementType,
        found: ElementType,
    },

    /// An element with this id is already on the board.
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),

    /// Every id up to the largest representable one is taken.
    #[error("no element ids left")]
    IdsExhausted,

    /// No element with this id is on the board.
    #[error("element not found: {0}")]
    NotFound(ElementId),

    /// Options bag or configuration failed to decode.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
