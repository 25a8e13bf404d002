//! Errors for the script runner.

use easel_core::{ElementError, ElementId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("command {index}: {source}")]
    Command {
        index: usize,
        #[source]
        source: Box<AppError>,
    },

    #[error(transparent)]
    Element(#[from] ElementError),

    #[error("element {0} is not a {1} element")]
    WrongKind(ElementId, &'static str),
}
