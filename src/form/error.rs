use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A required field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label} must not be empty")]
pub struct ValidationError {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("An unexpected error occurred: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SaveError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SaveError::Validation(_))
    }
}
