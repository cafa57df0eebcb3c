use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Source numbers cannot be empty")]
    EmptySourceNumbers,
    #[error("Source numbers must be positive, found 0 at position {0}")]
    ZeroSourceNumber(usize),
    #[error("Target must be a positive integer")]
    ZeroTarget,
}
