use thiserror::Error;

/// Errors raised by sort routines.
///
/// Comparison sorts never fail at runtime; ordering is enforced by the `Ord`
/// bound. Only the distribution sorts validate their input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl SortError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SortError::InvalidInput(_))
    }
}

/// Reasons a distribution sort refuses its input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// No maximum is defined for an empty sequence
    #[error("sequence is empty")]
    Empty,
    #[error("negative value {value} at index {index}")]
    Negative { index: usize, value: i64 },
}
