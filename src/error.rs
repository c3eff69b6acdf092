//! Error types for AP typing operations.
//!
//! Every public entry point validates its input eagerly and fails with one of
//! these variants before building any derived state.

use thiserror::Error;

/// Result alias used across the library.
pub type TypingResult<T> = Result<T, TypingError>;

/// Error taxonomy for the typing calculators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    /// Input is not a permutation of the four aspects.
    #[error("Invalid AP type {0}")]
    InvalidApType(String),

    /// Input is not four digits in `0..=4`.
    #[error("Invalid subtype {0}")]
    InvalidSubtype(String),

    /// Wrong number of codes, or a code outside the domain alphabet.
    #[error("Invalid trifix (e.g. \"369\") or EI archetype with optional center stacking (e.g. \"BG-FD-EX\" or \"SPI SY-CY-UN\"): {0}")]
    InvalidTriadInput(String),

    /// Codes are valid but do not cover the three centers one each.
    #[error("Invalid center distribution (need exactly one code per center): {0}")]
    InvalidCenterDistribution(String),

    /// A valid triad with no registered nickname. Indicates a table gap.
    #[error("No nickname registered for combination {0}")]
    UnknownCombination(String),

    /// A remap with no registered relation. Indicates a table gap.
    #[error("No intertype relation registered for remap {0}")]
    UnknownRelation(String),
}

impl TypingError {
    /// Whether the error is caused by user input rather than missing table data.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            TypingError::UnknownCombination(_) | TypingError::UnknownRelation(_)
        )
    }
}
