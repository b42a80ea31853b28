//! Error types for board generation.
//!
//! Malformed source rows are not represented here: they are dropped at
//! the loading boundary and never reach the generation core.

use thiserror::Error;

/// Errors the generation core can signal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Fewer categories are available than a round needs. Fatal:
    /// generation cannot proceed.
    #[error("Not enough categories: {requested} requested, {available} available")]
    InsufficientCategories { requested: usize, available: usize },

    /// No clue in either round carries an eligible final-round value.
    /// Recoverable: the caller substitutes a placeholder final clue.
    #[error("No clue eligible for the final round")]
    NoEligibleFinalClue,
}
