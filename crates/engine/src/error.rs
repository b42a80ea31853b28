//! Unified engine error type.
//!
//! Wraps filesystem, serialization, and generation failures so the
//! entry point handles them uniformly.

use thiserror::Error;

use quizbldr_domain::GenerationError;

/// Unified error for one generation run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Reading the category directory or writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the game document failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The generation core signalled a fatal condition.
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}
