//! QuizBldr domain types.
//!
//! Pure value records for trivia boards: question records, categories,
//! round layouts, and the assembled game document. Everything here is
//! immutable data produced once per generation run; randomness and I/O
//! live in the engine crate.

pub mod board;
pub mod error;
pub mod question;

pub use board::{
    FinalClue, Game, GameDocument, RoundCategory, CATEGORIES_PER_ROUND, DOUBLE_ROUND_VALUES,
    FINAL_CLUE_CATEGORY, FINAL_ELIGIBLE_VALUES, SINGLE_ROUND_VALUES,
};
pub use error::GenerationError;
pub use question::{Category, QuestionRecord};
