//! Board structure: rounds, the final clue, and the game document.
//!
//! The serialized shape of [`GameDocument`] is the output contract of
//! the whole program; field names here are the JSON keys consumers see.

use serde::{Deserialize, Serialize};

use crate::question::QuestionRecord;

/// Number of categories each round attempts to fill.
pub const CATEGORIES_PER_ROUND: usize = 6;

/// Target point values for the single round, in board order.
pub const SINGLE_ROUND_VALUES: [u32; 5] = [100, 200, 300, 400, 500];

/// Target point values for the double round, in board order.
pub const DOUBLE_ROUND_VALUES: [u32; 5] = [200, 400, 600, 800, 1000];

/// Point values a clue must carry to be eligible for the final round.
pub const FINAL_ELIGIBLE_VALUES: [u32; 2] = [300, 400];

/// Fixed category label for the final clue.
pub const FINAL_CLUE_CATEGORY: &str = "Final Question";

/// One category column of a round: the category name and its selected
/// clues in target-value order.
///
/// A column may hold fewer clues than the round has target values when
/// the source category could not fill every slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundCategory {
    /// Category name
    pub category: String,
    /// Selected clues, at most one per target value, in value order
    pub clues: Vec<QuestionRecord>,
}

/// The final-round clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalClue {
    /// Always the fixed final-round label
    pub category: String,
    /// The clue shown to players
    pub clue: String,
    /// The expected solution
    pub solution: String,
}

impl FinalClue {
    /// Build a final clue from a selected question record.
    pub fn from_record(record: &QuestionRecord) -> Self {
        Self {
            category: FINAL_CLUE_CATEGORY.to_string(),
            clue: record.clue.clone(),
            solution: record.solution.clone(),
        }
    }

    /// Placeholder used when no round clue is eligible for the final
    /// slot. The game document is still produced.
    pub fn placeholder() -> Self {
        Self {
            category: FINAL_CLUE_CATEGORY.to_string(),
            clue: "No valid clue available".to_string(),
            solution: "No valid solution available".to_string(),
        }
    }
}

/// A complete game: both rounds plus the final clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Single-round columns (6 entries)
    pub single: Vec<RoundCategory>,
    /// Double-round columns (6 entries)
    pub double: Vec<RoundCategory>,
    /// The final clue
    #[serde(rename = "final")]
    pub final_clue: FinalClue,
}

/// Top-level output document wrapping the game under a `game` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDocument {
    /// The assembled game
    pub game: Game,
}

impl GameDocument {
    /// Wrap a game into the output document.
    pub fn new(game: Game) -> Self {
        Self { game }
    }
}
