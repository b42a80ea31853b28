//! Question records and categories as loaded from source files.

use serde::{Deserialize, Serialize};

/// One well-formed question row: point value, clue, and solution.
///
/// The point value is always a positive integer; rows that fail that
/// check are dropped before a record is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Point value of the question
    pub value: u32,
    /// The clue shown to players
    pub clue: String,
    /// The expected solution
    pub solution: String,
}

impl QuestionRecord {
    /// Create a record with a new point value and this record's text.
    ///
    /// Used by the double round, which reuses a question's content at
    /// twice its source value. The source record is left untouched.
    pub fn with_value(&self, value: u32) -> Self {
        Self {
            value,
            clue: self.clue.clone(),
            solution: self.solution.clone(),
        }
    }
}

/// A named group of questions sourced from one category file.
///
/// Questions may carry duplicate point values or miss some values
/// entirely; round building tolerates both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category name, derived from the source file stem
    pub name: String,
    /// Questions in source order
    pub questions: Vec<QuestionRecord>,
}

impl Category {
    /// Create a category from a name and its question records.
    pub fn new(name: impl Into<String>, questions: Vec<QuestionRecord>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }
}
