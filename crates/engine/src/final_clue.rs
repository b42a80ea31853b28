//! Final-clue selection.

use rand::seq::SliceRandom;
use rand::Rng;

use quizbldr_domain::{GenerationError, QuestionRecord, RoundCategory, FINAL_ELIGIBLE_VALUES};

/// Pick the final clue from the clues of both built rounds.
///
/// Eligible clues are those valued exactly 300 or 400 (board values,
/// so double-round clues qualify through their doubled value). One is
/// chosen uniformly at random; an empty pool is an error the caller
/// recovers from with a placeholder.
pub fn select_final_clue<'a, R: Rng>(
    rounds: impl IntoIterator<Item = &'a RoundCategory>,
    rng: &mut R,
) -> Result<&'a QuestionRecord, GenerationError> {
    let eligible: Vec<&QuestionRecord> = rounds
        .into_iter()
        .flat_map(|column| column.clues.iter())
        .filter(|clue| FINAL_ELIGIBLE_VALUES.contains(&clue.value))
        .collect();

    eligible
        .choose(rng)
        .copied()
        .ok_or(GenerationError::NoEligibleFinalClue)
}
