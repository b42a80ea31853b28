//! Round building: one clue per target value, best effort.
//!
//! A category that cannot fill a slot simply leaves it out; a round
//! column may end up with fewer clues than target values. Slots are
//! never padded.

use rand::seq::SliceRandom;
use rand::Rng;

use quizbldr_domain::{Category, QuestionRecord, RoundCategory};

/// Build a single-round column.
///
/// Records are stable-sorted ascending by value, and each target takes
/// the first record with that exact value, so among duplicates the
/// earliest source record wins.
pub fn build_direct(category: &Category, targets: &[u32]) -> RoundCategory {
    let mut records = category.questions.clone();
    records.sort_by_key(|record| record.value);

    let clues = targets
        .iter()
        .filter_map(|&target| {
            records
                .iter()
                .find(|record| record.value == target)
                .cloned()
        })
        .collect();

    RoundCategory {
        category: category.name.clone(),
        clues,
    }
}

/// Build a double-round column.
///
/// The category's records are shuffled fresh, then each doubled target
/// takes the first shuffled record valued at half the target, re-issued
/// at the doubled value. The shuffle varies which duplicate wins from
/// game to game; source records are never mutated.
pub fn build_doubled<R: Rng>(category: &Category, targets: &[u32], rng: &mut R) -> RoundCategory {
    let mut records = category.questions.clone();
    records.shuffle(rng);

    let clues = targets
        .iter()
        .filter_map(|&target| {
            records
                .iter()
                .find(|record| record.value == target / 2)
                .map(|record| record.with_value(target))
        })
        .collect();

    RoundCategory {
        category: category.name.clone(),
        clues,
    }
}
