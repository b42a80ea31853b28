//! Game generation: sample categories, build both rounds, pick the
//! final clue, assemble the document.
//!
//! Pure given the loaded categories and the generator; the draw order
//! (single sample, double sample, one shuffle per double column, final
//! draw) is fixed, so a seed reproduces the board byte for byte.

use std::collections::HashMap;

use rand::Rng;

use quizbldr_domain::{
    Category, FinalClue, Game, GameDocument, GenerationError, RoundCategory, CATEGORIES_PER_ROUND,
    DOUBLE_ROUND_VALUES, SINGLE_ROUND_VALUES,
};

use crate::{final_clue, rounds, sampler};

/// Generate one complete game from the loaded categories.
///
/// Fails only on [`GenerationError::InsufficientCategories`]; a missing
/// final clue is recovered with the placeholder.
pub fn generate_game<R: Rng>(
    categories: &[Category],
    rng: &mut R,
) -> Result<GameDocument, GenerationError> {
    let names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
    let by_name: HashMap<&str, &Category> =
        categories.iter().map(|c| (c.name.as_str(), c)).collect();

    let single = build_round(&names, &by_name, rng, |category, _| {
        rounds::build_direct(category, &SINGLE_ROUND_VALUES)
    })?;
    tracing::info!(columns = single.len(), "Single round built");

    let double = build_round(&names, &by_name, rng, |category, rng| {
        rounds::build_doubled(category, &DOUBLE_ROUND_VALUES, rng)
    })?;
    tracing::info!(columns = double.len(), "Double round built");

    let final_clue = match final_clue::select_final_clue(single.iter().chain(double.iter()), rng) {
        Ok(record) => FinalClue::from_record(record),
        Err(GenerationError::NoEligibleFinalClue) => {
            tracing::warn!("No clue eligible for the final round, using placeholder");
            FinalClue::placeholder()
        }
        Err(err) => return Err(err),
    };

    Ok(GameDocument::new(Game {
        single,
        double,
        final_clue,
    }))
}

/// Sample categories for one round and build its columns in sampled
/// order.
fn build_round<R: Rng>(
    names: &[String],
    by_name: &HashMap<&str, &Category>,
    rng: &mut R,
    mut build: impl FnMut(&Category, &mut R) -> RoundCategory,
) -> Result<Vec<RoundCategory>, GenerationError> {
    let chosen = sampler::sample_categories(names, CATEGORIES_PER_ROUND, rng)?;
    Ok(chosen
        .iter()
        .filter_map(|name| by_name.get(name.as_str()))
        .map(|category| build(category, rng))
        .collect())
}
