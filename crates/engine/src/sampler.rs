//! Category sampling.

use rand::Rng;

use quizbldr_domain::GenerationError;

/// Choose `count` distinct category names uniformly at random, without
/// replacement.
///
/// The single and double rounds each call this independently, so the
/// same category may appear in both rounds.
pub fn sample_categories<R: Rng>(
    names: &[String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, GenerationError> {
    if names.len() < count {
        return Err(GenerationError::InsufficientCategories {
            requested: count,
            available: names.len(),
        });
    }

    let chosen = rand::seq::index::sample(rng, names.len(), count)
        .into_iter()
        .map(|i| names[i].clone())
        .collect();
    Ok(chosen)
}
