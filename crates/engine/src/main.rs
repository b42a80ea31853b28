//! QuizBldr Engine - Main entry point.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod export;
mod final_clue;
mod generator;
mod loader;
mod rounds;
mod sampler;

use config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment overrides from a local .env, if present.
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizbldr_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting QuizBldr Engine");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        categories_dir = %config.categories_dir.display(),
        output_path = %config.output_path.display(),
        seed = ?config.seed,
        "Configuration loaded"
    );

    run(&config)?;

    Ok(())
}

fn run(config: &Config) -> Result<(), error::EngineError> {
    // One seedable generator drives every random draw of the run, so a
    // fixed seed reproduces the board exactly.
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let categories = loader::load_categories(&config.categories_dir)?;
    tracing::info!(count = categories.len(), "Categories loaded");

    let document = generator::generate_game(&categories, &mut rng)?;

    export::write_document(&document, &config.output_path)?;
    tracing::info!(path = %config.output_path.display(), "Game document written");

    Ok(())
}
