//! Engine configuration.
//!
//! Read from the environment with sensible defaults; the binary takes
//! no command-line arguments.

use std::path::PathBuf;

/// Runtime configuration for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one CSV file per category
    pub categories_dir: PathBuf,
    /// Path the game document is written to
    pub output_path: PathBuf,
    /// Optional RNG seed for reproducible boards
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// - `CATEGORIES_DIR` (default `categories`)
    /// - `OUTPUT_FILE` (default `game.json`)
    /// - `GAME_SEED` (optional; must parse as u64 when set)
    pub fn from_env() -> anyhow::Result<Self> {
        let categories_dir = std::env::var("CATEGORIES_DIR").unwrap_or_else(|_| "categories".into());
        let output_path = std::env::var("OUTPUT_FILE").unwrap_or_else(|_| "game.json".into());
        let seed = match std::env::var("GAME_SEED") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                anyhow::anyhow!("GAME_SEED must be an unsigned integer, got '{raw}'")
            })?),
            Err(_) => None,
        };

        Ok(Self {
            categories_dir: PathBuf::from(categories_dir),
            output_path: PathBuf::from(output_path),
            seed,
        })
    }
}
