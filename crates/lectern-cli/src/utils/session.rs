//! Config and deck loading shared by every command.

use std::path::Path;

use anyhow::{Context, Result};
use lectern_core::{Config, Deck, Viewer};
use tracing::debug;

use crate::cli::Cli;

/// Resolve configuration: `--config` must exist, `--config-dir` and the
/// platform location fall back to defaults when no file is present.
pub fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    if let Some(dir) = &cli.config_dir {
        let path = dir.join("config.toml");
        if path.exists() {
            return Config::load_from(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()));
        }
        debug!("no config.toml in {}, using defaults", dir.display());
        return Ok(Config::default());
    }

    Ok(Config::load()?)
}

/// Load the deck named by `--metadata`.
///
/// A missing or malformed document is replaced by the generated fallback
/// deck unless `--no-fallback` was given.
pub fn load_deck(cli: &Cli, config: &Config) -> Result<Deck> {
    if cli.no_fallback {
        return load_strict(&cli.metadata);
    }
    Ok(Deck::load_or_fallback(&cli.metadata, config))
}

/// Load a deck and report any failure.
pub fn load_strict(path: &Path) -> Result<Deck> {
    Deck::load(path).with_context(|| format!("Failed to load metadata from {}", path.display()))
}

/// A fresh viewing session on the `--metadata` deck.
pub fn open_viewer(cli: &Cli, config: &Config) -> Result<Viewer> {
    let deck = load_deck(cli, config)?;
    Ok(Viewer::new(deck, config))
}
