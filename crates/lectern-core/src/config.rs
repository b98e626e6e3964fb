//! Configuration for the lectern viewer core.
//!
//! Configuration is stored in TOML. Every section and every field is optional;
//! anything left out falls back to the defaults documented below, which
//! reproduce the stock viewer behavior.
//!
//! ## Lookup order
//!
//! 1. An explicit path (`--config` / `LECTERN_CONFIG` in the CLI)
//! 2. `config.toml` in the platform config directory (see [`Config::default_path`])
//! 3. Built-in defaults
//!
//! ## Example
//!
//! ```toml
//! [search]
//! min_query_chars = 2
//! max_results = 20
//! context_before = 30
//! context_after = 50
//! debounce_ms = 150
//!
//! [outline]
//! collapsed_level = 1
//!
//! [assets]
//! thumbnails = "/slides/thumbnails"
//! full = "/slides/full"
//! high_res = "/slides/high-res"
//!
//! [deck]
//! fallback_slides = 10
//! ```
//!
//! ```rust
//! use lectern_core::Config;
//!
//! let config: Config = toml::from_str("[search]\nmax_results = 5\n")?;
//! assert_eq!(config.search.max_results, 5);
//! assert_eq!(config.search.min_query_chars, 2);
//! # Ok::<(), toml::de::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Query engine thresholds and debounce delay
    pub search: SearchConfig,
    /// Outline behavior
    pub outline: OutlineConfig,
    /// Asset path convention used by the fallback deck and the generator
    pub assets: AssetLayout,
    /// Deck loading behavior
    pub deck: DeckConfig,
}

/// Query engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Trimmed queries shorter than this (in characters) return nothing.
    pub min_query_chars: usize,
    /// Maximum number of results returned by a single search.
    pub max_results: usize,
    /// Characters of left context kept around a text-only match.
    pub context_before: usize,
    /// Characters kept after the query when building a text-only snippet.
    pub context_after: usize,
    /// Delay between the last keystroke and running the query.
    pub debounce_ms: u64,
    /// Marker placed on a snippet side that was truncated.
    pub ellipsis: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            max_results: 20,
            context_before: 30,
            context_after: 50,
            debounce_ms: 150,
            ellipsis: "...".to_string(),
        }
    }
}

impl SearchConfig {
    /// Debounce delay as a `Duration`.
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Outline settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Sections at this level start collapsed and are auto-expanded when
    /// navigation enters them.
    pub collapsed_level: u32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self { collapsed_level: 1 }
    }
}

/// Path prefixes for the three slide renditions.
///
/// Slide files are named `slide-NNNN.jpg` with a zero-padded 4-digit index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetLayout {
    /// URL prefix for thumbnail images.
    pub thumbnails: String,
    /// URL prefix for full-size images.
    pub full: String,
    /// URL prefix for high-resolution images.
    pub high_res: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            thumbnails: "/slides/thumbnails".to_string(),
            full: "/slides/full".to_string(),
            high_res: "/slides/high-res".to_string(),
        }
    }
}

impl AssetLayout {
    /// File name for a slide, e.g. `slide-0007.jpg`.
    pub fn file_name(id: u32) -> String {
        format!("slide-{id:04}.jpg")
    }

    /// Thumbnail URL for slide `id`.
    pub fn thumbnail(&self, id: u32) -> String {
        format!("{}/{}", self.thumbnails, Self::file_name(id))
    }

    /// Full-size URL for slide `id`.
    pub fn full(&self, id: u32) -> String {
        format!("{}/{}", self.full, Self::file_name(id))
    }

    /// High-resolution URL for slide `id`.
    pub fn high_res(&self, id: u32) -> String {
        format!("{}/{}", self.high_res, Self::file_name(id))
    }
}

/// Deck loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Number of slides in the synthetic deck used when loading fails.
    pub fallback_slides: u32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            fallback_slides: 10,
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;

        Ok(())
    }

    /// Platform config file location:
    /// - Linux: `~/.config/lectern/config.toml`
    /// - macOS: `~/Library/Application Support/dev.lectern.lectern/config.toml`
    /// - Windows: `%APPDATA%\lectern\lectern\config\config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "lectern", "lectern")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Reject values that would make the query engine meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(Error::Config("search.max_results must be at least 1".into()));
        }
        if self.search.min_query_chars == 0 {
            return Err(Error::Config(
                "search.min_query_chars must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
