//! # CLI Structure and Argument Parsing
//!
//! `lectern` is a terminal host for the viewer core: it loads one deck's
//! metadata document and answers outline, navigation and search questions
//! about it.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Outline as the sidebar would render it while viewing slide 5
//! lectern outline --slide 5
//!
//! # Which section is slide 7 in?
//! lectern locate 7
//!
//! # Search section titles
//! lectern search topic --format json
//!
//! # Write a metadata document for a 24-slide deck
//! lectern generate --slides 24 --sections sections.json
//!
//! # Report structural problems in the metadata
//! lectern check
//! ```
//!
//! ## Output Formats
//!
//! Commands accept `--format text|json|jsonl`. Without it, terminals get text
//! and pipes get JSON.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::args::OutputArgs;

/// Default metadata location, relative to the working directory.
pub const DEFAULT_METADATA_PATH: &str = "public/slides/metadata.json";

/// Main CLI structure for the `lectern` command
#[derive(Parser, Clone, Debug)]
#[command(name = "lectern")]
#[command(version)]
#[command(about = "lectern - outline, navigation and search for slide decks", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Deck metadata document. Also via `LECTERN_METADATA`.
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "LECTERN_METADATA",
        default_value = DEFAULT_METADATA_PATH
    )]
    pub metadata: PathBuf,

    /// Fail instead of falling back to a generated deck when the metadata
    /// cannot be loaded
    #[arg(long = "no-fallback", global = true)]
    pub no_fallback: bool,

    /// Path to configuration file (overrides autodiscovery). Also via `LECTERN_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "LECTERN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing config.toml (overrides autodiscovery). Also via `LECTERN_CONFIG_DIR`.
    #[arg(
        long = "config-dir",
        global = true,
        value_name = "DIR",
        env = "LECTERN_CONFIG_DIR"
    )]
    pub config_dir: Option<PathBuf>,
}

/// Available subcommands for the `lectern` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Show the section outline with collapse state
    Outline {
        /// Render as if viewing this slide (auto-expands its section)
        #[arg(long, value_name = "N")]
        slide: Option<u32>,
        /// Show every section regardless of collapse state
        #[arg(long)]
        expand_all: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the section containing a slide
    Locate {
        /// Slide number (clamped to the deck)
        slide: u32,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Search section titles and slide text
    Search {
        /// Search query (words are joined with spaces)
        #[arg(required = true, num_args = 1.., value_name = "QUERY")]
        query: Vec<String>,
        /// Maximum number of results (never more than the configured cap)
        #[arg(short = 'n', long, value_name = "COUNT")]
        limit: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Dump the per-slide search index
    Index {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a metadata document with numbered slides
    Generate {
        /// Number of slides in the deck
        #[arg(long, value_name = "COUNT")]
        slides: u32,
        /// JSON file holding the section list; defaults to a single "Introduction"
        #[arg(long, value_name = "FILE")]
        sections: Option<PathBuf>,
        /// Where to write the document (defaults to --metadata)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },

    /// Report structural problems in the metadata document
    Check {
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Commands {
    /// Output arguments of the selected command, if it prints structured output.
    pub const fn output(&self) -> Option<&OutputArgs> {
        match self {
            Self::Outline { output, .. }
            | Self::Locate { output, .. }
            | Self::Search { output, .. }
            | Self::Index { output }
            | Self::Check { output } => Some(output),
            Self::Generate { .. } => None,
        }
    }
}
