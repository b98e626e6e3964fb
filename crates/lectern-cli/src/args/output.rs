//! Output format arguments, flattened into every command that prints results.
//!
//! ```bash
//! lectern search topic --format json
//! lectern search topic --json        # Shorthand
//! lectern outline --format text
//! ```

use clap::{Args, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};

/// Output format for CLI results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable formatted text (default for terminals).
    #[default]
    Text,
    /// A single JSON document (default for pipes).
    Json,
    /// JSON Lines, one record per line.
    Jsonl,
}

impl OutputFormat {
    /// JSON or JSONL.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }

    /// `Text` for interactive terminals, `Json` for pipes and redirects.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Text
        } else {
            Self::Json
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Format selection with TTY detection when nothing is given.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputArgs {
    /// Output format (text, json, jsonl).
    ///
    /// Defaults to text for terminals, json for pipes.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        env = "LECTERN_OUTPUT_FORMAT",
        display_order = 44
    )]
    pub format: Option<OutputFormat>,

    /// Output as JSON (shorthand for --format json).
    #[arg(long, conflicts_with = "format", display_order = 40)]
    pub json: bool,

    /// Output as JSON Lines (shorthand for --format jsonl).
    #[arg(long, conflicts_with_all = ["format", "json"], display_order = 41)]
    pub jsonl: bool,
}

impl OutputArgs {
    /// Shorthand flags win over `--format`, which wins over detection.
    #[must_use]
    pub fn resolve(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        if self.jsonl {
            return OutputFormat::Jsonl;
        }
        self.format.unwrap_or_else(OutputFormat::detect)
    }
}
