//! `lectern generate`: write a metadata document for a numbered deck.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use lectern_core::{Config, Deck, DiagnosticSeverity, FALLBACK_SECTION_TITLE, Section};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub slides: u32,
    pub sections: Option<PathBuf>,
    pub out: PathBuf,
    pub force: bool,
}

pub fn execute(options: &GenerateOptions, config: &Config) -> Result<()> {
    if options.out.exists() && !options.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            options.out.display()
        );
    }

    let sections = match &options.sections {
        Some(path) => read_sections(path)?,
        None => vec![Section::new(FALLBACK_SECTION_TITLE, 1, 0)],
    };

    let deck = Deck::generate(options.slides, sections, &config.assets);
    for diagnostic in deck.diagnostics() {
        if diagnostic.severity != DiagnosticSeverity::Info {
            warn!("{}", diagnostic.message);
        }
    }

    deck.write(&options.out)
        .with_context(|| format!("Failed to write {}", options.out.display()))?;
    info!("wrote {}", options.out.display());

    println!(
        "{} {} slides and {} sections to {}",
        "Wrote".green().bold(),
        deck.slide_count(),
        deck.sections.len(),
        options.out.display()
    );
    Ok(())
}

/// A JSON array of `{title, startSlide, level}` objects.
fn read_sections(path: &Path) -> Result<Vec<Section>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sections from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse sections in {}", path.display()))
}
