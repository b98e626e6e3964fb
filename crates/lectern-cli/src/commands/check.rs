//! `lectern check`: report structural problems in a metadata document.

use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;
use lectern_core::{Diagnostic, DiagnosticSeverity};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::output::{print_json, print_jsonl, severity_label};
use crate::utils::session::load_strict;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    metadata: String,
    slides: u32,
    sections: usize,
    ok: bool,
    diagnostics: &'a [Diagnostic],
}

/// Fails when the document cannot be loaded or has error-level findings.
pub fn execute(path: &Path, format: OutputFormat) -> Result<()> {
    let deck = load_strict(path)?;
    let diagnostics = deck.diagnostics();
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == DiagnosticSeverity::Error)
        .count();

    match format {
        OutputFormat::Json => print_json(&CheckReport {
            metadata: path.display().to_string(),
            slides: deck.slide_count(),
            sections: deck.sections.len(),
            ok: errors == 0,
            diagnostics: &diagnostics,
        })?,
        OutputFormat::Jsonl => print_jsonl(&diagnostics)?,
        OutputFormat::Text => {
            for diagnostic in &diagnostics {
                let location = diagnostic
                    .section
                    .and_then(|idx| deck.sections.get(idx))
                    .map(|s| format!(" [{}]", s.title))
                    .unwrap_or_default();
                println!(
                    "{}: {}{}",
                    severity_label(diagnostic.severity),
                    diagnostic.message,
                    location.dimmed()
                );
            }
            if diagnostics.is_empty() {
                println!(
                    "{} {} slides, {} sections",
                    "OK".green().bold(),
                    deck.slide_count(),
                    deck.sections.len()
                );
            }
        },
    }

    if errors > 0 {
        bail!("{errors} error(s) in {}", path.display());
    }
    Ok(())
}
