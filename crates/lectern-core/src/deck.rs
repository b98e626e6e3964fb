//! Deck metadata: loading, the synthetic fallback, generation, diagnostics.
//!
//! A deck is read once from a JSON metadata document:
//!
//! ```json
//! {
//!   "totalPages": 10,
//!   "slides": [
//!     { "id": 1, "thumbnail": "/slides/thumbnails/slide-0001.jpg",
//!       "full": "/slides/full/slide-0001.jpg", "highRes": "/slides/high-res/slide-0001.jpg" }
//!   ],
//!   "sections": [ { "title": "Introduction", "startSlide": 1, "level": 0 } ]
//! }
//! ```
//!
//! `totalPages` is optional when reading. When the document cannot be read,
//! [`Deck::load_or_fallback`] substitutes a synthetic deck of numbered slides
//! with a single "Introduction" section instead of failing.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{AssetLayout, Config};
use crate::index::SearchIndex;
use crate::outline::Outline;
use crate::types::{Diagnostic, DiagnosticSeverity, Section, Slide};
use crate::{Error, Result};

/// Title of the only section in a synthetic deck.
pub const FALLBACK_SECTION_TITLE: &str = "Introduction";

/// Slides and sections as supplied by the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Page count declared by the document, if any.
    pub total_pages: Option<u32>,
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
    /// Flat section list in document order.
    pub sections: Vec<Section>,
}

impl Deck {
    /// Parse a metadata document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Parse(format!("invalid deck metadata: {e}")))
    }

    /// Read and parse the metadata document at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let deck = Self::from_json(&content)?;
        debug!(
            "loaded {} slides and {} sections from {}",
            deck.slides.len(),
            deck.sections.len(),
            path.display()
        );
        Ok(deck)
    }

    /// Load `path`, substituting the synthetic deck on any failure.
    pub fn load_or_fallback(path: &Path, config: &Config) -> Self {
        match Self::load(path) {
            Ok(deck) => deck,
            Err(e) => {
                warn!(
                    "could not load {} ({e}); using {} generated slides",
                    path.display(),
                    config.deck.fallback_slides
                );
                Self::fallback(config.deck.fallback_slides, &config.assets)
            },
        }
    }

    /// `count` numbered slides and a single "Introduction" section.
    pub fn fallback(count: u32, layout: &AssetLayout) -> Self {
        Self {
            total_pages: None,
            slides: numbered_slides(count, layout),
            sections: vec![Section::new(FALLBACK_SECTION_TITLE, 1, 0)],
        }
    }

    /// Build a complete metadata document for `count` slides.
    pub fn generate(count: u32, sections: Vec<Section>, layout: &AssetLayout) -> Self {
        Self {
            total_pages: Some(count),
            slides: numbered_slides(count, layout),
            sections,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Number of slides, saturating at `u32::MAX`.
    pub fn slide_count(&self) -> u32 {
        u32::try_from(self.slides.len()).unwrap_or(u32::MAX)
    }

    /// Slide with id `id`.
    pub fn slide(&self, id: u32) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// Build the outline for this deck.
    pub fn outline(&self) -> Outline {
        Outline::new(self.sections.clone(), self.slide_count())
    }

    /// Build the search index for this deck.
    pub fn search_index(&self) -> SearchIndex {
        SearchIndex::build(&self.slides, &self.outline())
    }

    /// Structural findings about the document. Nothing here is enforced; the
    /// outline copes with all of it, but the results may surprise a reader.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let push = |out: &mut Vec<Diagnostic>, severity, message: String, section| {
            out.push(Diagnostic {
                severity,
                message,
                section,
            });
        };

        if self.slides.is_empty() {
            push(
                &mut out,
                DiagnosticSeverity::Error,
                "deck has no slides".to_string(),
                None,
            );
        }
        if let Some((pos, slide)) = self
            .slides
            .iter()
            .enumerate()
            .find(|(pos, slide)| usize::try_from(slide.id).ok() != Some(pos + 1))
        {
            push(
                &mut out,
                DiagnosticSeverity::Warn,
                format!(
                    "slide ids are not contiguous: position {} has id {}",
                    pos + 1,
                    slide.id
                ),
                None,
            );
        }
        if let Some(total) = self.total_pages {
            if total != self.slide_count() {
                push(
                    &mut out,
                    DiagnosticSeverity::Warn,
                    format!(
                        "totalPages is {total} but {} slides are listed",
                        self.slides.len()
                    ),
                    None,
                );
            }
        }

        if self.sections.is_empty() {
            push(
                &mut out,
                DiagnosticSeverity::Info,
                "deck has no sections; the outline will be empty".to_string(),
                None,
            );
            return out;
        }
        if self.sections[0].level != 0 {
            push(
                &mut out,
                DiagnosticSeverity::Warn,
                format!(
                    "first section '{}' is level {}; it will not appear under a top-level entry",
                    self.sections[0].title, self.sections[0].level
                ),
                Some(0),
            );
        }

        let slide_count = self.slide_count();
        let mut seen = HashSet::new();
        for (idx, section) in self.sections.iter().enumerate() {
            if section.start_slide == 0 {
                push(
                    &mut out,
                    DiagnosticSeverity::Error,
                    format!("section '{}' starts at slide 0", section.title),
                    Some(idx),
                );
            } else if section.start_slide > slide_count {
                push(
                    &mut out,
                    DiagnosticSeverity::Warn,
                    format!(
                        "section '{}' starts at slide {} but the deck has {slide_count}",
                        section.title, section.start_slide
                    ),
                    Some(idx),
                );
            }

            if idx > 0 {
                let prev = &self.sections[idx - 1];
                if section.start_slide < prev.start_slide {
                    push(
                        &mut out,
                        DiagnosticSeverity::Warn,
                        format!(
                            "section '{}' starts before the preceding '{}'; sections will be reordered",
                            section.title, prev.title
                        ),
                        Some(idx),
                    );
                }
                if section.level > prev.level.saturating_add(1) {
                    push(
                        &mut out,
                        DiagnosticSeverity::Warn,
                        format!(
                            "section '{}' jumps from level {} to {}; it will be left out of the tree",
                            section.title, prev.level, section.level
                        ),
                        Some(idx),
                    );
                }
            }

            if !seen.insert(section.key()) {
                push(
                    &mut out,
                    DiagnosticSeverity::Warn,
                    format!(
                        "duplicate section '{}' at slide {}; collapse state is shared",
                        section.title, section.start_slide
                    ),
                    Some(idx),
                );
            }
        }

        out
    }
}

fn numbered_slides(count: u32, layout: &AssetLayout) -> Vec<Slide> {
    (1..=count)
        .map(|id| Slide {
            id,
            thumbnail: layout.thumbnail(id),
            full: layout.full(id),
            high_res: layout.high_res(id),
        })
        .collect()
}
