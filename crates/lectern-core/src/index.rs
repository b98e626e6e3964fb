use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::outline::Outline;
use crate::types::Slide;

/// Title used for slides when the deck has no sections at all.
pub const UNTITLED: &str = "Untitled";

/// Searchable text derived for one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Title of the section containing the slide.
    pub title: String,
    /// Free text matched by queries.
    pub text: String,
}

/// Immutable slide id → searchable text mapping.
///
/// Built in one pass from the slides and the outline; any change to either
/// requires building a new index. Entries iterate in ascending slide id order,
/// so two builds over the same input serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: BTreeMap<u32, IndexEntry>,
}

impl SearchIndex {
    /// Derive one entry per slide, titled by the section containing it.
    pub fn build(slides: &[Slide], outline: &Outline) -> Self {
        let entries: BTreeMap<u32, IndexEntry> = slides
            .iter()
            .map(|slide| {
                let title = outline
                    .section_containing(slide.id)
                    .map_or_else(|| UNTITLED.to_string(), |s| s.title.clone());
                let text = format!("Slide {} {title}", slide.id);
                (slide.id, IndexEntry { title, text })
            })
            .collect();

        debug!("built search index with {} entries", entries.len());
        Self { entries }
    }

    /// Entry for `slide_id`.
    pub fn get(&self, slide_id: u32) -> Option<&IndexEntry> {
        self.entries.get(&slide_id)
    }

    /// Number of indexed slides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no slides are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending slide id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &IndexEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }
}
