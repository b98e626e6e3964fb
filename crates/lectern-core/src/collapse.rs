//! Collapse state for the outline view.
//!
//! Sections at one designated level (the second tier, level 1, by default)
//! start collapsed; everything else starts expanded. State is keyed by
//! [`SectionKey`] so a toggle keeps referring to the same section even if the
//! section list is reloaded in a different shape.
//!
//! Navigation only ever expands: when the current slide moves into a
//! collapsed section at the designated level, that section opens. Nothing is
//! collapsed automatically.

use std::collections::BTreeSet;

use tracing::debug;

use crate::outline::{DEFAULT_EXPANDABLE_LEVEL, Outline};
use crate::types::SectionKey;

/// The set of collapsed sections for one viewer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: BTreeSet<SectionKey>,
    level: u32,
}

impl CollapseState {
    /// Default state: every level-1 section collapsed.
    pub fn initial(outline: &Outline) -> Self {
        Self::with_level(outline, DEFAULT_EXPANDABLE_LEVEL)
    }

    /// Default state with a custom collapsed level.
    pub fn with_level(outline: &Outline, level: u32) -> Self {
        let collapsed = outline
            .sections()
            .iter()
            .filter(|s| s.level == level)
            .map(crate::Section::key)
            .collect();
        Self { collapsed, level }
    }

    /// Level whose sections start collapsed and get auto-expanded.
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Whether the section identified by `key` is collapsed.
    pub fn is_collapsed(&self, key: &SectionKey) -> bool {
        self.collapsed.contains(key)
    }

    /// Collapse flag of the section at `index` (false for unknown indices).
    pub fn is_collapsed_at(&self, outline: &Outline, index: usize) -> bool {
        outline
            .key_of(index)
            .is_some_and(|key| self.collapsed.contains(&key))
    }

    /// Flip the collapse flag of `key`. Returns the new collapsed value.
    pub fn toggle(&mut self, key: &SectionKey) -> bool {
        if self.collapsed.remove(key) {
            false
        } else {
            self.collapsed.insert(key.clone());
            true
        }
    }

    /// Flip the collapse flag of the section at `index`. Unknown indices are
    /// ignored and report `None`.
    pub fn toggle_at(&mut self, outline: &Outline, index: usize) -> Option<bool> {
        let key = outline.key_of(index)?;
        Some(self.toggle(&key))
    }

    /// Expand the section at the collapsed level enclosing `slide`, if it is
    /// collapsed and its range actually covers the slide. Returns whether
    /// anything changed.
    pub fn ensure_expanded_for_slide(&mut self, outline: &Outline, slide: u32) -> bool {
        let Some(index) = outline.enclosing_at_level(slide, self.level) else {
            return false;
        };
        let covers = outline
            .section_range_of(index)
            .is_some_and(|range| range.contains(slide));
        if !covers {
            return false;
        }

        let Some(key) = outline.key_of(index) else {
            return false;
        };
        let expanded = self.collapsed.remove(&key);
        if expanded {
            debug!("auto-expanded '{}' for slide {slide}", key.title);
        }
        expanded
    }

    /// Expand every section.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Restore the initial defaults for `outline`.
    pub fn reset(&mut self, outline: &Outline) {
        *self = Self::with_level(outline, self.level);
    }

    /// Number of collapsed sections.
    pub fn collapsed_count(&self) -> usize {
        self.collapsed.len()
    }

    /// Collapsed keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionKey> {
        self.collapsed.iter()
    }
}
