//! Outline model: a navigable tree derived from the flat section list.
//!
//! Decks describe their structure as a flat list of sections, each with a
//! starting slide and a nesting level. [`Outline`] turns that list into a
//! forest in a single pass over the input, using a stack of open sections
//! keyed by level:
//!
//! - a section's parent is the nearest preceding open section one level up
//! - a section stays open until the first later section at the same or a
//!   shallower level, whose start slide (minus one) closes its range
//! - sections still open at the end run through the last slide
//!
//! All queries afterwards are lookups over the precomputed parents, children
//! and range ends. Slide numbers are never bounds-checked here; callers clamp.
//!
//! ```rust
//! use lectern_core::{Outline, Section};
//!
//! let outline = Outline::new(
//!     vec![
//!         Section::new("Intro", 1, 0),
//!         Section::new("Background", 2, 1),
//!         Section::new("Main", 4, 0),
//!     ],
//!     6,
//! );
//!
//! assert_eq!(outline.section_containing(3).map(|s| s.title.as_str()), Some("Background"));
//! assert_eq!(outline.section_range_of(2).map(|r| (r.start, r.end)), Some((4, 6)));
//! ```
//!
//! ## Preconditions
//!
//! Sections are expected in ascending `start_slide` order. Out-of-order input is
//! stable-sorted at construction (ties keep their input order) and a warning is
//! logged. Sections that skip a level (a level-2 entry directly under a level-0
//! one) or a first section deeper than level 0 have no place in the tree; they
//! still take part in [`Outline::section_containing`] and are reported by
//! [`crate::Deck::diagnostics`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::types::{Section, SectionKey, SlideRange};

/// Level whose sections are auto-expanded when navigation enters them.
pub const DEFAULT_EXPANDABLE_LEVEL: u32 = 1;

#[derive(Debug, Clone, Default)]
struct Node {
    parent: Option<usize>,
    children: Vec<usize>,
    end: u32,
}

/// Read-only tree view over a deck's sections.
#[derive(Debug, Clone)]
pub struct Outline {
    sections: Vec<Section>,
    nodes: Vec<Node>,
    roots: Vec<usize>,
    total_slides: u32,
}

impl Outline {
    /// Build the outline for a deck of `total_slides` slides.
    pub fn new(mut sections: Vec<Section>, total_slides: u32) -> Self {
        if !is_sorted_by_start(&sections) {
            warn!(
                "sections are not ordered by start slide; sorting {} entries",
                sections.len()
            );
            sections.sort_by_key(|s| s.start_slide);
        }

        let mut nodes = vec![Node::default(); sections.len()];
        let mut roots = Vec::new();
        // Open sections, levels strictly increasing from bottom to top.
        let mut open: Vec<usize> = Vec::new();

        for (idx, section) in sections.iter().enumerate() {
            while let Some(&top) = open.last() {
                if sections[top].level < section.level {
                    break;
                }
                nodes[top].end = section.start_slide.saturating_sub(1);
                open.pop();
            }

            match open.last() {
                Some(&parent) if sections[parent].level.checked_add(1) == Some(section.level) => {
                    nodes[idx].parent = Some(parent);
                    nodes[parent].children.push(idx);
                },
                None if section.level == 0 => roots.push(idx),
                _ => debug!(
                    "section '{}' (level {}) has no parent one level up",
                    section.title, section.level
                ),
            }

            open.push(idx);
        }

        for idx in open {
            nodes[idx].end = total_slides;
        }

        Self {
            sections,
            nodes,
            roots,
            total_slides,
        }
    }

    /// Sections in outline order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section at `index`.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the deck has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Slide count the ranges were computed against.
    pub const fn total_slides(&self) -> u32 {
        self.total_slides
    }

    /// Indices of the top-level (level 0) sections.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Indices of the immediate children of `index`.
    pub fn child_indices(&self, index: usize) -> &[usize] {
        self.nodes.get(index).map_or(&[], |n| n.children.as_slice())
    }

    /// Immediate children of `index`, in outline order. Grandchildren are
    /// reachable through their own parent, never listed here.
    pub fn children_of(&self, index: usize) -> Vec<&Section> {
        self.child_indices(index)
            .iter()
            .map(|&child| &self.sections[child])
            .collect()
    }

    /// Whether the section at `index` has children in the tree.
    pub fn has_children(&self, index: usize) -> bool {
        !self.child_indices(index).is_empty()
    }

    /// Tree parent of the section at `index`.
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        self.nodes.get(index).and_then(|n| n.parent)
    }

    /// Indices from the root down to `index` (inclusive). Empty for unknown
    /// indices; a section outside the tree yields just itself.
    pub fn path_to(&self, index: usize) -> Vec<usize> {
        if index >= self.sections.len() {
            return Vec::new();
        }
        let mut path = vec![index];
        let mut cursor = index;
        while let Some(parent) = self.parent_of(cursor) {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();
        path
    }

    /// Slides covered by `index`: from its start slide up to one before the
    /// next section at the same or shallower level, or the last slide.
    pub fn section_range_of(&self, index: usize) -> Option<SlideRange> {
        let section = self.sections.get(index)?;
        Some(SlideRange {
            start: section.start_slide,
            end: self.nodes[index].end,
        })
    }

    /// Index of the section the viewer should report as current for `slide`:
    /// the last section starting at or before it, else the first section.
    pub fn section_index_containing(&self, slide: u32) -> Option<usize> {
        if self.sections.is_empty() {
            return None;
        }
        Some(
            self.sections
                .iter()
                .rposition(|s| s.start_slide <= slide)
                .unwrap_or(0),
        )
    }

    /// Section containing `slide`; see [`Self::section_index_containing`].
    pub fn section_containing(&self, slide: u32) -> Option<&Section> {
        self.section_index_containing(slide)
            .map(|idx| &self.sections[idx])
    }

    /// Last section at `level` starting at or before `slide`.
    pub fn enclosing_at_level(&self, slide: u32, level: u32) -> Option<usize> {
        self.sections
            .iter()
            .rposition(|s| s.level == level && s.start_slide <= slide)
    }

    /// Last section at [`DEFAULT_EXPANDABLE_LEVEL`] starting at or before `slide`.
    pub fn top_level_parent_of(&self, slide: u32) -> Option<usize> {
        self.enclosing_at_level(slide, DEFAULT_EXPANDABLE_LEVEL)
    }

    /// Collapse key of the section at `index`.
    pub fn key_of(&self, index: usize) -> Option<SectionKey> {
        self.sections.get(index).map(Section::key)
    }

    /// Position of the section identified by `key`.
    pub fn index_of(&self, key: &SectionKey) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s.start_slide == key.start_slide && s.title == key.title)
    }

    /// Serializable nested view of the whole tree.
    pub fn tree(&self) -> Vec<OutlineNode> {
        self.roots.iter().map(|&idx| self.node(idx)).collect()
    }

    fn node(&self, index: usize) -> OutlineNode {
        let section = &self.sections[index];
        OutlineNode {
            index,
            title: section.title.clone(),
            start_slide: section.start_slide,
            level: section.level,
            range: self.nodes[index].end_range(section.start_slide),
            children: self
                .child_indices(index)
                .iter()
                .map(|&child| self.node(child))
                .collect(),
        }
    }
}

impl Node {
    const fn end_range(&self, start: u32) -> SlideRange {
        SlideRange {
            start,
            end: self.end,
        }
    }
}

/// Nested outline entry, mainly for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineNode {
    /// Position in the section list.
    pub index: usize,
    /// Section title.
    pub title: String,
    /// First slide of the section.
    pub start_slide: u32,
    /// Nesting level (0 is top level).
    pub level: u32,
    /// Slides covered by the section.
    pub range: SlideRange,
    /// Child sections in order.
    pub children: Vec<OutlineNode>,
}

fn is_sorted_by_start(sections: &[Section]) -> bool {
    sections
        .windows(2)
        .all(|pair| pair[0].start_slide <= pair[1].start_slide)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample_outline() -> Outline {
        Outline::new(
            vec![
                Section::new("Intro", 1, 0),
                Section::new("Background", 2, 1),
                Section::new("Main", 4, 0),
                Section::new("TopicA", 4, 1),
                Section::new("Sub A1", 5, 2),
                Section::new("TopicB", 7, 1),
                Section::new("Conclusion", 9, 0),
            ],
            10,
        )
    }

    fn titles(sections: &[&Section]) -> Vec<String> {
        sections.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn test_roots_are_level_zero_sections() {
        let outline = sample_outline();
        assert_eq!(outline.roots(), &[0, 2, 6]);
    }

    #[test]
    fn test_children_exclude_grandchildren() {
        let outline = sample_outline();

        let main_children = titles(&outline.children_of(2));
        assert!(main_children.contains(&"TopicA".to_string()));
        assert!(!main_children.contains(&"Sub A1".to_string()));
        assert_eq!(main_children, vec!["TopicA", "TopicB"]);

        assert_eq!(titles(&outline.children_of(3)), vec!["Sub A1"]);
        assert_eq!(titles(&outline.children_of(0)), vec!["Background"]);
    }

    #[test]
    fn test_children_of_leaf_and_unknown_index_are_empty() {
        let outline = sample_outline();
        assert!(outline.children_of(4).is_empty());
        assert!(outline.children_of(6).is_empty());
        assert!(outline.children_of(99).is_empty());
        assert!(!outline.has_children(1));
        assert!(outline.has_children(2));
    }

    #[test]
    fn test_section_ranges() {
        let outline = sample_outline();
        let range = |idx| {
            let r = outline.section_range_of(idx).unwrap();
            (r.start, r.end)
        };

        assert_eq!(range(0), (1, 3)); // Intro ends before Main
        assert_eq!(range(1), (2, 3)); // Background
        assert_eq!(range(2), (4, 8)); // Main
        assert_eq!(range(3), (4, 6)); // TopicA ends before TopicB
        assert_eq!(range(4), (5, 6)); // Sub A1
        assert_eq!(range(5), (7, 8)); // TopicB
        assert_eq!(range(6), (9, 10)); // Conclusion runs to the last slide
        assert!(outline.section_range_of(7).is_none());
    }

    #[test]
    fn test_section_containing() {
        let outline = sample_outline();
        let title = |slide| outline.section_containing(slide).unwrap().title.clone();

        assert_eq!(title(1), "Intro");
        assert_eq!(title(3), "Background");
        assert_eq!(title(4), "TopicA");
        assert_eq!(title(5), "Sub A1");
        assert_eq!(title(8), "TopicB");
        assert_eq!(title(10), "Conclusion");
        // Past the end is not clamped here
        assert_eq!(title(500), "Conclusion");
    }

    #[test]
    fn test_section_containing_before_first_section_falls_back_to_first() {
        let outline = Outline::new(vec![Section::new("Late", 3, 0)], 5);
        assert_eq!(outline.section_containing(1).unwrap().title, "Late");
        assert_eq!(outline.section_containing(0).unwrap().title, "Late");
    }

    #[test]
    fn test_empty_outline_degrades_gracefully() {
        let outline = Outline::new(Vec::new(), 10);
        assert!(outline.is_empty());
        assert!(outline.section_containing(1).is_none());
        assert!(outline.top_level_parent_of(1).is_none());
        assert!(outline.children_of(0).is_empty());
        assert!(outline.section_range_of(0).is_none());
        assert!(outline.path_to(0).is_empty());
        assert!(outline.tree().is_empty());
    }

    #[test]
    fn test_top_level_parent_of() {
        let outline = sample_outline();
        assert_eq!(outline.top_level_parent_of(1), None);
        assert_eq!(outline.top_level_parent_of(3), Some(1));
        assert_eq!(outline.top_level_parent_of(5), Some(3));
        assert_eq!(outline.top_level_parent_of(9), Some(5));
        assert_eq!(outline.enclosing_at_level(9, 0), Some(6));
    }

    #[test]
    fn test_path_to_walks_from_root() {
        let outline = sample_outline();
        assert_eq!(outline.path_to(4), vec![2, 3, 4]);
        assert_eq!(outline.path_to(0), vec![0]);
        assert_eq!(outline.parent_of(5), Some(2));
        assert_eq!(outline.parent_of(2), None);
    }

    #[test]
    fn test_keys_round_trip_through_index() {
        let outline = sample_outline();
        let key = outline.key_of(5).unwrap();
        assert_eq!(key.title, "TopicB");
        assert_eq!(outline.index_of(&key), Some(5));
        assert_eq!(
            outline.index_of(&SectionKey {
                title: "TopicB".to_string(),
                start_slide: 8
            }),
            None
        );
    }

    #[test]
    fn test_unsorted_input_is_sorted_stably() {
        let outline = Outline::new(
            vec![
                Section::new("Second", 5, 0),
                Section::new("First", 1, 0),
                Section::new("Also First", 1, 1),
            ],
            8,
        );

        let order: Vec<&str> = outline.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(order, vec!["First", "Also First", "Second"]);
        assert_eq!(titles(&outline.children_of(0)), vec!["Also First"]);
    }

    #[test]
    fn test_level_jump_is_left_out_of_tree() {
        let outline = Outline::new(
            vec![Section::new("Top", 1, 0), Section::new("Deep", 2, 2)],
            4,
        );
        assert!(outline.children_of(0).is_empty());
        assert_eq!(outline.parent_of(1), None);
        // Still resolvable as the current section
        assert_eq!(outline.section_containing(3).unwrap().title, "Deep");
        assert_eq!(outline.section_range_of(0).unwrap().end, 4);
    }

    #[test]
    fn test_maximum_level_has_no_parent() {
        let outline = Outline::new(
            vec![
                Section::new("Top", 1, 0),
                Section::new("Huge", 2, u32::MAX),
                Section::new("Next", 3, 0),
            ],
            4,
        );
        assert_eq!(outline.parent_of(1), None);
        assert!(outline.children_of(0).is_empty());
        assert_eq!(outline.roots(), &[0, 2]);
        assert_eq!(outline.section_range_of(1).unwrap().end, 2);
    }

    #[test]
    fn test_sibling_on_same_slide_gives_empty_range() {
        let outline = Outline::new(
            vec![Section::new("A", 1, 0), Section::new("B", 1, 0)],
            3,
        );
        assert!(outline.section_range_of(0).unwrap().is_empty());
        assert_eq!(outline.section_range_of(1).unwrap().len(), 3);
    }

    #[test]
    fn test_tree_nests_children() {
        let tree = sample_outline().tree();
        assert_eq!(tree.len(), 3);
        let main = &tree[1];
        assert_eq!(main.title, "Main");
        assert_eq!(main.children.len(), 2);
        assert_eq!(main.children[0].children[0].title, "Sub A1");
        assert_eq!(main.range, SlideRange { start: 4, end: 8 });

        let json = serde_json::to_value(&tree).expect("Should serialize");
        assert_eq!(json[1]["startSlide"], 4);
    }
}
