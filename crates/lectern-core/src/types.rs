use serde::{Deserialize, Serialize};

/// A single slide image and its three renditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// 1-based position, doubling as the identifier.
    pub id: u32,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Full-size image URL.
    pub full: String,
    /// High-resolution image URL.
    pub high_res: String,
}

/// A titled entry in the flat outline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Title shown in the outline.
    pub title: String,
    /// First slide of the section (1-based).
    pub start_slide: u32,
    /// Nesting depth, 0 = top level.
    pub level: u32,
}

impl Section {
    /// Convenience constructor used heavily by tests and the generator.
    pub fn new(title: impl Into<String>, start_slide: u32, level: u32) -> Self {
        Self {
            title: title.into(),
            start_slide,
            level,
        }
    }

    /// Stable identity of this section, independent of its position.
    pub fn key(&self) -> SectionKey {
        SectionKey {
            title: self.title.clone(),
            start_slide: self.start_slide,
        }
    }
}

/// Identity used to key per-section UI state (collapse flags).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionKey {
    /// Section title.
    pub title: String,
    /// Section start slide.
    pub start_slide: u32,
}

/// Inclusive slide range covered by a section.
///
/// `end < start` describes an empty range, which happens when a sibling
/// starts on the same slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRange {
    /// First slide (inclusive).
    pub start: u32,
    /// Last slide (inclusive).
    pub end: u32,
}

impl SlideRange {
    /// Whether `slide` falls inside the range.
    pub const fn contains(&self, slide: u32) -> bool {
        slide >= self.start && slide <= self.end
    }

    /// Number of slides covered.
    pub const fn len(&self) -> u32 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    /// True when no slide is covered.
    pub const fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl std::fmt::Display for SlideRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A structural finding about a metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How serious the finding is.
    pub severity: DiagnosticSeverity,
    /// Human-readable description.
    pub message: String,
    /// Index into the section list the finding refers to, if any.
    pub section: Option<usize>,
}

/// Severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// The document will not render as intended.
    Error,
    /// Likely a mistake; the outline copes with it.
    Warn,
    /// Worth knowing; nothing is wrong.
    Info,
}
