//! Substring search over a [`SearchIndex`].
//!
//! Matching is a case-insensitive substring test against each entry's title
//! and text. There is no scoring: results come back in ascending slide order,
//! capped at [`SearchConfig::max_results`]. Snippet windows are measured in
//! characters so multi-byte titles are never split mid code point.

use regex::RegexBuilder;
use serde::Serialize;

use crate::config::SearchConfig;
use crate::index::SearchIndex;

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Matching slide.
    pub slide_id: u32,
    /// Title of the section containing the slide.
    pub title: String,
    /// The title when it matched, otherwise a window of the entry text.
    pub matched_text: String,
}

/// A piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    /// Text outside any match.
    Plain(String),
    /// Text matching the query.
    Matched(String),
}

impl Segment {
    /// The segment's text.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Matched(text) => text,
        }
    }

    /// Whether this segment matched the query.
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Executes queries with a fixed set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: SearchConfig,
}

impl QueryEngine {
    /// An engine with the given thresholds.
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use.
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Whether `query` is long enough to be run at all.
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.config.min_query_chars
    }

    /// Run `query` against `index`.
    ///
    /// Queries shorter than the minimum length (after trimming) return an
    /// empty list rather than an error.
    pub fn search(&self, index: &SearchIndex, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if !self.accepts(query) {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let query_chars = query.chars().count();

        index
            .iter()
            .filter_map(|(slide_id, entry)| {
                let title_match = entry.title.to_lowercase().contains(&needle);
                let text_start = if title_match {
                    None
                } else if entry.text.to_lowercase().contains(&needle) {
                    // Char-wise lowering can disagree with this one (final sigma).
                    Some(find_ignore_case(&entry.text, query).unwrap_or(0))
                } else {
                    return None;
                };

                let matched_text = text_start.map_or_else(
                    || entry.title.clone(),
                    |start| self.snippet(&entry.text, start, query_chars),
                );

                Some(SearchResult {
                    slide_id,
                    title: entry.title.clone(),
                    matched_text,
                })
            })
            .take(self.config.max_results)
            .collect()
    }

    /// Split `text` into plain and matched segments for display.
    pub fn highlight(&self, text: &str, query: &str) -> Vec<Segment> {
        highlight_with_min(text, query, self.config.min_query_chars)
    }

    fn snippet(&self, text: &str, match_start: usize, query_chars: usize) -> String {
        let chars: Vec<char> = text.chars().collect();
        let start = match_start.saturating_sub(self.config.context_before);
        let end = (match_start + query_chars + self.config.context_after).min(chars.len());

        let mut snippet = String::with_capacity(text.len() + 2 * self.config.ellipsis.len());
        if start > 0 {
            snippet.push_str(&self.config.ellipsis);
        }
        snippet.extend(&chars[start..end]);
        if end < chars.len() {
            snippet.push_str(&self.config.ellipsis);
        }
        snippet
    }
}

/// Split `text` on case-insensitive occurrences of `query` using the default
/// minimum query length.
///
/// ```rust
/// use lectern_core::{highlight, Segment};
///
/// let segments = highlight("Topic and topics", "TOPIC");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Matched("Topic".into()),
///         Segment::Plain(" and ".into()),
///         Segment::Matched("topic".into()),
///         Segment::Plain("s".into()),
///     ]
/// );
/// ```
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    highlight_with_min(text, query, SearchConfig::default().min_query_chars)
}

fn highlight_with_min(text: &str, query: &str, min_chars: usize) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    let query = query.trim();
    if query.chars().count() < min_chars {
        return vec![Segment::Plain(text.to_string())];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return vec![Segment::Plain(text.to_string())];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::Plain(text[last..found.start()].to_string()));
        }
        segments.push(Segment::Matched(found.as_str().to_string()));
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }
    segments
}

/// Character offset in `haystack` of the first case-insensitive occurrence of
/// `needle`. Both sides are lowered one char at a time.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle_lower: String = needle.chars().flat_map(char::to_lowercase).collect();
    let mut lowered = String::with_capacity(haystack.len());
    // Maps each char of `lowered` back to the char it came from in `haystack`.
    let mut origin = Vec::with_capacity(haystack.len());
    for (char_idx, ch) in haystack.chars().enumerate() {
        for lower in ch.to_lowercase() {
            lowered.push(lower);
            origin.push(char_idx);
        }
    }

    let byte_pos = lowered.find(&needle_lower)?;
    let lowered_char_pos = lowered[..byte_pos].chars().count();
    origin.get(lowered_char_pos).copied()
}
