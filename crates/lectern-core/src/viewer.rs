//! Viewer session: the state a host UI drives.
//!
//! A [`Viewer`] owns everything derived from one loaded deck (outline,
//! collapse state, search index) together with the current slide and the
//! search surface. Hosts push navigation events and keystrokes in and read
//! rows, sections and results back out. Every navigation runs the
//! auto-expand rule, so the outline always shows where the viewer is.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::collapse::CollapseState;
use crate::config::Config;
use crate::deck::Deck;
use crate::debounce::{Debouncer, Ticket};
use crate::index::SearchIndex;
use crate::outline::Outline;
use crate::query::{QueryEngine, SearchResult};
use crate::types::{Section, Slide};

/// One visible line of the outline view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRow {
    /// Position in the section list.
    pub index: usize,
    /// Section title.
    pub title: String,
    /// First slide of the section.
    pub start_slide: u32,
    /// Nesting level from the metadata.
    pub level: u32,
    /// Depth in the rendered tree (roots are 0).
    pub depth: usize,
    /// Whether the section has children in the tree.
    pub has_children: bool,
    /// Whether the section is collapsed.
    pub collapsed: bool,
    /// This is the section reported as current.
    pub active: bool,
    /// The current slide falls inside this section's range.
    pub in_section: bool,
}

#[derive(Debug, Clone)]
struct SearchSurface {
    open: bool,
    query: String,
    results: Vec<SearchResult>,
    debouncer: Debouncer<String>,
}

/// A single-user viewing session over one deck.
#[derive(Debug, Clone)]
pub struct Viewer {
    deck: Deck,
    outline: Outline,
    collapse: CollapseState,
    index: SearchIndex,
    engine: QueryEngine,
    current: u32,
    search: SearchSurface,
}

impl Viewer {
    /// Open `deck` at slide 1.
    pub fn new(deck: Deck, config: &Config) -> Self {
        let outline = deck.outline();
        let collapse = CollapseState::with_level(&outline, config.outline.collapsed_level);
        let index = SearchIndex::build(&deck.slides, &outline);
        let mut viewer = Self {
            deck,
            outline,
            collapse,
            index,
            engine: QueryEngine::new(config.search.clone()),
            current: 1,
            search: SearchSurface {
                open: false,
                query: String::new(),
                results: Vec::new(),
                debouncer: Debouncer::new(config.search.debounce()),
            },
        };
        viewer.after_navigation();
        viewer
    }

    /// The loaded deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The deck's outline.
    pub const fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Current collapse flags.
    pub const fn collapse_state(&self) -> &CollapseState {
        &self.collapse
    }

    /// The per-slide search index.
    pub const fn search_index(&self) -> &SearchIndex {
        &self.index
    }

    /// The query engine used by the search surface.
    pub const fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Current slide number (1-based).
    pub const fn current_slide_number(&self) -> u32 {
        self.current
    }

    /// Current slide, if the deck has any.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.slide(self.current)
    }

    /// Index of the section reported as current.
    pub fn current_section_index(&self) -> Option<usize> {
        self.outline.section_index_containing(self.current)
    }

    /// Section reported as current.
    pub fn current_section(&self) -> Option<&Section> {
        self.outline.section_containing(self.current)
    }

    /// Whether a later slide exists.
    pub fn has_next(&self) -> bool {
        self.current < self.deck.slide_count()
    }

    /// Whether an earlier slide exists.
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Advance one slide. Returns false at the last slide.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        self.after_navigation();
        true
    }

    /// Go back one slide. Returns false at the first slide.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        self.after_navigation();
        true
    }

    /// Jump to `slide`, clamped into `1..=N`. Returns the slide selected.
    pub fn select(&mut self, slide: u32) -> u32 {
        let last = self.deck.slide_count().max(1);
        self.current = slide.clamp(1, last);
        self.after_navigation();
        self.current
    }

    /// Jump to the first slide of the section at `index`.
    pub fn select_section(&mut self, index: usize) -> Option<u32> {
        let start = self.outline.section(index)?.start_slide;
        Some(self.select(start))
    }

    /// Position in the deck as a percentage; 0 for decks of one slide or less.
    pub fn progress(&self) -> f64 {
        let total = self.deck.slide_count();
        if total <= 1 {
            return 0.0;
        }
        f64::from(self.current - 1) / f64::from(total - 1) * 100.0
    }

    /// Flip the collapse flag of the section at `index`.
    pub fn toggle_section(&mut self, index: usize) -> Option<bool> {
        self.collapse.toggle_at(&self.outline, index)
    }

    /// Expand every section.
    pub fn expand_all(&mut self) {
        self.collapse.expand_all();
    }

    /// Visible rows in display order. Children of collapsed sections are
    /// hidden; sections that have no place in the tree are never shown.
    pub fn outline_rows(&self) -> Vec<OutlineRow> {
        let mut rows = Vec::new();
        for &root in self.outline.roots() {
            self.push_rows(root, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, index: usize, depth: usize, rows: &mut Vec<OutlineRow>) {
        let Some(section) = self.outline.section(index) else {
            return;
        };
        let has_children = self.outline.has_children(index);
        let collapsed = self.collapse.is_collapsed_at(&self.outline, index);
        rows.push(OutlineRow {
            index,
            title: section.title.clone(),
            start_slide: section.start_slide,
            level: section.level,
            depth,
            has_children,
            collapsed,
            active: self.current_section_index() == Some(index),
            in_section: self
                .outline
                .section_range_of(index)
                .is_some_and(|range| range.contains(self.current)),
        });

        if has_children && !collapsed {
            for &child in self.outline.child_indices(index) {
                self.push_rows(child, depth + 1, rows);
            }
        }
    }

    fn after_navigation(&mut self) {
        debug!("current slide {}", self.current);
        self.collapse
            .ensure_expanded_for_slide(&self.outline, self.current);
    }

    // Search surface

    /// Whether the search surface is open.
    pub const fn is_search_open(&self) -> bool {
        self.search.open
    }

    /// Open the search surface.
    pub fn open_search(&mut self) {
        self.search.open = true;
    }

    /// Record a new query string and (re)start the debounce timer.
    pub fn update_query(&mut self, query: &str, now: Instant) -> Ticket {
        query.clone_into(&mut self.search.query);
        self.search.debouncer.submit(query.to_string(), now)
    }

    /// Query text as last typed.
    pub fn query(&self) -> &str {
        &self.search.query
    }

    /// Query whose debounce delay has elapsed, for hosts that run searches
    /// themselves. Pair with [`Self::apply_results`].
    pub fn take_due_query(&mut self, now: Instant) -> Option<(Ticket, String)> {
        self.search.debouncer.take_due(now)
    }

    /// Store `results` if `ticket` is still the latest query. Results for a
    /// superseded or cancelled query are dropped and `false` is returned.
    pub fn apply_results(&mut self, ticket: Ticket, results: Vec<SearchResult>) -> bool {
        match self.search.debouncer.accept(ticket, results) {
            Some(results) => {
                self.search.results = results;
                true
            },
            None => {
                debug!("discarding results for stale query generation {}", ticket.generation());
                false
            },
        }
    }

    /// Run the pending query if its delay has elapsed. Returns whether the
    /// visible results changed.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        let Some((ticket, query)) = self.take_due_query(now) else {
            return false;
        };
        let results = self.engine.search(&self.index, &query);
        self.apply_results(ticket, results)
    }

    /// Run `query` immediately without touching the search surface.
    pub fn search_now(&self, query: &str) -> Vec<SearchResult> {
        self.engine.search(&self.index, query)
    }

    /// Results of the latest accepted query.
    pub fn results(&self) -> &[SearchResult] {
        &self.search.results
    }

    /// Close the search surface, dropping the query, results and any pending
    /// timer.
    pub fn close_search(&mut self) {
        self.search.open = false;
        self.search.query.clear();
        self.search.results.clear();
        self.search.debouncer.cancel();
    }

    /// Navigate to a search hit and close the search surface.
    pub fn choose_result(&mut self, slide_id: u32) -> u32 {
        let selected = self.select(slide_id);
        self.close_search();
        selected
    }
}
