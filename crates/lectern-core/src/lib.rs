//! # lectern-core
//!
//! Core of the lectern slide viewer: the in-memory outline and search index
//! that sit behind a presentation's navigation sidebar and search box.
//!
//! A deck is a list of slides plus a flat list of sections (title, nesting
//! level, starting slide). From that list this crate derives:
//!
//! - **Outline**: a collapsible tree with per-section slide ranges and a
//!   "which section is slide N in" lookup ([`Outline`])
//! - **Collapse state**: which sections are folded, with defaults and
//!   auto-expansion on navigation ([`CollapseState`])
//! - **Search index**: per-slide searchable text ([`SearchIndex`])
//! - **Query engine**: case-insensitive substring search with snippets and
//!   highlight segments ([`QueryEngine`])
//!
//! [`Viewer`] ties these together for a host UI, and [`Deck`] handles the
//! metadata document they are built from.
//!
//! ## Quick Start
//!
//! ```rust
//! use lectern_core::{AssetLayout, Config, Deck, Section, Viewer};
//!
//! let deck = Deck::generate(
//!     6,
//!     vec![
//!         Section::new("Intro", 1, 0),
//!         Section::new("Details", 2, 1),
//!         Section::new("Wrap-up", 5, 0),
//!     ],
//!     &AssetLayout::default(),
//! );
//!
//! let mut viewer = Viewer::new(deck, &Config::default());
//! viewer.select(3);
//! assert_eq!(viewer.current_section().map(|s| s.title.as_str()), Some("Details"));
//!
//! let hits = viewer.search_now("wrap");
//! assert_eq!(hits.iter().map(|h| h.slide_id).collect::<Vec<_>>(), vec![5, 6]);
//! ```
//!
//! ## Error Handling
//!
//! Navigation and search never fail; unknown indices and odd slide numbers
//! produce empty results or `None`. Only loading metadata and configuration
//! returns [`Result<T, Error>`].

/// Collapse state tracking for outline sections
pub mod collapse;
/// Configuration loading and defaults
pub mod config;
/// Debounced, cancellable request scheduling
pub mod debounce;
/// Deck metadata loading, generation and diagnostics
pub mod deck;
/// Error types and result aliases
pub mod error;
/// Per-slide search index
pub mod index;
/// Outline tree derived from flat sections
pub mod outline;
/// Substring query engine and highlighting
pub mod query;
/// Core data types
pub mod types;
/// Viewer session driving navigation and search
pub mod viewer;

pub use collapse::CollapseState;
pub use config::{AssetLayout, Config, DeckConfig, OutlineConfig, SearchConfig};
pub use debounce::{Debouncer, Ticket};
pub use deck::{Deck, FALLBACK_SECTION_TITLE};
pub use error::{Error, Result};
pub use index::{IndexEntry, SearchIndex, UNTITLED};
pub use outline::{DEFAULT_EXPANDABLE_LEVEL, Outline, OutlineNode};
pub use query::{QueryEngine, SearchResult, Segment, highlight};
pub use types::*;
pub use viewer::{OutlineRow, Viewer};
