//! `lectern search`: query section titles and slide text.

use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use lectern_core::{Config, Deck, SearchResult, Viewer};
use serde::Serialize;
use tracing::debug;

use crate::args::OutputFormat;
use crate::output::{print_json, print_jsonl, render_segments};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit<'a> {
    #[serde(flatten)]
    result: &'a SearchResult,
    thumbnail: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'a> {
    query: &'a str,
    total_results: usize,
    results: Vec<SearchHit<'a>>,
}

/// Run one query through the viewer's debounced search surface.
pub fn execute(
    deck: Deck,
    config: &Config,
    query: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(limit) = limit {
        config.search.max_results = config.search.max_results.min(limit);
    }
    let mut viewer = Viewer::new(deck, &config);

    let started = Instant::now();
    viewer.open_search();
    viewer.update_query(query, started);
    viewer.poll_search(started + config.search.debounce());
    debug!(
        "query {:?} matched {} slides in {:?}",
        query,
        viewer.results().len(),
        started.elapsed()
    );

    let hits: Vec<SearchHit<'_>> = viewer
        .results()
        .iter()
        .map(|result| SearchHit {
            result,
            thumbnail: viewer
                .deck()
                .slide(result.slide_id)
                .map(|slide| slide.thumbnail.as_str()),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&SearchReport {
            query,
            total_results: hits.len(),
            results: hits,
        })?,
        OutputFormat::Jsonl => print_jsonl(&hits)?,
        OutputFormat::Text => print_text(&viewer, query, &hits),
    }
    Ok(())
}

fn print_text(viewer: &Viewer, query: &str, hits: &[SearchHit<'_>]) {
    let engine = viewer.engine();
    if !engine.accepts(query) {
        println!(
            "Type at least {} characters to search.",
            engine.config().min_query_chars
        );
        return;
    }
    if hits.is_empty() {
        println!("No results for '{}'.", query.trim());
        return;
    }

    for hit in hits {
        let result = hit.result;
        println!(
            "{:>4}  {}",
            result.slide_id.to_string().dimmed(),
            render_segments(&engine.highlight(&result.title, query))
        );
        if result.matched_text != result.title {
            println!(
                "      {}",
                render_segments(&engine.highlight(&result.matched_text, query))
            );
        }
    }
}
