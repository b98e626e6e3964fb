//! `lectern index`: dump the per-slide search index.

use anyhow::Result;
use colored::Colorize;
use lectern_core::Deck;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::output::{print_json, print_jsonl};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexLine<'a> {
    slide_id: u32,
    title: &'a str,
    text: &'a str,
}

pub fn execute(deck: &Deck, format: OutputFormat) -> Result<()> {
    let index = deck.search_index();

    match format {
        OutputFormat::Json => print_json(&index)?,
        OutputFormat::Jsonl => print_jsonl(index.iter().map(|(slide_id, entry)| IndexLine {
            slide_id,
            title: &entry.title,
            text: &entry.text,
        }))?,
        OutputFormat::Text => {
            for (slide_id, entry) in index.iter() {
                println!("{slide_id:>4}  {}  {}", entry.title, entry.text.dimmed());
            }
        },
    }
    Ok(())
}
