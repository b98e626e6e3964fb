//! `lectern outline`: the sidebar as it would render for a given slide.

use anyhow::Result;
use lectern_core::{OutlineRow, Viewer};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::output::{print_json, print_jsonl, render_outline_row};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutlineReport<'a> {
    current_slide: u32,
    total_slides: u32,
    collapsed: usize,
    rows: &'a [OutlineRow],
}

pub fn execute(
    viewer: &mut Viewer,
    slide: Option<u32>,
    expand_all: bool,
    format: OutputFormat,
) -> Result<()> {
    if let Some(slide) = slide {
        viewer.select(slide);
    }
    if expand_all {
        viewer.expand_all();
    }
    let rows = viewer.outline_rows();

    match format {
        OutputFormat::Json => print_json(&OutlineReport {
            current_slide: viewer.current_slide_number(),
            total_slides: viewer.deck().slide_count(),
            collapsed: viewer.collapse_state().collapsed_count(),
            rows: &rows,
        })?,
        OutputFormat::Jsonl => print_jsonl(&rows)?,
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("No sections.");
            }
            for row in &rows {
                println!("{}", render_outline_row(row));
            }
        },
    }
    Ok(())
}
