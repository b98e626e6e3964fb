//! `lectern locate`: which section a slide belongs to.

use anyhow::Result;
use colored::Colorize;
use lectern_core::{Section, Slide, SlideRange, Viewer};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::output::{print_json, print_jsonl};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Location<'a> {
    slide: u32,
    total_slides: u32,
    progress: f64,
    section: Option<&'a Section>,
    range: Option<SlideRange>,
    path: Vec<&'a str>,
    assets: Option<&'a Slide>,
}

pub fn execute(viewer: &mut Viewer, slide: u32, format: OutputFormat) -> Result<()> {
    let selected = viewer.select(slide);
    let outline = viewer.outline();
    let index = viewer.current_section_index();

    let location = Location {
        slide: selected,
        total_slides: viewer.deck().slide_count(),
        progress: viewer.progress(),
        section: viewer.current_section(),
        range: index.and_then(|idx| outline.section_range_of(idx)),
        path: index
            .map(|idx| outline.path_to(idx))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|idx| outline.section(idx).map(|s| s.title.as_str()))
            .collect(),
        assets: viewer.current_slide(),
    };

    match format {
        OutputFormat::Json => print_json(&location)?,
        OutputFormat::Jsonl => print_jsonl([&location])?,
        OutputFormat::Text => {
            println!(
                "Slide {}/{} ({:.0}%)",
                location.slide, location.total_slides, location.progress
            );
            if location.path.is_empty() {
                println!("Section: {}", "(none)".dimmed());
            } else {
                let range = location
                    .range
                    .map(|r| format!(" (slides {r})"))
                    .unwrap_or_default();
                println!(
                    "Section: {}{}",
                    location.path.join(" › ").bold(),
                    range.dimmed()
                );
            }
        },
    }
    Ok(())
}
