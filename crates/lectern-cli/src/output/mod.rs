//! Output rendering shared by commands.

mod text;

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

pub use text::{render_outline_row, render_segments, severity_label};

/// Pretty-print one JSON document to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Write each item as one compact JSON line.
pub fn print_jsonl<T, I>(items: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut stdout = io::stdout().lock();
    for item in items {
        serde_json::to_writer(&mut stdout, &item)?;
        writeln!(stdout)?;
    }
    Ok(())
}
