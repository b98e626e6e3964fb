//! Reusable argument groups shared across commands.

mod output;

pub use output::{OutputArgs, OutputFormat};
