//! Terminal text rendering.

use colored::Colorize;
use lectern_core::{DiagnosticSeverity, OutlineRow, Segment};

const INDENT: &str = "  ";

/// Join highlight segments, emphasising the matched ones.
pub fn render_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.normal().to_string(),
            Segment::Matched(text) => text.yellow().bold().to_string(),
        })
        .collect()
}

/// One outline line: indentation, a disclosure marker, the title and its
/// start slide.
pub fn render_outline_row(row: &OutlineRow) -> String {
    let marker = match (row.has_children, row.collapsed) {
        (false, _) => " ",
        (true, true) => "▸",
        (true, false) => "▾",
    };
    let title = if row.active {
        row.title.green().bold().to_string()
    } else if row.in_section {
        row.title.bold().to_string()
    } else {
        row.title.clone()
    };
    let pointer = if row.active { "›" } else { " " };

    format!(
        "{pointer} {}{marker} {title} {}",
        INDENT.repeat(row.depth),
        format!("({})", row.start_slide).dimmed()
    )
}

pub fn severity_label(severity: DiagnosticSeverity) -> String {
    match severity {
        DiagnosticSeverity::Error => "error".red().bold().to_string(),
        DiagnosticSeverity::Warn => "warn".yellow().bold().to_string(),
        DiagnosticSeverity::Info => "info".blue().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(depth: usize, has_children: bool, collapsed: bool, active: bool) -> OutlineRow {
        OutlineRow {
            index: 0,
            title: "Topic".to_string(),
            start_slide: 4,
            level: 1,
            depth,
            has_children,
            collapsed,
            active,
            in_section: active,
        }
    }

    #[test]
    fn test_segments_keep_text_without_color() {
        colored::control::set_override(false);
        let rendered = render_segments(&[
            Segment::Plain("Slide 4 ".to_string()),
            Segment::Matched("Topic".to_string()),
            Segment::Plain("A".to_string()),
        ]);
        assert_eq!(rendered, "Slide 4 TopicA");
    }

    #[test]
    fn test_outline_row_markers() {
        colored::control::set_override(false);
        assert_eq!(render_outline_row(&row(1, true, true, false)), "    ▸ Topic (4)");
        assert_eq!(render_outline_row(&row(0, true, false, true)), "› ▾ Topic (4)");
        assert_eq!(render_outline_row(&row(2, false, false, false)), "        Topic (4)");
    }
}
