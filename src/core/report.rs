use crate::core::batch::DownloadOutcome;
use crate::core::extensions::ExtensionRecord;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

pub const SUCCESS_GLYPH: &str = "✅";
pub const FAILURE_GLYPH: &str = "❌";

/// Aggregate counts over a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

pub fn summarize(outcomes: &[DownloadOutcome]) -> BatchSummary {
    let total = outcomes.len();
    let succeeded = outcomes.iter().filter(|o| o.success).count();
    BatchSummary {
        total,
        succeeded,
        failed: total - succeeded,
    }
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

/// Installed extensions, one row each, under a heading with the count.
pub fn extension_table(records: &[ExtensionRecord]) -> String {
    let mut table = new_table(&["Name", "Version", "Publisher"]);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(&record.version),
            Cell::new(&record.publisher),
        ]);
    }

    format!("Installed extensions ({})\n{table}", records.len())
}

/// Per-item download results followed by the success/failure counts.
pub fn status_table(outcomes: &[DownloadOutcome]) -> String {
    let mut table = new_table(&["Name", "Status", "Time (ms)"]);
    for outcome in outcomes {
        let glyph = if outcome.success {
            SUCCESS_GLYPH
        } else {
            FAILURE_GLYPH
        };
        table.add_row(vec![
            Cell::new(&outcome.name),
            Cell::new(glyph).set_alignment(CellAlignment::Center),
            Cell::new(outcome.elapsed_millis).set_alignment(CellAlignment::Right),
        ]);
    }

    let summary = summarize(outcomes);
    format!(
        "{table}\nSucceeded: {}, Failed: {}",
        summary.succeeded, summary.failed
    )
}
