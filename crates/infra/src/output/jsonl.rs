// crates/infra/src/output/jsonl.rs
use std::io::Write;

use text_metrics_domain::model::{DocumentReport, Summary};
use text_metrics_shared_kernel::Result;

use super::VERSION;

/// One line per document, then a summary line.
pub(super) fn write(reports: &[DocumentReport], out: &mut dyn Write) -> Result<()> {
    for report in reports {
        let item = serde_json::json!({
            "type": "document",
            "source": &report.source,
            "metrics": &report.metrics,
        });
        serde_json::to_writer(&mut *out, &item)?;
        writeln!(out)?;
    }
    let summary = Summary::from_reports(reports);
    let total = serde_json::json!({
        "type": "summary",
        "version": VERSION,
        "documents": summary.documents,
        "words": summary.words,
        "characters": summary.characters,
        "sentences": summary.sentences,
    });
    serde_json::to_writer(&mut *out, &total)?;
    writeln!(out)?;
    Ok(())
}
