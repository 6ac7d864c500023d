// crates/infra/src/progress.rs
use log::{debug, info};
use text_metrics_ports::progress::ProgressSink;
use text_metrics_shared_kernel::{Result, TextMetricsError};

/// Reports analysis progress through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_document(&self, label: &str) -> Result<()> {
        debug!("loaded {label}");
        Ok(())
    }

    fn on_skipped(&self, label: &str, error: &TextMetricsError) -> Result<()> {
        debug!("{label} skipped: {error:?}");
        Ok(())
    }

    fn on_complete(&self, analysed: usize) -> Result<()> {
        info!("analysed {analysed} document(s)");
        Ok(())
    }
}
