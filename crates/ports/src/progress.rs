// crates/ports/src/progress.rs
use text_metrics_shared_kernel::{Result, TextMetricsError};

pub trait ProgressSink: Send + Sync {
    fn on_document(&self, label: &str) -> Result<()>;
    fn on_skipped(&self, label: &str, error: &TextMetricsError) -> Result<()>;
    fn on_complete(&self, analysed: usize) -> Result<()>;
}
