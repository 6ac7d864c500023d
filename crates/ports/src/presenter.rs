// crates/ports/src/presenter.rs
use text_metrics_domain::model::DocumentReport;
use text_metrics_shared_kernel::Result;

/// Port for rendering analysed documents.
pub trait ReportPresenter: Send + Sync {
    fn present(&self, reports: &[DocumentReport]) -> Result<()>;
}
