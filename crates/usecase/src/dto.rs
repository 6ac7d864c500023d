use text_metrics_domain::{model::DocumentReport, options::AnalysisOptions};
use text_metrics_ports::source::TextInput;

/// Input parameters for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub inputs: Vec<TextInput>,
    pub options: AnalysisOptions,
    /// Abort on the first input that cannot be loaded.
    pub strict: bool,
    /// Worker threads used when several documents are analysed.
    pub jobs: usize,
}

impl AnalysisRequest {
    pub fn new(inputs: Vec<TextInput>, options: AnalysisOptions) -> Self {
        Self { inputs, options, strict: false, jobs: 1 }
    }
}

/// An input that was skipped because it could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedInput {
    pub label: String,
    pub reason: String,
}

/// Result of an analysis run, in input order.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOutcome {
    pub reports: Vec<DocumentReport>,
    pub skipped: Vec<SkippedInput>,
}
