use log::{debug, warn};
use text_metrics_domain::{model::DocumentReport, options::AnalysisOptions};
use text_metrics_ports::{
    presenter::ReportPresenter,
    progress::ProgressSink,
    source::{SourceText, TextInput, TextSource},
};
use text_metrics_shared_kernel::{ApplicationError, Result, TextMetricsError};

use crate::dto::{AnalysisOutcome, AnalysisRequest, SkippedInput};

pub struct AnalyzeInputs<'a> {
    source: &'a dyn TextSource,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> AnalyzeInputs<'a> {
    pub fn new(source: &'a dyn TextSource) -> Self {
        Self { source, progress: None }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Load every input and compute its metrics.
    ///
    /// # Errors
    ///
    /// Returns an error when the options are invalid, or when an input cannot be
    /// loaded and `request.strict` is set.
    pub fn execute(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome> {
        request.options.validate()?;

        let (texts, skipped) = self.load_all(request)?;
        let reports = analyze_all(texts, &request.options, request.jobs)?;

        if let Some(progress) = self.progress {
            progress.on_complete(reports.len())?;
        }
        Ok(AnalysisOutcome { reports, skipped })
    }

    /// [`execute`](Self::execute) then hand the reports to `presenter`.
    ///
    /// # Errors
    ///
    /// Propagates analysis errors and wraps presenter failures in
    /// [`ApplicationError::PresentationFailed`].
    pub fn run(
        &self,
        request: &AnalysisRequest,
        presenter: &dyn ReportPresenter,
    ) -> Result<AnalysisOutcome> {
        let outcome = self.execute(request)?;
        presenter.present(&outcome.reports).map_err(|err| ApplicationError::PresentationFailed {
            reason: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(outcome)
    }

    fn load_all(&self, request: &AnalysisRequest) -> Result<(Vec<SourceText>, Vec<SkippedInput>)> {
        let mut texts = Vec::with_capacity(request.inputs.len());
        let mut skipped = Vec::new();

        for input in &request.inputs {
            match self.load_one(input) {
                Ok(text) => texts.push(text),
                Err(err) if request.strict => return Err(err),
                Err(err) => {
                    warn!("skipping {input}: {err}");
                    if let Some(progress) = self.progress {
                        progress.on_skipped(&input.label(), &err)?;
                    }
                    skipped.push(SkippedInput { label: input.label(), reason: err.to_string() });
                }
            }
        }
        Ok((texts, skipped))
    }

    fn load_one(&self, input: &TextInput) -> Result<SourceText> {
        let text = self.source.load(input).map_err(|err| {
            TextMetricsError::from(ApplicationError::SourceFailed {
                source_label: input.label(),
                reason: err.to_string(),
                source: Some(Box::new(err)),
            })
        })?;
        if let Some(progress) = self.progress {
            progress.on_document(&text.label)?;
        }
        Ok(text)
    }
}

fn analyze_one(text: SourceText, options: &AnalysisOptions) -> DocumentReport {
    debug!("analysing {} ({} bytes)", text.label, text.text.len());
    DocumentReport::analyze(text.label, &text.text, options)
}

#[cfg(feature = "parallel")]
fn analyze_all(
    texts: Vec<SourceText>,
    options: &AnalysisOptions,
    jobs: usize,
) -> Result<Vec<DocumentReport>> {
    use rayon::prelude::*;
    use text_metrics_shared_kernel::InfrastructureError;

    if texts.len() < 2 || jobs <= 1 {
        return Ok(analyze_sequential(texts, options));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

    // `collect` on an indexed parallel iterator keeps input order.
    Ok(pool.install(|| texts.into_par_iter().map(|text| analyze_one(text, options)).collect()))
}

#[cfg(not(feature = "parallel"))]
fn analyze_all(
    texts: Vec<SourceText>,
    options: &AnalysisOptions,
    jobs: usize,
) -> Result<Vec<DocumentReport>> {
    let _ = jobs;
    Ok(analyze_sequential(texts, options))
}

fn analyze_sequential(texts: Vec<SourceText>, options: &AnalysisOptions) -> Vec<DocumentReport> {
    texts.into_iter().map(|text| analyze_one(text, options)).collect()
}
