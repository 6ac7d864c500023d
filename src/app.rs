// src/app.rs
use anyhow::{Context, Result};
use log::info;
use text_metrics_infra::{
    output::OutputEmitter, progress::LogProgress, source::FileSystemTextSource, watch::WatchService,
};
use text_metrics_usecase::{AnalysisOutcome, AnalysisRequest, AnalyzeInputs};

use crate::config::Config;

/// Run one analysis, then keep re-running on file changes when watching.
pub fn run(config: &Config) -> Result<()> {
    let source = FileSystemTextSource;
    let progress = LogProgress;
    let presenter = OutputEmitter::new(config.format)
        .with_limits(config.limits)
        .with_target(config.output.clone());
    let usecase = AnalyzeInputs::new(&source).with_progress(&progress);

    let request = AnalysisRequest {
        inputs: config.inputs.clone(),
        options: config.options,
        strict: config.strict,
        jobs: config.jobs,
    };

    let run_once = || -> text_metrics_shared_kernel::Result<AnalysisOutcome> {
        usecase.run(&request, &presenter)
    };

    let outcome = run_once().context("failed to analyse inputs")?;
    report_skipped(&outcome);

    let Some(interval) = config.watch else {
        return Ok(());
    };

    let paths = config.watch_paths();
    WatchService::run(&paths, interval, || {
        info!("change detected, recomputing");
        let outcome = run_once()?;
        report_skipped(&outcome);
        Ok(())
    })
    .context("watch failed")
}

fn report_skipped(outcome: &AnalysisOutcome) {
    if !outcome.skipped.is_empty() {
        info!("{} input(s) skipped", outcome.skipped.len());
    }
}
