// crates/shared-kernel/tests/error_context.rs
use std::io;

use text_metrics_shared_kernel::{ErrorContext, InfrastructureError, TextMetricsError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(TextMetricsError::from)
        .context("reading input")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading input"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let err = Err::<(), _>(InfrastructureError::StdinRead { source: io::Error::other("closed") })
        .with_context(|| "loading stdin".to_string())
        .unwrap_err();

    assert!(matches!(err, TextMetricsError::Context { .. }));
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().starts_with("loading stdin:"));
}
