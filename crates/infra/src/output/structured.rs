// crates/infra/src/output/structured.rs
use std::io::Write;

use chrono::Local;
use serde::Serialize;
use text_metrics_domain::{analytics::Metrics, model::DocumentReport};
use text_metrics_shared_kernel::Result;

use super::VERSION;

#[derive(Debug, Serialize)]
pub(super) struct Envelope<'a> {
    pub version: &'static str,
    pub generated_at: String,
    pub documents: Vec<DocumentView<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct DocumentView<'a> {
    pub source: &'a str,
    pub metrics: &'a Metrics,
}

impl<'a> Envelope<'a> {
    pub(super) fn build(reports: &'a [DocumentReport]) -> Self {
        Self {
            version: VERSION,
            generated_at: Local::now().to_rfc3339(),
            documents: reports
                .iter()
                .map(|report| DocumentView { source: &report.source, metrics: &report.metrics })
                .collect(),
        }
    }
}

pub(super) fn write_json(reports: &[DocumentReport], out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Envelope::build(reports))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
pub(super) fn write_yaml(reports: &[DocumentReport], out: &mut dyn Write) -> Result<()> {
    let yaml = serde_yaml::to_string(&Envelope::build(reports))?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
pub(super) fn write_yaml(_reports: &[DocumentReport], _out: &mut dyn Write) -> Result<()> {
    Err(text_metrics_shared_kernel::InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "yaml feature disabled at compile time".to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::super::{DisplayLimits, OutputFormat, tests::render};

    #[test]
    fn json_envelope_has_version_timestamp_and_documents() {
        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, DisplayLimits::default())).unwrap();
        assert_eq!(json["version"], super::VERSION);
        assert!(json["generated_at"].as_str().is_some_and(|s| !s.is_empty()));
        let docs = json["documents"].as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["source"], "a.txt");
        assert_eq!(docs[0]["metrics"]["words"], 6);
        assert_eq!(docs[0]["metrics"]["top_words"][0]["word"], "the");
        assert_eq!(docs[1]["metrics"]["sentiment"]["label"], "Positive");
    }

    #[test]
    fn json_keeps_full_engine_output_regardless_of_display_limits() {
        let limits = DisplayLimits { duplicates: 0, characters: 0 };
        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, limits)).unwrap();
        assert_eq!(json["documents"][0]["metrics"]["duplicate_words"].as_array().unwrap().len(), 2);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_envelope() {
        let yaml = render(OutputFormat::Yaml, DisplayLimits::default());
        assert!(yaml.contains("generated_at:"));
        assert!(yaml.contains("source: a.txt"));
        assert!(yaml.contains("reading_level:"));
    }
}
