// crates/infra/src/output.rs
//! Report rendering for every supported output format.

mod jsonl;
mod markdown;
mod structured;
mod table;
mod writer;

use std::{fmt, io::Write, path::PathBuf, str::FromStr};

use text_metrics_domain::{
    analytics::{CharFrequency, WordFrequency},
    model::DocumentReport,
};
use text_metrics_ports::presenter::ReportPresenter;
use text_metrics_shared_kernel::{ErrorContext, PresentationError, Result};

pub use writer::OutputWriter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Md,
    Jsonl,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Md => "md",
            Self::Jsonl => "jsonl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PresentationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "md" | "markdown" => Ok(Self::Md),
            "jsonl" => Ok(Self::Jsonl),
            other => Err(PresentationError::InvalidValue {
                flag: "--format".to_string(),
                value: other.to_string(),
                reason: "expected table, json, yaml, md or jsonl".to_string(),
            }),
        }
    }
}

/// 表示時の件数制限 (エンジンの出力は変えない)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub duplicates: usize,
    pub characters: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self { duplicates: 20, characters: 50 }
    }
}

impl DisplayLimits {
    fn duplicates<'a>(&self, words: &'a [WordFrequency]) -> &'a [WordFrequency] {
        &words[..words.len().min(self.duplicates)]
    }

    fn characters<'a>(&self, chars: &'a [CharFrequency]) -> &'a [CharFrequency] {
        &chars[..chars.len().min(self.characters)]
    }
}

/// Renders reports in the configured format and writes them to stdout or a file.
#[derive(Debug, Clone, Default)]
pub struct OutputEmitter {
    format: OutputFormat,
    limits: DisplayLimits,
    target: Option<PathBuf>,
}

impl OutputEmitter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format, ..Self::default() }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: DisplayLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Option<PathBuf>) -> Self {
        self.target = target;
        self
    }

    /// Render into any writer.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O or serialization failure.
    pub fn render(&self, reports: &[DocumentReport], out: &mut dyn Write) -> Result<()> {
        match self.format {
            OutputFormat::Table => table::write(reports, &self.limits, out),
            OutputFormat::Json => structured::write_json(reports, out),
            OutputFormat::Yaml => structured::write_yaml(reports, out),
            OutputFormat::Md => markdown::write(reports, &self.limits, out),
            OutputFormat::Jsonl => jsonl::write(reports, out),
        }
    }
}

impl ReportPresenter for OutputEmitter {
    fn present(&self, reports: &[DocumentReport]) -> Result<()> {
        let mut writer = OutputWriter::create(self.target.as_deref());
        self.render(reports, &mut writer)
            .with_context(|| format!("rendering {} report", self.format))?;
        writer.finish()
    }
}

fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

fn format_ease(ease: Option<u32>) -> String {
    ease.map_or_else(|| "-".to_string(), |score| score.to_string())
}
