// crates/ports/src/source.rs
use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use text_metrics_shared_kernel::Result;

/// Where a text snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextInput {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl TextInput {
    /// Label shown in reports.
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Inline(_) => "<text>".to_string(),
        }
    }

    /// Path to watch for changes, if the input lives on disk.
    pub fn watch_path(&self) -> Option<&PathBuf> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin | Self::Inline(_) => None,
        }
    }
}

impl fmt::Display for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// DTO carrying loaded text and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceText {
    pub label: String,
    pub text: String,
}

/// Port for loading text.
pub trait TextSource: Send + Sync {
    fn load(&self, input: &TextInput) -> Result<SourceText>;
}
