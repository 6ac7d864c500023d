// crates/infra/src/source.rs
use std::io;

use text_metrics_ports::source::{SourceText, TextInput, TextSource};
use text_metrics_shared_kernel::Result;

use crate::persistence::FileReader;

/// Loads text from files, standard input, or inline strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemTextSource;

impl TextSource for FileSystemTextSource {
    fn load(&self, input: &TextInput) -> Result<SourceText> {
        let text = match input {
            TextInput::File(path) => FileReader::read_text(path)?,
            TextInput::Stdin => FileReader::read_stream(io::stdin().lock())?,
            TextInput::Inline(text) => text.clone(),
        };
        Ok(SourceText { label: input.label(), text })
    }
}
