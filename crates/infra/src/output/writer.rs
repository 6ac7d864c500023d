// crates/infra/src/output/writer.rs
use std::{
    io::{self, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
};

use text_metrics_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Destination for a rendered report.
///
/// File output is buffered in memory and committed atomically by [`finish`](Self::finish),
/// so a watch cycle never leaves a half-written report behind.
pub enum OutputWriter {
    Stdout(BufWriter<StdoutLock<'static>>),
    File { path: PathBuf, buffer: Vec<u8> },
}

impl OutputWriter {
    pub fn create(target: Option<&Path>) -> Self {
        match target {
            Some(path) => Self::File { path: path.to_path_buf(), buffer: Vec::new() },
            None => Self::Stdout(BufWriter::new(io::stdout().lock())),
        }
    }

    /// Flush stdout or commit the buffered file.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::FileWrite`] when the file cannot be replaced.
    pub fn finish(self) -> Result<()> {
        match self {
            Self::Stdout(mut out) => out.flush().map_err(Into::into),
            Self::File { path, buffer } => FileWriter::atomic_write(&path, &buffer)
                .map_err(|source| InfrastructureError::FileWrite { path, source }.into()),
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File { buffer, .. } => buffer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_output_is_written_on_finish_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut writer = OutputWriter::create(Some(&path));
        writer.write_all(b"hello").unwrap();
        assert!(!path.exists());
        writer.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn unwritable_target_maps_to_file_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("report.txt");
        let err = OutputWriter::create(Some(&path)).finish().unwrap_err();
        assert!(err.to_string().contains("report.txt"));
    }
}
