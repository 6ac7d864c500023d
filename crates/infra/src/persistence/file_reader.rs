// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use log::warn;
use text_metrics_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading text with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read a file as text. Invalid UTF-8 sequences are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::FileRead`] when the file cannot be opened or read.
    pub fn read_text(path: &Path) -> InfraResult<String> {
        let bytes = Self::read_to_end(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(decode(bytes, &path.display().to_string()))
    }

    /// Drain a reader (stdin in practice) as text.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::StdinRead`] on I/O failure.
    pub fn read_stream<R: Read>(mut reader: R) -> InfraResult<String> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(|source| InfrastructureError::StdinRead { source })?;
        Ok(decode(buf, "<stdin>"))
    }
}

fn decode(bytes: Vec<u8>, label: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!("{label}: invalid UTF-8, replacing undecodable bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_utf8_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "héllo wörld").unwrap();
        assert_eq!(FileReader::read_text(file.path()).unwrap(), "héllo wörld");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = FileReader::read_stream(&[b'o', b'k', 0xFF][..]).unwrap();
        assert_eq!(text, "ok\u{FFFD}");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");
        let err = FileReader::read_text(&missing).unwrap_err();
        assert!(matches!(err, InfrastructureError::FileRead { ref path, .. } if path == &missing));
    }
}
