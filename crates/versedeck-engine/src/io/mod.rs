use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::normalize_newlines;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),
}

/// Read a document and return its text with `\n` line endings
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(IoError::Io)?;
    let text = String::from_utf8(bytes).map_err(|_| IoError::InvalidUtf8(path.to_path_buf()))?;
    Ok(normalize_newlines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_document_success() {
        // Given a document with mixed line endings
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "talk.md", b"# Title\r\n\r\nBody\rMore");

        // When reading it
        let content = read_document(&path).unwrap();

        // Then line endings are normalised
        assert_eq!(content, "# Title\n\nBody\nMore");
    }

    #[test]
    fn test_read_document_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_document(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_document_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.md", &[0x23, 0x20, 0xff, 0xfe]);
        let result = read_document(&path);
        assert!(matches!(result, Err(IoError::InvalidUtf8(_))));
        assert!(result.unwrap_err().to_string().contains("bad.md"));
    }
}
