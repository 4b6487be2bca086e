use crate::application::dto::DocumentSource;
use crate::ports::outbound::DocumentReader;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading documents from files or stdin
///
/// Files are checked before reading: symlinks are rejected, only regular
/// files are accepted and the size is capped.
pub struct FileSystemReader {
    max_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }

    /// Reader with a custom size cap in bytes
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(SbomError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the path, or pass '-' to read the document from standard input"
                    .to_string(),
            }
            .into());
        }

        validate_input_file(path, self.max_size)?;

        fs::read(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_stdin(&self) -> Result<Vec<u8>> {
        self.read_capped(io::stdin().lock(), Path::new("<stdin>"))
    }

    /// Reads a stream that has no size known up front, failing past the cap.
    fn read_capped(&self, stream: impl Read, label: &Path) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        // One byte past the cap is enough to detect an oversized document.
        stream
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut buffer)
            .map_err(|e| SbomError::FileReadError {
                path: label.to_path_buf(),
                details: e.to_string(),
            })?;

        validate_file_size(buffer.len() as u64, label, self.max_size)?;
        Ok(buffer)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, source: &DocumentSource) -> Result<Vec<u8>> {
        match source {
            DocumentSource::File(path) => self.read_file(path),
            DocumentSource::Stdin => self.read_stdin(),
        }
    }
}
