use crate::application::dto::DocumentSource;
use crate::shared::Result;

/// DocumentReader port for loading raw document bytes
///
/// Decoding is not the reader's concern; it hands back the bytes exactly as stored.
pub trait DocumentReader {
    /// Reads the whole document behind `source`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or cannot be read
    /// - The source fails a security check (symlink, oversized file)
    fn read_document(&self, source: &DocumentSource) -> Result<Vec<u8>>;
}
