use crate::application::dto::CodecResponse;
use crate::shared::Result;

/// DocumentFormatter port for rendering the outcome of a processing run
///
/// Implementations exist for re-encoded JSON and for a Markdown report.
pub trait DocumentFormatter {
    /// Formats the processed documents
    ///
    /// # Errors
    /// Returns an error if a record cannot be encoded
    fn format(&self, response: &CodecResponse) -> Result<String>;
}
