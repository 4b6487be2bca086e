use crate::application::dto::{CodecRequest, CodecResponse, DocumentOutcome};
use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;

/// ProcessDocumentsUseCase - decodes a batch of SBOM documents
///
/// A document that fails to decode is recorded in the response and the batch
/// continues. A document that cannot be read at all aborts the run.
///
/// # Type Parameters
/// * `R` - DocumentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ProcessDocumentsUseCase<R, PR> {
    document_reader: R,
    progress_reporter: PR,
}

impl<R, PR> ProcessDocumentsUseCase<R, PR>
where
    R: DocumentReader,
    PR: ProgressReporter,
{
    pub fn new(document_reader: R, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if a source cannot be read. Decode failures are not
    /// errors at this level.
    pub fn execute(&self, request: CodecRequest) -> Result<CodecResponse> {
        let decoder = request.decoder();
        let total = request.sources.len();

        self.progress_reporter
            .report(&format!("📖 Processing {} document(s)...", total));

        let mut outcomes = Vec::with_capacity(total);
        for (index, source) in request.sources.into_iter().enumerate() {
            let bytes = self
                .document_reader
                .read_document(&source)
                .with_context(|| format!("Failed to load document {}", source))?;

            let result = decoder.decode_record(request.kind, &bytes);
            if let Err(e) = &result {
                self.progress_reporter
                    .report_error(&format!("❌ {}: {}", source, e));
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(&source.to_string()));
            outcomes.push(DocumentOutcome::new(source, result));
        }

        let response = CodecResponse::new(request.mode, outcomes);
        self.progress_reporter.report_completion(&format!(
            "✅ {} decoded, {} failed",
            response.decoded_count(),
            response.failed_count()
        ));

        Ok(response)
    }
}
