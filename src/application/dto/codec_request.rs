use super::DocumentSource;
use crate::document_model::codec::{Decoder, RecordKind, UnknownFields};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// What a processing run is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Decode and report
    #[default]
    Check,
    /// Decode and re-encode in canonical form
    Normalize,
}

/// CodecRequest - Internal request DTO for the document processing use case
#[derive(Debug, Clone)]
pub struct CodecRequest {
    /// Documents to process, in output order
    pub sources: Vec<DocumentSource>,
    /// Forced record kind; `None` means detect per document
    pub kind: Option<RecordKind>,
    /// Unknown-field policy override; `None` keeps each record's own policy
    pub unknown_fields: Option<UnknownFields>,
    pub mode: ProcessingMode,
}

impl CodecRequest {
    pub fn builder() -> CodecRequestBuilder {
        CodecRequestBuilder::default()
    }

    /// Decoder configured for this request
    pub fn decoder(&self) -> Decoder {
        match self.unknown_fields {
            Some(policy) => Decoder::new().with_unknown_fields(policy),
            None => Decoder::new(),
        }
    }
}

/// Builder for [`CodecRequest`]
#[derive(Debug, Default)]
pub struct CodecRequestBuilder {
    sources: Vec<DocumentSource>,
    kind: Option<RecordKind>,
    unknown_fields: Option<UnknownFields>,
    mode: ProcessingMode,
}

impl CodecRequestBuilder {
    pub fn source(mut self, source: DocumentSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn sources(mut self, sources: impl IntoIterator<Item = DocumentSource>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn kind(mut self, kind: Option<RecordKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn unknown_fields(mut self, policy: Option<UnknownFields>) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validates and builds the request.
    ///
    /// # Errors
    /// Returns `SbomError::Validation` if no source was given or stdin is
    /// listed more than once.
    pub fn build(self) -> Result<CodecRequest> {
        if self.sources.is_empty() {
            return Err(SbomError::Validation {
                message: "At least one input document is required".to_string(),
            }
            .into());
        }

        let stdin_count = self
            .sources
            .iter()
            .filter(|s| matches!(s, DocumentSource::Stdin))
            .count();
        if stdin_count > 1 {
            return Err(SbomError::Validation {
                message: "Standard input ('-') can only be read once".to_string(),
            }
            .into());
        }

        Ok(CodecRequest {
            sources: self.sources,
            kind: self.kind,
            unknown_fields: self.unknown_fields,
            mode: self.mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_builder_defaults() {
        let request = CodecRequest::builder()
            .source(DocumentSource::File(PathBuf::from("a.json")))
            .build()
            .unwrap();

        assert_eq!(request.sources.len(), 1);
        assert!(request.kind.is_none());
        assert!(request.unknown_fields.is_none());
        assert_eq!(request.mode, ProcessingMode::Check);
        assert_eq!(request.decoder(), Decoder::new());
    }

    #[test]
    fn test_builder_all_options() {
        let request = CodecRequest::builder()
            .sources(vec![
                DocumentSource::File(PathBuf::from("a.json")),
                DocumentSource::Stdin,
            ])
            .kind(Some(RecordKind::Service))
            .unknown_fields(Some(UnknownFields::Deny))
            .mode(ProcessingMode::Normalize)
            .build()
            .unwrap();

        assert_eq!(request.sources.len(), 2);
        assert_eq!(request.kind, Some(RecordKind::Service));
        assert_eq!(request.mode, ProcessingMode::Normalize);
        assert_eq!(
            request.decoder().policy_for(RecordKind::Service),
            UnknownFields::Deny
        );
    }

    #[test]
    fn test_builder_requires_source() {
        let result = CodecRequest::builder().build();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("At least one input document"));
    }

    #[test]
    fn test_builder_rejects_duplicate_stdin() {
        let result = CodecRequest::builder()
            .source(DocumentSource::Stdin)
            .source(DocumentSource::Stdin)
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("only be read once"));
    }
}
