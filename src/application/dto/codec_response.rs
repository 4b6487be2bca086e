use super::{DocumentSource, ProcessingMode};
use crate::document_model::codec::{DecodeError, Record};

/// Result of decoding one document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOutcome {
    pub source: DocumentSource,
    pub result: Result<Record, DecodeError>,
}

impl DocumentOutcome {
    pub fn new(source: DocumentSource, result: Result<Record, DecodeError>) -> Self {
        Self { source, result }
    }

    pub fn record(&self) -> Option<&Record> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&DecodeError> {
        self.result.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// CodecResponse - Internal response DTO from the document processing use case
#[derive(Debug, Clone)]
pub struct CodecResponse {
    pub mode: ProcessingMode,
    /// One outcome per requested source, in request order
    pub outcomes: Vec<DocumentOutcome>,
}

impl CodecResponse {
    pub fn new(mode: ProcessingMode, outcomes: Vec<DocumentOutcome>) -> Self {
        Self { mode, outcomes }
    }

    /// Successfully decoded records, in request order
    pub fn records(&self) -> Vec<&Record> {
        self.outcomes.iter().filter_map(|o| o.record()).collect()
    }

    pub fn decoded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.decoded_count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}
