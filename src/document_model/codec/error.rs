use super::record::RecordKind;
use serde_json::error::Category;
use thiserror::Error;

/// Failure to turn a byte sequence into a record.
///
/// No variant carries a partially decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Truncated document: {message}")]
    Truncated { message: String },

    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Unknown field `{field}` in {kind} document")]
    UnknownField { kind: RecordKind, field: String },

    #[error("Invalid {kind} document: {message}")]
    Shape { kind: RecordKind, message: String },

    #[error("Cannot determine record kind ({})", describe_candidates(.candidates))]
    UndetectedKind { candidates: Vec<RecordKind> },
}

impl DecodeError {
    /// Classifies a parse failure from serde_json.
    pub(crate) fn from_parse(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Eof => DecodeError::Truncated {
                message: err.to_string(),
            },
            _ => DecodeError::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
        }
    }
}

fn describe_candidates(candidates: &[RecordKind]) -> String {
    if candidates.is_empty() {
        return "no record kind matches the document keys".to_string();
    }
    let names: Vec<String> = candidates.iter().map(|k| k.to_string()).collect();
    format!("ambiguous between {}", names.join(", "))
}

/// Failure to serialize a record.
#[derive(Debug, Error)]
#[error("Failed to encode {subject}: {source}")]
pub struct EncodeError {
    /// What was being encoded, e.g. "service record"
    pub subject: String,
    #[source]
    pub source: serde_json::Error,
}
