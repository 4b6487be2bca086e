//! sbom-model - SBOM document model and JSON codec
//!
//! This library defines the wire contract of a small SBOM document subset
//! (metadata with an optional nested component, services keyed by `bom-ref`,
//! and membership records) and a document-processing pipeline built on it,
//! following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Document model** (`document_model`): record types and the codec
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types and security checks
//!
//! # Example
//!
//! ```
//! use sbom_model::prelude::*;
//!
//! let service: Service = decode(
//!     br#"{"bom-ref":"pkg:lib@2.0","name":"lib","version":"2.0","provider":"acme","extra":"z"}"#,
//! )
//! .unwrap();
//! assert_eq!(service.bom_ref(), "pkg:lib@2.0");
//!
//! let json = encode(&service).unwrap();
//! assert!(String::from_utf8(json).unwrap().starts_with(r#"{"bom-ref":"pkg:lib@2.0""#));
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod document_model;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        CodecRequest, CodecResponse, DocumentOutcome, DocumentSource, OutputFormat,
        ProcessingMode,
    };
    pub use crate::application::use_cases::ProcessDocumentsUseCase;
    pub use crate::document_model::codec::{
        decode, encode, DecodeError, Decoder, EncodeError, Encoder, Record, RecordKind,
        UnknownFields, WireField, WireRecord,
    };
    pub use crate::document_model::domain::{
        Component, LicenseChoice, LicenseContent, Member, Metadata, Service,
    };
    pub use crate::ports::outbound::{
        DocumentFormatter, DocumentReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
