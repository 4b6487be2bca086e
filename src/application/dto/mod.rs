/// Data Transfer Objects for application layer
///
/// DTOs carry requests into and results out of the use cases, keeping
/// the adapters away from the codec internals.
mod codec_request;
mod codec_response;
mod document_source;
mod output_format;

pub use codec_request::{CodecRequest, CodecRequestBuilder, ProcessingMode};
pub use codec_response::{CodecResponse, DocumentOutcome};
pub use document_source::DocumentSource;
pub use output_format::OutputFormat;
