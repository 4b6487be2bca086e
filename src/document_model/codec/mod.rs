//! JSON codec for SBOM records.
//!
//! Decoding always parses the whole document into a JSON object first, so a
//! non-object or truncated input is rejected before any field is looked at and
//! no partially populated record can escape. Field names are governed by the
//! per-record [`WireField`] tables declared next to each record type.

mod decoder;
mod encoder;
mod error;
mod record;
pub(crate) mod timestamp;
mod wire;

pub use decoder::{decode, Decoder};
pub use encoder::{encode, Encoder};
pub use error::{DecodeError, EncodeError};
pub use record::{Record, RecordKind};
pub use wire::{UnknownFields, WireField, WireRecord};
