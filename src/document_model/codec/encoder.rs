use super::error::EncodeError;
use super::record::Record;
use super::wire::WireRecord;
use serde::Serialize;

/// JSON encoder for records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    pretty: bool,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to indented output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn encode<T: WireRecord>(&self, record: &T) -> Result<Vec<u8>, EncodeError> {
        self.write(record).map_err(|source| EncodeError {
            subject: format!("{} record", T::KIND),
            source,
        })
    }

    pub fn encode_record(&self, record: &Record) -> Result<Vec<u8>, EncodeError> {
        self.write(record).map_err(|source| EncodeError {
            subject: format!("{} record", record.kind()),
            source,
        })
    }

    /// Encodes several records as one JSON array, preserving order.
    pub fn encode_records(&self, records: &[&Record]) -> Result<Vec<u8>, EncodeError> {
        self.write(&records).map_err(|source| EncodeError {
            subject: format!("batch of {} records", records.len()),
            source,
        })
    }

    fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, serde_json::Error> {
        if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
    }
}

/// Encodes `record` as compact JSON.
pub fn encode<T: WireRecord>(record: &T) -> Result<Vec<u8>, EncodeError> {
    Encoder::new().encode(record)
}
