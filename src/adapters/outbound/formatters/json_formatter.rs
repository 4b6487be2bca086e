use crate::application::dto::CodecResponse;
use crate::document_model::codec::Encoder;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the decoded records in canonical form
///
/// The output shape follows the number of input documents, not how many of
/// them decoded: one input is written as its record object (or nothing if it
/// failed), several inputs as an array of the decoded records in input order.
pub struct JsonFormatter {
    encoder: Encoder,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self {
            encoder: Encoder::new().pretty(pretty),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, response: &CodecResponse) -> Result<String> {
        let bytes = match response.outcomes.as_slice() {
            [single] => match single.record() {
                Some(record) => self.encoder.encode_record(record)?,
                None => return Ok(String::new()),
            },
            _ => self.encoder.encode_records(&response.records())?,
        };

        let mut output = String::from_utf8(bytes)?;
        output.push('\n');
        Ok(output)
    }
}
