use super::record::RecordKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// What the decoder does with a top-level key that is not in a record's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFields {
    /// Skip the key silently
    Ignore,
    /// Fail with `DecodeError::UnknownField`
    Deny,
}

impl std::str::FromStr for UnknownFields {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(UnknownFields::Ignore),
            "deny" => Ok(UnknownFields::Deny),
            _ => Err(format!(
                "Invalid unknown-field policy: {}. Please specify 'ignore' or 'deny'",
                s
            )),
        }
    }
}

impl std::fmt::Display for UnknownFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnknownFields::Ignore => write!(f, "ignore"),
            UnknownFields::Deny => write!(f, "deny"),
        }
    }
}

/// One entry of a record's serialization name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireField {
    /// In-memory attribute name
    pub attribute: &'static str,
    /// Key used on the wire
    pub wire: &'static str,
    /// Whether decoding fails when the key is missing
    pub required: bool,
}

impl WireField {
    pub const fn required(attribute: &'static str, wire: &'static str) -> Self {
        Self {
            attribute,
            wire,
            required: true,
        }
    }

    pub const fn optional(attribute: &'static str, wire: &'static str) -> Self {
        Self {
            attribute,
            wire,
            required: false,
        }
    }
}

/// A top-level record that can cross the JSON boundary.
///
/// The associated constants must agree with the type's serde attributes:
/// `FIELDS` lists every key the serde encoding can produce.
pub trait WireRecord: Serialize + DeserializeOwned {
    const KIND: RecordKind;

    /// In-memory name to wire name mapping
    const FIELDS: &'static [WireField];

    /// Policy applied when the decoder has no explicit override
    const UNKNOWN_FIELDS: UnknownFields;

    /// Looks up the wire name of an in-memory attribute.
    fn wire_name(attribute: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|f| f.attribute == attribute)
            .map(|f| f.wire)
    }

    /// Returns true if `key` is a known wire key of this record.
    fn is_known_key(key: &str) -> bool {
        Self::FIELDS.iter().any(|f| f.wire == key)
    }
}
