use super::error::DecodeError;
use super::record::{Record, RecordKind};
use super::wire::{UnknownFields, WireRecord};
use crate::document_model::domain::{Member, Metadata, Service};
use serde_json::{Map, Value};

/// Decoder with an optional unknown-field policy override.
///
/// Without an override every record type is decoded under the policy it
/// declares in `WireRecord::UNKNOWN_FIELDS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    unknown_fields: Option<UnknownFields>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `policy` to every record type, replacing the declared default.
    pub fn with_unknown_fields(mut self, policy: UnknownFields) -> Self {
        self.unknown_fields = Some(policy);
        self
    }

    /// The policy this decoder applies to `kind`
    pub fn policy_for(&self, kind: RecordKind) -> UnknownFields {
        self.unknown_fields
            .unwrap_or_else(|| kind.default_unknown_fields())
    }

    /// Decodes a whole document into a record of a statically known type.
    pub fn decode<T: WireRecord>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let object = parse_object(bytes)?;
        self.decode_object(object)
    }

    /// Decodes a whole document into a [`Record`].
    ///
    /// When `kind` is `None` it is detected from the document's top-level keys.
    pub fn decode_record(
        &self,
        kind: Option<RecordKind>,
        bytes: &[u8],
    ) -> Result<Record, DecodeError> {
        let object = parse_object(bytes)?;
        let kind = match kind {
            Some(kind) => kind,
            None => RecordKind::detect(&object)?,
        };

        match kind {
            RecordKind::Member => self.decode_object::<Member>(object).map(Record::Member),
            RecordKind::Metadata => self.decode_object::<Metadata>(object).map(Record::Metadata),
            RecordKind::Service => self.decode_object::<Service>(object).map(Record::Service),
        }
    }

    fn decode_object<T: WireRecord>(&self, object: Map<String, Value>) -> Result<T, DecodeError> {
        if self.policy_for(T::KIND) == UnknownFields::Deny {
            if let Some(field) = object.keys().find(|key| !T::is_known_key(key)) {
                return Err(DecodeError::UnknownField {
                    kind: T::KIND,
                    field: field.clone(),
                });
            }
        }

        serde_json::from_value(Value::Object(object)).map_err(|e| DecodeError::Shape {
            kind: T::KIND,
            message: e.to_string(),
        })
    }
}

/// Decodes `bytes` with the record type's declared unknown-field policy.
pub fn decode<T: WireRecord>(bytes: &[u8]) -> Result<T, DecodeError> {
    Decoder::new().decode(bytes)
}

fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, DecodeError> {
    let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::from_parse)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE_WITH_EXTRA: &[u8] =
        br#"{"bom-ref":"pkg:a@1","name":"a","version":"1.0","provider":"x","extra":"z"}"#;

    #[test]
    fn test_decode_service_maps_bom_ref() {
        let service: Service =
            decode(br#"{"bom-ref":"pkg:lib@2.0","name":"lib","version":"2.0","provider":"acme"}"#)
                .unwrap();
        assert_eq!(service.bom_ref(), "pkg:lib@2.0");
        assert_eq!(service.name(), "lib");
        assert_eq!(service.version(), "2.0");
        assert_eq!(service.provider(), "acme");
    }

    #[test]
    fn test_decode_service_ignores_unknown_field() {
        let service: Service = decode(SERVICE_WITH_EXTRA).unwrap();
        assert_eq!(service, Service::new("pkg:a@1", "a", "1.0", "x"));
    }

    #[test]
    fn test_decode_service_deny_override_rejects_unknown_field() {
        let decoder = Decoder::new().with_unknown_fields(UnknownFields::Deny);
        let err = decoder.decode::<Service>(SERVICE_WITH_EXTRA).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownField {
                kind: RecordKind::Service,
                field: "extra".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_service_camel_case_key_is_not_bom_ref() {
        let err = decode::<Service>(br#"{"bomRef":"pkg:a@1","name":"a","version":"1.0","provider":"x"}"#)
            .unwrap_err();
        match err {
            DecodeError::Shape { kind, message } => {
                assert_eq!(kind, RecordKind::Service);
                assert!(message.contains("bom-ref"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_metadata_without_component() {
        let metadata: Metadata = decode(br#"{"timestamp":"2024-01-01T00:00:00"}"#).unwrap();
        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00");
        assert!(metadata.component().is_none());
    }

    #[test]
    fn test_decode_metadata_with_null_component() {
        let metadata: Metadata =
            decode(br#"{"timestamp":"2024-01-01T00:00:00","component":null}"#).unwrap();
        assert!(metadata.component().is_none());
    }

    #[test]
    fn test_decode_non_object_inputs() {
        assert_eq!(
            decode::<Service>(b"[1, 2, 3]").unwrap_err(),
            DecodeError::NotAnObject { found: "array" }
        );
        assert_eq!(
            decode::<Metadata>(b"\"2024-01-01\"").unwrap_err(),
            DecodeError::NotAnObject { found: "string" }
        );
        assert_eq!(
            decode::<Member>(b"null").unwrap_err(),
            DecodeError::NotAnObject { found: "null" }
        );
    }

    #[test]
    fn test_decode_positional_array_is_not_a_service() {
        let err = decode::<Service>(br#"["pkg:a@1","a","1.0","x"]"#).unwrap_err();
        assert_eq!(err, DecodeError::NotAnObject { found: "array" });
    }

    #[test]
    fn test_decode_truncated_inputs() {
        for bytes in [
            &br#"{"bom-ref":"pkg:a@1","name":"#[..],
            &br#"{"timestamp":"2024"#[..],
            &b""[..],
        ] {
            assert!(matches!(
                decode::<Service>(bytes).unwrap_err(),
                DecodeError::Truncated { .. }
            ));
        }
    }

    #[test]
    fn test_decode_trailing_garbage_is_syntax_error() {
        let err = decode::<Metadata>(br#"{"timestamp":"t"} }"#).unwrap_err();
        assert!(matches!(err, DecodeError::Syntax { .. }));
    }

    #[test]
    fn test_decode_missing_required_field() {
        let err = decode::<Service>(br#"{"bom-ref":"pkg:a@1","name":"a"}"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Shape {
                kind: RecordKind::Service,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_record_detects_kind() {
        let record = Decoder::new()
            .decode_record(None, br#"{"timestamp":"2024-01-01T00:00:00"}"#)
            .unwrap();
        assert_eq!(record.kind(), RecordKind::Metadata);
    }

    #[test]
    fn test_decode_record_forced_kind() {
        let err = Decoder::new()
            .decode_record(Some(RecordKind::Service), br#"{"timestamp":"2024-01-01T00:00:00"}"#)
            .unwrap_err();
        assert!(matches!(err, DecodeError::Shape { .. }));
    }

    #[test]
    fn test_policy_for_uses_declared_default() {
        let decoder = Decoder::new();
        assert_eq!(
            decoder.policy_for(RecordKind::Service),
            UnknownFields::Ignore
        );

        let decoder = decoder.with_unknown_fields(UnknownFields::Deny);
        assert_eq!(decoder.policy_for(RecordKind::Member), UnknownFields::Deny);
    }

    #[test]
    fn test_decoder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Decoder>();
        assert_send_sync::<Record>();
    }
}
