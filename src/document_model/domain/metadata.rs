use super::component::Component;
use crate::document_model::codec::{RecordKind, UnknownFields, WireField, WireRecord};
use serde::{Deserialize, Serialize};

/// Metadata block of an SBOM document.
///
/// `timestamp` is carried as an opaque string. `component` is zero-or-one and
/// owned by value; an unset component is omitted on the wire, and both a
/// missing key and an explicit `null` decode to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    component: Option<Component>,
}

impl WireRecord for Metadata {
    const KIND: RecordKind = RecordKind::Metadata;

    const FIELDS: &'static [WireField] = &[
        WireField::required("timestamp", "timestamp"),
        WireField::optional("component", "component"),
    ];

    const UNKNOWN_FIELDS: UnknownFields = UnknownFields::Ignore;
}

impl Metadata {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            component: None,
        }
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.component = Some(component);
        self
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn component(&self) -> Option<&Component> {
        self.component.as_ref()
    }

    /// Takes the nested component out, leaving `None` behind
    pub fn take_component(&mut self) -> Option<Component> {
        self.component.take()
    }
}
