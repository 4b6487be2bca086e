use crate::document_model::codec::{RecordKind, UnknownFields, WireField, WireRecord};
use serde::{Deserialize, Serialize};

/// Service entry of an SBOM.
///
/// `bom_ref` is the only key other documents join on; it travels as `bom-ref`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    version: String,
    provider: String,
}

impl WireRecord for Service {
    const KIND: RecordKind = RecordKind::Service;

    const FIELDS: &'static [WireField] = &[
        WireField::required("bom_ref", "bom-ref"),
        WireField::required("name", "name"),
        WireField::required("version", "version"),
        WireField::required("provider", "provider"),
    ];

    // Producers add fields over time; older readers must keep working.
    const UNKNOWN_FIELDS: UnknownFields = UnknownFields::Ignore;
}

impl Service {
    pub fn new(
        bom_ref: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            bom_ref: bom_ref.into(),
            name: name.into(),
            version: version.into(),
            provider: provider.into(),
        }
    }

    pub fn bom_ref(&self) -> &str {
        &self.bom_ref
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}
