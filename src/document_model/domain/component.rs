use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Component nested inside SBOM metadata.
///
/// Only the commonly read CycloneDX fields are typed. Everything else is kept
/// verbatim in `extra`, here and inside each license entry, so a decode/encode
/// cycle never drops data. An explicit `null` on a typed optional field reads
/// as unset and is omitted on encode, the same rule `Metadata` applies to
/// `component`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    component_type: Option<String>,
    #[serde(rename = "bom-ref", default, skip_serializing_if = "Option::is_none")]
    bom_ref: Option<String>,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<LicenseChoice>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// One entry of a component's `licenses` array: a license or an SPDX expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// Untyped keys such as `bom-ref` or `acknowledgement`
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Untyped keys such as `text` or `properties`
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LicenseChoice {
    pub fn spdx_id(id: impl Into<String>) -> Self {
        Self {
            license: Some(LicenseContent {
                id: Some(id.into()),
                name: None,
                url: None,
                extra: BTreeMap::new(),
            }),
            expression: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn expression(expression: impl Into<String>) -> Self {
        Self {
            license: None,
            expression: Some(expression.into()),
            extra: BTreeMap::new(),
        }
    }
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            component_type: None,
            bom_ref: None,
            name: name.into(),
            version: None,
            description: None,
            purl: None,
            licenses: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = Some(component_type.into());
        self
    }

    pub fn with_bom_ref(mut self, bom_ref: impl Into<String>) -> Self {
        self.bom_ref = Some(bom_ref.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    pub fn with_license(mut self, license: LicenseChoice) -> Self {
        self.licenses.push(license);
        self
    }

    pub fn component_type(&self) -> Option<&str> {
        self.component_type.as_deref()
    }

    pub fn bom_ref(&self) -> Option<&str> {
        self.bom_ref.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn purl(&self) -> Option<&str> {
        self.purl.as_deref()
    }

    pub fn licenses(&self) -> &[LicenseChoice] {
        &self.licenses
    }

    /// Fields carried through without interpretation
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }
}
