//! Descriptor value objects
//!
//! A descriptor is a location record pointing at a remote shell or submodel,
//! not the resource's content. Both kinds share identity and endpoint fields
//! and are handled through the [`Descriptor`] trait so the storage pipeline
//! is written once for both registries.
//!
//! Metadata such as `administration`, `semanticId` or `extensions` is opaque
//! to the pipeline and is carried as raw JSON.

use crate::error::{Error, Result};
use crate::events::EventDescriptor;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Interface tag for shell endpoints
pub const SHELL_INTERFACE: &str = "AAS-3.0";

/// Interface tag for submodel endpoints
pub const SUBMODEL_INTERFACE: &str = "SUBMODEL-3.0";

/// The two descriptor collections a registry serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorKind {
    /// Asset administration shell descriptors
    Shell,
    /// Submodel descriptors
    Submodel,
}

impl DescriptorKind {
    /// Collection segment in the registry REST layout
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Shell => "shell-descriptors",
            Self::Submodel => "submodel-descriptors",
        }
    }

    /// Short name used in logs and provider tables
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Submodel => "submodel",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common contract of everything a registry stores
///
/// The identifier is the primary key of a storage instance.
pub trait Descriptor:
    Clone
    + fmt::Debug
    + PartialEq
    + Serialize
    + DeserializeOwned
    + Into<EventDescriptor>
    + Send
    + Sync
    + 'static
{
    /// Which collection this descriptor belongs to
    const KIND: DescriptorKind;

    /// Globally unique identifier
    fn id(&self) -> &str;

    /// Short human readable name, not unique
    fn id_short(&self) -> Option<&str>;

    /// Reachable endpoints, in declaration order
    fn endpoints(&self) -> &[Endpoint];

    /// Structural checks applied before a descriptor is stored
    fn validate(&self) -> Result<()> {
        if self.id().is_empty() {
            return Err(Error::invalid_argument(format!(
                "{} descriptor id must not be empty",
                Self::KIND
            )));
        }
        Ok(())
    }
}

/// Language tagged text used by `description` and `displayName`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangString {
    /// Language tag, e.g. `en`
    pub language: String,
    /// Text in that language
    pub text: String,
}

impl LangString {
    /// Create a new language string
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
        }
    }
}

/// How an endpoint is reached
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolInformation {
    /// Dereferenceable address
    pub href: String,
    /// Protocol name, e.g. `HTTP`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_protocol: Option<String>,
    /// Supported protocol versions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoint_protocol_version: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subprotocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subprotocol_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subprotocol_body_encoding: Option<String>,
    /// Security attributes, opaque to the registry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_attributes: Vec<Value>,
}

/// A reachable endpoint of a shell or submodel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Interface tag selecting the wire protocol variant
    pub interface: String,
    /// Address and protocol details
    pub protocol_information: ProtocolInformation,
}

impl Endpoint {
    /// Create an endpoint with only an interface tag and address
    pub fn new(interface: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            protocol_information: ProtocolInformation {
                href: href.into(),
                ..ProtocolInformation::default()
            },
        }
    }

    /// Address of this endpoint
    pub fn href(&self) -> &str {
        &self.protocol_information.href
    }
}

/// Kind of asset a shell describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Instance,
    Type,
    NotApplicable,
}

/// Descriptor of a submodel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<LangString>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_name: Vec<LangString>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supplemental_semantic_ids: Vec<Value>,
}

impl SubmodelDescriptor {
    /// Create a submodel descriptor carrying only its identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_short: None,
            endpoints: Vec::new(),
            administration: None,
            description: Vec::new(),
            display_name: Vec::new(),
            extensions: Vec::new(),
            semantic_id: None,
            supplemental_semantic_ids: Vec::new(),
        }
    }

    /// Set the short name
    #[must_use]
    pub fn with_id_short(mut self, id_short: impl Into<String>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }

    /// Append a submodel interface endpoint
    #[must_use]
    pub fn with_endpoint(mut self, href: impl Into<String>) -> Self {
        self.endpoints.push(Endpoint::new(SUBMODEL_INTERFACE, href));
        self
    }

    /// Set the semantic id
    #[must_use]
    pub fn with_semantic_id(mut self, semantic_id: Value) -> Self {
        self.semantic_id = Some(semantic_id);
        self
    }
}

impl Descriptor for SubmodelDescriptor {
    const KIND: DescriptorKind = DescriptorKind::Submodel;

    fn id(&self) -> &str {
        &self.id
    }

    fn id_short(&self) -> Option<&str> {
        self.id_short.as_deref()
    }

    fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
}

/// Descriptor of an asset administration shell
///
/// Nested submodel descriptors are structural containment, not foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<LangString>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_name: Vec<LangString>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_kind: Option<AssetKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_asset_ids: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodel_descriptors: Vec<SubmodelDescriptor>,
}

impl ShellDescriptor {
    /// Create a shell descriptor carrying only its identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_short: None,
            endpoints: Vec::new(),
            administration: None,
            description: Vec::new(),
            display_name: Vec::new(),
            extensions: Vec::new(),
            asset_kind: None,
            asset_type: None,
            global_asset_id: None,
            specific_asset_ids: Vec::new(),
            submodel_descriptors: Vec::new(),
        }
    }

    /// Set the short name
    #[must_use]
    pub fn with_id_short(mut self, id_short: impl Into<String>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }

    /// Append a shell interface endpoint
    #[must_use]
    pub fn with_endpoint(mut self, href: impl Into<String>) -> Self {
        self.endpoints.push(Endpoint::new(SHELL_INTERFACE, href));
        self
    }

    /// Set the asset kind
    #[must_use]
    pub fn with_asset_kind(mut self, kind: AssetKind) -> Self {
        self.asset_kind = Some(kind);
        self
    }

    /// Set the asset type
    #[must_use]
    pub fn with_asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    /// Append a nested submodel descriptor
    #[must_use]
    pub fn with_submodel(mut self, submodel: SubmodelDescriptor) -> Self {
        self.submodel_descriptors.push(submodel);
        self
    }

    /// Look up a nested submodel descriptor by id
    pub fn submodel(&self, submodel_id: &str) -> Option<&SubmodelDescriptor> {
        self.submodel_descriptors
            .iter()
            .find(|sm| sm.id == submodel_id)
    }
}

impl Descriptor for ShellDescriptor {
    const KIND: DescriptorKind = DescriptorKind::Shell;

    fn id(&self) -> &str {
        &self.id
    }

    fn id_short(&self) -> Option<&str> {
        self.id_short.as_deref()
    }

    fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::invalid_argument("shell descriptor id must not be empty"));
        }
        let mut seen = HashSet::new();
        for submodel in &self.submodel_descriptors {
            submodel.validate()?;
            if !seen.insert(submodel.id.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "duplicate submodel descriptor '{}' in shell descriptor '{}'",
                    submodel.id, self.id
                )));
            }
        }
        Ok(())
    }
}
