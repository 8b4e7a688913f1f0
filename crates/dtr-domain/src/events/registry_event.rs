//! Registry event payloads
//!
//! Event types, the descriptor snapshot carried by an event and the
//! constructors used by the event-sending storage layer.

use crate::value_objects::descriptor::{
    Descriptor, DescriptorKind, ShellDescriptor, SubmodelDescriptor,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change an event reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistryEventType {
    Registered,
    Unregistered,
    SubmodelRegistered,
    SubmodelUnregistered,
}

impl RegistryEventType {
    /// Wire name of the event type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "REGISTERED",
            Self::Unregistered => "UNREGISTERED",
            Self::SubmodelRegistered => "SUBMODEL_REGISTERED",
            Self::SubmodelUnregistered => "SUBMODEL_UNREGISTERED",
        }
    }
}

impl fmt::Display for RegistryEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor carried by a `REGISTERED` event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventDescriptor {
    Shell(Box<ShellDescriptor>),
    Submodel(SubmodelDescriptor),
}

impl From<ShellDescriptor> for EventDescriptor {
    fn from(descriptor: ShellDescriptor) -> Self {
        Self::Shell(Box::new(descriptor))
    }
}

impl From<SubmodelDescriptor> for EventDescriptor {
    fn from(descriptor: SubmodelDescriptor) -> Self {
        Self::Submodel(descriptor)
    }
}

/// A committed change to one registry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEvent {
    /// Registry the change happened in
    pub kind: DescriptorKind,
    /// Top-level descriptor id (the shell id for nested changes)
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: RegistryEventType,
    /// Present for `REGISTERED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<EventDescriptor>,
    /// Present for nested submodel changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submodel_id: Option<String>,
    /// Present for `SUBMODEL_REGISTERED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submodel_descriptor: Option<SubmodelDescriptor>,
}

impl RegistryEvent {
    /// Descriptor was inserted or replaced
    pub fn registered<D: Descriptor>(descriptor: D) -> Self {
        Self {
            kind: D::KIND,
            id: descriptor.id().to_string(),
            event_type: RegistryEventType::Registered,
            descriptor: Some(descriptor.into()),
            submodel_id: None,
            submodel_descriptor: None,
        }
    }

    /// Descriptor with `id` is gone
    pub fn unregistered(kind: DescriptorKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            event_type: RegistryEventType::Unregistered,
            descriptor: None,
            submodel_id: None,
            submodel_descriptor: None,
        }
    }

    /// Nested submodel descriptor was added or replaced inside a shell
    pub fn submodel_registered(shell_id: impl Into<String>, submodel: SubmodelDescriptor) -> Self {
        Self {
            kind: DescriptorKind::Shell,
            id: shell_id.into(),
            event_type: RegistryEventType::SubmodelRegistered,
            descriptor: None,
            submodel_id: Some(submodel.id.clone()),
            submodel_descriptor: Some(submodel),
        }
    }

    /// Nested submodel descriptor was removed from a shell
    pub fn submodel_unregistered(
        shell_id: impl Into<String>,
        submodel_id: impl Into<String>,
    ) -> Self {
        Self {
            kind: DescriptorKind::Shell,
            id: shell_id.into(),
            event_type: RegistryEventType::SubmodelUnregistered,
            descriptor: None,
            submodel_id: Some(submodel_id.into()),
            submodel_descriptor: None,
        }
    }

    /// Serialize for external consumers
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
