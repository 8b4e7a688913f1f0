//! Unit tests for registry events

use dtr_domain::{
    DescriptorKind, EventDescriptor, RegistryEvent, RegistryEventType, ShellDescriptor,
    SubmodelDescriptor,
};

#[test]
fn test_registered_event_carries_descriptor() {
    let event = RegistryEvent::registered(SubmodelDescriptor::new("sm-1"));
    assert_eq!(event.kind, DescriptorKind::Submodel);
    assert_eq!(event.id, "sm-1");
    assert_eq!(event.event_type, RegistryEventType::Registered);
    assert!(matches!(
        event.descriptor,
        Some(EventDescriptor::Submodel(ref d)) if d.id == "sm-1"
    ));
}

#[test]
fn test_unregistered_event_serialization() {
    let event = RegistryEvent::unregistered(DescriptorKind::Shell, "urn:aas:1");
    let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
    assert_eq!(value["type"], "UNREGISTERED");
    assert_eq!(value["kind"], "shell");
    assert_eq!(value["id"], "urn:aas:1");
    assert!(value.get("descriptor").is_none());
}

#[test]
fn test_submodel_events() {
    let registered = RegistryEvent::submodel_registered("shell", SubmodelDescriptor::new("sm"));
    assert_eq!(registered.event_type, RegistryEventType::SubmodelRegistered);
    assert_eq!(registered.kind, DescriptorKind::Shell);
    assert_eq!(registered.submodel_id.as_deref(), Some("sm"));
    assert!(registered.submodel_descriptor.is_some());

    let value = serde_json::to_value(&registered).unwrap();
    assert_eq!(value["type"], "SUBMODEL_REGISTERED");
    assert_eq!(value["submodelId"], "sm");

    let unregistered = RegistryEvent::submodel_unregistered("shell", "sm");
    assert_eq!(unregistered.event_type.to_string(), "SUBMODEL_UNREGISTERED");
    assert!(unregistered.submodel_descriptor.is_none());
}

#[test]
fn test_shell_registered_event_serializes_descriptor_inline() {
    let event = RegistryEvent::registered(ShellDescriptor::new("urn:aas:1").with_id_short("a"));
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["descriptor"]["id"], "urn:aas:1");
    assert_eq!(value["descriptor"]["idShort"], "a");
}
