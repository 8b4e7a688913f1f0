//! Unit tests for descriptor value objects

use dtr_domain::{
    AssetKind, Descriptor, DescriptorKind, SHELL_INTERFACE, ShellDescriptor, SubmodelDescriptor,
};
use serde_json::json;

#[test]
fn test_shell_descriptor_wire_format_is_camel_case() {
    let shell = ShellDescriptor::new("urn:aas:1")
        .with_id_short("press")
        .with_asset_kind(AssetKind::Instance)
        .with_endpoint("http://host/shells/1")
        .with_submodel(SubmodelDescriptor::new("urn:sm:1").with_endpoint("http://host/sm/1"));

    let value = serde_json::to_value(&shell).unwrap();
    assert_eq!(value["id"], "urn:aas:1");
    assert_eq!(value["idShort"], "press");
    assert_eq!(value["assetKind"], "Instance");
    assert_eq!(value["endpoints"][0]["interface"], SHELL_INTERFACE);
    assert_eq!(
        value["endpoints"][0]["protocolInformation"]["href"],
        "http://host/shells/1"
    );
    assert_eq!(value["submodelDescriptors"][0]["id"], "urn:sm:1");
    assert!(value.get("assetType").is_none());
}

#[test]
fn test_shell_descriptor_parses_registry_json() {
    let value = json!({
        "id": "https://example.com/ids/aas/1",
        "globalAssetId": "https://example.com/assets/1",
        "endpoints": [{
            "interface": "AAS-3.0",
            "protocolInformation": {
                "href": "https://example.com/shells/1",
                "endpointProtocol": "HTTP",
                "endpointProtocolVersion": ["1.1"]
            }
        }],
        "submodelDescriptors": [{ "id": "sm-1", "endpoints": [] }]
    });

    let shell: ShellDescriptor = serde_json::from_value(value).unwrap();
    assert_eq!(shell.id(), "https://example.com/ids/aas/1");
    assert_eq!(shell.endpoints()[0].href(), "https://example.com/shells/1");
    assert_eq!(
        shell.endpoints()[0]
            .protocol_information
            .endpoint_protocol
            .as_deref(),
        Some("HTTP")
    );
    assert!(shell.asset_kind.is_none());
    assert!(shell.submodel("sm-1").is_some());
    assert!(shell.submodel("sm-2").is_none());
}

#[test]
fn test_descriptor_kinds() {
    assert_eq!(ShellDescriptor::KIND, DescriptorKind::Shell);
    assert_eq!(SubmodelDescriptor::KIND, DescriptorKind::Submodel);
    assert_eq!(DescriptorKind::Shell.collection_path(), "shell-descriptors");
    assert_eq!(
        DescriptorKind::Submodel.collection_path(),
        "submodel-descriptors"
    );
    assert_eq!(DescriptorKind::Submodel.to_string(), "submodel");
}
