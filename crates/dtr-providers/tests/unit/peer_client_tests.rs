//! Tests for the HTTP peer registry client

use dtr_domain::encode_identifier;
use dtr_domain::ports::{PeerError, PeerRegistryClient, ShellPeerRegistryClient};
use dtr_domain::{CursorCodec, PaginationRequest, ShellDescriptor, SubmodelDescriptor};
use dtr_providers::{HttpClientConfig, HttpPeerRegistryClient};
use mockito::{Matcher, Server};
use std::time::Duration;

fn client() -> HttpPeerRegistryClient {
    HttpPeerRegistryClient::new(HttpClientConfig::with_timeout(Duration::from_secs(5)))
        .expect("client should build")
}

#[tokio::test]
async fn test_get_shell_descriptor() {
    let mut server = Server::new_async().await;
    let id = "https://example.com/ids/aas/1";
    let mock = server
        .mock(
            "GET",
            format!("/shell-descriptors/{}", encode_identifier(id)).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"https://example.com/ids/aas/1","idShort":"remote"}"#)
        .create_async()
        .await;

    let shell: ShellDescriptor = client()
        .get_descriptor_by_id(&server.url(), id)
        .await
        .unwrap();
    assert_eq!(shell.id, id);
    assert_eq!(shell.id_short.as_deref(), Some("remote"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submodel_lookup_uses_submodel_collection() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("/submodel-descriptors/{}", encode_identifier("sm-1")).as_str(),
        )
        .with_status(200)
        .with_body(r#"{"id":"sm-1"}"#)
        .create_async()
        .await;

    let base = format!("{}/", server.url());
    let submodel: SubmodelDescriptor = client()
        .get_descriptor_by_id(&base, "sm-1")
        .await
        .unwrap();
    assert_eq!(submodel.id, "sm-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_404_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let err = PeerRegistryClient::<ShellDescriptor>::get_descriptor_by_id(
        &client(),
        &server.url(),
        "missing",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, PeerError::NotFound { .. }));
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let err = PeerRegistryClient::<ShellDescriptor>::get_descriptor_by_id(
        &client(),
        &server.url(),
        "any",
    )
    .await
    .unwrap_err();
    match err {
        PeerError::Status { code, body } => {
            assert_eq!(code, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_garbage_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = PeerRegistryClient::<SubmodelDescriptor>::get_descriptor_by_id(
        &client(),
        &server.url(),
        "any",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, PeerError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_peer_is_transport_error() {
    // Port 9 (discard) on localhost is not served in test environments
    let err = PeerRegistryClient::<ShellDescriptor>::get_descriptor_by_id(
        &client(),
        "http://127.0.0.1:9",
        "any",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, PeerError::Transport { .. }));
}

#[tokio::test]
async fn test_nested_page_translates_cursors() {
    let mut server = Server::new_async().await;
    let path = format!(
        "/shell-descriptors/{}/submodel-descriptors",
        encode_identifier("shell")
    );
    let body = format!(
        r#"{{"paging_metadata":{{"cursor":"{}"}},"result":[{{"id":"sm-2"}}]}}"#,
        CursorCodec::encode("sm-2")
    );
    let mock = server
        .mock("GET", path.as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "1".into()),
            Matcher::UrlEncoded("cursor".into(), CursorCodec::encode("sm-1")),
        ]))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let request = PaginationRequest::new(1, Some("sm-1".to_string()));
    let page = client()
        .get_all_submodel_descriptors(&server.url(), "shell", &request)
        .await
        .unwrap();
    assert_eq!(page.items[0].id, "sm-2");
    assert_eq!(page.cursor.as_deref(), Some("sm-2"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_nested_submodel_lookup() {
    let mut server = Server::new_async().await;
    let path = format!(
        "/shell-descriptors/{}/submodel-descriptors/{}",
        encode_identifier("shell"),
        encode_identifier("sm-1")
    );
    let mock = server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_body(r#"{"id":"sm-1"}"#)
        .create_async()
        .await;

    let submodel = client()
        .get_submodel_descriptor_by_id(&server.url(), "shell", "sm-1")
        .await
        .unwrap();
    assert_eq!(submodel.id, "sm-1");
    mock.assert_async().await;
}
