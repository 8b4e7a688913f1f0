//! End-to-end tests of the composed pipeline

use crate::support::{FakePeer, FixedPeer, RecordingSink};
use dtr_application::{PeerDelegation, RegistryPipeline};
use dtr_domain::RegistryEventType::{Registered, Unregistered};
use dtr_domain::ports::{RegistryStorage, SharedShellStorage};
use dtr_domain::{
    CursorCodec, DescriptorFilter, Error, PaginationRequest, ShellDescriptor, SubmodelDescriptor,
};
use dtr_providers::{InMemoryShellStorage, InMemorySubmodelStorage};
use std::sync::Arc;

fn pipeline(sink: Arc<RecordingSink>, peer: Arc<FakePeer>) -> RegistryPipeline {
    RegistryPipeline::new(sink).with_delegation(PeerDelegation {
        strategy: Arc::new(FixedPeer("http://peer")),
        shell_client: peer.clone(),
        submodel_client: peer,
    })
}

async fn seeded(storage: &SharedShellStorage, ids: &[&str]) {
    for id in ids {
        storage.insert(ShellDescriptor::new(*id)).await.unwrap();
    }
}

#[tokio::test]
async fn test_paging_example_with_deletion() {
    let sink = Arc::new(RecordingSink::default());
    let storage = pipeline(sink, Arc::new(FakePeer::default()))
        .build_shell_storage(InMemoryShellStorage::new_shared());
    seeded(&storage, &["A", "B", "C", "D"]).await;
    let all = DescriptorFilter::allow_all();

    let first = storage
        .get_all(PaginationRequest::first(2), &all)
        .await
        .unwrap();
    let ids: Vec<&str> = first.items.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    let cursor = first.cursor.unwrap();
    assert_eq!(CursorCodec::decode(&cursor).unwrap(), "B");

    let second = storage
        .get_all(PaginationRequest::new(2, Some(cursor.clone())), &all)
        .await
        .unwrap();
    let ids: Vec<&str> = second.items.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "D"]);
    assert!(second.cursor.is_none());

    storage.remove("B").await.unwrap();
    let err = storage
        .get_all(PaginationRequest::new(2, Some(cursor)), &all)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CursorNotFound { .. }));
}

#[tokio::test]
async fn test_rename_through_pipeline() {
    let sink = Arc::new(RecordingSink::default());
    let storage = pipeline(sink.clone(), Arc::new(FakePeer::default()))
        .build_shell_storage(InMemoryShellStorage::new_shared());
    seeded(&storage, &["A"]).await;

    storage
        .replace("A", ShellDescriptor::new("B"))
        .await
        .unwrap();

    assert_eq!(
        sink.summary()[1..].to_vec(),
        vec![(Unregistered, "A".to_string()), (Registered, "B".to_string())]
    );
    assert!(storage.get("A").await.unwrap_err().is_not_found());
    assert_eq!(storage.get("B").await.unwrap().id, "B");
}

#[tokio::test]
async fn test_delegated_reads_emit_no_events() {
    let sink = Arc::new(RecordingSink::default());
    let peer = Arc::new(
        FakePeer::default()
            .with_shell(ShellDescriptor::new("R"))
            .with_submodel(SubmodelDescriptor::new("S")),
    );
    let pipeline = pipeline(sink.clone(), peer.clone());
    let shells = pipeline.build_shell_storage(InMemoryShellStorage::new_shared());
    let submodels = pipeline.build_submodel_storage(InMemorySubmodelStorage::new_shared());

    assert_eq!(shells.get("R").await.unwrap().id, "R");
    assert_eq!(submodels.get("S").await.unwrap().id, "S");
    assert!(sink.events().is_empty());
    assert_eq!(peer.calls().len(), 2);
}

#[tokio::test]
async fn test_limit_one_walk_visits_everything_once() {
    let sink = Arc::new(RecordingSink::default());
    let storage = RegistryPipeline::new(sink).build_shell_storage(InMemoryShellStorage::new_shared());
    seeded(&storage, &["e", "a", "d", "b", "c"]).await;

    let mut seen = Vec::new();
    let mut cursor = None;
    loop {
        let page = storage
            .get_all(
                PaginationRequest::new(1, cursor.take()),
                &DescriptorFilter::allow_all(),
            )
            .await
            .unwrap();
        seen.extend(page.items.into_iter().map(|d| d.id));
        match page.cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_pipeline_without_delegation_keeps_not_found() {
    let sink = Arc::new(RecordingSink::default());
    let pipeline = RegistryPipeline::new(sink);
    assert!(!pipeline.delegates());
    let storage = pipeline.build_submodel_storage(InMemorySubmodelStorage::new_shared());
    assert!(storage.get("missing").await.unwrap_err().is_not_found());
}
