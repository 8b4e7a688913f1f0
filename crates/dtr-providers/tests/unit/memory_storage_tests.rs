//! Tests for the in-memory base storage

use dtr_domain::ports::{RegistryStorage, ShellSubmodelStorage};
use dtr_domain::{
    AssetKind, DescriptorFilter, Error, PaginationRequest, ShellDescriptor, ShellDescriptorFilter,
    SubmodelDescriptor,
};
use dtr_providers::{InMemoryShellStorage, InMemorySubmodelStorage};

async fn seeded(ids: &[&str]) -> InMemoryShellStorage {
    let storage = InMemoryShellStorage::new();
    for id in ids {
        storage.insert(ShellDescriptor::new(*id)).await.unwrap();
    }
    storage
}

fn page_ids(items: &[ShellDescriptor]) -> Vec<&str> {
    items.iter().map(|d| d.id.as_str()).collect()
}

#[tokio::test]
async fn test_pages_follow_id_order() {
    let storage = seeded(&["D", "B", "A", "C"]).await;
    let all = DescriptorFilter::allow_all();

    let first = storage
        .get_all(PaginationRequest::first(2), &all)
        .await
        .unwrap();
    assert_eq!(page_ids(&first.items), vec!["A", "B"]);
    assert_eq!(first.cursor.as_deref(), Some("B"));

    let second = storage
        .get_all(PaginationRequest::new(2, first.cursor.clone()), &all)
        .await
        .unwrap();
    assert_eq!(page_ids(&second.items), vec!["C", "D"]);
    assert!(second.cursor.is_none());

    storage.remove("B").await.unwrap();
    let err = storage
        .get_all(PaginationRequest::new(2, first.cursor), &all)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CursorNotFound { ref cursor } if cursor == "B"));
}

#[tokio::test]
async fn test_empty_storage_ignores_cursor() {
    let storage = InMemorySubmodelStorage::new();
    let page = storage
        .get_all(
            PaginationRequest::new(5, Some("ghost".to_string())),
            &DescriptorFilter::allow_all(),
        )
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert!(page.cursor.is_none());
}

#[tokio::test]
async fn test_insert_collision() {
    let storage = InMemorySubmodelStorage::new();
    storage.insert(SubmodelDescriptor::new("sm")).await.unwrap();
    let err = storage
        .insert(SubmodelDescriptor::new("sm"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { ref id } if id == "sm"));
}

#[tokio::test]
async fn test_replace_renames_entry() {
    let storage = seeded(&["A"]).await;
    storage
        .replace("A", ShellDescriptor::new("B").with_id_short("moved"))
        .await
        .unwrap();

    assert!(storage.get("A").await.unwrap_err().is_not_found());
    assert_eq!(
        storage.get("B").await.unwrap().id_short.as_deref(),
        Some("moved")
    );
}

#[tokio::test]
async fn test_replace_onto_other_entry_fails() {
    let storage = seeded(&["A", "B"]).await;
    let err = storage
        .replace("A", ShellDescriptor::new("B"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { ref id } if id == "B"));
    assert!(storage.get("A").await.is_ok());
}

#[tokio::test]
async fn test_replace_and_remove_missing() {
    let storage = InMemoryShellStorage::new();
    assert!(
        storage
            .replace("A", ShellDescriptor::new("A"))
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(storage.remove("A").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_clear_reports_removed_ids() {
    let storage = seeded(&["A", "B"]).await;
    let removed = storage.clear().await.unwrap();
    assert_eq!(
        removed.into_iter().collect::<Vec<_>>(),
        vec!["A".to_string(), "B".to_string()]
    );
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn test_asset_filter_applies_after_cursor() {
    let storage = InMemoryShellStorage::new();
    for (id, kind) in [
        ("A", Some(AssetKind::Instance)),
        ("B", Some(AssetKind::Type)),
        ("C", None),
        ("D", Some(AssetKind::Instance)),
    ] {
        let mut shell = ShellDescriptor::new(id);
        shell.asset_kind = kind;
        storage.insert(shell).await.unwrap();
    }

    let instances: DescriptorFilter<ShellDescriptor> = ShellDescriptorFilter::default()
        .with_asset_kind(AssetKind::Instance)
        .into();
    // "B" is filtered out but still a valid position
    let page = storage
        .get_all(PaginationRequest::new(0, Some("B".to_string())), &instances)
        .await
        .unwrap();
    assert_eq!(page_ids(&page.items), vec!["D"]);

    let unset: DescriptorFilter<ShellDescriptor> = ShellDescriptorFilter::default()
        .with_asset_kind(AssetKind::NotApplicable)
        .into();
    let page = storage
        .get_all(PaginationRequest::unlimited(), &unset)
        .await
        .unwrap();
    assert_eq!(page_ids(&page.items), vec!["C"]);
}

#[tokio::test]
async fn test_duplicate_nested_ids_are_rejected() {
    let storage = InMemoryShellStorage::new();
    let shell = ShellDescriptor::new("A")
        .with_submodel(SubmodelDescriptor::new("sm"))
        .with_submodel(SubmodelDescriptor::new("sm"));
    let err = storage.insert(shell).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn test_nested_submodel_lifecycle() {
    let storage = seeded(&["shell"]).await;

    storage
        .insert_submodel("shell", SubmodelDescriptor::new("sm-2"))
        .await
        .unwrap();
    storage
        .insert_submodel("shell", SubmodelDescriptor::new("sm-1"))
        .await
        .unwrap();
    let err = storage
        .insert_submodel("shell", SubmodelDescriptor::new("sm-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SubmodelAlreadyExists { .. }));

    let page = storage
        .get_all_submodels("shell", PaginationRequest::first(1))
        .await
        .unwrap();
    assert_eq!(page.items[0].id, "sm-1");
    assert_eq!(page.cursor.as_deref(), Some("sm-1"));

    storage
        .replace_submodel("shell", "sm-2", SubmodelDescriptor::new("sm-3"))
        .await
        .unwrap();
    let shell = storage.get("shell").await.unwrap();
    let nested: Vec<&str> = shell
        .submodel_descriptors
        .iter()
        .map(|sm| sm.id.as_str())
        .collect();
    assert_eq!(nested, vec!["sm-3", "sm-1"]);

    storage.remove_submodel("shell", "sm-1").await.unwrap();
    let err = storage.get_submodel("shell", "sm-1").await.unwrap_err();
    assert!(matches!(err, Error::SubmodelNotFound { .. }));

    let err = storage.get_submodel("nope", "sm-3").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_nested_listing_follows_id_order() {
    let storage = seeded(&[]).await;
    storage
        .insert(
            ShellDescriptor::new("shell")
                .with_submodel(SubmodelDescriptor::new("sm-c"))
                .with_submodel(SubmodelDescriptor::new("sm-a"))
                .with_submodel(SubmodelDescriptor::new("sm-b")),
        )
        .await
        .unwrap();

    let first = storage
        .get_all_submodels("shell", PaginationRequest::first(2))
        .await
        .unwrap();
    let ids: Vec<&str> = first.items.iter().map(|sm| sm.id.as_str()).collect();
    assert_eq!(ids, vec!["sm-a", "sm-b"]);
    assert_eq!(first.cursor.as_deref(), Some("sm-b"));

    let rest = storage
        .get_all_submodels("shell", PaginationRequest::first(2).with_cursor(first.cursor))
        .await
        .unwrap();
    assert_eq!(rest.items.len(), 1);
    assert_eq!(rest.items[0].id, "sm-c");
    assert!(rest.cursor.is_none());
}
