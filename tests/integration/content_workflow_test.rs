//! Content Workflow Integration Tests
//!
//! Drives the CMS screen's store the way the create, translations and
//! published tabs do: form entry, submission, staging for edit, workflow
//! transitions and deletion.

mod common;

use hotelier_common::Error;
use hotelier_content::{
    ContentEvent, ContentStatus, ContentType, ContentUpdate, ContentWorkflowStore,
};

use crate::common::{assert_status_views_partition, create_content, titles};

#[test_log::test]
fn test_cms_session_end_to_end() {
    // ============================================================================
    // Step 1: Save a draft from the create tab
    // ============================================================================
    let mut store = ContentWorkflowStore::new();

    {
        let form = store.form_mut();
        form.content_type = Some("room".parse().unwrap());
        form.title = "Ocean View".to_string();
        form.description = "Spacious room with ocean view".to_string();
    }
    store.submit_form(true).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].status, ContentStatus::Draft);
    assert!(store.form().is_blank());

    // ============================================================================
    // Step 2: Submit another item for translation
    // ============================================================================
    create_content(
        &mut store,
        ContentType::Amenity,
        "Spa",
        "Full-service spa",
        false,
    );

    assert_eq!(store.len(), 2);
    assert_eq!(titles(store.items()), vec!["Spa", "Ocean View"]);
    assert_eq!(store.items()[0].status, ContentStatus::Pending);

    // ============================================================================
    // Step 3: Delete the draft
    // ============================================================================
    let ocean_view = store
        .items()
        .iter()
        .find(|item| item.title == "Ocean View")
        .map(|item| item.id)
        .unwrap();
    store.delete(ocean_view);

    assert_eq!(store.len(), 1);
    assert_eq!(titles(store.items()), vec!["Spa"]);
    assert_status_views_partition(&store);
}

#[test_log::test]
fn test_translate_action_stages_fields_without_linking() {
    let mut store = ContentWorkflowStore::new();
    let spa = create_content(&mut store, ContentType::Amenity, "Spa", "Full-service spa", false);

    // "Translate" on the pending tab only fills the form
    let pending: Vec<_> = store.pending_translations().cloned().collect();
    assert_eq!(pending.len(), 1);
    store.select_for_edit(&pending[0]);

    assert_eq!(store.get(spa).unwrap().status, ContentStatus::Pending);
    assert_eq!(store.form().title, "Spa");

    // Resubmitting adds a second item; the original stays
    store.form_mut().title = "Spa (FR)".to_string();
    let copy = store.submit_form(false).unwrap().id;

    assert_eq!(store.len(), 2);
    assert_ne!(copy, spa);
    assert!(store.get(spa).is_some());
    assert!(store.get(copy).is_some());
    assert_eq!(store.pending_translations().count(), 2);
}

#[test_log::test]
fn test_draft_through_publication() {
    let mut store = ContentWorkflowStore::new();
    let id = create_content(
        &mut store,
        ContentType::Service,
        "Late Checkout",
        "Stay until 2pm on request",
        true,
    );

    store
        .advance_status(id, ContentEvent::SubmitForTranslation)
        .unwrap();
    assert_eq!(store.pending_translations().count(), 1);

    store.advance_status(id, ContentEvent::Publish).unwrap();
    assert_eq!(store.pending_translations().count(), 0);
    assert_eq!(store.published().count(), 1);

    // Editing live content in place does not move it between tabs
    store
        .update_in_place(
            id,
            ContentUpdate {
                description: Some("Stay until 3pm for members".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let item = store.get(id).unwrap();
    assert_eq!(item.status, ContentStatus::Published);
    assert_eq!(item.description, "Stay until 3pm for members");

    // Unpublish sends it back to drafts
    store.advance_status(id, ContentEvent::Unpublish).unwrap();
    assert_eq!(store.drafts().count(), 1);
    assert_status_views_partition(&store);
}

#[test]
fn test_incomplete_forms_never_create_items() {
    let mut store = ContentWorkflowStore::new();
    create_content(&mut store, ContentType::Room, "Garden Room", "Ground floor", true);
    let before = store.items().to_vec();

    // Type picked, nothing typed
    store.form_mut().content_type = Some(ContentType::Room);
    assert!(store.submit_form(true).is_none());

    // Title typed, no description
    store.form_mut().title = "Loft".to_string();
    assert!(store.submit_form(false).is_none());

    // Everything but the type
    store.form_mut().content_type = None;
    store.form_mut().description = "Top floor".to_string();
    assert!(store.submit_form(false).is_none());

    assert_eq!(store.items(), before.as_slice());
    assert_eq!(store.form().title, "Loft");
}

#[test]
fn test_workflow_errors() {
    let mut store = ContentWorkflowStore::new();
    let id = create_content(&mut store, ContentType::Room, "Loft", "Top floor", true);

    let err = store.advance_status(id, ContentEvent::Publish).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.error_code(), "VALIDATION_ERROR");

    store.delete(id);
    let err = store
        .advance_status(id, ContentEvent::SubmitForTranslation)
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(err.is_user_error());
}

#[test]
fn test_many_submissions_keep_newest_first() {
    let mut store = ContentWorkflowStore::new();
    let mut expected = Vec::new();

    for n in 0..25 {
        let title = format!("Item {}", n);
        let content_type = ContentType::ALL[n % ContentType::ALL.len()];
        create_content(&mut store, content_type, &title, "text", n % 3 == 0);
        expected.insert(0, title);
    }

    let listed: Vec<String> = store.items().iter().map(|i| i.title.clone()).collect();
    assert_eq!(listed, expected);
    assert_status_views_partition(&store);
}
