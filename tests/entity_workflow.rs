//! End-to-end form submission: validate, gate, submit, reconcile.

mod common;

use std::sync::Arc;

use common::mock_backend::{MockBackend, MockResponse};
use loomkeeper::collection::CollectionViewModel;
use loomkeeper::entity::{Entity, Party, Staff};
use loomkeeper::gateway::{SubmissionError, SubmissionGateway};
use loomkeeper::mode::{ModeController, NoticeQueue};
use loomkeeper::session::{SessionStore, MISSING_SESSION_MESSAGE};
use loomkeeper::validation::EntityFormValidator;
use loomkeeper::workflow::{EntityWorkflow, WorkflowError, CREATOR_FIELD};
use serde_json::json;
use tempfile::TempDir;

struct Harness<E: Entity> {
    workflow: EntityWorkflow<E>,
    mode: ModeController,
    notices: NoticeQueue,
    _session_dir: TempDir,
}

fn harness<E: Entity>(base_url: &str, demo: bool, user_id: Option<&str>) -> Harness<E> {
    let (mode, notices) = common::mode(demo);
    let client = common::client(base_url);
    let (session_dir, session): (TempDir, SessionStore) = common::temp_session(user_id);
    let owner = session.current_user_id().ok();
    let collection = CollectionViewModel::new(mode.clone(), client.clone(), owner);
    let gateway = SubmissionGateway::new(mode.clone(), client);
    let workflow = EntityWorkflow::new(
        Arc::new(EntityFormValidator::standard()),
        gateway,
        session,
        collection,
    );
    Harness {
        workflow,
        mode,
        notices,
        _session_dir: session_dir,
    }
}

#[tokio::test]
async fn invalid_draft_never_reaches_network() {
    let mock = MockBackend::start().await;
    let h = harness::<Party>(&mock.base_url(), false, Some("4"));

    let err = h
        .workflow
        .save(
            &common::draft(&[("partyName", ""), ("gstNumber", "24ABCDE1234F1Z5")]),
            None,
        )
        .await
        .unwrap_err();

    match err {
        WorkflowError::ValidationFailed(report) => {
            assert_eq!(report.errors().len(), 1);
            assert_eq!(report.error("partyName"), Some("Party name is required"));
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn create_appends_confirmed_record() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"success": true, "data": [
            {"id": 1, "partyName": "A"}, {"id": 2, "partyName": "B"}, {"id": 3, "partyName": "C"}
        ]}"#,
    ))
    .await;
    mock.enqueue_response(MockResponse::status_json(
        201,
        r#"{"success": true, "message": "Party created",
            "data": {"id": 99, "partyName": "New Co", "gstNumber": "24ABCDE1234F1Z5"}}"#,
    ))
    .await;
    let h = harness::<Party>(&mock.base_url(), false, Some("4"));
    h.workflow.collection().load().await.unwrap();

    let created = h
        .workflow
        .save(
            &common::draft(&[("partyName", " New Co "), ("gstNumber", "24abcde1234f1z5")]),
            None,
        )
        .await
        .unwrap();

    assert_eq!(created.id, "99");
    let items = h.workflow.collection().items();
    assert_eq!(items.len(), 4);
    assert_eq!(items.last(), Some(&created));

    let captured = mock.captured_requests().await;
    assert_eq!(captured[1].path, "/parties");
    assert_eq!(
        captured[1].json(),
        json!({
            "partyName": "New Co",
            "gstNumber": "24ABCDE1234F1Z5",
            CREATOR_FIELD: "4"
        })
    );
}

#[tokio::test]
async fn create_without_session_is_blocked_before_network() {
    let mock = MockBackend::start().await;
    let h = harness::<Party>(&mock.base_url(), false, None);

    let err = h
        .workflow
        .save(&common::draft(&[("partyName", "New Co")]), None)
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::MissingSession);
    assert_eq!(err.user_message(), MISSING_SESSION_MESSAGE);
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn demo_mode_blocks_valid_save_with_notice() {
    let mock = MockBackend::start().await;
    let h = harness::<Staff>(&mock.base_url(), true, None);
    h.workflow.collection().load().await.unwrap();
    let before = h.workflow.collection().items();

    let err = h
        .workflow
        .save(
            &common::draft(&[
                ("name", "Ravi"),
                ("phone", "9876543210"),
                ("designation", "Operator"),
                ("salary_amount", "18000"),
            ]),
            Some("demo-staff-1"),
        )
        .await
        .unwrap_err();

    assert_eq!(err, WorkflowError::Submission(SubmissionError::BlockedByDemoMode));
    assert_eq!(h.notices.len(), 1);
    assert_eq!(h.workflow.collection().items(), before);
    assert!(mock.captured_requests().await.is_empty());
    assert!(h.mode.is_demo_mode());
}

#[tokio::test]
async fn update_without_returned_record_uses_sent_values() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"success": true, "data": [
            {"id": 7, "name": "Ravi", "phone": "9876543210", "designation": "Operator", "salary_amount": 18000}
        ]}"#,
    ))
    .await;
    mock.enqueue_response(MockResponse::json(r#"{"success": true, "message": "Updated"}"#))
        .await;
    let h = harness::<Staff>(&mock.base_url(), false, Some("4"));
    h.workflow.collection().load().await.unwrap();

    let updated = h
        .workflow
        .save(
            &common::draft(&[
                ("name", "Ravi"),
                ("phone", "9876543210"),
                ("designation", "Supervisor"),
                ("salary_amount", "21000"),
            ]),
            Some("7"),
        )
        .await
        .unwrap();

    assert_eq!(updated.designation, "Supervisor");
    assert_eq!(updated.salary_amount, 21000.0);
    assert_eq!(h.workflow.collection().items(), vec![updated]);

    let captured = mock.captured_requests().await;
    assert_eq!(captured[1].method, "PUT");
    assert_eq!(captured[1].path, "/staffs/7");
    assert!(captured[1].json().get(CREATOR_FIELD).is_none());
}

#[tokio::test]
async fn rejected_delete_leaves_list_untouched() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"success": true, "data": [{"id": 12, "partyName": "Shree"}]}"#,
    ))
    .await;
    mock.enqueue_response(MockResponse::error(400, "Party has pending orders"))
        .await;
    mock.enqueue_response(MockResponse::json(r#"{"success": true}"#)).await;
    let h = harness::<Party>(&mock.base_url(), false, Some("4"));
    h.workflow.collection().load().await.unwrap();

    let err = h.workflow.delete("12").await.unwrap_err();
    assert_eq!(err.user_message(), "Party has pending orders");
    assert_eq!(h.workflow.collection().items().len(), 1);

    h.workflow.delete("12").await.unwrap();
    assert!(h.workflow.collection().items().is_empty());
}
