// mebel-client/tests/delivery_notes.rs
// Issuing delivery notes: duplicate guard and rollback of the two writes

mod support;

use std::sync::Arc;

use mebel_client::api::DeliveryNoteApi;
use mebel_client::{ClientError, ErrorCode, OneshotHttpClient};
use shared::models::{DeliveryNote, DeliveryNotePayload, PurchaseOrderStatus};
use support::{FakeApi, purchase_order};

fn service(api: &FakeApi) -> DeliveryNoteApi<OneshotHttpClient> {
    DeliveryNoteApi::new(Arc::new(api.client()))
}

fn payload(po: &str) -> DeliveryNotePayload {
    DeliveryNotePayload {
        purchase_order_id: po.into(),
        number: "SJ/2024/0042".into(),
        driver: Some("Pak Slamet".into()),
        note: None,
    }
}

fn existing_note(po: &str, cancelled: bool) -> DeliveryNote {
    DeliveryNote {
        id: "dn-old".into(),
        purchase_order_id: po.into(),
        number: "SJ/2024/0001".into(),
        driver: None,
        note: None,
        issued_at: None,
        cancelled,
    }
}

#[tokio::test]
async fn test_issue_marks_order_shipped() {
    let api = FakeApi::new();
    let notes = service(&api);
    let po = purchase_order("po-1", PurchaseOrderStatus::Dipesan);

    let issued = notes.issue(&po, &payload("po-1")).await.unwrap();
    assert_eq!(issued.note.purchase_order_id, "po-1");
    assert_eq!(issued.note.number, "SJ/2024/0042");
    assert_eq!(issued.purchase_order.status, PurchaseOrderStatus::Dikirim);

    assert_eq!(api.hits("GET /admin/delivery-notes"), 1);
    assert_eq!(api.hits("POST /admin/delivery-notes"), 1);
    assert_eq!(api.hits("PATCH /admin/purchase-orders/po-1/status"), 1);
    assert_eq!(notes.notes_of("po-1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_active_note_blocks_issue() {
    let api = FakeApi::new();
    api.with(|s| s.delivery_notes.push(existing_note("po-1", false)));
    let notes = service(&api);
    let po = purchase_order("po-1", PurchaseOrderStatus::Dipesan);

    let err = notes.issue(&po, &payload("po-1")).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::DeliveryNoteExists));
    assert_eq!(api.writes(), 0);
}

#[tokio::test]
async fn test_cancelled_note_does_not_block() {
    let api = FakeApi::new();
    api.with(|s| {
        s.delivery_notes.push(existing_note("po-1", true));
        s.delivery_notes.push(existing_note("po-2", false));
    });
    let notes = service(&api);
    let po = purchase_order("po-1", PurchaseOrderStatus::Dipesan);

    notes.issue(&po, &payload("po-1")).await.unwrap();
    assert_eq!(api.hits("POST /admin/delivery-notes"), 1);
}

#[tokio::test]
async fn test_guards_run_before_any_request() {
    let api = FakeApi::new();
    let notes = service(&api);

    // already shipped
    let shipped = purchase_order("po-1", PurchaseOrderStatus::Dikirim);
    let err = notes.issue(&shipped, &payload("po-1")).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::PurchaseOrderInvalidTransition));

    // payload for another order
    let po = purchase_order("po-1", PurchaseOrderStatus::Dipesan);
    let err = notes.issue(&po, &payload("po-2")).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::ValidationFailed));

    let mut blank = payload("po-1");
    blank.number = "  ".into();
    assert!(matches!(
        notes.issue(&po, &blank).await.unwrap_err(),
        ClientError::Rejected(_)
    ));

    assert_eq!(api.hits_prefix("GET "), 0);
    assert_eq!(api.writes(), 0);
}

#[tokio::test]
async fn test_failed_status_patch_removes_note() {
    let api = FakeApi::new();
    api.with(|s| s.fail_status_patch = true);
    let notes = service(&api);
    let po = purchase_order("po-1", PurchaseOrderStatus::Dipesan);

    let err = notes.issue(&po, &payload("po-1")).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::InternalError));

    assert_eq!(api.hits("POST /admin/delivery-notes"), 1);
    assert_eq!(api.hits_prefix("DELETE /admin/delivery-notes/"), 1);
    assert!(api.with(|s| s.delivery_notes.is_empty()));
}

#[tokio::test]
async fn test_rollback_accepts_no_content_delete() {
    let api = FakeApi::new();
    api.with(|s| {
        s.fail_status_patch = true;
        s.no_content_deletes = true;
    });
    let notes = service(&api);
    let po = purchase_order("po-1", PurchaseOrderStatus::Dipesan);

    let err = notes.issue(&po, &payload("po-1")).await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::InternalError));
    assert!(!matches!(err, ClientError::DeliveryNoteInconsistent(_)));
    assert!(api.with(|s| s.delivery_notes.is_empty()));
}

#[tokio::test]
async fn test_failed_rollback_is_inconsistent() {
    let api = FakeApi::new();
    api.with(|s| {
        s.fail_status_patch = true;
        s.fail_note_delete = true;
    });
    let notes = service(&api);
    let po = purchase_order("po-1", PurchaseOrderStatus::Dipesan);

    let err = notes.issue(&po, &payload("po-1")).await.unwrap_err();
    assert!(matches!(err, ClientError::DeliveryNoteInconsistent(_)));
    assert_eq!(err.error_code(), Some(ErrorCode::DeliveryNoteInconsistent));
    assert_eq!(api.with(|s| s.delivery_notes.len()), 1);
}
