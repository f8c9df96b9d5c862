//! Delivery note service
//!
//! Issuing a note is two writes: create the note, then move the purchase
//! order to `Dikirim`. The server offers no transaction across them, so a
//! failed status patch is compensated by deleting the note again.

use std::sync::Arc;

use shared::models::{
    DeliveryNote, DeliveryNotePayload, PurchaseOrder, PurchaseOrderStatus, StatusUpdate,
    has_active_note,
};
use shared::{AppError, DataEnvelope, ErrorCode};

use super::purchase_orders::PurchaseOrderApi;
use super::Collection;
use crate::client::{HttpClient, with_query};
use crate::resource::ResourceReader;
use crate::{ClientError, ClientResult};

pub const DELIVERY_NOTES: &str = "admin/delivery-notes";

/// Result of a successful issue
#[derive(Debug, Clone)]
pub struct IssuedDeliveryNote {
    pub note: DeliveryNote,
    pub purchase_order: PurchaseOrder,
}

/// `admin/delivery-notes`
pub struct DeliveryNoteApi<C> {
    collection: Collection<C>,
    purchase_orders: PurchaseOrderApi<C>,
}

impl<C: HttpClient> DeliveryNoteApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            collection: Collection::new(client.clone(), DELIVERY_NOTES),
            purchase_orders: PurchaseOrderApi::new(client),
        }
    }

    pub fn list(&self) -> ResourceReader<C, Vec<DeliveryNote>> {
        self.collection.reader()
    }

    pub fn for_purchase_order(&self, purchase_order_id: &str) -> ResourceReader<C, Vec<DeliveryNote>> {
        self.collection
            .reader()
            .with_params([("purchase_order_id", purchase_order_id)])
    }

    pub async fn get(&self, id: &str) -> ClientResult<DeliveryNote> {
        self.collection.get(id).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.collection.delete(id).await
    }

    /// Notes currently recorded for a purchase order
    pub async fn notes_of(&self, purchase_order_id: &str) -> ClientResult<Vec<DeliveryNote>> {
        let path = with_query(
            self.collection.path(),
            &[("purchase_order_id".to_string(), purchase_order_id.to_string())],
        );
        let resp: DataEnvelope<Vec<DeliveryNote>> = self.collection.client().get(&path).await?;
        Ok(resp.into_inner())
    }

    /// Issue a delivery note for `po` and mark it shipped
    ///
    /// Rejected before any write when the purchase order cannot move to
    /// `Dikirim` or already has a non-cancelled note. The check and the
    /// create are separate requests, so two concurrent issues can still both
    /// pass the check.
    pub async fn issue(
        &self,
        po: &PurchaseOrder,
        payload: &DeliveryNotePayload,
    ) -> ClientResult<IssuedDeliveryNote> {
        payload.validate()?;
        if payload.purchase_order_id != po.id {
            return Err(AppError::validation(format!(
                "delivery note is for {}, not {}",
                payload.purchase_order_id, po.id
            ))
            .into());
        }
        po.status.transition_to(PurchaseOrderStatus::Dikirim)?;

        let existing = self.notes_of(&po.id).await?;
        if has_active_note(&existing, &po.id) {
            tracing::info!(purchase_order = %po.id, "Delivery note already issued");
            return Err(AppError::with_message(
                ErrorCode::DeliveryNoteExists,
                format!("purchase order {} already has a delivery note", po.id),
            )
            .with_detail("purchase_order_id", po.id.clone())
            .into());
        }

        let note: DeliveryNote = self.collection.create(payload).await?;

        let status = StatusUpdate {
            status: PurchaseOrderStatus::Dikirim,
        };
        match self.purchase_orders.patch_status(&po.id, &status).await {
            Ok(purchase_order) => {
                tracing::info!(purchase_order = %po.id, note = %note.id, "Delivery note issued");
                Ok(IssuedDeliveryNote {
                    note,
                    purchase_order,
                })
            }
            Err(patch_err) => {
                tracing::warn!(
                    purchase_order = %po.id,
                    note = %note.id,
                    error = %patch_err,
                    "Status patch failed, removing delivery note"
                );
                match self.collection.delete(&note.id).await {
                    Ok(()) => Err(patch_err),
                    Err(rollback_err) => {
                        tracing::error!(
                            purchase_order = %po.id,
                            note = %note.id,
                            patch_error = %patch_err,
                            rollback_error = %rollback_err,
                            "Delivery note left without status change"
                        );
                        Err(ClientError::DeliveryNoteInconsistent(format!(
                            "delivery note {} exists but purchase order {} is still {}: {patch_err}; rollback failed: {rollback_err}",
                            note.id, po.id, po.status
                        )))
                    }
                }
            }
        }
    }
}
