//! Purchase order service
//!
//! Status changes go through `PATCH admin/purchase-orders/{id}/status` and
//! are checked against the local state machine first.

use std::sync::Arc;

use shared::{AppError, ErrorCode};
use shared::models::{
    CancelPurchaseOrder, PurchaseOrder, PurchaseOrderPayload, PurchaseOrderStatus, StatusUpdate,
};

use super::Collection;
use crate::ClientResult;
use crate::client::HttpClient;
use crate::resource::ResourceReader;

pub const PURCHASE_ORDERS: &str = "admin/purchase-orders";

/// `admin/purchase-orders`
pub struct PurchaseOrderApi<C> {
    collection: Collection<C>,
}

impl<C: HttpClient> PurchaseOrderApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            collection: Collection::new(client, PURCHASE_ORDERS),
        }
    }

    pub fn list(&self) -> ResourceReader<C, Vec<PurchaseOrder>> {
        self.collection.reader()
    }

    pub fn with_status(&self, status: PurchaseOrderStatus) -> ResourceReader<C, Vec<PurchaseOrder>> {
        self.collection
            .reader()
            .with_params([("status", status.as_str())])
    }

    pub async fn get(&self, id: &str) -> ClientResult<PurchaseOrder> {
        self.collection.get(id).await
    }

    /// Create from an order; build `payload` with
    /// [`crate::forms::PurchaseOrderForm`]
    pub async fn create(&self, payload: &PurchaseOrderPayload) -> ClientResult<PurchaseOrder> {
        payload.validate()?;
        self.collection.create(payload).await
    }

    /// Move `po` to `next` along the delivery chain
    pub async fn update_status(
        &self,
        po: &PurchaseOrder,
        next: PurchaseOrderStatus,
    ) -> ClientResult<PurchaseOrder> {
        if next == PurchaseOrderStatus::Dibatalkan {
            return Err(AppError::with_message(
                ErrorCode::CancelReasonRequired,
                "use cancel() with a reason to cancel a purchase order",
            )
            .into());
        }
        po.status.transition_to(next)?;
        self.patch_status(&po.id, &StatusUpdate { status: next }).await
    }

    /// Cancel `po`; irreversible
    ///
    /// The reason is checked before anything is sent.
    pub async fn cancel(&self, po: &PurchaseOrder, reason: &str) -> ClientResult<PurchaseOrder> {
        let body = CancelPurchaseOrder::new(reason)?;
        po.status.transition_to(PurchaseOrderStatus::Dibatalkan)?;
        tracing::info!(purchase_order = %po.id, from = %po.status, "Cancelling purchase order");
        self.patch_status(&po.id, &body).await
    }

    pub(crate) async fn patch_status<B>(&self, id: &str, body: &B) -> ClientResult<PurchaseOrder>
    where
        B: serde::Serialize + Sync,
    {
        self.collection.patch_action(id, "status", body).await
    }
}
