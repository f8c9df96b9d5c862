//! Payment record service
//!
//! Recording a payment, marking it paid and confirming it are three
//! separate calls. Only paid and confirmed records count toward the paid
//! total.

use std::sync::Arc;

use rust_decimal::Decimal;
use shared::models::{PaymentPayload, PaymentRecord, outstanding, paid_total};

use super::Collection;
use crate::ClientResult;
use crate::client::HttpClient;
use crate::resource::ResourceReader;

pub const PAYMENTS: &str = "admin/payments";

/// Paid and outstanding amounts of one purchase order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSummary {
    pub total: Decimal,
    pub paid: Decimal,
    pub outstanding: Decimal,
}

impl PaymentSummary {
    pub fn new(total: Decimal, records: &[PaymentRecord]) -> Self {
        Self {
            total,
            paid: paid_total(records),
            outstanding: outstanding(total, records),
        }
    }
}

/// `admin/payments`
pub struct PaymentApi<C> {
    collection: Collection<C>,
}

impl<C: HttpClient> PaymentApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            collection: Collection::new(client, PAYMENTS),
        }
    }

    pub fn for_purchase_order(&self, purchase_order_id: &str) -> ResourceReader<C, Vec<PaymentRecord>> {
        self.collection
            .reader()
            .with_params([("purchase_order_id", purchase_order_id)])
    }

    pub async fn create(&self, payload: &PaymentPayload) -> ClientResult<PaymentRecord> {
        payload.validate()?;
        self.collection.create(payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.collection.delete(id).await
    }

    /// Record that the money arrived
    pub async fn mark_paid(&self, id: &str) -> ClientResult<PaymentRecord> {
        self.collection
            .patch_action(id, "paid", &serde_json::json!({ "is_paid": true }))
            .await
    }

    /// Verify a paid record
    pub async fn confirm(&self, record: &PaymentRecord) -> ClientResult<PaymentRecord> {
        record.check_confirmable()?;
        self.collection
            .patch_action(&record.id, "confirm", &serde_json::json!({ "is_confirmed": true }))
            .await
    }
}
