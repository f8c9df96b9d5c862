//! Inventory service

use std::sync::Arc;

use shared::models::{InventoryItem, InventoryPayload, StockAdjustment};

use super::Collection;
use crate::ClientResult;
use crate::client::HttpClient;
use crate::resource::ResourceReader;

pub const INVENTORY: &str = "admin/inventory";

/// `admin/inventory`
pub struct InventoryApi<C> {
    collection: Collection<C>,
}

impl<C: HttpClient> InventoryApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            collection: Collection::new(client, INVENTORY),
        }
    }

    pub fn list(&self) -> ResourceReader<C, Vec<InventoryItem>> {
        self.collection.reader()
    }

    /// Stock of one product across locations
    pub fn for_product(&self, product_id: &str) -> ResourceReader<C, Vec<InventoryItem>> {
        self.collection
            .reader()
            .with_params([("product_id", product_id)])
    }

    pub async fn create(&self, payload: &InventoryPayload) -> ClientResult<InventoryItem> {
        payload.validate()?;
        self.collection.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &InventoryPayload) -> ClientResult<InventoryItem> {
        payload.validate()?;
        self.collection.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.collection.delete(id).await
    }

    /// Apply a signed stock change to `item`
    ///
    /// Rejected locally when it would take the known stock below zero.
    pub async fn adjust(
        &self,
        item: &InventoryItem,
        adjustment: &StockAdjustment,
    ) -> ClientResult<InventoryItem> {
        adjustment.validate()?;
        item.stock_after(adjustment.delta)?;
        self.collection
            .patch_action(&item.id, "adjust", adjustment)
            .await
    }
}
