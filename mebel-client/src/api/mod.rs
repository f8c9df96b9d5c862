//! Typed services over the admin REST API
//!
//! Each service is a thin layer over [`ResourceReader`] and
//! [`ResourceWriter`] for one `admin/…` collection, plus the client-side
//! guards that must pass before a request is sent.

mod customers;
mod delivery_notes;
mod inventory;
mod orders;
mod payments;
mod products;
mod purchase_orders;
mod reports;

pub use customers::CustomerApi;
pub use delivery_notes::{DeliveryNoteApi, IssuedDeliveryNote};
pub use inventory::InventoryApi;
pub use orders::OrderApi;
pub use payments::{PaymentApi, PaymentSummary};
pub use products::ProductApi;
pub use purchase_orders::PurchaseOrderApi;
pub use reports::ReportApi;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::DataEnvelope;
use shared::response::Empty;

use crate::ClientResult;
use crate::client::HttpClient;
use crate::resource::{ResourceReader, ResourceWriter, WriteMethod};

/// One REST collection (`GET/POST path`, `GET/PUT/DELETE path/{id}`)
pub(crate) struct Collection<C> {
    client: Arc<C>,
    path: &'static str,
}

impl<C> Clone for Collection<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path,
        }
    }
}

impl<C: HttpClient> Collection<C> {
    pub(crate) fn new(client: Arc<C>, path: &'static str) -> Self {
        Self { client, path }
    }

    pub(crate) fn path(&self) -> &'static str {
        self.path
    }

    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    pub(crate) fn reader<T: DeserializeOwned>(&self) -> ResourceReader<C, Vec<T>> {
        ResourceReader::new(self.client.clone(), self.path)
    }

    pub(crate) fn writer<R: DeserializeOwned>(&self, method: WriteMethod) -> ResourceWriter<C, R> {
        ResourceWriter::new(self.client.clone(), self.path, method)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, id: &str) -> ClientResult<T> {
        let resp: DataEnvelope<T> = self.client.get(&self.item_path(id)).await?;
        Ok(resp.into_inner())
    }

    pub(crate) async fn create<T, B>(&self, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        self.writer(WriteMethod::Create).mutate(body, None).await
    }

    pub(crate) async fn update<T, B>(&self, id: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        self.writer(WriteMethod::Update).mutate(body, Some(id)).await
    }

    pub(crate) async fn delete(&self, id: &str) -> ClientResult<()> {
        self.writer::<Empty>(WriteMethod::Delete).delete(id).await?;
        Ok(())
    }

    /// `PATCH path/{id}/{action}`
    pub(crate) async fn patch_action<T, B>(&self, id: &str, action: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let path = format!("{}/{}", self.item_path(id), action);
        let resp: DataEnvelope<T> = self.client.patch(&path, body).await?;
        Ok(resp.into_inner())
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }
}
