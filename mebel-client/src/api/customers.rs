//! Customer service

use std::sync::Arc;

use shared::models::{Customer, CustomerPayload};

use super::Collection;
use crate::ClientResult;
use crate::client::HttpClient;
use crate::resource::{ResourceReader, ResourceWriter, WriteMethod};

pub const CUSTOMERS: &str = "admin/customers";

/// `admin/customers`
pub struct CustomerApi<C> {
    collection: Collection<C>,
}

impl<C: HttpClient> CustomerApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            collection: Collection::new(client, CUSTOMERS),
        }
    }

    /// List reader; refetch with `search` to filter by merchant name
    pub fn list(&self) -> ResourceReader<C, Vec<Customer>> {
        self.collection.reader()
    }

    /// Writer for a create or edit modal
    pub fn writer(&self, method: WriteMethod) -> ResourceWriter<C, Customer> {
        self.collection.writer(method)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Customer> {
        self.collection.get(id).await
    }

    pub async fn create(&self, payload: &CustomerPayload) -> ClientResult<Customer> {
        payload.validate()?;
        self.collection.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &CustomerPayload) -> ClientResult<Customer> {
        payload.validate()?;
        self.collection.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.collection.delete(id).await
    }
}
