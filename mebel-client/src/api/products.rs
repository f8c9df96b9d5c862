//! Product service
//!
//! Variants are sent nested in the product payload; the server replaces the
//! product's variant list with the one submitted.

use std::sync::Arc;

use shared::models::{Product, ProductPayload};

use super::Collection;
use crate::ClientResult;
use crate::client::HttpClient;
use crate::resource::{ResourceReader, ResourceWriter, WriteMethod};

pub const PRODUCTS: &str = "admin/products";

/// `admin/products`
pub struct ProductApi<C> {
    collection: Collection<C>,
}

impl<C: HttpClient> ProductApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            collection: Collection::new(client, PRODUCTS),
        }
    }

    pub fn list(&self) -> ResourceReader<C, Vec<Product>> {
        self.collection.reader()
    }

    pub fn writer(&self, method: WriteMethod) -> ResourceWriter<C, Product> {
        self.collection.writer(method)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        self.collection.get(id).await
    }

    pub async fn create(&self, payload: &ProductPayload) -> ClientResult<Product> {
        payload.validate()?;
        self.collection.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &ProductPayload) -> ClientResult<Product> {
        payload.validate()?;
        self.collection.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.collection.delete(id).await
    }
}
