//! Order service

use std::sync::Arc;

use shared::models::{Order, OrderPayload};

use super::Collection;
use crate::ClientResult;
use crate::client::HttpClient;
use crate::resource::ResourceReader;

pub const ORDERS: &str = "admin/orders";

/// `admin/orders`
pub struct OrderApi<C> {
    collection: Collection<C>,
}

impl<C: HttpClient> OrderApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            collection: Collection::new(client, ORDERS),
        }
    }

    pub fn list(&self) -> ResourceReader<C, Vec<Order>> {
        self.collection.reader()
    }

    pub fn for_customer(&self, customer_id: &str) -> ResourceReader<C, Vec<Order>> {
        self.collection
            .reader()
            .with_params([("customer_id", customer_id)])
    }

    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        self.collection.get(id).await
    }

    /// Submit a new order; build `payload` with [`crate::forms::OrderForm`]
    pub async fn create(&self, payload: &OrderPayload) -> ClientResult<Order> {
        payload.validate()?;
        self.collection.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &OrderPayload) -> ClientResult<Order> {
        payload.validate()?;
        self.collection.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.collection.delete(id).await
    }
}
