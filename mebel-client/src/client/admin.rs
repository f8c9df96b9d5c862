// mebel-client/src/client/admin.rs
// Admin client - session handling and entry point to the typed services

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{DataEnvelope, LoginRequest, LoginResponse, Session, UserProfile};

use crate::api::{
    CustomerApi, DeliveryNoteApi, InventoryApi, OrderApi, PaymentApi, ProductApi,
    PurchaseOrderApi, ReportApi,
};
use crate::credential::{Credential, CredentialStorage};
use crate::{ClientConfig, ClientError, ClientResult};

use super::http::{HttpClient, NetworkHttpClient};

/// Admin API client
///
/// Owns the transport and the stored session. The bearer token lives in the
/// transport's token cell, so every service built from this client sends it.
pub struct AdminClient<C> {
    http: Arc<C>,
    storage: Option<CredentialStorage>,
    session: RwLock<Option<Session>>,
}

impl AdminClient<NetworkHttpClient> {
    /// Network client with session storage under the configured directory
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::from_config(config)?;
        let client = Self::new(http).with_storage(CredentialStorage::in_dir(&config.credential_dir));
        client.restore();
        Ok(client)
    }
}

impl<C: HttpClient> AdminClient<C> {
    pub fn new(http: C) -> Self {
        Self {
            http: Arc::new(http),
            storage: None,
            session: RwLock::new(None),
        }
    }

    /// Persist the session in `storage`
    pub fn with_storage(mut self, storage: CredentialStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn http(&self) -> Arc<C> {
        self.http.clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_some()
    }

    /// Load a stored session and install its token
    pub fn restore(&self) -> Option<Session> {
        let credential = self.storage.as_ref()?.load()?;
        let session = credential.session;
        self.http.set_token(Some(session.token.clone()));
        *self.session.write() = Some(session.clone());
        tracing::info!(user = %session.user.username, "Session restored");
        Some(session)
    }

    /// Log in and store the session
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Session> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "username and password are required".into(),
            ));
        }
        let req = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let resp: DataEnvelope<LoginResponse> = self.http.post("auth/login", &req).await?;
        let session = Session::from(resp.into_inner());

        // persist first: a session that cannot be stored is not installed
        if let Some(storage) = &self.storage {
            storage.save(&Credential::new(session.clone()))?;
        }
        self.http.set_token(Some(session.token.clone()));
        *self.session.write() = Some(session.clone());

        tracing::info!(user = %session.user.username, "Logged in");
        Ok(session)
    }

    /// Current user profile from the server
    pub async fn me(&self) -> ClientResult<UserProfile> {
        let resp: DataEnvelope<UserProfile> = self.http.get("auth/me").await?;
        Ok(resp.into_inner())
    }

    /// Forget the session locally
    pub fn logout(&self) -> ClientResult<()> {
        self.http.set_token(None);
        *self.session.write() = None;
        if let Some(storage) = &self.storage {
            storage.delete()?;
        }
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn customers(&self) -> CustomerApi<C> {
        CustomerApi::new(self.http.clone())
    }

    pub fn products(&self) -> ProductApi<C> {
        ProductApi::new(self.http.clone())
    }

    pub fn inventory(&self) -> InventoryApi<C> {
        InventoryApi::new(self.http.clone())
    }

    pub fn orders(&self) -> OrderApi<C> {
        OrderApi::new(self.http.clone())
    }

    pub fn purchase_orders(&self) -> PurchaseOrderApi<C> {
        PurchaseOrderApi::new(self.http.clone())
    }

    pub fn delivery_notes(&self) -> DeliveryNoteApi<C> {
        DeliveryNoteApi::new(self.http.clone())
    }

    pub fn payments(&self) -> PaymentApi<C> {
        PaymentApi::new(self.http.clone())
    }

    pub fn reports(&self) -> ReportApi<C> {
        ReportApi::new(self.http.clone())
    }
}
