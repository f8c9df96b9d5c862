//! Resource Writer
//!
//! One create, update or delete against an endpoint. Success runs the
//! caller's callback with the decoded body; failure is recorded and
//! returned. There is no retry and no optimistic update: callers refresh
//! their lists through [`super::ResourceReader::refetch`].

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{AppError, DataEnvelope, ErrorCode};

use crate::client::HttpClient;
use crate::{ClientError, ClientResult};

/// Write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    /// `POST endpoint`
    Create,
    /// `PUT endpoint/{id}`
    Update,
    /// `DELETE endpoint/{id}`
    Delete,
}

impl WriteMethod {
    pub fn needs_id(&self) -> bool {
        matches!(self, Self::Update | Self::Delete)
    }
}

/// Snapshot of a writer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteState {
    /// At least one mutation is in flight
    pub loading: bool,
    /// Message of the last failed mutation, cleared by the next success
    pub error: Option<String>,
}

#[derive(Default)]
struct WriterState {
    in_flight: usize,
    error: Option<String>,
}

type SuccessCallback<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Cloneable handle performing one kind of mutation
pub struct ResourceWriter<C, R> {
    client: Arc<C>,
    endpoint: String,
    method: WriteMethod,
    state: Arc<Mutex<WriterState>>,
    on_success: Option<SuccessCallback<R>>,
}

impl<C, R> Clone for ResourceWriter<C, R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            method: self.method,
            state: self.state.clone(),
            on_success: self.on_success.clone(),
        }
    }
}

impl<C, R> fmt::Debug for ResourceWriter<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceWriter")
            .field("endpoint", &self.endpoint)
            .field("method", &self.method)
            .finish()
    }
}

impl<C, R> ResourceWriter<C, R>
where
    C: HttpClient,
    R: DeserializeOwned,
{
    pub fn new(client: Arc<C>, endpoint: impl Into<String>, method: WriteMethod) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            method,
            state: Arc::new(Mutex::new(WriterState::default())),
            on_success: None,
        }
    }

    /// Run `callback` with the decoded body after every successful mutation
    pub fn on_success(mut self, callback: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    pub fn method(&self) -> WriteMethod {
        self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> WriteState {
        let state = self.state.lock();
        WriteState {
            loading: state.in_flight > 0,
            error: state.error.clone(),
        }
    }

    /// Perform the mutation
    ///
    /// `body` is ignored for deletes. Update and delete without an id are
    /// rejected before any request is sent.
    pub async fn mutate<B>(&self, body: &B, id: Option<&str>) -> ClientResult<R>
    where
        B: Serialize + Sync,
    {
        let path = self.path(id)?;

        self.state.lock().in_flight += 1;
        let result: ClientResult<DataEnvelope<R>> = match self.method {
            WriteMethod::Create => self.client.post(&path, body).await,
            WriteMethod::Update => self.client.put(&path, body).await,
            WriteMethod::Delete => self.client.delete(&path).await,
        };

        {
            let mut state = self.state.lock();
            state.in_flight = state.in_flight.saturating_sub(1);
            match &result {
                Ok(_) => state.error = None,
                Err(e) => {
                    tracing::warn!(method = ?self.method, path = %path, error = %e, "Mutation failed");
                    state.error = Some(e.to_string());
                }
            }
        }

        let data = result?.into_inner();
        if let Some(callback) = &self.on_success {
            callback(&data);
        }
        Ok(data)
    }

    /// `DELETE endpoint/{id}`; only valid on a delete writer
    pub async fn delete(&self, id: &str) -> ClientResult<R> {
        if self.method != WriteMethod::Delete {
            return Err(ClientError::Rejected(AppError::with_message(
                ErrorCode::InvalidRequest,
                format!("{:?} writer on {} cannot delete", self.method, self.endpoint),
            )));
        }
        self.mutate(&(), Some(id)).await
    }

    fn path(&self, id: Option<&str>) -> ClientResult<String> {
        match (self.method.needs_id(), id.map(str::trim)) {
            (false, _) => Ok(self.endpoint.clone()),
            (true, Some(id)) if !id.is_empty() => Ok(format!("{}/{}", self.endpoint, id)),
            (true, _) => Err(ClientError::Rejected(
                AppError::with_message(
                    ErrorCode::RequiredField,
                    format!("{:?} on {} needs an id", self.method, self.endpoint),
                )
                .with_detail("field", "id"),
            )),
        }
    }
}
