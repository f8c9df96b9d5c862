//! Resource Reader
//!
//! Fetches `{data: T}` from one endpoint and keeps the latest result with
//! its loading flag and error. A read is issued on mount, whenever the
//! endpoint identifier changes, and on every explicit refetch.
//!
//! Reads are not serialized. Each read takes a generation number and only
//! the newest one may write its result; an older response that arrives late
//! is discarded.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use shared::DataEnvelope;
use tokio::sync::RwLock;

use crate::{ClientError, ClientResult};
use crate::client::{HttpClient, with_query};

/// Snapshot of a reader
#[derive(Debug)]
pub struct ReadState<T> {
    /// Last successfully read payload; kept when a later read fails
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<Arc<ClientError>>,
}

impl<T> Default for ReadState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T: Clone> Clone for ReadState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

/// What happened to a read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was written to the state
    Applied,
    /// A newer read started meanwhile; the response was dropped
    Stale,
    /// Nothing to do (endpoint unchanged)
    Skipped,
}

/// Result of a read; the error is shared with [`ReadState::error`]
pub type ReadResult = Result<FetchOutcome, Arc<ClientError>>;

#[derive(Debug, Clone)]
struct ReadRequest {
    endpoint: String,
    params: BTreeMap<String, String>,
}

impl ReadRequest {
    fn path(&self) -> String {
        let pairs: Vec<(String, String)> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        with_query(&self.endpoint, &pairs)
    }
}

struct ReaderInner<T> {
    state: RwLock<ReadState<T>>,
    request: Mutex<ReadRequest>,
    generation: AtomicU64,
}

/// Cloneable handle to one list or detail read
pub struct ResourceReader<C, T> {
    client: Arc<C>,
    inner: Arc<ReaderInner<T>>,
}

impl<C, T> Clone for ResourceReader<C, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<C, T> fmt::Debug for ResourceReader<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceReader")
            .field("request", &*self.inner.request.lock())
            .field("generation", &self.inner.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl<C, T> ResourceReader<C, T>
where
    C: HttpClient,
    T: DeserializeOwned,
{
    pub fn new(client: Arc<C>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            inner: Arc::new(ReaderInner {
                state: RwLock::new(ReadState::default()),
                request: Mutex::new(ReadRequest {
                    endpoint: endpoint.into(),
                    params: BTreeMap::new(),
                }),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Initial query parameters, before the first read
    pub fn with_params<K, V>(self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.merge_params(params);
        self
    }

    /// Perform the initial read
    pub async fn mount(&self) -> ReadResult {
        self.read().await
    }

    /// Point the reader at another endpoint; reads only when it changed
    pub async fn set_endpoint(&self, endpoint: impl Into<String>) -> ReadResult {
        let endpoint = endpoint.into();
        {
            let mut request = self.inner.request.lock();
            if request.endpoint == endpoint {
                return Ok(FetchOutcome::Skipped);
            }
            request.endpoint = endpoint;
        }
        self.read().await
    }

    /// Merge `params` into the current query and read again
    ///
    /// A key that is already present is overridden, never sent twice.
    pub async fn refetch<K, V>(&self, params: impl IntoIterator<Item = (K, V)>) -> ReadResult
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.merge_params(params);
        self.read().await
    }

    /// Read again with the current query
    pub async fn reload(&self) -> ReadResult {
        self.read().await
    }

    pub fn endpoint(&self) -> String {
        self.inner.request.lock().endpoint.clone()
    }

    /// Current query parameters, sorted by key
    pub fn params(&self) -> Vec<(String, String)> {
        self.inner
            .request
            .lock()
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.state.read().await.loading
    }

    fn merge_params<K, V>(&self, params: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut request = self.inner.request.lock();
        for (k, v) in params {
            request.params.insert(k.into(), v.into());
        }
    }

    /// Raise `loading` for `generation` unless a newer read has started
    async fn begin_read(&self, generation: u64) -> bool {
        let mut state = self.inner.state.write().await;
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        state.loading = true;
        true
    }

    async fn read(&self) -> ReadResult {
        let (generation, path) = {
            let request = self.inner.request.lock();
            let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            (generation, request.path())
        };

        if !self.begin_read(generation).await {
            tracing::debug!(path = %path, generation, "Newer read already started, skipping");
            return Ok(FetchOutcome::Stale);
        }

        let result: ClientResult<DataEnvelope<T>> = self.client.get(&path).await;

        let mut state = self.inner.state.write().await;
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(path = %path, generation, "Discarding stale read");
            return Ok(FetchOutcome::Stale);
        }

        state.loading = false;
        match result {
            Ok(envelope) => {
                state.data = Some(envelope.into_inner());
                state.error = None;
                Ok(FetchOutcome::Applied)
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Read failed");
                let e = Arc::new(e);
                state.error = Some(e.clone());
                Err(e)
            }
        }
    }
}

impl<C, T> ResourceReader<C, T>
where
    C: HttpClient,
    T: DeserializeOwned + Clone,
{
    /// Snapshot of `{data, loading, error}`
    pub async fn state(&self) -> ReadState<T> {
        self.inner.state.read().await.clone()
    }

    pub async fn data(&self) -> Option<T> {
        self.inner.state.read().await.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::OneshotHttpClient;
    use axum::Router;

    fn reader() -> ResourceReader<OneshotHttpClient, Vec<String>> {
        ResourceReader::new(Arc::new(OneshotHttpClient::new(Router::new())), "admin/customers")
    }

    #[tokio::test]
    async fn test_superseded_read_leaves_loading_alone() {
        let r = reader();
        r.inner.generation.store(2, Ordering::SeqCst);

        // generation 2 already finished; generation 1 must not raise the flag
        assert!(!r.begin_read(1).await);
        assert!(!r.is_loading().await);

        assert!(r.begin_read(2).await);
        assert!(r.is_loading().await);
    }

    #[tokio::test]
    async fn test_failed_read_clears_loading() {
        let r = reader();
        assert!(r.mount().await.is_err());
        let state = r.state().await;
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert!(state.data.is_none());
    }
}
