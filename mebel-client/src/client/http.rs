// mebel-client/src/client/http.rs
// HTTP client - network transport to the admin API

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use parking_lot::RwLock;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::ApiResponse;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
///
/// Paths are relative to the API base, e.g. `admin/customers`. Every request
/// carries `Authorization: Bearer <token>` when a token is set.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: Option<String>);
}

/// Append `params` to `path` as a URL-encoded query string
pub fn with_query(path: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{query}")
}

/// Map a non-success response to a [`ClientError`]
pub(crate) fn error_from_response(status: StatusCode, body: &[u8]) -> ClientError {
    // Structured error body first
    if let Ok(api_err) = serde_json::from_slice::<ApiResponse<serde_json::Value>>(body)
        && let Some(code) = api_err.code
    {
        return ClientError::Api {
            code,
            message: api_err.message,
            details: api_err
                .details
                .map(|d| serde_json::Value::Object(d.into_iter().collect())),
        };
    }
    let text = String::from_utf8_lossy(body).to_string();
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(text),
        StatusCode::CONFLICT => ClientError::Conflict(text),
        _ => ClientError::Internal(format!("{status}: {text}")),
    }
}

/// Decode a success body; an empty body reads as JSON `null`
///
/// `DataEnvelope<Empty>` accepts that `null`, so a `204` on a delete succeeds.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ClientResult<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        if base_url.trim().is_empty() {
            return Err(ClientError::Config("base url must not be empty".into()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    /// Base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let mut req = req;
        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(status = %status, len = bytes.len(), "Response received");
        if !status.is_success() {
            return Err(error_from_response(status, &bytes));
        }
        decode_body(&bytes)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(method = "GET", path, "Request");
        self.send(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "POST", path, "Request");
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "PUT", path, "Request");
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "PATCH", path, "Request");
        self.send(self.client.patch(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(method = "DELETE", path, "Request");
        self.send(self.client.delete(self.url(path))).await
    }

    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }
}
