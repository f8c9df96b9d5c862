// mebel-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory calls into an axum Router

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{ClientError, ClientResult};

use super::http::{HttpClient, decode_body, error_from_response};

/// Oneshot HTTP client (in-memory)
///
/// Drives a `Router` through tower's `oneshot`, so the full request and
/// response path (status codes, JSON bodies, auth header) is exercised
/// without a socket.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use mebel_client::OneshotHttpClient;
///
/// let router: Router = build_admin_api();
/// let client = OneshotHttpClient::new(router);
/// let customers: DataEnvelope<Vec<Customer>> = client.get("admin/customers").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// `router` must already have its state applied
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: Arc::new(RwLock::new(None)),
        }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request<Body>, ClientError> {
        let uri = format!("/{}", path.trim_start_matches('/'));
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = self.token() {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let body = match body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    fn build_request_with_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Request<Body>, ClientError> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Some(bytes))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "Oneshot request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(error_from_response(status, &body_bytes));
        }
        decode_body(&body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::PATCH, path, body)?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None)?;
        self.execute(request).await
    }

    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::routing::get;
    use http::HeaderMap;

    async fn whoami(headers: HeaderMap) -> Json<serde_json::Value> {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        Json(serde_json::json!({ "data": auth }))
    }

    #[tokio::test]
    async fn test_oneshot_sends_bearer_token() {
        let client = OneshotHttpClient::new(Router::new().route("/auth/me", get(whoami)));

        let resp: serde_json::Value = client.get("auth/me").await.unwrap();
        assert_eq!(resp["data"], "");

        client.set_token(Some("t-1".into()));
        let resp: serde_json::Value = client.get("/auth/me").await.unwrap();
        assert_eq!(resp["data"], "Bearer t-1");
    }

    #[tokio::test]
    async fn test_oneshot_unknown_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new());
        let result: ClientResult<serde_json::Value> = client.get("admin/nothing").await;
        let err = result.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }
}
