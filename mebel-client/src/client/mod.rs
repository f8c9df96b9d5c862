//! Client module - transport and the admin facade.

mod admin;
pub mod http;
pub mod http_oneshot;

pub use admin::AdminClient;
pub use http::{HttpClient, NetworkHttpClient, with_query};
pub use http_oneshot::OneshotHttpClient;
