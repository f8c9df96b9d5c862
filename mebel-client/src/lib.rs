//! Mebel Client - data layer of the furniture store admin dashboard
//!
//! Talks to the admin REST API over HTTP (or in-memory for tests) and
//! provides the generic reader/writer handles every admin screen is built
//! from, typed services per entity, and the order-entry form state.

pub mod api;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod forms;
pub mod logger;
pub mod resource;

pub use client::{AdminClient, HttpClient, NetworkHttpClient, OneshotHttpClient};
pub use config::ClientConfig;
pub use credential::{Credential, CredentialStorage};
pub use error::{ClientError, ClientResult};
pub use resource::{
    BulkReport, FetchOutcome, ReadResult, ReadState, ResourceReader, ResourceWriter, WriteMethod,
    WriteState,
};

// Re-export shared types for convenience
pub use shared::{DataEnvelope, ErrorCode, Session};
