//! Shared types for the Mebel admin client
//!
//! Domain records mirrored from the admin REST API, the response envelope,
//! the unified error system, session context and the pure money
//! calculations used by the order-entry forms.

pub mod error;
pub mod models;
pub mod order_money;
pub mod response;
pub mod session;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::DataEnvelope;
pub use session::{LoginRequest, LoginResponse, NavSection, RoleFlags, Session, UserProfile};
