//! Request guards for the panel.
//!
//! Every page except the login page requires a session. Page rendering
//! goes through the dispatcher, which calls
//! [`SessionManager::require_auth`](crate::services::SessionManager::require_auth)
//! directly; form handlers use the [`RequireAuth`] extractor.

pub mod auth;

pub use auth::{AuthRejection, RequireAuth};
