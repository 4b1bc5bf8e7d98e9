//! Session and credential services.

pub mod auth;
pub mod session;

pub use auth::{DEMO_USERS, authenticate};
pub use session::SessionManager;
