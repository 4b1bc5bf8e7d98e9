//! Record types for the Almacén panel.
//!
//! Persisted records keep the field names of the browser local-storage
//! format (`nombre`, `precio`, `cantidad`, `puesto`, `rol`) so existing
//! stores stay readable.

pub(crate) mod amount;
pub mod employee;
pub mod inventory;
pub mod sale;
pub mod user;

pub use employee::Employee;
pub use inventory::InventoryItem;
pub use sale::Sale;
pub use user::{CurrentUser, Role, User};

/// A record addressed by a caller-supplied identifier.
///
/// Identifiers are not validated unique.
pub trait Identified {
    /// The record's identifier.
    fn id(&self) -> &str;
}
