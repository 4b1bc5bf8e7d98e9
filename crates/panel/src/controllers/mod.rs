//! Collection controllers.
//!
//! One controller per page-bound collection. Every mutation follows the
//! same cycle: load the whole collection, change it in memory, write the
//! whole collection back. Callers hold the state's write section around a
//! mutation so two cycles never interleave.

pub mod employees;
pub mod inventory;
pub mod reports;
pub mod sales;

use thiserror::Error;

use almacen_core::ValidationError;

use crate::store::StoreError;

pub use employees::EmployeeController;
pub use inventory::InventoryController;
pub use reports::ReportController;
pub use sales::SalesController;

/// Why a controller action did not complete.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The submitted form was rejected; nothing was changed.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The collection could not be written back.
    #[error(transparent)]
    Store(#[from] StoreError),
}
