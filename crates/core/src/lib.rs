//! Almacén Core - Shared types library.
//!
//! This crate provides the record types used across the Almacén components:
//! - `panel` - Server-rendered management panel
//! - `cli` - Command-line tools for inspecting and seeding the local store
//!
//! # Architecture
//!
//! The core crate contains only types and pure collection rules - no I/O,
//! no storage access, no HTTP. Persistence lives behind the key-value store
//! adapter in the panel crate.
//!
//! # Modules
//!
//! - [`types`] - Records (users, inventory items, employees, sales)
//! - [`keys`] - Typed storage keys binding each persisted key to its record type
//! - [`collection`] - Whole-collection operations (identity removal, stock filter)
//! - [`validation`] - Form input parsing with user-facing error messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod keys;
pub mod types;
pub mod validation;

pub use keys::StorageKey;
pub use types::*;
pub use validation::ValidationError;
