//! Almacén panel library.
//!
//! Server-rendered inventory, employee and sales panel. All state lives in
//! a string-keyed JSON store; see [`store`]. The binary in `main.rs` wires
//! configuration, logging and the router together; tests drive
//! [`routes::app`] directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controllers;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod views;
