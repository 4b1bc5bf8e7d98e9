//! CLI subcommands.

pub mod store;
pub mod users;
