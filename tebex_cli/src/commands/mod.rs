//! CLI subcommand implementations.

pub mod basket;
pub mod categories;
pub mod packages;
pub mod store;
