//! Typed async client for the Tebex Headless webstore API.
//!
//! [`Client`] maps one method onto each endpoint: catalog lookups
//! (categories, packages), basket management, code redemption and store
//! metadata. Responses are decoded into the records in [`types`].

mod client;
mod errors;
mod query;
mod route;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{CategoryQuery, PackageQuery, Query, QueryParams, QueryValue};
pub use self::route::Route;
pub use reqwest::Method;
