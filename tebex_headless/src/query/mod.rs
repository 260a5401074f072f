mod common;
pub use self::common::{Query, QueryParams, QueryValue};

mod catalog;
pub use self::catalog::{CategoryQuery, PackageQuery};
