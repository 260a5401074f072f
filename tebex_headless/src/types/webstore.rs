use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Store configuration as returned by the account root endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Webstore {
    pub id: i64,
    pub description: String,
    pub name: String,
    pub webstore_url: String,
    pub currency: String,
    pub lang: String,
    pub logo: String,
    pub platform_type: String,
    pub platform_type_id: i64,
    pub created_at: Timestamp,
}
