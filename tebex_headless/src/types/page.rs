use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A static content page (terms, about, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page {
    pub id: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub account_id: i64,
    pub title: String,
    pub slug: String,
    pub private: bool,
    pub hidden: bool,
    pub disabled: bool,
    pub sequence: bool,
    /// Page body as HTML.
    pub content: String,
}
