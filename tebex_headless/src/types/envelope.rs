use serde::{Deserialize, Serialize};

/// The `{"data": ...}` envelope most endpoints wrap their payload in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub data: T,
}

/// Plain acknowledgement returned by mutations with no richer payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub success: bool,
    pub message: String,
}

/// A login provider the visitor can authenticate a basket with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthUrl {
    /// Provider display name.
    pub name: String,
    /// URL to send the visitor to.
    pub url: String,
}
