//! Request bodies sent by the basket endpoints.

use serde::{Deserialize, Serialize};

use super::{PackageID, PackageType};

/// Redirect targets and metadata for a new basket.
///
/// Unset optional fields are left out of the JSON entirely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BasketUrls {
    pub complete_url: String,
    pub cancel_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_auto_redirect: Option<bool>,
}

impl BasketUrls {
    pub fn new(complete_url: &str, cancel_url: &str) -> Self {
        Self {
            complete_url: complete_url.to_string(),
            cancel_url: cancel_url.to_string(),
            custom: None,
            complete_auto_redirect: None,
        }
    }

    pub fn with_custom(mut self, custom: serde_json::Map<String, serde_json::Value>) -> Self {
        self.custom = Some(custom);
        self
    }

    pub fn with_complete_auto_redirect(mut self, redirect: bool) -> Self {
        self.complete_auto_redirect = Some(redirect);
        self
    }
}

/// A package line to add to a basket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddPackage {
    pub package_id: PackageID,
    pub quantity: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,
    /// Answers to the package's custom variables, keyed by variable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_data: Option<serde_json::Map<String, serde_json::Value>>,
}

impl AddPackage {
    pub fn new(package_id: PackageID, quantity: u32) -> Self {
        Self {
            package_id,
            quantity,
            package_type: None,
            variable_data: None,
        }
    }

    pub fn with_type(mut self, package_type: PackageType) -> Self {
        self.package_type = Some(package_type);
        self
    }

    pub fn with_variable_data(
        mut self,
        variable_data: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        self.variable_data = Some(variable_data);
        self
    }
}

#[derive(Serialize)]
pub(crate) struct MinecraftBasketBody<'a> {
    pub username: &'a str,
    #[serde(flatten)]
    pub urls: &'a BasketUrls,
}

#[derive(Serialize)]
pub(crate) struct GiftPackageBody<'a> {
    pub package_id: PackageID,
    pub target_username_id: &'a str,
}

#[derive(Serialize)]
pub(crate) struct PackageIdBody {
    pub package_id: PackageID,
}

#[derive(Serialize)]
pub(crate) struct QuantityBody {
    pub quantity: u32,
}
