//! Purchasable packages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CategoryID, Price, Timestamp};
use crate::Error;

/// Numeric identifier for a package.
pub type PackageID = i64;

/// Billing model of a package.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// Recurring payment.
    Subscription,
    /// One-off payment.
    Single,
    /// Buyer picks either.
    Both,
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PackageType::Subscription => "subscription",
                PackageType::Single => "single",
                PackageType::Both => "both",
            }
        )
    }
}

impl FromStr for PackageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subscription" => Ok(PackageType::Subscription),
            "single" => Ok(PackageType::Single),
            "both" => Ok(PackageType::Both),
            other => Err(Error::InvalidInput(format!(
                "unknown package type '{}', expected subscription, single or both",
                other
            ))),
        }
    }
}

/// Id and name of the category a package belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: CategoryID,
    pub name: String,
}

/// A package returned by the `/packages` endpoints or embedded in a category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Package {
    pub id: PackageID,
    pub name: String,
    pub description: String,

    #[serde(rename = "type")]
    pub package_type: PackageType,

    pub disable_gifting: bool,
    pub disable_quantity: bool,
    pub expiration_date: Option<Timestamp>,

    /// ISO 4217 currency code the prices are in.
    pub currency: String,
    pub category: CategoryRef,

    /// Prices as computed by the server. `total_price` is expected to be
    /// `base_price + sales_tax - discount`, but is not checked here.
    pub base_price: Price,
    pub sales_tax: Price,
    pub total_price: Price,
    pub discount: Price,

    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub order: i64,
}
