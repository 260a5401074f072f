//! Baskets and the packages placed in them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Code, GiftCardCode, PackageID, Price};

/// Opaque key identifying a basket in every basket call.
pub type BasketIdent = String;

/// Checkout links attached to a basket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Links {
    /// Where to send the visitor to pay.
    pub checkout: String,
    /// Any further links the server includes.
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

/// Quantity, price and gift target of a package in a basket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InBasket {
    pub quantity: u32,
    pub price: Price,
    pub gift_username_id: Option<String>,
    pub gift_username: Option<String>,
}

impl InBasket {
    /// `(username_id, username)` of the gift recipient, if this line is a gift.
    pub fn gift_recipient(&self) -> Option<(&str, &str)> {
        match (&self.gift_username_id, &self.gift_username) {
            (Some(id), Some(name)) => Some((id.as_str(), name.as_str())),
            _ => None,
        }
    }
}

/// A package line inside a [`Basket`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BasketPackage {
    pub id: PackageID,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub in_basket: InBasket,
}

/// A server-side cart.
///
/// Every add/remove/apply call returns a fresh copy; nothing here is
/// updated in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Basket {
    pub ident: BasketIdent,
    pub complete: bool,
    pub id: i64,
    pub country: String,
    pub ip: String,
    pub username_id: Option<String>,
    pub username: Option<String>,
    pub cancel_url: String,
    pub complete_url: String,
    pub complete_auto_redirect: bool,
    pub base_price: Price,
    pub sales_tax: Price,
    pub total_price: Price,
    pub email: String,
    pub currency: String,
    pub packages: Vec<BasketPackage>,
    pub coupons: Vec<Code>,
    pub giftcards: Vec<GiftCardCode>,
    pub creator_code: String,
    pub links: Links,
    pub custom: serde_json::Map<String, serde_json::Value>,
}

impl Basket {
    /// `(username_id, username)` of the authenticated buyer, if any.
    pub fn user(&self) -> Option<(&str, &str)> {
        match (&self.username_id, &self.username) {
            (Some(id), Some(name)) => Some((id.as_str(), name.as_str())),
            _ => None,
        }
    }

    /// Total number of items across all package lines.
    pub fn item_count(&self) -> u32 {
        self.packages.iter().map(|p| p.in_basket.quantity).sum()
    }
}
