//! Redeemable codes and the apply/remove discriminant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Which kind of code an apply/remove call targets. Also the path segment
/// of those endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyType {
    #[serde(rename = "coupons")]
    Coupons,
    #[serde(rename = "giftcards")]
    GiftCards,
    #[serde(rename = "creator-codes")]
    CreatorCodes,
}

impl ApplyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyType::Coupons => "coupons",
            ApplyType::GiftCards => "giftcards",
            ApplyType::CreatorCodes => "creator-codes",
        }
    }
}

impl std::fmt::Display for ApplyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coupons" => Ok(ApplyType::Coupons),
            "giftcards" => Ok(ApplyType::GiftCards),
            "creator-codes" => Ok(ApplyType::CreatorCodes),
            other => Err(Error::InvalidInput(format!(
                "unknown code type '{}', expected coupons, giftcards or creator-codes",
                other
            ))),
        }
    }
}

/// Body for applying or removing a coupon.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CouponCode {
    pub coupon_code: String,
}

/// Body for applying or removing a gift card. Also how a basket lists its
/// applied gift cards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GiftCardCode {
    pub card_number: String,
}

/// Body for applying or removing a creator code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatorCode {
    pub creator_code: String,
}

/// A coupon as listed on a basket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub code: String,
}

impl CouponCode {
    pub fn new(code: &str) -> Self {
        Self {
            coupon_code: code.to_string(),
        }
    }
}

impl GiftCardCode {
    pub fn new(card_number: &str) -> Self {
        Self {
            card_number: card_number.to_string(),
        }
    }
}

impl CreatorCode {
    pub fn new(code: &str) -> Self {
        Self {
            creator_code: code.to_string(),
        }
    }
}

/// A code to apply to or remove from a basket.
///
/// The variant fixes both the endpoint segment and the body shape, so a
/// coupon can never be sent to the gift card endpoint. Serializes as the
/// bare inner body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RedeemCode {
    Coupon(CouponCode),
    GiftCard(GiftCardCode),
    CreatorCode(CreatorCode),
}

impl RedeemCode {
    pub fn coupon(code: &str) -> Self {
        RedeemCode::Coupon(CouponCode::new(code))
    }

    pub fn gift_card(card_number: &str) -> Self {
        RedeemCode::GiftCard(GiftCardCode::new(card_number))
    }

    pub fn creator_code(code: &str) -> Self {
        RedeemCode::CreatorCode(CreatorCode::new(code))
    }

    /// Builds the variant matching `apply_type` around `value`.
    pub fn from_parts(apply_type: ApplyType, value: &str) -> Self {
        match apply_type {
            ApplyType::Coupons => Self::coupon(value),
            ApplyType::GiftCards => Self::gift_card(value),
            ApplyType::CreatorCodes => Self::creator_code(value),
        }
    }

    pub fn apply_type(&self) -> ApplyType {
        match self {
            RedeemCode::Coupon(_) => ApplyType::Coupons,
            RedeemCode::GiftCard(_) => ApplyType::GiftCards,
            RedeemCode::CreatorCode(_) => ApplyType::CreatorCodes,
        }
    }

    /// The code text itself, whichever field carries it.
    pub fn value(&self) -> &str {
        match self {
            RedeemCode::Coupon(c) => &c.coupon_code,
            RedeemCode::GiftCard(c) => &c.card_number,
            RedeemCode::CreatorCode(c) => &c.creator_code,
        }
    }
}

impl From<CouponCode> for RedeemCode {
    fn from(code: CouponCode) -> Self {
        RedeemCode::Coupon(code)
    }
}

impl From<GiftCardCode> for RedeemCode {
    fn from(code: GiftCardCode) -> Self {
        RedeemCode::GiftCard(code)
    }
}

impl From<CreatorCode> for RedeemCode {
    fn from(code: CreatorCode) -> Self {
        RedeemCode::CreatorCode(code)
    }
}
