use serde::{de::DeserializeOwned, Serialize};
use tebex_headless::types::{
    AuthUrl, Basket, Category, DisplayType, Message, Package, PackageType, Page, Response,
    Webstore,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

/// Decodes a fixture as `T`, re-encodes it and checks no field was lost or altered.
fn assert_round_trip<T>(name: &str) -> T
where
    T: DeserializeOwned + Serialize,
{
    let json = load_fixture(name);
    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    let decoded: T = serde_json::from_str(&json).unwrap();
    let encoded = serde_json::to_value(&decoded).unwrap();
    assert_eq!(encoded, original, "round trip of {} changed the payload", name);
    decoded
}

#[test]
fn deserialize_category_with_parent_and_packages() {
    let resp: Response<Category> = assert_round_trip("category.json");
    let category = resp.data;
    assert_eq!(category.id, 5);
    assert_eq!(category.name, "Ranks");
    assert_eq!(category.display_type, DisplayType::List);
    assert_eq!(category.slug.as_deref(), Some("ranks"));
    assert_eq!(category.packages.len(), 1);
    assert_eq!(category.packages[0].category.id, 5);

    let parent = category.parent.as_deref().unwrap();
    assert_eq!(parent.id, 1);
    assert!(parent.parent.is_none());
    assert_eq!(category.ancestors().map(|c| c.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn deserialize_categories() {
    let resp: Response<Vec<Category>> = assert_round_trip("categories.json");
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].display_type, DisplayType::Grid);
    assert!(resp.data[0].slug.is_none());
    assert_eq!(resp.data[0].ancestors().count(), 0);
}

#[test]
fn deserialize_package() {
    let resp: Response<Package> = assert_round_trip("package.json");
    let package = resp.data;
    assert_eq!(package.id, 42);
    assert_eq!(package.package_type, PackageType::Single);
    assert!(package.disable_quantity);
    assert!(!package.disable_gifting);
    assert!(package.expiration_date.is_none());
    assert_eq!(package.category.name, "Ranks");
    assert_eq!(package.base_price.value(), 10.0);
    assert_eq!(package.discount.value(), 1.0);
    assert_eq!(package.created_at.as_str(), "2024-01-15T10:30:00+00:00");
    assert!(package.image.is_some());
}

#[test]
fn deserialize_packages() {
    let resp: Response<Vec<Package>> = assert_round_trip("packages.json");
    assert_eq!(resp.data.len(), 2);
    let supporter = &resp.data[1];
    assert_eq!(supporter.package_type, PackageType::Subscription);
    let expires = supporter.expiration_date.as_ref().unwrap().to_datetime().unwrap();
    assert_eq!(expires.date_naive().to_string(), "2025-12-31");
}

#[test]
fn deserialize_basket() {
    let resp: Response<Basket> = assert_round_trip("basket.json");
    let basket = resp.data;
    assert_eq!(basket.ident, "1a2b3c-4d5e6f");
    assert!(!basket.complete);
    assert_eq!(
        basket.user(),
        Some(("069a79f444e94726a5befca90e38aaf5", "Notch"))
    );
    assert_eq!(basket.packages.len(), 2);
    assert_eq!(basket.item_count(), 2);
    assert!(basket.packages[0].in_basket.gift_recipient().is_none());
    assert_eq!(
        basket.packages[1].in_basket.gift_recipient(),
        Some(("853c80ef3c3749fdaa49938b674adae6", "jeb_"))
    );
    assert_eq!(basket.coupons[0].code, "SAVE10");
    assert_eq!(basket.giftcards[0].card_number, "GC-0001-0002");
    assert_eq!(basket.creator_code, "streamer");
    assert_eq!(basket.links.checkout, "https://pay.tebex.io/1a2b3c-4d5e6f");
    assert_eq!(
        basket.links.other.get("payment").map(String::as_str),
        Some("https://pay.tebex.io/1a2b3c-4d5e6f/payment")
    );
    assert_eq!(basket.custom["referral"]["source"], "newsletter");
}

#[test]
fn deserialize_empty_basket() {
    let resp: Response<Basket> = assert_round_trip("basket_new.json");
    let basket = resp.data;
    assert!(!basket.ident.is_empty());
    assert!(basket.user().is_none());
    assert_eq!(basket.item_count(), 0);
    assert!(basket.links.other.is_empty());
    assert!(basket.custom.is_empty());
    assert_eq!(basket.total_price.value(), 0.0);
}

#[test]
fn deserialize_package_with_whole_number_price_keeps_form() {
    let json = load_fixture("package.json").replace("\"base_price\": 10.0", "\"base_price\": 10");
    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    let resp: Response<Package> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.base_price.value(), 10.0);
    let encoded = serde_json::to_value(&resp).unwrap();
    assert_eq!(encoded["data"]["base_price"], serde_json::json!(10));
    assert_eq!(encoded, original);
}

#[test]
fn deserialize_zulu_timestamp_keeps_form() {
    let json = load_fixture("webstore.json");
    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    let created = original["data"]["created_at"].as_str().unwrap().to_string();
    let zulu = created.replace("+00:00", "Z");
    let json = json.replace(&created, &zulu);
    let resp: Response<Webstore> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.created_at.as_str(), zulu);
    let encoded = serde_json::to_value(&resp).unwrap();
    assert_eq!(encoded["data"]["created_at"], serde_json::json!(zulu));
}

#[test]
fn deserialize_webstore() {
    let resp: Response<Webstore> = assert_round_trip("webstore.json");
    assert_eq!(resp.data.id, 1234567);
    assert_eq!(resp.data.platform_type_id, 4);
    assert_eq!(resp.data.lang, "en");
}

#[test]
fn deserialize_pages() {
    let resp: Response<Vec<Page>> = assert_round_trip("pages.json");
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].slug, "terms");
    assert!(resp.data[1].private);
    assert!(resp.data[1].sequence);
}

#[test]
fn deserialize_message_and_auth_urls() {
    let message: Message = assert_round_trip("message.json");
    assert!(message.success);

    let urls: Vec<AuthUrl> = assert_round_trip("auth_urls.json");
    assert_eq!(urls[0].name, "Minecraft");
}

#[test]
fn deserialize_links_without_checkout_fails() {
    let json = load_fixture("basket_new.json").replace("\"checkout\"", "\"receipt\"");
    let result = serde_json::from_str::<Response<Basket>>(&json);
    assert!(result.is_err());
}

#[test]
fn deserialize_unknown_package_type_fails() {
    let json = load_fixture("package.json").replace("\"single\"", "\"bundle\"");
    let result = serde_json::from_str::<Response<Package>>(&json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"data": {"id": 5, "name": "Ranks"}}"#;
    let result = serde_json::from_str::<Response<Category>>(json);
    assert!(result.is_err());
}
