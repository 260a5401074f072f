mod scalar;
pub use self::scalar::{Price, Timestamp};

mod envelope;
pub use self::envelope::{AuthUrl, Message, Response};

mod category;
pub use self::category::{Category, CategoryID, DisplayType};

mod package;
pub use self::package::{CategoryRef, Package, PackageID, PackageType};

mod basket;
pub use self::basket::{Basket, BasketIdent, BasketPackage, InBasket, Links};

mod code;
pub use self::code::{ApplyType, Code, CouponCode, CreatorCode, GiftCardCode, RedeemCode};

mod body;
pub(crate) use self::body::{GiftPackageBody, MinecraftBasketBody, PackageIdBody, QuantityBody};
pub use self::body::{AddPackage, BasketUrls};

mod webstore;
pub use self::webstore::Webstore;

mod page;
pub use self::page::Page;
