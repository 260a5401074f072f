use url::Url;

use super::{Query, QueryParams};

/// Filters accepted by the category listing and lookup endpoints.
#[derive(Clone, Debug, Default)]
pub struct CategoryQuery {
    /// Embed each category's packages in the response.
    pub include_packages: Option<bool>,
    /// Price packages for this basket (applies its coupons and region).
    pub basket_ident: Option<String>,
    /// Price packages for the visitor at this address.
    pub ip_address: Option<String>,
}

impl CategoryQuery {
    pub fn with_include_packages(mut self, include_packages: bool) -> Self {
        self.include_packages = Some(include_packages);
        self
    }

    pub fn with_basket_ident(mut self, basket_ident: &str) -> Self {
        self.basket_ident = Some(basket_ident.to_string());
        self
    }

    pub fn with_ip_address(mut self, ip_address: &str) -> Self {
        self.ip_address = Some(ip_address.to_string());
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("includePackages", self.include_packages)
            .with("basketIdent", self.basket_ident.as_deref())
            .with("ipAddress", self.ip_address.as_deref())
    }
}

impl Query for CategoryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }
}

/// Filters accepted by the package listing and lookup endpoints.
#[derive(Clone, Debug, Default)]
pub struct PackageQuery {
    pub basket_ident: Option<String>,
    pub ip_address: Option<String>,
}

impl PackageQuery {
    pub fn with_basket_ident(mut self, basket_ident: &str) -> Self {
        self.basket_ident = Some(basket_ident.to_string());
        self
    }

    pub fn with_ip_address(mut self, ip_address: &str) -> Self {
        self.ip_address = Some(ip_address.to_string());
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("basketIdent", self.basket_ident.as_deref())
            .with("ipAddress", self.ip_address.as_deref())
    }
}

impl Query for PackageQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }
}
