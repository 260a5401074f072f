//! HTTP client for the Tebex Headless API.

use std::fmt::Display;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::{CategoryQuery, PackageQuery, Query, QueryParams},
    route::Route,
    types::{
        AddPackage, AuthUrl, Basket, BasketUrls, Category, CategoryID, GiftPackageBody, Message,
        MinecraftBasketBody, Package, PackageID, PackageIdBody, Page, QuantityBody, RedeemCode,
        Response, Webstore,
    },
    Error,
};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://headless.tebex.io";

const USER_AGENT: &str = concat!("tebex_headless/", env!("CARGO_PKG_VERSION"));

/// Client for one Tebex webstore.
///
/// Every method issues exactly one HTTP request and hands back the decoded
/// body. Nothing is cached and nothing is retried; the only state is the
/// base URL and the two credentials given at construction, so a `Client`
/// can be cloned and shared freely across tasks.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    webstore_identifier: String,
    private_key: Option<String>,
    http: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("webstore_identifier", &self.webstore_identifier)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Client {
    /// Creates a new client pointing at the production Headless API.
    ///
    /// Requests are signed with HTTP basic auth when `private_key` is given.
    pub fn new(webstore_identifier: &str, private_key: Option<&str>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, webstore_identifier, private_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(
        base_url: &str,
        webstore_identifier: &str,
        private_key: Option<&str>,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            webstore_identifier: webstore_identifier.to_string(),
            private_key: private_key.map(str::to_string),
            http,
        })
    }

    /// The public webstore identifier this client is scoped to.
    pub fn webstore_identifier(&self) -> &str {
        &self.webstore_identifier
    }

    /// Whether requests carry basic auth credentials.
    pub fn is_authenticated(&self) -> bool {
        self.credentials().is_some()
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        match self.private_key.as_deref() {
            Some(key) if !key.is_empty() && !self.webstore_identifier.is_empty() => {
                Some((self.webstore_identifier.as_str(), key))
            }
            _ => None,
        }
    }

    /// Builds `{base}/api/{route}/{identifier}{path}` plus the query string.
    ///
    /// A missing identifier drops that segment. `path` is appended verbatim
    /// and should start with `/` when non-empty.
    pub fn build_url(
        &self,
        route: Route,
        identifier: Option<&str>,
        path: &str,
        query: &impl Query,
    ) -> Result<Url, Error> {
        let mut raw = format!("{}/api/{}", self.base_api_url, route);
        if let Some(identifier) = identifier {
            raw.push('/');
            raw.push_str(identifier);
        }
        raw.push_str(path);
        let url = Url::parse(raw.as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Sends one request and decodes the JSON response as `T`.
    ///
    /// This is the single path every facade method goes through. It is
    /// public so endpoints without a dedicated method can still be reached.
    pub async fn request<T, B>(
        &self,
        method: Method,
        route: Route,
        identifier: Option<&str>,
        path: &str,
        query: &impl Query,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.build_url(route, identifier, path, query)?;
        let credentials = self.credentials();
        tracing::debug!(
            method = %method,
            url = %url,
            authenticated = credentials.is_some(),
            "Sending request"
        );

        let mut req = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some((username, password)) = credentials {
            req = req.basic_auth(username, Some(password));
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&text);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&text).map_err(|e| {
            let snippet = truncate_body(&text);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode {
                source: e,
                body: snippet,
            }
        })
    }

    async fn get<T>(
        &self,
        route: Route,
        identifier: &str,
        path: &str,
        query: &impl Query,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, route, Some(identifier), path, query, None)
            .await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        route: Route,
        identifier: &str,
        path: &str,
        body: &B,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method, route, Some(identifier), path, &QueryParams::new(), Some(body))
            .await
    }

    /// Fetches all categories of the webstore.
    pub async fn get_categories(&self, query: &CategoryQuery) -> Result<Vec<Category>, Error> {
        let resp: Response<Vec<Category>> = self
            .get(Route::Accounts, &self.webstore_identifier, "/categories", query)
            .await?;
        Ok(resp.data)
    }

    /// Fetches a single category by its numeric ID.
    pub async fn get_category(
        &self,
        id: CategoryID,
        query: &CategoryQuery,
    ) -> Result<Category, Error> {
        let resp: Response<Category> = self
            .get(
                Route::Accounts,
                &self.webstore_identifier,
                format!("/categories/{}", id).as_str(),
                query,
            )
            .await?;
        Ok(resp.data)
    }

    /// Fetches all packages of the webstore.
    pub async fn get_packages(&self, query: &PackageQuery) -> Result<Vec<Package>, Error> {
        let resp: Response<Vec<Package>> = self
            .get(Route::Accounts, &self.webstore_identifier, "/packages", query)
            .await?;
        Ok(resp.data)
    }

    /// Fetches a single package by its numeric ID.
    pub async fn get_package(&self, id: PackageID, query: &PackageQuery) -> Result<Package, Error> {
        let resp: Response<Package> = self
            .get(
                Route::Accounts,
                &self.webstore_identifier,
                format!("/packages/{}", id).as_str(),
                query,
            )
            .await?;
        Ok(resp.data)
    }

    /// Fetches a basket by its ident.
    pub async fn get_basket(&self, basket_ident: &str) -> Result<Basket, Error> {
        let resp: Response<Basket> = self
            .get(
                Route::Accounts,
                &self.webstore_identifier,
                format!("/baskets/{}", basket_ident).as_str(),
                &QueryParams::new(),
            )
            .await?;
        Ok(resp.data)
    }

    /// Creates a new basket. `ip_address` is the visitor's address, used by
    /// the server for regional pricing.
    pub async fn create_basket(
        &self,
        urls: &BasketUrls,
        ip_address: Option<&str>,
    ) -> Result<Basket, Error> {
        let query = QueryParams::new().with("ip_address", ip_address);
        let resp: Response<Basket> = self
            .request(
                Method::POST,
                Route::Accounts,
                Some(self.webstore_identifier.as_str()),
                "/baskets",
                &query,
                Some(urls),
            )
            .await?;
        Ok(resp.data)
    }

    /// Creates a new basket bound to a Minecraft `username`.
    pub async fn create_minecraft_basket(
        &self,
        username: &str,
        urls: &BasketUrls,
        ip_address: Option<&str>,
    ) -> Result<Basket, Error> {
        let query = QueryParams::new().with("ip_address", ip_address);
        let body = MinecraftBasketBody { username, urls };
        let resp: Response<Basket> = self
            .request(
                Method::POST,
                Route::Accounts,
                Some(self.webstore_identifier.as_str()),
                "/baskets",
                &query,
                Some(&body),
            )
            .await?;
        Ok(resp.data)
    }

    /// Lists the login providers a basket can be authenticated with.
    /// This endpoint is not wrapped in a `data` envelope.
    pub async fn get_basket_auth_url(
        &self,
        basket_ident: &str,
        return_url: &str,
    ) -> Result<Vec<AuthUrl>, Error> {
        let query = QueryParams::new().with_value("returnUrl", return_url);
        self.get(
            Route::Accounts,
            &self.webstore_identifier,
            format!("/baskets/{}/auth", basket_ident).as_str(),
            &query,
        )
        .await
    }

    /// Adds a package line to a basket.
    pub async fn add_package_to_basket(
        &self,
        basket_ident: &str,
        package: &AddPackage,
    ) -> Result<Basket, Error> {
        let resp: Response<Basket> = self
            .send(Method::POST, Route::Baskets, basket_ident, "/packages", package)
            .await?;
        Ok(resp.data)
    }

    /// Adds a package to a basket as a gift for another user.
    pub async fn gift_package(
        &self,
        basket_ident: &str,
        package_id: PackageID,
        target_username_id: &str,
    ) -> Result<Basket, Error> {
        let body = GiftPackageBody {
            package_id,
            target_username_id,
        };
        let resp: Response<Basket> = self
            .send(Method::POST, Route::Baskets, basket_ident, "/packages", &body)
            .await?;
        Ok(resp.data)
    }

    /// Removes a package line from a basket.
    pub async fn remove_package(
        &self,
        basket_ident: &str,
        package_id: PackageID,
    ) -> Result<Basket, Error> {
        let resp: Response<Basket> = self
            .send(
                Method::POST,
                Route::Baskets,
                basket_ident,
                "/packages/remove",
                &PackageIdBody { package_id },
            )
            .await?;
        Ok(resp.data)
    }

    /// Sets the quantity of a package line in a basket.
    pub async fn update_quantity(
        &self,
        basket_ident: &str,
        package_id: PackageID,
        quantity: u32,
    ) -> Result<Basket, Error> {
        let resp: Response<Basket> = self
            .send(
                Method::PUT,
                Route::Baskets,
                basket_ident,
                format!("/packages/{}", package_id).as_str(),
                &QuantityBody { quantity },
            )
            .await?;
        Ok(resp.data)
    }

    /// Applies a coupon, gift card or creator code to a basket.
    pub async fn apply(
        &self,
        basket_ident: &str,
        code: impl Into<RedeemCode>,
    ) -> Result<Message, Error> {
        let code = code.into();
        self.send(
            Method::POST,
            Route::Accounts,
            &self.webstore_identifier,
            format!("/baskets/{}/{}", basket_ident, code.apply_type()).as_str(),
            &code,
        )
        .await
    }

    /// Removes a previously applied coupon, gift card or creator code.
    pub async fn remove(
        &self,
        basket_ident: &str,
        code: impl Into<RedeemCode>,
    ) -> Result<Message, Error> {
        let code = code.into();
        self.send(
            Method::POST,
            Route::Accounts,
            &self.webstore_identifier,
            format!("/baskets/{}/{}/remove", basket_ident, code.apply_type()).as_str(),
            &code,
        )
        .await
    }

    /// Fetches the webstore's own configuration.
    pub async fn get_webstore(&self) -> Result<Webstore, Error> {
        let resp: Response<Webstore> = self
            .get(Route::Accounts, &self.webstore_identifier, "", &QueryParams::new())
            .await?;
        Ok(resp.data)
    }

    /// Fetches the webstore's static pages.
    pub async fn get_pages(&self) -> Result<Vec<Page>, Error> {
        let resp: Response<Vec<Page>> = self
            .get(Route::Accounts, &self.webstore_identifier, "/pages", &QueryParams::new())
            .await?;
        Ok(resp.data)
    }

    /// Moves a subscription tier onto another package.
    pub async fn update_tier(
        &self,
        tier_id: impl Display,
        package_id: PackageID,
    ) -> Result<Message, Error> {
        self.send(
            Method::PATCH,
            Route::Accounts,
            &self.webstore_identifier,
            format!("/tiers/{}", tier_id).as_str(),
            &PackageIdBody { package_id },
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::{truncate_body, Client};
    use crate::query::{CategoryQuery, QueryParams};
    use crate::route::Route;

    fn client() -> Client {
        Client::with_base_url("https://example.com/", "store-1", Some("secret")).unwrap()
    }

    #[test]
    fn test_build_url_accounts() {
        let url = client()
            .build_url(
                Route::Accounts,
                Some("store-1"),
                "/categories/5",
                &CategoryQuery::default().with_include_packages(true),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/api/accounts/store-1/categories/5?includePackages=1"
        );
    }

    #[test]
    fn test_build_url_without_suffix_or_query() {
        let url = client()
            .build_url(Route::Accounts, Some("store-1"), "", &QueryParams::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/accounts/store-1");
    }

    #[test]
    fn test_build_url_missing_identifier_drops_segment() {
        let url = client()
            .build_url(Route::Baskets, None, "/packages", &QueryParams::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/baskets/packages");
    }

    #[test]
    fn test_build_url_rejects_bad_base() {
        let client = Client::with_base_url("not a url", "store-1", None).unwrap();
        assert!(client
            .build_url(Route::Accounts, Some("store-1"), "", &QueryParams::new())
            .is_err());
    }

    #[test]
    fn test_credentials_need_both_values() {
        assert!(client().is_authenticated());
        assert!(!Client::with_base_url("https://example.com", "store-1", None)
            .unwrap()
            .is_authenticated());
        assert!(!Client::with_base_url("https://example.com", "store-1", Some(""))
            .unwrap()
            .is_authenticated());
        assert!(!Client::with_base_url("https://example.com", "", Some("secret"))
            .unwrap()
            .is_authenticated());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        let long = "x".repeat(2500);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.len(), 2000 + "...[truncated]".len());
    }
}
