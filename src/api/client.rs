//! warframe.market REST API client implementation.
//!
//! The [`WarframeMarketClient`] provides a type-safe interface over the
//! documented item, order and drop table endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use warframe_market::api::WarframeMarketClient;
//! use warframe_market::shared::Platform;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WarframeMarketClient::new()?;
//!
//!     let items = client.get_items(None).await?;
//!     println!("Found {} items", items.len());
//!
//!     let orders = client.get_orders("Mirage Prime Systems", true, Some(Platform::Pc)).await?;
//!     println!("{} orders, {} set items", orders.primary().len(), orders.items().map_or(0, |i| i.len()));
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::api::decode;
use crate::api::endpoint::Endpoint;
use crate::api::error::{ApiError, ApiResult};
use crate::api::gateway::{Gateway, HttpGateway};
use crate::api::memo::Memo;
use crate::api::types::*;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::shared::{Language, Platform};

/// Builder for configuring [`WarframeMarketClient`].
#[derive(Debug, Clone)]
pub struct WarframeMarketClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl Default for WarframeMarketClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WarframeMarketClientBuilder {
    /// Create a new builder pointed at [`DEFAULT_API_URL`].
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            default_headers: Vec::new(),
        }
    }

    /// Override the API root (e.g. for a proxy or a local mock).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Add a default header to all requests. Endpoint headers
    /// (`Language`, `Platform`) still take precedence.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client. The returned client is open.
    pub fn build(self) -> ApiResult<WarframeMarketClient> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let gateway = HttpGateway::new(
            self.base_url,
            self.timeout,
            self.user_agent.as_deref(),
            headers,
        )?;
        Ok(WarframeMarketClient::with_gateway(gateway))
    }
}

/// warframe.market REST API client.
///
/// Open on construction. [`close`](Self::close) releases the gateway; after
/// that every operation fails with [`ApiError::Closed`]. Dropping the client
/// releases it as well.
///
/// Successful responses are memoized per argument tuple for the life of the
/// client, so repeated calls return the same shared result.
pub struct WarframeMarketClient<G = HttpGateway> {
    gateway: RwLock<Option<Arc<G>>>,
    items_memo: Memo<Language, Arc<Vec<ItemShort>>>,
    item_memo: Memo<(String, Platform), Arc<Vec<ItemFull>>>,
    orders_memo: Memo<(String, bool, Platform), Arc<Included<OrderRow>>>,
}

impl WarframeMarketClient {
    /// Create a client with default settings (30s timeout, connection pooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        WarframeMarketClientBuilder::new().build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> WarframeMarketClientBuilder {
        WarframeMarketClientBuilder::new()
    }
}

impl<G: Gateway> WarframeMarketClient<G> {
    /// Wrap an existing gateway.
    pub fn with_gateway(gateway: G) -> Self {
        Self {
            gateway: RwLock::new(Some(Arc::new(gateway))),
            items_memo: Memo::new(),
            item_memo: Memo::new(),
            orders_memo: Memo::new(),
        }
    }

    /// Release the gateway. Idempotent; calls already in flight finish.
    pub async fn close(&self) {
        if self.gateway.write().await.take().is_some() {
            tracing::debug!("Client closed");
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.gateway.read().await.is_none()
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    async fn gateway(&self) -> ApiResult<Arc<G>> {
        self.gateway.read().await.clone().ok_or(ApiError::Closed)
    }

    async fn request(gateway: &G, endpoint: Endpoint<'_>) -> ApiResult<Value> {
        gateway
            .fetch(Method::GET, &endpoint.path(), endpoint.headers())
            .await
    }

    // =========================================================================
    // Item endpoints
    // =========================================================================

    /// Get every tradable item.
    ///
    /// `language` defaults to English and selects the `item_name` locale.
    pub async fn get_items(&self, language: Option<Language>) -> ApiResult<Arc<Vec<ItemShort>>> {
        let language = language.unwrap_or_default();
        let gateway = self.gateway().await?;

        self.items_memo
            .get_or_fetch(language, || async move {
                let root = Self::request(&gateway, Endpoint::Items { language }).await?;
                Ok(Arc::new(decode::items(&root)?))
            })
            .await
    }

    /// Get full details for an item.
    ///
    /// Items that are part of a set come back with the entire set, including
    /// the set object and blueprint where available. Match on `url_name` to
    /// pick out the queried item.
    pub async fn get_item(
        &self,
        name: &str,
        platform: Option<Platform>,
    ) -> ApiResult<Arc<Vec<ItemFull>>> {
        let platform = platform.unwrap_or_default();
        let gateway = self.gateway().await?;

        self.item_memo
            .get_or_fetch((name.to_string(), platform), || async move {
                let root = Self::request(&gateway, Endpoint::Item { name, platform }).await?;
                Ok(Arc::new(decode::item_set(&root)?))
            })
            .await
    }

    // =========================================================================
    // Order endpoints
    // =========================================================================

    /// Get the live orders for an item.
    ///
    /// With `include_items` the result also carries the item's set, as
    /// [`Included::WithItems`]; otherwise [`Included::Primary`].
    pub async fn get_orders(
        &self,
        name: &str,
        include_items: bool,
        platform: Option<Platform>,
    ) -> ApiResult<Arc<Included<OrderRow>>> {
        let platform = platform.unwrap_or_default();
        let gateway = self.gateway().await?;

        self.orders_memo
            .get_or_fetch((name.to_string(), include_items, platform), || async move {
                let endpoint = Endpoint::Orders {
                    name,
                    include_items,
                    platform,
                };
                let root = Self::request(&gateway, endpoint).await?;
                let orders = decode::orders(&root)?;
                let included = if endpoint.includes_items() {
                    Included::WithItems(orders, decode::included_items(&root)?)
                } else {
                    Included::Primary(orders)
                };
                Ok(Arc::new(included))
            })
            .await
    }

    // =========================================================================
    // Drop table endpoints
    // =========================================================================

    /// Get the drop table for an item.
    ///
    /// The upstream endpoint is currently non-functional, so this always
    /// returns [`ApiError::Unavailable`] without sending a request. Payloads
    /// obtained elsewhere can be read with [`decode::drop_tables`].
    pub async fn get_droptable(
        &self,
        name: &str,
        include_items: bool,
        language: Option<Language>,
    ) -> ApiResult<Included<DropTable>> {
        let endpoint = Endpoint::DropTables {
            name,
            include_items,
            language: language.unwrap_or_default(),
        };
        tracing::warn!(path = %endpoint.path(), "Drop table endpoint is unavailable upstream");
        Err(ApiError::Unavailable {
            endpoint: endpoint.path(),
        })
    }
}
