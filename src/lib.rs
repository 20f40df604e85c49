//! # warframe.market Rust SDK
//!
//! A typed client for the warframe.market REST API: items, orders and drop
//! tables.
//!
//! ## Modules
//!
//! - [`api`]: REST client, response types, errors
//! - [`shared`]: `Language` / `Platform` parameters and the item name → slug formatter
//! - [`network`]: API root constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use warframe_market::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     let client = WarframeMarketClient::new()?;
//!
//!     let orders = client
//!         .get_orders("Mirage Prime Systems", false, Some(Platform::Pc))
//!         .await?;
//!     let cheapest = orders
//!         .primary()
//!         .iter()
//!         .filter(|o| o.is_sell())
//!         .map(|o| o.platinum)
//!         .min();
//!     println!("Cheapest sell order: {:?}p", cheapest);
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants.
pub mod network;

/// Shared parameter types and the slug formatter.
pub mod shared;

/// REST API client.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, DropTable, Gateway, HttpGateway, Included, ItemFull, ItemShort,
        OrderRow, OrderType, StatusKind, WarframeMarketClient, WarframeMarketClientBuilder,
    };
    pub use crate::network::DEFAULT_API_URL;
    pub use crate::shared::{format_name, Language, Platform};
}
