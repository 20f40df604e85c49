//! REST API client module for warframe.market.
//!
//! This module maps the documented item, order and drop table endpoints to
//! typed results.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use warframe_market::api::WarframeMarketClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WarframeMarketClient::new()?;
//!
//!     // Every item in the requested language
//!     let items = client.get_items(None).await?;
//!     println!("Found {} items", items.len());
//!
//!     // An item and the rest of its set
//!     let set = client.get_item("Mirage Prime Systems", None).await?;
//!     println!("Set has {} parts", set.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use warframe_market::api::WarframeMarketClient;
//! use std::time::Duration;
//!
//! let client = WarframeMarketClient::builder()
//!     .timeout(Duration::from_secs(10))
//!     .user_agent("my-trading-bot/1.0")
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`, an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use warframe_market::api::ApiError;
//!
//! match client.get_item("Not An Item", None).await {
//!     Ok(set) => println!("{} parts", set.len()),
//!     Err(e) if e.is_not_found() => println!("No such item"),
//!     Err(ApiError::Closed) => println!("Client already closed"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! # Included items
//!
//! Orders can be requested together with the item's set. The result is an
//! [`Included`] holding both collections side by side:
//!
//! ```rust,ignore
//! let orders = client.get_orders("Lex Prime Set", true, None).await?;
//! if let Included::WithItems(rows, items) = orders.as_ref() {
//!     println!("{} orders for {} set items", rows.len(), items.len());
//! }
//! ```

pub mod client;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod memo;
pub mod types;

// Re-export main types for convenience
pub use client::{WarframeMarketClient, WarframeMarketClientBuilder};
pub use endpoint::Endpoint;
pub use error::{ApiError, ApiResult, StatusKind, TransportError};
pub use gateway::{merge_headers, Gateway, HttpGateway};
pub use memo::Memo;
pub use types::*;
