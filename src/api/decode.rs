//! Response decoders: raw JSON envelopes → typed records.
//!
//! Pure functions over `serde_json::Value`. A missing envelope key or a
//! record with a missing/mistyped required field fails the whole decode with
//! [`ApiError::Decode`]; nothing is partially returned.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{DropTable, ItemFull, ItemShort, OrderRow};

pub(crate) const ITEMS: &str = "/payload/items";
pub(crate) const ITEM_SET: &str = "/payload/item/items_in_set";
pub(crate) const ORDERS: &str = "/payload/orders";
pub(crate) const DROPTABLES: &str = "/payload/droptables";
pub(crate) const INCLUDED_SET: &str = "/include/item/items_in_set";

/// Look up `pointer` in `root`.
pub fn node<'a>(root: &'a Value, pointer: &str) -> ApiResult<&'a Value> {
    root.pointer(pointer).ok_or_else(|| {
        ApiError::decode(
            pointer,
            serde_json::Error::custom(format!("missing `{}` in response", pointer)),
        )
    })
}

/// Decode a single record.
pub fn record<T: DeserializeOwned>(value: &Value, context: &str) -> ApiResult<T> {
    T::deserialize(value).map_err(|e| ApiError::decode(context, e))
}

/// Decode the array at `pointer` element-wise, preserving order.
pub fn list<T: DeserializeOwned>(root: &Value, pointer: &str) -> ApiResult<Vec<T>> {
    let rows = node(root, pointer)?.as_array().ok_or_else(|| {
        ApiError::decode(
            pointer,
            serde_json::Error::custom(format!("`{}` is not an array", pointer)),
        )
    })?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| record(row, &format!("{}/{}", pointer, i)))
        .collect()
}

/// `GET /items`
pub fn items(root: &Value) -> ApiResult<Vec<ItemShort>> {
    list(root, ITEMS)
}

/// `GET /items/{slug}`
pub fn item_set(root: &Value) -> ApiResult<Vec<ItemFull>> {
    list(root, ITEM_SET)
}

/// `GET /items/{slug}/orders`
pub fn orders(root: &Value) -> ApiResult<Vec<OrderRow>> {
    list(root, ORDERS)
}

/// The `include.item.items_in_set` block of an `?include=item` response.
pub fn included_items(root: &Value) -> ApiResult<Vec<ItemFull>> {
    list(root, INCLUDED_SET)
}

/// `GET /items/{slug}/droptables`. Accepts either a list of tables or a
/// single table object.
pub fn drop_tables(root: &Value) -> ApiResult<Vec<DropTable>> {
    match node(root, DROPTABLES)? {
        Value::Array(_) => list(root, DROPTABLES),
        single => Ok(vec![record(single, DROPTABLES)?]),
    }
}
