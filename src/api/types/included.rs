//! Two-shape result of endpoints that accept `?include=item`.

use super::item::ItemFull;

/// Result of an endpoint that can expand related items.
///
/// Without the include flag only the primary collection is returned. With it,
/// the related set items come back alongside, kept as a separate collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Included<T> {
    Primary(Vec<T>),
    WithItems(Vec<T>, Vec<ItemFull>),
}

impl<T> Included<T> {
    /// The primary collection, in source order.
    pub fn primary(&self) -> &[T] {
        match self {
            Self::Primary(rows) | Self::WithItems(rows, _) => rows,
        }
    }

    /// Related items, present only when requested.
    pub fn items(&self) -> Option<&[ItemFull]> {
        match self {
            Self::Primary(_) => None,
            Self::WithItems(_, items) => Some(items),
        }
    }

    pub fn has_items(&self) -> bool {
        matches!(self, Self::WithItems(..))
    }

    pub fn into_parts(self) -> (Vec<T>, Option<Vec<ItemFull>>) {
        match self {
            Self::Primary(rows) => (rows, None),
            Self::WithItems(rows, items) => (rows, Some(items)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_shape() {
        let included: Included<u32> = Included::Primary(vec![1, 2, 3]);
        assert_eq!(included.primary(), &[1, 2, 3]);
        assert!(included.items().is_none());
        assert!(!included.has_items());
        assert_eq!(included.into_parts(), (vec![1, 2, 3], None));
    }

    #[test]
    fn test_with_items_shape() {
        let included: Included<u32> = Included::WithItems(vec![7], Vec::new());
        assert_eq!(included.primary(), &[7]);
        assert_eq!(included.items().map(<[ItemFull]>::len), Some(0));
        assert!(included.has_items());
    }
}
