//! Request memoizer: one result per distinct request, kept for the life of
//! the client.
//!
//! Each key owns a `OnceCell`. Concurrent callers with the same key wait on
//! the first caller's fetch instead of issuing their own. A failed or
//! cancelled fetch leaves the cell empty, so the next call fetches again;
//! the last caller to give up on an empty cell removes it from the table.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OnceCell;

/// Unbounded memo table keyed by the full, defaulted argument tuple.
pub struct Memo<K, V> {
    cells: Cells<K, V>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }
}

type Cells<K, V> = Mutex<HashMap<K, Arc<OnceCell<V>>>>;

/// A caller's hold on a cell while its fetch runs. Dropping it, on error or
/// cancellation, evicts the cell if it is still empty and unshared.
struct Pending<'a, K: Eq + Hash, V> {
    cells: &'a Cells<K, V>,
    key: K,
    cell: Arc<OnceCell<V>>,
}

impl<K: Eq + Hash, V> Drop for Pending<'_, K, V> {
    fn drop(&mut self) {
        if self.cell.initialized() {
            return;
        }
        let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        // Map entry plus ours; any other holder is still waiting on it.
        let unshared = cells
            .get(&self.key)
            .is_some_and(|cell| Arc::ptr_eq(cell, &self.cell) && Arc::strong_count(cell) == 2);
        if unshared {
            cells.remove(&self.key);
        }
    }
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored value for `key`, or run `fetch` and store its
    /// success. Errors are returned to this caller and never stored.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cell = {
            let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(value) = cells.get(&key).and_then(|cell| cell.get()) {
                tracing::debug!(key = ?key, "Memo hit");
                return Ok(value.clone());
            }
            tracing::debug!(key = ?key, "Memo miss");
            cells.entry(key.clone()).or_default().clone()
        };

        let pending = Pending {
            cells: &self.cells,
            key,
            cell,
        };
        let result = pending.cell.get_or_try_init(fetch).await.cloned();
        drop(pending);
        result
    }

    /// Number of resolved entries.
    pub fn len(&self) -> usize {
        self.cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` has a stored value.
    pub fn contains(&self, key: &K) -> bool {
        self.cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .is_some_and(|cell| cell.initialized())
    }
}
