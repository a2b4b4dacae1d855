//! Insertion-order map capability.

use crate::map::{Result, ScalarKey, ScalarMap, ScalarValue};

/// Capability of maps that remember insertion order: endpoint access and
/// relocation of entries within the order.
///
/// `put` on an existing key updates the value in place without moving the
/// entry; only the `move_to_*` / `put_first` / `put_last` family changes an
/// entry's position.
pub trait OrderedScalarMap<K: ScalarKey, V: ScalarValue>: ScalarMap<K, V> {
    /// Entry at the front of the iteration order.
    fn first(&self) -> Option<(K, V)>;

    /// Entry at the back of the iteration order.
    fn last(&self) -> Option<(K, V)>;

    /// Remove and return the front entry.
    fn poll_first(&mut self) -> Result<Option<(K, V)>>;

    /// Remove and return the back entry.
    fn poll_last(&mut self) -> Result<Option<(K, V)>>;

    /// Relocate an existing entry to the front; `Ok(false)` when absent.
    fn move_to_first(&mut self, key: K) -> Result<bool>;

    /// Relocate an existing entry to the back; `Ok(false)` when absent.
    fn move_to_last(&mut self, key: K) -> Result<bool>;

    /// Insert or update, then place the entry at the front. Returns the
    /// previous value, or the default return value if the key was absent.
    fn put_first(&mut self, key: K, value: V) -> Result<V>;

    /// Insert or update, then place the entry at the back. Returns the
    /// previous value, or the default return value if the key was absent.
    fn put_last(&mut self, key: K, value: V) -> Result<V>;
}
