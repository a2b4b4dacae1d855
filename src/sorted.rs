//! Sorted + navigable map capability.

use core::ops::Bound;

use crate::map::{Result, ScalarKey, ScalarMap, ScalarValue};

/// Capability of maps kept in ascending key order: endpoint access,
/// navigation around a probe key, and range views.
///
/// Range views yield copied `(key, value)` pairs, so a view derived from any
/// map, wrapped or not, is read-only by construction; there is no path from
/// a range back into the map's storage.
pub trait SortedScalarMap<K: ScalarKey + Ord, V: ScalarValue>: ScalarMap<K, V> {
    /// Iterator over the entries of a key range, in ascending key order.
    type Range<'a>: Iterator<Item = (K, V)>
    where
        Self: 'a;

    fn first_key(&self) -> Option<K>;

    fn last_key(&self) -> Option<K>;

    /// Remove and return the least entry.
    fn poll_first(&mut self) -> Result<Option<(K, V)>>;

    /// Remove and return the greatest entry.
    fn poll_last(&mut self) -> Result<Option<(K, V)>>;

    /// Greatest key strictly less than `key`.
    fn lower_key(&self, key: K) -> Option<K>;

    /// Greatest key less than or equal to `key`.
    fn floor_key(&self, key: K) -> Option<K>;

    /// Least key greater than or equal to `key`.
    fn ceiling_key(&self, key: K) -> Option<K>;

    /// Least key strictly greater than `key`.
    fn higher_key(&self, key: K) -> Option<K>;

    fn range(&self, bounds: (Bound<K>, Bound<K>)) -> Self::Range<'_>;

    /// Entries with keys strictly below `to`.
    fn head(&self, to: K) -> Self::Range<'_> {
        self.range((Bound::Unbounded, Bound::Excluded(to)))
    }

    /// Entries with keys at or above `from`.
    fn tail(&self, from: K) -> Self::Range<'_> {
        self.range((Bound::Included(from), Bound::Unbounded))
    }

    /// Entries with `from <= key < to`. Panics if `from > to`.
    fn sub(&self, from: K, to: K) -> Self::Range<'_> {
        self.range((Bound::Included(from), Bound::Excluded(to)))
    }
}
