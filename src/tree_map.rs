//! TreeMap: B-tree-backed sorted store with navigation.

use core::ops::Bound;
use std::collections::BTreeMap;

use crate::map::{Result, ScalarKey, ScalarMap, ScalarValue};
use crate::sorted::SortedScalarMap;

/// Sorted store. Keys are kept in ascending order; navigation and range
/// views are answered with single tree probes.
#[derive(Debug, Clone)]
pub struct TreeMap<K, V> {
    tree: BTreeMap<K, V>,
    drv: V,
}

impl<K, V> TreeMap<K, V>
where
    K: ScalarKey + Ord,
    V: ScalarValue + Default,
{
    pub fn new() -> Self {
        Self {
            tree: BTreeMap::new(),
            drv: V::default(),
        }
    }
}

impl<K, V> Default for TreeMap<K, V>
where
    K: ScalarKey + Ord,
    V: ScalarValue + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TreeMap<K, V>
where
    K: ScalarKey + Ord,
    V: ScalarValue,
{
    /// Construct with a caller-chosen default return value instead of
    /// `V::default()`.
    pub fn with_default_return_value(drv: V) -> Self {
        Self {
            tree: BTreeMap::new(),
            drv,
        }
    }
}

/// Iterator over copied entries of a `TreeMap`, in ascending key order.
pub struct Entries<'a, K, V> {
    it: std::collections::btree_map::Iter<'a, K, V>,
}

impl<'a, K: Copy, V: Copy> Iterator for Entries<'a, K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        self.it.next().map(|(&k, &v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// Iterator over a key range of a `TreeMap`, in ascending key order.
pub struct Range<'a, K, V> {
    it: std::collections::btree_map::Range<'a, K, V>,
}

impl<'a, K: Copy, V: Copy> Iterator for Range<'a, K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        self.it.next().map(|(&k, &v)| (k, v))
    }
}

impl<K, V> ScalarMap<K, V> for TreeMap<K, V>
where
    K: ScalarKey + Ord,
    V: ScalarValue,
{
    type Entries<'a>
        = Entries<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn default_return_value(&self) -> V {
        self.drv
    }

    fn set_default_return_value(&mut self, value: V) -> Result<()> {
        self.drv = value;
        Ok(())
    }

    fn contains_key(&self, key: K) -> bool {
        self.tree.contains_key(&key)
    }

    fn get_opt(&self, key: K) -> Option<V> {
        self.tree.get(&key).copied()
    }

    fn put(&mut self, key: K, value: V) -> Result<V> {
        Ok(self.tree.insert(key, value).unwrap_or(self.drv))
    }

    fn remove(&mut self, key: K) -> Result<V> {
        Ok(self.tree.remove(&key).unwrap_or(self.drv))
    }

    fn clear(&mut self) -> Result<()> {
        self.tree.clear();
        Ok(())
    }

    fn entries(&self) -> Self::Entries<'_> {
        Entries {
            it: self.tree.iter(),
        }
    }

    fn for_each<F: FnMut(K, V)>(&self, mut f: F) {
        for (&k, &v) in self.tree.iter() {
            f(k, v);
        }
    }
}

impl<K, V> SortedScalarMap<K, V> for TreeMap<K, V>
where
    K: ScalarKey + Ord,
    V: ScalarValue,
{
    type Range<'a>
        = Range<'a, K, V>
    where
        Self: 'a;

    fn first_key(&self) -> Option<K> {
        self.tree.keys().next().copied()
    }

    fn last_key(&self) -> Option<K> {
        self.tree.keys().next_back().copied()
    }

    fn poll_first(&mut self) -> Result<Option<(K, V)>> {
        Ok(self.tree.pop_first())
    }

    fn poll_last(&mut self) -> Result<Option<(K, V)>> {
        Ok(self.tree.pop_last())
    }

    fn lower_key(&self, key: K) -> Option<K> {
        self.tree.range(..key).next_back().map(|(&k, _)| k)
    }

    fn floor_key(&self, key: K) -> Option<K> {
        self.tree.range(..=key).next_back().map(|(&k, _)| k)
    }

    fn ceiling_key(&self, key: K) -> Option<K> {
        self.tree.range(key..).next().map(|(&k, _)| k)
    }

    fn higher_key(&self, key: K) -> Option<K> {
        self.tree
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|(&k, _)| k)
    }

    fn range(&self, bounds: (Bound<K>, Bound<K>)) -> Self::Range<'_> {
        Range {
            it: self.tree.range(bounds),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for TreeMap<K, V>
where
    K: ScalarKey + Ord,
    V: ScalarValue + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
            drv: V::default(),
        }
    }
}

impl<K, V> Extend<(K, V)> for TreeMap<K, V>
where
    K: ScalarKey + Ord,
    V: ScalarValue,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}
