//! OpenHashMap: hashbrown-backed base store with a configurable default
//! return value.

use core::hash::BuildHasher;
use std::collections::hash_map::RandomState;

use crate::map::{Result, ScalarKey, ScalarMap, ScalarValue};

/// Unordered hash store. The open-addressing table itself is hashbrown's;
/// this type contributes the default-return-value contract and the
/// `ScalarMap` capability surface.
#[derive(Debug, Clone)]
pub struct OpenHashMap<K, V, S = RandomState> {
    table: hashbrown::HashMap<K, V, S>,
    drv: V,
}

impl<K, V> OpenHashMap<K, V>
where
    K: ScalarKey,
    V: ScalarValue + Default,
{
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: hashbrown::HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            drv: V::default(),
        }
    }
}

impl<K, V> Default for OpenHashMap<K, V>
where
    K: ScalarKey,
    V: ScalarValue + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> OpenHashMap<K, V, S>
where
    K: ScalarKey,
    V: ScalarValue,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self
    where
        V: Default,
    {
        Self {
            table: hashbrown::HashMap::with_hasher(hasher),
            drv: V::default(),
        }
    }

    /// Construct with a caller-chosen default return value instead of
    /// `V::default()`.
    pub fn with_default_return_value(drv: V) -> Self
    where
        S: Default,
    {
        Self {
            table: hashbrown::HashMap::with_hasher(S::default()),
            drv,
        }
    }
}

/// Iterator over copied entries of an `OpenHashMap`.
pub struct Entries<'a, K, V> {
    it: hashbrown::hash_map::Iter<'a, K, V>,
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

impl<K, V, S> ScalarMap<K, V> for OpenHashMap<K, V, S>
where
    K: ScalarKey,
    V: ScalarValue,
    S: BuildHasher,
{
    type Entries<'a>
        = Entries<'a, K, V>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.table.len()
    }

    fn default_return_value(&self) -> V {
        self.drv
    }

    fn set_default_return_value(&mut self, value: V) -> Result<()> {
        self.drv = value;
        Ok(())
    }

    fn contains_key(&self, key: K) -> bool {
        self.table.contains_key(&key)
    }

    fn get_opt(&self, key: K) -> Option<V> {
        self.table.get(&key).copied()
    }

    fn put(&mut self, key: K, value: V) -> Result<V> {
        Ok(self.table.insert(key, value).unwrap_or(self.drv))
    }

    fn remove(&mut self, key: K) -> Result<V> {
        Ok(self.table.remove(&key).unwrap_or(self.drv))
    }

    fn clear(&mut self) -> Result<()> {
        self.table.clear();
        Ok(())
    }

    fn entries(&self) -> Self::Entries<'_> {
        Entries {
            it: self.table.iter(),
        }
    }

    fn for_each<F: FnMut(K, V)>(&self, mut f: F) {
        // Direct table walk; skips the copying adapter.
        for (&k, &v) in self.table.iter() {
            f(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OpenHashMap<K, V, S>
where
    K: ScalarKey,
    V: ScalarValue + Default,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
            drv: V::default(),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for OpenHashMap<K, V, S>
where
    K: ScalarKey,
    V: ScalarValue,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.table.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: `get` is total: absent keys yield the configured default
    /// return value, present keys the stored value, and the two are
    /// distinguishable through `get_opt` even when they collide.
    #[test]
    fn total_get_and_exact_presence() {
        let mut m: OpenHashMap<char, i32> = OpenHashMap::new();
        assert_eq!(m.get('a'), 0);
        m.put('a', 7).unwrap();
        assert_eq!(m.get('a'), 7);

        m.set_default_return_value(-1).unwrap();
        assert_eq!(m.get('b'), -1);

        // A value equal to the drv is still "present".
        m.put('c', -1).unwrap();
        assert_eq!(m.get('c'), -1);
        assert_eq!(m.get_opt('c'), Some(-1));
        assert_eq!(m.get_opt('b'), None);
    }

    /// Invariant: `put` returns the previous value, or the drv for a fresh
    /// key; `remove` mirrors that.
    #[test]
    fn put_and_remove_report_previous_values() {
        let mut m: OpenHashMap<u8, u64> = OpenHashMap::with_default_return_value(99);
        assert_eq!(m.put(1, 10).unwrap(), 99);
        assert_eq!(m.put(1, 20).unwrap(), 10);
        assert_eq!(m.remove(1).unwrap(), 20);
        assert_eq!(m.remove(1).unwrap(), 99);
        assert!(m.is_empty());
    }

    /// Invariant: `for_each` visits exactly the entries `entries()` yields.
    #[test]
    fn for_each_matches_entries() {
        let mut m: OpenHashMap<u16, u16> = OpenHashMap::new();
        for i in 0..50 {
            m.put(i, i * 2).unwrap();
        }
        let mut seen = Vec::new();
        m.for_each(|k, v| seen.push((k, v)));
        seen.sort_unstable();
        let mut expected: Vec<(u16, u16)> = m.entries().collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }

    /// Invariant: collecting from an iterator builds the same contents as
    /// repeated `put`.
    #[test]
    fn from_iterator_round_trip() {
        let pairs = [(1u32, 'a'), (2, 'b'), (3, 'c')];
        let m: OpenHashMap<u32, char> = pairs.iter().copied().collect();
        assert_eq!(m.len(), 3);
        for (k, v) in pairs {
            assert_eq!(m.get_opt(k), Some(v));
        }
    }
}
