//! Read-only wrapper view.

use core::ops::Bound;

use crate::map::{Result, ScalarKey, ScalarMap, ScalarValue, Unsupported};
use crate::ordered::OrderedScalarMap;
use crate::sorted::SortedScalarMap;

/// Wraps a map and narrows it to reads: every lookup and traversal passes
/// through unchanged, every mutator fails with [`Unsupported`] and leaves
/// the inner map untouched. Whatever capability the inner map has (base,
/// sorted, ordered) the wrapper keeps, minus the writes.
///
/// The wrapper owns its inner map. To keep mutating an original while
/// handing out read-only views of it, wrap a shared reference:
/// `ReadOnly::new(&m)`. Views derived from the wrapper (`keys`, `values`,
/// `entries`, ranges) yield copied pairs, so there is no mutation path
/// through them either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOnly<M> {
    inner: M,
}

impl<M> ReadOnly<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<K, V, M> ScalarMap<K, V> for ReadOnly<M>
where
    K: ScalarKey,
    V: ScalarValue,
    M: ScalarMap<K, V>,
{
    type Entries<'a>
        = M::Entries<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn default_return_value(&self) -> V {
        self.inner.default_return_value()
    }

    fn set_default_return_value(&mut self, _value: V) -> Result<()> {
        Err(Unsupported("set_default_return_value"))
    }

    fn contains_key(&self, key: K) -> bool {
        self.inner.contains_key(key)
    }

    fn contains_value(&self, value: V) -> bool {
        self.inner.contains_value(value)
    }

    fn get_opt(&self, key: K) -> Option<V> {
        self.inner.get_opt(key)
    }

    fn get(&self, key: K) -> V {
        self.inner.get(key)
    }

    fn get_or(&self, key: K, fallback: V) -> V {
        self.inner.get_or(key, fallback)
    }

    fn put(&mut self, _key: K, _value: V) -> Result<V> {
        Err(Unsupported("put"))
    }

    fn remove(&mut self, _key: K) -> Result<V> {
        Err(Unsupported("remove"))
    }

    fn clear(&mut self) -> Result<()> {
        Err(Unsupported("clear"))
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.inner.entries()
    }

    fn for_each<F: FnMut(K, V)>(&self, f: F) {
        // Delegation keeps the inner map's fast traversal path.
        self.inner.for_each(f)
    }

    fn put_if_absent(&mut self, _key: K, _value: V) -> Result<V> {
        Err(Unsupported("put_if_absent"))
    }

    fn replace(&mut self, _key: K, _value: V) -> Result<V> {
        Err(Unsupported("replace"))
    }

    fn compute_if_absent<F: FnOnce(K) -> V>(&mut self, _key: K, _f: F) -> Result<V> {
        Err(Unsupported("compute_if_absent"))
    }

    fn compute_if_present<F: FnOnce(K, V) -> Option<V>>(
        &mut self,
        _key: K,
        _f: F,
    ) -> Result<Option<V>> {
        Err(Unsupported("compute_if_present"))
    }

    fn merge<F: FnOnce(V, V) -> V>(&mut self, _key: K, _value: V, _f: F) -> Result<V> {
        Err(Unsupported("merge"))
    }

    fn put_all<I: IntoIterator<Item = (K, V)>>(&mut self, _iter: I) -> Result<()> {
        Err(Unsupported("put_all"))
    }
}

impl<K, V, M> SortedScalarMap<K, V> for ReadOnly<M>
where
    K: ScalarKey + Ord,
    V: ScalarValue,
    M: SortedScalarMap<K, V>,
{
    type Range<'a>
        = M::Range<'a>
    where
        Self: 'a;

    fn first_key(&self) -> Option<K> {
        self.inner.first_key()
    }

    fn last_key(&self) -> Option<K> {
        self.inner.last_key()
    }

    fn poll_first(&mut self) -> Result<Option<(K, V)>> {
        Err(Unsupported("poll_first"))
    }

    fn poll_last(&mut self) -> Result<Option<(K, V)>> {
        Err(Unsupported("poll_last"))
    }

    fn lower_key(&self, key: K) -> Option<K> {
        self.inner.lower_key(key)
    }

    fn floor_key(&self, key: K) -> Option<K> {
        self.inner.floor_key(key)
    }

    fn ceiling_key(&self, key: K) -> Option<K> {
        self.inner.ceiling_key(key)
    }

    fn higher_key(&self, key: K) -> Option<K> {
        self.inner.higher_key(key)
    }

    fn range(&self, bounds: (Bound<K>, Bound<K>)) -> Self::Range<'_> {
        self.inner.range(bounds)
    }
}

impl<K, V, M> OrderedScalarMap<K, V> for ReadOnly<M>
where
    K: ScalarKey,
    V: ScalarValue,
    M: OrderedScalarMap<K, V>,
{
    fn first(&self) -> Option<(K, V)> {
        self.inner.first()
    }

    fn last(&self) -> Option<(K, V)> {
        self.inner.last()
    }

    fn poll_first(&mut self) -> Result<Option<(K, V)>> {
        Err(Unsupported("poll_first"))
    }

    fn poll_last(&mut self) -> Result<Option<(K, V)>> {
        Err(Unsupported("poll_last"))
    }

    fn move_to_first(&mut self, _key: K) -> Result<bool> {
        Err(Unsupported("move_to_first"))
    }

    fn move_to_last(&mut self, _key: K) -> Result<bool> {
        Err(Unsupported("move_to_last"))
    }

    fn put_first(&mut self, _key: K, _value: V) -> Result<V> {
        Err(Unsupported("put_first"))
    }

    fn put_last(&mut self, _key: K, _value: V) -> Result<V> {
        Err(Unsupported("put_last"))
    }
}
