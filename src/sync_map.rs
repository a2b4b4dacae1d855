//! Mutex-guarded wrapper sharing one lock handle across the map and all of
//! its views.

use core::ops::Bound;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::map::{Result, ScalarKey, ScalarMap, ScalarValue};
use crate::ordered::OrderedScalarMap;
use crate::sorted::SortedScalarMap;

/// Wraps a map behind an `Arc<Mutex<_>>`. Every operation acquires the lock,
/// delegates, and releases it; cloning the wrapper and deriving views share
/// the same handle, so all access paths to the inner map serialize on one
/// mutex.
///
/// Traversal through the [`ScalarMap`] surface snapshots the entries inside
/// a single critical section. For a live traversal that must be consistent
/// with surrounding operations, take [`SyncMap::lock`] and iterate the plain
/// map through the guard; iterators themselves are never synchronized.
pub struct SyncMap<M> {
    shared: Arc<Mutex<M>>,
}

impl<M> SyncMap<M> {
    pub fn new(map: M) -> Self {
        Self {
            shared: Arc::new(Mutex::new(map)),
        }
    }

    /// Build from a caller-supplied lock handle. Wrappers and views
    /// constructed from the same handle serialize against each other.
    pub fn from_shared(shared: Arc<Mutex<M>>) -> Self {
        Self { shared }
    }

    /// The lock handle this wrapper and all of its views synchronize on.
    pub fn shared(&self) -> &Arc<Mutex<M>> {
        &self.shared
    }

    /// Acquire the lock for a manual critical section.
    pub fn lock(&self) -> MutexGuard<'_, M> {
        self.shared.lock()
    }

    /// Copy of the inner map taken under the lock. The copy is plain, not
    /// synchronized.
    pub fn snapshot(&self) -> M
    where
        M: Clone,
    {
        self.shared.lock().clone()
    }

    /// Key view sharing this wrapper's lock handle.
    pub fn key_view(&self) -> SyncKeys<M> {
        SyncKeys {
            shared: self.shared.clone(),
        }
    }

    /// Value view sharing this wrapper's lock handle.
    pub fn value_view(&self) -> SyncValues<M> {
        SyncValues {
            shared: self.shared.clone(),
        }
    }

    /// Entry view sharing this wrapper's lock handle.
    pub fn entry_view(&self) -> SyncEntries<M> {
        SyncEntries {
            shared: self.shared.clone(),
        }
    }
}

impl<M> Clone for SyncMap<M> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<K, V, M> ScalarMap<K, V> for SyncMap<M>
where
    K: ScalarKey,
    V: ScalarValue,
    M: ScalarMap<K, V>,
{
    // Entries cannot borrow through a lock guard; trait traversal is a
    // snapshot collected in one critical section.
    type Entries<'a>
        = std::vec::IntoIter<(K, V)>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.shared.lock().len()
    }

    fn is_empty(&self) -> bool {
        self.shared.lock().is_empty()
    }

    fn default_return_value(&self) -> V {
        self.shared.lock().default_return_value()
    }

    fn set_default_return_value(&mut self, value: V) -> Result<()> {
        self.shared.lock().set_default_return_value(value)
    }

    fn contains_key(&self, key: K) -> bool {
        self.shared.lock().contains_key(key)
    }

    fn contains_value(&self, value: V) -> bool {
        self.shared.lock().contains_value(value)
    }

    fn get_opt(&self, key: K) -> Option<V> {
        self.shared.lock().get_opt(key)
    }

    fn get(&self, key: K) -> V {
        self.shared.lock().get(key)
    }

    fn get_or(&self, key: K, fallback: V) -> V {
        self.shared.lock().get_or(key, fallback)
    }

    fn put(&mut self, key: K, value: V) -> Result<V> {
        self.shared.lock().put(key, value)
    }

    fn remove(&mut self, key: K) -> Result<V> {
        self.shared.lock().remove(key)
    }

    fn clear(&mut self) -> Result<()> {
        self.shared.lock().clear()
    }

    fn entries(&self) -> Self::Entries<'_> {
        let guard = self.shared.lock();
        guard.entries().collect::<Vec<_>>().into_iter()
    }

    fn for_each<F: FnMut(K, V)>(&self, f: F) {
        // One critical section for the whole traversal.
        self.shared.lock().for_each(f)
    }

    // The derived mutators re-delegate as single calls so the whole compound
    // runs under one acquisition, keeping the inner operation's atomicity.

    fn put_if_absent(&mut self, key: K, value: V) -> Result<V> {
        self.shared.lock().put_if_absent(key, value)
    }

    fn replace(&mut self, key: K, value: V) -> Result<V> {
        self.shared.lock().replace(key, value)
    }

    fn compute_if_absent<F: FnOnce(K) -> V>(&mut self, key: K, f: F) -> Result<V> {
        self.shared.lock().compute_if_absent(key, f)
    }

    fn compute_if_present<F: FnOnce(K, V) -> Option<V>>(
        &mut self,
        key: K,
        f: F,
    ) -> Result<Option<V>> {
        self.shared.lock().compute_if_present(key, f)
    }

    fn merge<F: FnOnce(V, V) -> V>(&mut self, key: K, value: V, f: F) -> Result<V> {
        self.shared.lock().merge(key, value, f)
    }

    fn put_all<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) -> Result<()> {
        self.shared.lock().put_all(iter)
    }
}

impl<K, V, M> SortedScalarMap<K, V> for SyncMap<M>
where
    K: ScalarKey + Ord,
    V: ScalarValue,
    M: SortedScalarMap<K, V>,
{
    type Range<'a>
        = std::vec::IntoIter<(K, V)>
    where
        Self: 'a;

    fn first_key(&self) -> Option<K> {
        self.shared.lock().first_key()
    }

    fn last_key(&self) -> Option<K> {
        self.shared.lock().last_key()
    }

    fn poll_first(&mut self) -> Result<Option<(K, V)>> {
        self.shared.lock().poll_first()
    }

    fn poll_last(&mut self) -> Result<Option<(K, V)>> {
        self.shared.lock().poll_last()
    }

    fn lower_key(&self, key: K) -> Option<K> {
        self.shared.lock().lower_key(key)
    }

    fn floor_key(&self, key: K) -> Option<K> {
        self.shared.lock().floor_key(key)
    }

    fn ceiling_key(&self, key: K) -> Option<K> {
        self.shared.lock().ceiling_key(key)
    }

    fn higher_key(&self, key: K) -> Option<K> {
        self.shared.lock().higher_key(key)
    }

    fn range(&self, bounds: (Bound<K>, Bound<K>)) -> Self::Range<'_> {
        let guard = self.shared.lock();
        guard.range(bounds).collect::<Vec<_>>().into_iter()
    }
}

impl<K, V, M> OrderedScalarMap<K, V> for SyncMap<M>
where
    K: ScalarKey,
    V: ScalarValue,
    M: OrderedScalarMap<K, V>,
{
    fn first(&self) -> Option<(K, V)> {
        self.shared.lock().first()
    }

    fn last(&self) -> Option<(K, V)> {
        self.shared.lock().last()
    }

    fn poll_first(&mut self) -> Result<Option<(K, V)>> {
        self.shared.lock().poll_first()
    }

    fn poll_last(&mut self) -> Result<Option<(K, V)>> {
        self.shared.lock().poll_last()
    }

    fn move_to_first(&mut self, key: K) -> Result<bool> {
        self.shared.lock().move_to_first(key)
    }

    fn move_to_last(&mut self, key: K) -> Result<bool> {
        self.shared.lock().move_to_last(key)
    }

    fn put_first(&mut self, key: K, value: V) -> Result<V> {
        self.shared.lock().put_first(key, value)
    }

    fn put_last(&mut self, key: K, value: V) -> Result<V> {
        self.shared.lock().put_last(key, value)
    }
}

/// Key view over a synchronized map. Holds the same lock handle as the
/// wrapper it came from.
pub struct SyncKeys<M> {
    shared: Arc<Mutex<M>>,
}

impl<M> SyncKeys<M> {
    /// The shared lock handle.
    pub fn shared(&self) -> &Arc<Mutex<M>> {
        &self.shared
    }

    pub fn len<K, V>(&self) -> usize
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
    {
        self.shared.lock().len()
    }

    pub fn contains<K, V>(&self, key: K) -> bool
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
    {
        self.shared.lock().contains_key(key)
    }

    pub fn for_each<K, V, F>(&self, mut f: F)
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
        F: FnMut(K),
    {
        self.shared.lock().for_each(|k, _| f(k))
    }

    /// Keys snapshot taken in one critical section.
    pub fn to_vec<K, V>(&self) -> Vec<K>
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
    {
        let guard = self.shared.lock();
        guard.keys().collect()
    }
}

impl<M> Clone for SyncKeys<M> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

/// Value view over a synchronized map. Holds the same lock handle as the
/// wrapper it came from.
pub struct SyncValues<M> {
    shared: Arc<Mutex<M>>,
}

impl<M> SyncValues<M> {
    /// The shared lock handle.
    pub fn shared(&self) -> &Arc<Mutex<M>> {
        &self.shared
    }

    pub fn len<K, V>(&self) -> usize
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
    {
        self.shared.lock().len()
    }

    pub fn contains<K, V>(&self, value: V) -> bool
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
    {
        self.shared.lock().contains_value(value)
    }

    pub fn for_each<K, V, F>(&self, mut f: F)
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
        F: FnMut(V),
    {
        self.shared.lock().for_each(|_, v| f(v))
    }

    /// Values snapshot taken in one critical section.
    pub fn to_vec<K, V>(&self) -> Vec<V>
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
    {
        let guard = self.shared.lock();
        guard.values().collect()
    }
}

impl<M> Clone for SyncValues<M> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

/// Entry view over a synchronized map. Holds the same lock handle as the
/// wrapper it came from.
pub struct SyncEntries<M> {
    shared: Arc<Mutex<M>>,
}

impl<M> SyncEntries<M> {
    /// The shared lock handle.
    pub fn shared(&self) -> &Arc<Mutex<M>> {
        &self.shared
    }

    pub fn len<K, V>(&self) -> usize
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
    {
        self.shared.lock().len()
    }

    pub fn for_each<K, V, F>(&self, f: F)
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
        F: FnMut(K, V),
    {
        self.shared.lock().for_each(f)
    }

    /// Entries snapshot taken in one critical section.
    pub fn to_vec<K, V>(&self) -> Vec<(K, V)>
    where
        K: ScalarKey,
        V: ScalarValue,
        M: ScalarMap<K, V>,
    {
        let guard = self.shared.lock();
        guard.entries().collect()
    }
}

impl<M> Clone for SyncEntries<M> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}
