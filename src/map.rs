//! Base map capability: scalar keys, scalar values, per-instance default
//! return value.

use core::hash::Hash;

/// Bound alias for key types: fixed-width scalars, or anything else that is
/// free to copy, comparable, and hashable.
pub trait ScalarKey: Copy + Eq + Hash {}
impl<T: Copy + Eq + Hash> ScalarKey for T {}

/// Bound alias for value types.
pub trait ScalarValue: Copy + PartialEq {}
impl<T: Copy + PartialEq> ScalarValue for T {}

/// Failure signal for operations a container refuses to perform: mutating a
/// read-only view, or reconfiguring a sentinel. The payload names the
/// rejected operation. The signal is deterministic; retrying the same call
/// can never succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation `{0}` is not supported by this map view")]
pub struct Unsupported(pub &'static str);

pub type Result<T> = core::result::Result<T, Unsupported>;

/// The base map capability.
///
/// Lookups are total: `get` returns the map's configured *default return
/// value* for absent keys instead of an `Option`, with `get_opt` as the
/// exact-presence query. Mutators are fallible so that read-only views stay
/// substitutable for the maps they wrap while rejecting writes.
///
/// The derived mutator family (`put_if_absent`, `replace`, `compute_*`,
/// `merge`, `put_all`) is supplied here once, in terms of the primitive
/// operations, so every store agrees on its semantics. Wrappers that reject
/// writes override the whole family rather than letting a default silently
/// degrade into a partial no-op.
pub trait ScalarMap<K: ScalarKey, V: ScalarValue> {
    /// Iterator over `(key, value)` pairs. Entries are copied out, never
    /// borrowed, so a yielded pair stays valid for as long as the caller
    /// wants it.
    type Entries<'a>: Iterator<Item = (K, V)>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value `get` yields for absent keys. Per instance, not a
    /// language-level null.
    fn default_return_value(&self) -> V;

    /// Reconfigure the default return value. Immutable containers refuse.
    fn set_default_return_value(&mut self, value: V) -> Result<()>;

    fn contains_key(&self, key: K) -> bool {
        self.get_opt(key).is_some()
    }

    fn contains_value(&self, value: V) -> bool {
        self.entries().any(|(_, v)| v == value)
    }

    /// Exact-presence lookup.
    fn get_opt(&self, key: K) -> Option<V>;

    /// Total lookup: absent keys yield the default return value.
    fn get(&self, key: K) -> V {
        self.get_opt(key)
            .unwrap_or_else(|| self.default_return_value())
    }

    /// Total lookup with a caller-supplied fallback instead of the
    /// configured one.
    fn get_or(&self, key: K, fallback: V) -> V {
        self.get_opt(key).unwrap_or(fallback)
    }

    /// Insert or update. Returns the previous value, or the default return
    /// value if the key was absent.
    fn put(&mut self, key: K, value: V) -> Result<V>;

    /// Remove. Returns the previous value, or the default return value if
    /// the key was absent.
    fn remove(&mut self, key: K) -> Result<V>;

    fn clear(&mut self) -> Result<()>;

    fn entries(&self) -> Self::Entries<'_>;

    fn keys(&self) -> Keys<Self::Entries<'_>> {
        Keys {
            inner: self.entries(),
        }
    }

    fn values(&self) -> Values<Self::Entries<'_>> {
        Values {
            inner: self.entries(),
        }
    }

    /// Visit every entry. The default body drains `entries()`; concrete
    /// stores override it with a direct table walk. This method is the
    /// compile-time replacement for a runtime fast-iteration capability
    /// probe; `compose::fast_for_each` dispatches here.
    fn for_each<F: FnMut(K, V)>(&self, mut f: F) {
        for (k, v) in self.entries() {
            f(k, v);
        }
    }

    /// Insert only when absent. Returns the existing value when present;
    /// otherwise inserts and returns the default return value, mirroring
    /// `put`.
    fn put_if_absent(&mut self, key: K, value: V) -> Result<V> {
        match self.get_opt(key) {
            Some(old) => Ok(old),
            None => self.put(key, value),
        }
    }

    /// Update only when present; absent keys stay absent. Returns the
    /// previous value, or the default return value if the key was absent.
    fn replace(&mut self, key: K, value: V) -> Result<V> {
        if self.contains_key(key) {
            self.put(key, value)
        } else {
            Ok(self.default_return_value())
        }
    }

    /// Look up the key, inserting `f(key)` first when absent. Returns the
    /// value now associated with the key.
    fn compute_if_absent<F: FnOnce(K) -> V>(&mut self, key: K, f: F) -> Result<V> {
        match self.get_opt(key) {
            Some(old) => Ok(old),
            None => {
                let value = f(key);
                self.put(key, value)?;
                Ok(value)
            }
        }
    }

    /// Remap a present entry; `None` from the closure removes it. Absent
    /// keys are untouched and yield `Ok(None)`.
    fn compute_if_present<F: FnOnce(K, V) -> Option<V>>(
        &mut self,
        key: K,
        f: F,
    ) -> Result<Option<V>> {
        match self.get_opt(key) {
            None => Ok(None),
            Some(old) => match f(key, old) {
                Some(new) => {
                    self.put(key, new)?;
                    Ok(Some(new))
                }
                None => {
                    self.remove(key)?;
                    Ok(None)
                }
            },
        }
    }

    /// Combine `value` with the existing value via `f`, or insert `value`
    /// when absent. Returns the value now associated with the key.
    fn merge<F: FnOnce(V, V) -> V>(&mut self, key: K, value: V, f: F) -> Result<V> {
        let new = match self.get_opt(key) {
            Some(old) => f(old, value),
            None => value,
        };
        self.put(key, new)?;
        Ok(new)
    }

    fn put_all<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) -> Result<()> {
        for (k, v) in iter {
            self.put(k, v)?;
        }
        Ok(())
    }
}

/// Key view over any entries iterator.
pub struct Keys<I> {
    inner: I,
}

impl<K, V, I: Iterator<Item = (K, V)>> Iterator for Keys<I> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Value view over any entries iterator.
pub struct Values<I> {
    inner: I,
}

impl<K, V, I: Iterator<Item = (K, V)>> Iterator for Values<I> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// A shared reference is already a live read-only view: reads delegate to the
// referent, every mutator is rejected. This is what lets `read_only(&m)`
// decorate a map the caller keeps and mutates between wraps.
impl<K: ScalarKey, V: ScalarValue, M: ScalarMap<K, V>> ScalarMap<K, V> for &M {
    type Entries<'a>
        = M::Entries<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn default_return_value(&self) -> V {
        (**self).default_return_value()
    }

    fn set_default_return_value(&mut self, _value: V) -> Result<()> {
        Err(Unsupported("set_default_return_value"))
    }

    fn contains_key(&self, key: K) -> bool {
        (**self).contains_key(key)
    }

    fn contains_value(&self, value: V) -> bool {
        (**self).contains_value(value)
    }

    fn get_opt(&self, key: K) -> Option<V> {
        (**self).get_opt(key)
    }

    fn get(&self, key: K) -> V {
        (**self).get(key)
    }

    fn get_or(&self, key: K, fallback: V) -> V {
        (**self).get_or(key, fallback)
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
        (**self).entries()
    }

    fn for_each<F: FnMut(K, V)>(&self, f: F) {
        (**self).for_each(f)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::open_hash_map::OpenHashMap;

    /// Invariant: the derived mutators supplied by the trait agree with the
    /// primitive operations they are built from.
    #[test]
    fn derived_mutators_on_a_store() {
        let mut m: OpenHashMap<char, i32> = OpenHashMap::new();
        assert_eq!(m.put_if_absent('a', 1).unwrap(), 0);
        assert_eq!(m.put_if_absent('a', 2).unwrap(), 1);
        assert_eq!(m.get('a'), 1);

        assert_eq!(m.replace('a', 5).unwrap(), 1);
        assert_eq!(m.replace('z', 9).unwrap(), 0);
        assert!(!m.contains_key('z'));

        assert_eq!(m.compute_if_absent('b', |_| 7).unwrap(), 7);
        assert_eq!(m.compute_if_absent('b', |_| 8).unwrap(), 7);

        assert_eq!(m.merge('b', 3, |old, new| old + new).unwrap(), 10);
        assert_eq!(m.merge('c', 3, |old, new| old + new).unwrap(), 3);

        assert_eq!(
            m.compute_if_present('c', |_, v| Some(v * 2)).unwrap(),
            Some(6)
        );
        assert_eq!(m.compute_if_present('c', |_, _| None).unwrap(), None);
        assert!(!m.contains_key('c'));
        assert_eq!(m.compute_if_present('x', |_, v| Some(v)).unwrap(), None);
    }

    /// Invariant: a shared reference delegates every read and rejects every
    /// mutator without touching the referent.
    #[test]
    fn shared_reference_is_a_read_only_view() {
        let mut m: OpenHashMap<char, i32> = OpenHashMap::new();
        m.put('a', 1).unwrap();

        let mut view = &m;
        assert_eq!(view.len(), 1);
        assert_eq!(view.get('a'), 1);
        assert_eq!(view.get('b'), 0);
        assert_eq!(view.put('b', 2), Err(Unsupported("put")));
        assert_eq!(view.remove('a'), Err(Unsupported("remove")));
        assert_eq!(view.clear(), Err(Unsupported("clear")));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get('a'), 1);
    }

    /// Invariant: keys/values adapters traverse the same entries as
    /// `entries()`.
    #[test]
    fn key_and_value_views_match_entries() {
        let mut m: OpenHashMap<u8, u16> = OpenHashMap::new();
        for i in 0u8..6 {
            m.put(i, u16::from(i) * 10).unwrap();
        }

        let mut from_entries: Vec<(u8, u16)> = m.entries().collect();
        from_entries.sort_unstable();
        let mut ks: Vec<u8> = m.keys().collect();
        ks.sort_unstable();
        let mut vs: Vec<u16> = m.values().collect();
        vs.sort_unstable();

        assert_eq!(ks, from_entries.iter().map(|&(k, _)| k).collect::<Vec<_>>());
        assert_eq!(vs, from_entries.iter().map(|&(_, v)| v).collect::<Vec<_>>());
    }
}
