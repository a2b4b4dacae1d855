//! Construction helpers: sentinel factories, idempotent wrapping, and fast
//! iteration dispatch.

use crate::linked_hash_map::LinkedHashMap;
use crate::map::{ScalarKey, ScalarMap, ScalarValue};
use crate::open_hash_map::OpenHashMap;
use crate::read_only::ReadOnly;
use crate::sentinel::{EmptyMap, SingletonMap};
use crate::sync_map::SyncMap;
use crate::tree_map::TreeMap;

/// The zero-entry sentinel, with `V::default()` as its default return value.
pub fn empty<K: ScalarKey, V: ScalarValue + Default>() -> EmptyMap<K, V> {
    EmptyMap::new()
}

/// The one-entry sentinel, with `V::default()` as its default return value.
pub fn singleton<K: ScalarKey, V: ScalarValue + Default>(key: K, value: V) -> SingletonMap<K, V> {
    SingletonMap::new(key, value)
}

/// Conversion into a read-only view.
///
/// Wrapping is idempotent and resolved at compile time: containers convert
/// to `ReadOnly<Self>`, while a map that is already read-only converts to
/// itself, so no double wrapper can be built through this trait.
pub trait IntoReadOnly: Sized {
    type View;

    fn into_read_only(self) -> Self::View;
}

/// Conversion into a synchronized wrapper.
///
/// Idempotent like [`IntoReadOnly`]: re-synchronizing an already
/// synchronized map returns it unchanged, keeping the existing lock handle
/// instead of minting a second mutex over the same data.
pub trait IntoSync: Sized {
    type View;

    fn into_sync(self) -> Self::View;
}

/// Wrap `map` read-only; a no-op on maps that already are.
pub fn read_only<M: IntoReadOnly>(map: M) -> M::View {
    map.into_read_only()
}

/// Wrap `map` in a fresh mutex; a no-op on maps already synchronized.
pub fn synchronize<M: IntoSync>(map: M) -> M::View {
    map.into_sync()
}

/// Traverse every entry through the map's fast path. Stores that can walk
/// their table directly override [`ScalarMap::for_each`]; everything else
/// falls back to the entries iterator. Either way entries are copied pairs,
/// so no yielded entry is ever invalidated by a later step.
pub fn fast_for_each<K, V, M, F>(map: &M, f: F)
where
    K: ScalarKey,
    V: ScalarValue,
    M: ScalarMap<K, V>,
    F: FnMut(K, V),
{
    map.for_each(f)
}

impl<K, V, S> IntoReadOnly for OpenHashMap<K, V, S> {
    type View = ReadOnly<Self>;

    fn into_read_only(self) -> Self::View {
        ReadOnly::new(self)
    }
}

impl<K, V> IntoReadOnly for TreeMap<K, V> {
    type View = ReadOnly<Self>;

    fn into_read_only(self) -> Self::View {
        ReadOnly::new(self)
    }
}

impl<K, V, S> IntoReadOnly for LinkedHashMap<K, V, S> {
    type View = ReadOnly<Self>;

    fn into_read_only(self) -> Self::View {
        ReadOnly::new(self)
    }
}

impl<K, V> IntoReadOnly for EmptyMap<K, V> {
    type View = ReadOnly<Self>;

    fn into_read_only(self) -> Self::View {
        ReadOnly::new(self)
    }
}

impl<K, V> IntoReadOnly for SingletonMap<K, V> {
    type View = ReadOnly<Self>;

    fn into_read_only(self) -> Self::View {
        ReadOnly::new(self)
    }
}

impl<M> IntoReadOnly for SyncMap<M> {
    type View = ReadOnly<Self>;

    fn into_read_only(self) -> Self::View {
        ReadOnly::new(self)
    }
}

// Borrowed maps wrap too: `read_only(&m)` is the live view over a map the
// caller keeps and mutates between wraps.
impl<'a, M> IntoReadOnly for &'a M {
    type View = ReadOnly<&'a M>;

    fn into_read_only(self) -> Self::View {
        ReadOnly::new(self)
    }
}

impl<M> IntoReadOnly for ReadOnly<M> {
    type View = Self;

    fn into_read_only(self) -> Self::View {
        self
    }
}

impl<K, V, S> IntoSync for OpenHashMap<K, V, S> {
    type View = SyncMap<Self>;

    fn into_sync(self) -> Self::View {
        SyncMap::new(self)
    }
}

impl<K, V> IntoSync for TreeMap<K, V> {
    type View = SyncMap<Self>;

    fn into_sync(self) -> Self::View {
        SyncMap::new(self)
    }
}

impl<K, V, S> IntoSync for LinkedHashMap<K, V, S> {
    type View = SyncMap<Self>;

    fn into_sync(self) -> Self::View {
        SyncMap::new(self)
    }
}

impl<K, V> IntoSync for EmptyMap<K, V> {
    type View = SyncMap<Self>;

    fn into_sync(self) -> Self::View {
        SyncMap::new(self)
    }
}

impl<K, V> IntoSync for SingletonMap<K, V> {
    type View = SyncMap<Self>;

    fn into_sync(self) -> Self::View {
        SyncMap::new(self)
    }
}

impl<M> IntoSync for ReadOnly<M> {
    type View = SyncMap<Self>;

    fn into_sync(self) -> Self::View {
        SyncMap::new(self)
    }
}

impl<M> IntoSync for SyncMap<M> {
    type View = Self;

    fn into_sync(self) -> Self::View {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: wrapping is idempotent at the type level; re-wrapping a
    /// wrapper produces the same type, one layer deep.
    #[test]
    fn wrapping_is_idempotent() {
        let m: OpenHashMap<char, i32> = OpenHashMap::new();
        let once: ReadOnly<OpenHashMap<char, i32>> = read_only(m);
        let twice: ReadOnly<OpenHashMap<char, i32>> = read_only(once);
        assert_eq!(twice.len(), 0);

        let s: SyncMap<OpenHashMap<char, i32>> = synchronize(OpenHashMap::new());
        let handle = s.shared().clone();
        let again: SyncMap<OpenHashMap<char, i32>> = synchronize(s);
        assert!(std::sync::Arc::ptr_eq(&handle, again.shared()));
    }

    /// Invariant: cross-composition is still available when asked for
    /// explicitly.
    #[test]
    fn cross_composition() {
        let mut m: OpenHashMap<u8, u8> = OpenHashMap::new();
        m.put(1, 1).unwrap();

        let frozen_sync: ReadOnly<SyncMap<OpenHashMap<u8, u8>>> = read_only(synchronize(m));
        assert_eq!(frozen_sync.get(1), 1);

        let mut n: OpenHashMap<u8, u8> = OpenHashMap::new();
        n.put(2, 2).unwrap();
        let sync_frozen: SyncMap<ReadOnly<OpenHashMap<u8, u8>>> = synchronize(read_only(n));
        assert_eq!(sync_frozen.get(2), 2);
    }

    /// Invariant: `fast_for_each` visits the same entries as the iterator
    /// path, on stores and wrappers alike.
    #[test]
    fn fast_for_each_matches_entries() {
        let mut m: LinkedHashMap<u8, u16> = LinkedHashMap::new();
        for i in 0..10 {
            m.put(i, u16::from(i) * 3).unwrap();
        }

        let mut fast = Vec::new();
        fast_for_each(&m, |k, v| fast.push((k, v)));
        let slow: Vec<(u8, u16)> = m.entries().collect();
        assert_eq!(fast, slow);

        let wrapped = read_only(m);
        let mut through_wrapper = Vec::new();
        fast_for_each(&wrapped, |k, v| through_wrapper.push((k, v)));
        assert_eq!(through_wrapper, slow);
    }
}
