//! LinkedHashMap: insertion-ordered hash store.
//!
//! Structure: a hashbrown `HashTable` index over slot storage, with
//! intrusive prev/next links threading the slots in insertion order.
//! Lookups go through the index; ordered traversal and the move/poll
//! operations splice the links. Each entry stores its precomputed hash, so
//! `K: Hash` runs only on the query path and the index can grow without
//! rehashing keys.

use core::hash::BuildHasher;
use std::collections::hash_map::RandomState;

use hashbrown::HashTable;
use slotmap::{DefaultKey, SlotMap};

use crate::map::{Result, ScalarKey, ScalarMap, ScalarValue};
use crate::ordered::OrderedScalarMap;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    hash: u64,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

/// Hash store that iterates in insertion order and supports relocating
/// entries within that order.
#[derive(Clone)]
pub struct LinkedHashMap<K, V, S = RandomState> {
    hasher: S,
    index: HashTable<DefaultKey>,
    slots: SlotMap<DefaultKey, Node<K, V>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
    drv: V,
}

impl<K, V> LinkedHashMap<K, V>
where
    K: ScalarKey,
    V: ScalarValue + Default,
{
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K, V> Default for LinkedHashMap<K, V>
where
    K: ScalarKey,
    V: ScalarValue + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> LinkedHashMap<K, V, S>
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
            hasher,
            index: HashTable::new(),
            slots: SlotMap::with_key(),
            head: None,
            tail: None,
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
            hasher: S::default(),
            index: HashTable::new(),
            slots: SlotMap::with_key(),
            head: None,
            tail: None,
            drv,
        }
    }

    fn make_hash(&self, key: K) -> u64 {
        self.hasher.hash_one(key)
    }

    fn find_slot(&self, key: K) -> Option<DefaultKey> {
        let hash = self.make_hash(key);
        self.index
            .find(hash, |&k| {
                self.slots.get(k).map(|n| n.key == key).unwrap_or(false)
            })
            .copied()
    }

    /// Detach a slot from the order chain, fixing neighbors and endpoints.
    fn unlink(&mut self, k: DefaultKey) {
        let (prev, next) = {
            let n = &self.slots[k];
            (n.prev, n.next)
        };
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(x) => self.slots[x].prev = prev,
            None => self.tail = prev,
        }
        let n = &mut self.slots[k];
        n.prev = None;
        n.next = None;
    }

    /// Attach an unlinked slot at the front of the chain.
    fn link_front(&mut self, k: DefaultKey) {
        let old = self.head;
        {
            let n = &mut self.slots[k];
            n.prev = None;
            n.next = old;
        }
        match old {
            Some(h) => self.slots[h].prev = Some(k),
            None => self.tail = Some(k),
        }
        self.head = Some(k);
    }

    /// Attach an unlinked slot at the back of the chain.
    fn link_back(&mut self, k: DefaultKey) {
        let old = self.tail;
        {
            let n = &mut self.slots[k];
            n.next = None;
            n.prev = old;
        }
        match old {
            Some(t) => self.slots[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
    }

    /// Remove a slot entirely: unlink it, drop it from storage, and drop its
    /// index entry.
    fn remove_slot(&mut self, k: DefaultKey) -> (K, V) {
        self.unlink(k);
        let node = self.slots.remove(k).unwrap();
        self.index
            .find_entry(node.hash, |&kk| kk == k)
            .unwrap()
            .remove();
        (node.key, node.value)
    }
}

/// Iterator over copied entries of a `LinkedHashMap`, in insertion order.
pub struct Entries<'a, K, V> {
    slots: &'a SlotMap<DefaultKey, Node<K, V>>,
    cursor: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, K: Copy, V: Copy> Iterator for Entries<'a, K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        let k = self.cursor?;
        let node = &self.slots[k];
        self.cursor = node.next;
        self.remaining -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Copy, V: Copy> ExactSizeIterator for Entries<'a, K, V> {}

impl<K, V, S> ScalarMap<K, V> for LinkedHashMap<K, V, S>
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
        self.slots.len()
    }

    fn default_return_value(&self) -> V {
        self.drv
    }

    fn set_default_return_value(&mut self, value: V) -> Result<()> {
        self.drv = value;
        Ok(())
    }

    fn contains_key(&self, key: K) -> bool {
        self.find_slot(key).is_some()
    }

    fn get_opt(&self, key: K) -> Option<V> {
        self.find_slot(key).map(|k| self.slots[k].value)
    }

    fn put(&mut self, key: K, value: V) -> Result<V> {
        let hash = self.make_hash(key);
        match self.index.entry(
            hash,
            |&kk| self.slots.get(kk).map(|n| n.key == key).unwrap_or(false),
            |&kk| self.slots.get(kk).map(|n| n.hash).unwrap_or(0),
        ) {
            hashbrown::hash_table::Entry::Occupied(occ) => {
                // Existing key: update in place, position unchanged.
                let kk = *occ.get();
                let node = &mut self.slots[kk];
                let old = node.value;
                node.value = value;
                Ok(old)
            }
            hashbrown::hash_table::Entry::Vacant(vac) => {
                let kk = self.slots.insert(Node {
                    key,
                    value,
                    hash,
                    prev: None,
                    next: None,
                });
                let _ = vac.insert(kk);
                self.link_back(kk);
                Ok(self.drv)
            }
        }
    }

    fn remove(&mut self, key: K) -> Result<V> {
        match self.find_slot(key) {
            Some(k) => {
                let (_, v) = self.remove_slot(k);
                Ok(v)
            }
            None => Ok(self.drv),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.index.clear();
        self.slots.clear();
        self.head = None;
        self.tail = None;
        Ok(())
    }

    fn entries(&self) -> Self::Entries<'_> {
        Entries {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.slots.len(),
        }
    }

    fn for_each<F: FnMut(K, V)>(&self, mut f: F) {
        let mut cursor = self.head;
        while let Some(k) = cursor {
            let node = &self.slots[k];
            f(node.key, node.value);
            cursor = node.next;
        }
    }
}

impl<K, V, S> OrderedScalarMap<K, V> for LinkedHashMap<K, V, S>
where
    K: ScalarKey,
    V: ScalarValue,
    S: BuildHasher,
{
    fn first(&self) -> Option<(K, V)> {
        self.head.map(|k| {
            let n = &self.slots[k];
            (n.key, n.value)
        })
    }

    fn last(&self) -> Option<(K, V)> {
        self.tail.map(|k| {
            let n = &self.slots[k];
            (n.key, n.value)
        })
    }

    fn poll_first(&mut self) -> Result<Option<(K, V)>> {
        Ok(self.head.map(|k| self.remove_slot(k)))
    }

    fn poll_last(&mut self) -> Result<Option<(K, V)>> {
        Ok(self.tail.map(|k| self.remove_slot(k)))
    }

    fn move_to_first(&mut self, key: K) -> Result<bool> {
        match self.find_slot(key) {
            Some(k) => {
                if self.head != Some(k) {
                    self.unlink(k);
                    self.link_front(k);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn move_to_last(&mut self, key: K) -> Result<bool> {
        match self.find_slot(key) {
            Some(k) => {
                if self.tail != Some(k) {
                    self.unlink(k);
                    self.link_back(k);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn put_first(&mut self, key: K, value: V) -> Result<V> {
        let old = self.put(key, value)?;
        self.move_to_first(key)?;
        Ok(old)
    }

    fn put_last(&mut self, key: K, value: V) -> Result<V> {
        let old = self.put(key, value)?;
        self.move_to_last(key)?;
        Ok(old)
    }
}

impl<K, V, S> FromIterator<(K, V)> for LinkedHashMap<K, V, S>
where
    K: ScalarKey,
    V: ScalarValue + Default,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Self::with_hasher(S::default());
        for (k, v) in iter {
            let _ = m.put(k, v);
        }
        m
    }
}

impl<K, V, S> Extend<(K, V)> for LinkedHashMap<K, V, S>
where
    K: ScalarKey,
    V: ScalarValue,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            let _ = self.put(k, v);
        }
    }
}
