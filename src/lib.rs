//! scalarmap: scalar-keyed, scalar-valued maps with per-instance default
//! return values, sentinel containers for the degenerate sizes, and
//! capability-preserving wrapper views.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: provide the wrapper-composition layer of a primitive-collections
//!   library exactly once, generically, and let monomorphization do the
//!   per-type expansion a generated codebase would hand-duplicate.
//! - Layers:
//!   - Capability traits: `ScalarMap` (base), `SortedScalarMap` (sorted +
//!     navigable), `OrderedScalarMap` (insertion order). Wrappers implement
//!     whichever capabilities their inner map has, so decoration never
//!     narrows navigation or order semantics.
//!   - Stores: `OpenHashMap` (hashbrown table), `TreeMap` (B-tree), and
//!     `LinkedHashMap` (hash index over slot storage threaded with
//!     intrusive order links and per-entry stored hashes).
//!   - Sentinels: `EmptyMap` / `SingletonMap` skip table overhead for the
//!     zero/one-entry cases and reject every mutator.
//!   - Views: `ReadOnly` rejects every mutator while delegating every read;
//!     `SyncMap` guards every operation behind one `Arc<Mutex<_>>` handle
//!     that all child views (`SyncKeys`/`SyncValues`/`SyncEntries`) reuse.
//!
//! Constraints
//! - Keys and values are `Copy` scalars; iterators yield entries by value,
//!   so no yielded entry ever aliases map internals or is invalidated by a
//!   later step.
//! - Lookups are total: absent keys yield the map's configured default
//!   return value, never a language-level null. `get_opt` is the
//!   exact-presence query, so a stored value equal to the default is always
//!   distinguishable from absence.
//! - Rejection is deterministic: a refused mutator returns `Unsupported`,
//!   leaves the inner map untouched, and would refuse again on retry.
//! - `SyncMap` serializes the map and all of its views through one mutex.
//!   Iterators are never synchronized internally; multi-step consistency is
//!   the caller's, via `SyncMap::lock`.
//!
//! Why this split?
//! - Localize invariants: order-link splicing lives entirely inside
//!   `LinkedHashMap`, locking entirely inside `SyncMap`, rejection entirely
//!   inside `ReadOnly` and the sentinels. Each piece is testable alone.
//! - Wrapping is idempotent by construction: the `IntoReadOnly` / `IntoSync`
//!   conversions resolve per type at compile time, so there is no runtime
//!   type probing and no accidental double decoration; re-synchronizing
//!   keeps the existing lock handle.
//! - Stores override `for_each` with a direct table walk; wrappers delegate
//!   it, so the fast traversal path survives decoration without any
//!   downcasting.

mod compose;
pub mod linked_hash_map;
mod linked_hash_map_proptest;
mod map;
pub mod open_hash_map;
mod ordered;
mod read_only;
mod sentinel;
mod sorted;
mod sync_map;
pub mod tree_map;

// Public surface
pub use compose::{empty, fast_for_each, read_only, singleton, synchronize, IntoReadOnly, IntoSync};
pub use linked_hash_map::LinkedHashMap;
pub use map::{Keys, Result, ScalarKey, ScalarMap, ScalarValue, Unsupported, Values};
pub use open_hash_map::OpenHashMap;
pub use ordered::OrderedScalarMap;
pub use read_only::ReadOnly;
pub use sentinel::{EmptyMap, SingletonMap};
pub use sorted::SortedScalarMap;
pub use sync_map::{SyncEntries, SyncKeys, SyncMap, SyncValues};
pub use tree_map::TreeMap;
