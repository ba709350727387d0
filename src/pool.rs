//! Fixed-capacity identity pools with frame-stamped LRU eviction.
//!
//! A [`Pool`] maps an [`Id`] to a slot index. Each slot records the last
//! frame it was touched; claiming a slot for a new id recycles the
//! least-recently touched one. The backing storage is allocated once and
//! never resized, so the same index always addresses the same slot in the
//! parallel state arrays kept by the caller (containers, tree nodes).

use tracing::{debug, warn};

use crate::id::Id;

/// One pool slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolItem {
    pub id: Id,
    pub last_update: u64,
}

/// A bounded LRU slot table.
#[derive(Debug, Clone)]
pub struct Pool {
    items: Box<[PoolItem]>,
}

impl Pool {
    /// Create a pool with `capacity` empty slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "pool capacity must be non-zero");
        Self { items: vec![PoolItem::default(); capacity].into_boxed_slice() }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// The slot currently holding `id`, if any.
    pub fn get(&self, id: Id) -> Option<usize> {
        if id.is_none() {
            return None;
        }
        self.items.iter().position(|item| item.id == id)
    }

    /// Claim a slot for `id`, evicting the least-recently touched one.
    ///
    /// Empty slots are always taken before any live one. Ties go to the
    /// lowest index. The claimed slot is stamped with `frame`.
    pub fn init(&mut self, id: Id, frame: u64) -> usize {
        let (idx, victim) = self
            .items
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|(_, item)| (!item.id.is_none(), item.last_update))
            .unwrap_or_default();

        if !victim.id.is_none() {
            if victim.last_update >= frame {
                warn!(
                    slot = idx,
                    evicted = victim.id.0,
                    capacity = self.items.len(),
                    "pool exhausted within one frame; recycling a live slot"
                );
            } else {
                debug!(slot = idx, evicted = victim.id.0, last_update = victim.last_update, "pool eviction");
            }
        }

        self.items[idx] = PoolItem { id, last_update: frame };
        idx
    }

    /// Stamp a slot as touched in `frame`, keeping it alive.
    pub fn update(&mut self, idx: usize, frame: u64) {
        self.items[idx].last_update = frame;
    }

    /// Release a slot so it becomes the first eviction candidate.
    pub fn remove(&mut self, idx: usize) {
        self.items[idx] = PoolItem::default();
    }

    /// Read a slot.
    pub fn item(&self, idx: usize) -> PoolItem {
        self.items[idx]
    }
}

// ===========================================================================
// Tests
// ===========================================================================
