//! Widget identity: FNV-1a hashing over caller-chosen keys, scoped by a stack.
//!
//! An [`Id`] is recomputed every frame from the same key under the same
//! scope, which is how an immediate-mode UI recognises "the same control"
//! across frames. Sibling controls that share a label must be separated by
//! pushing a scope with [`IdStack::push`].

const FNV_OFFSET: u32 = 2166136261;
const FNV_PRIME: u32 = 16777619;

// ---------------------------------------------------------------------------
// Id
// ---------------------------------------------------------------------------

/// An opaque widget identity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub u32);

impl Id {
    /// The "no widget" sentinel held by `hover`/`focus` when nothing is
    /// hovered or focused.
    pub const NONE: Id = Id(0);

    /// Whether this is the sentinel.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

// ---------------------------------------------------------------------------
// IdKey
// ---------------------------------------------------------------------------

/// A hashable key naming a control.
///
/// Each variant hashes a canonical byte representation, so the same key
/// always yields the same [`Id`] under the same scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IdKey<'a> {
    Str(&'a str),
    Bytes(&'a [u8]),
    /// Hashed as 8 little-endian bytes.
    Int(u64),
    /// An opaque host handle, hashed as pointer-width little-endian bytes.
    Handle(usize),
}

impl IdKey<'_> {
    fn hash_into(self, seed: u32) -> u32 {
        match self {
            IdKey::Str(s) => fnv1a(seed, s.as_bytes()),
            IdKey::Bytes(b) => fnv1a(seed, b),
            IdKey::Int(n) => fnv1a(seed, &n.to_le_bytes()),
            IdKey::Handle(h) => fnv1a(seed, &h.to_le_bytes()),
        }
    }
}

impl<'a> From<&'a str> for IdKey<'a> {
    fn from(s: &'a str) -> Self {
        IdKey::Str(s)
    }
}

impl<'a> From<&'a String> for IdKey<'a> {
    fn from(s: &'a String) -> Self {
        IdKey::Str(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for IdKey<'a> {
    fn from(b: &'a [u8]) -> Self {
        IdKey::Bytes(b)
    }
}

impl From<u64> for IdKey<'_> {
    fn from(n: u64) -> Self {
        IdKey::Int(n)
    }
}

impl From<u32> for IdKey<'_> {
    fn from(n: u32) -> Self {
        IdKey::Int(u64::from(n))
    }
}

impl From<i32> for IdKey<'_> {
    fn from(n: i32) -> Self {
        // Sign-extend so negative keys stay distinct from their unsigned twins.
        IdKey::Int(i64::from(n) as u64)
    }
}

impl From<usize> for IdKey<'_> {
    fn from(h: usize) -> Self {
        IdKey::Handle(h)
    }
}

/// Fold `data` into `seed` with 32-bit FNV-1a.
pub fn fnv1a(seed: u32, data: &[u8]) -> u32 {
    let mut hash = seed;
    for &b in data {
        hash = (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

// ---------------------------------------------------------------------------
// IdStack
// ---------------------------------------------------------------------------

/// The per-frame scope stack for ID computation.
#[derive(Debug, Default)]
pub struct IdStack {
    stack: Vec<Id>,
    last: Id,
}

impl IdStack {
    /// Create an empty stack with room for `capacity` scopes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { stack: Vec::with_capacity(capacity), last: Id::NONE }
    }

    /// Hash `key` under the current scope and remember the result.
    pub fn get<'a>(&mut self, key: impl Into<IdKey<'a>>) -> Id {
        let seed = self.stack.last().map_or(FNV_OFFSET, |id| id.0);
        let id = Id(key.into().hash_into(seed));
        self.last = id;
        id
    }

    /// Hash `key` under the current scope and open a new scope with it.
    pub fn push<'a>(&mut self, key: impl Into<IdKey<'a>>) -> Id {
        let id = self.get(key);
        self.stack.push(id);
        id
    }

    /// Open a scope with an already computed ID.
    pub fn push_id(&mut self, id: Id) {
        self.stack.push(id);
    }

    /// Close the innermost scope.
    ///
    /// # Panics
    ///
    /// Panics if no scope is open; that is an unbalanced push/pop in the
    /// caller.
    pub fn pop(&mut self) {
        assert!(self.stack.pop().is_some(), "pop_id called on an empty ID stack");
    }

    /// The most recently computed ID.
    pub fn last(&self) -> Id {
        self.last
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop every open scope (used to recover after an unbalanced frame).
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
