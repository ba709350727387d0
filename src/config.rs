//! Engine capacities.
//!
//! [`Config`] fixes the sizes of the retained-state pools and the initial
//! reservations of every per-frame buffer. Everything is allocated once in
//! [`Context::with_config`](crate::Context::with_config); pools are never
//! resized afterwards, and the per-frame buffers only grow if a frame
//! exceeds its reservation.

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Capacities for a [`Context`](crate::Context).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Slots for windows, popups and panels.
    ///
    /// Must cover the peak number of containers referenced within one
    /// eviction window; exceeding it silently recycles the oldest slot.
    pub container_pool_size: usize,
    /// Slots for expanded tree nodes and headers.
    pub treenode_pool_size: usize,
    /// Commands reserved up front.
    pub command_capacity: usize,
    /// Bytes of text reserved up front.
    pub text_capacity: usize,
    /// Reservation for the root list and the container stack.
    pub root_capacity: usize,
    /// Reservation for the ID, clip and layout stacks.
    pub stack_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_pool_size: 48,
            treenode_pool_size: 48,
            command_capacity: 4096,
            text_capacity: 16 * 1024,
            root_capacity: 32,
            stack_capacity: 32,
        }
    }
}

impl Config {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container pool size (builder).
    pub fn with_container_pool_size(mut self, size: usize) -> Self {
        self.container_pool_size = size;
        self
    }

    /// Set the tree-node pool size (builder).
    pub fn with_treenode_pool_size(mut self, size: usize) -> Self {
        self.treenode_pool_size = size;
        self
    }

    /// Set the command reservation (builder).
    pub fn with_command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity;
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
