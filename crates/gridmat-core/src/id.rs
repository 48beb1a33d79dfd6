//! Strongly-typed instance identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArenaInstanceId`] allocation.
static ARENA_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a block arena.
///
/// Allocated from a monotonic atomic counter via [`ArenaInstanceId::next`].
/// Two distinct arenas always have different IDs, so diagnostic output
/// stays attributable when several arenas are live in one process and
/// each arena remains independently testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaInstanceId(u64);

impl ArenaInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(ARENA_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArenaInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Counter for unique [`MatrixInstanceId`] allocation.
static MATRIX_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a dimensional container.
///
/// Allocated from a monotonic atomic counter via [`MatrixInstanceId::next`].
/// Cloning a container preserves its instance ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatrixInstanceId(u64);

impl MatrixInstanceId {
    /// Allocate a fresh, unique instance ID.
    pub fn next() -> Self {
        Self(MATRIX_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MatrixInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
