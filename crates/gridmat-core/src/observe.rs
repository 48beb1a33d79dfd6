//! The allocation-observer seam.
//!
//! Arenas report each successful block grant through an injected
//! [`AllocObserver`]. The observer is per-arena state, not a process
//! global: a cumulative total printed by one arena never includes
//! another arena's traffic. Reporting is best-effort and is not part of
//! the allocator's correctness contract.

use std::io::Write;

use crate::id::ArenaInstanceId;

/// Receives one callback per successful block allocation.
///
/// Implementations must not assume calls are evenly spaced or that any
/// call happens at all; an arena that never allocates never reports.
pub trait AllocObserver {
    /// Called after a block has been granted.
    ///
    /// `elements` and `bytes` describe the current request; `total_bytes`
    /// is the arena's cumulative grant size since construction, including
    /// this block. Bulk releases do not rewind the total.
    fn block_allocated(
        &mut self,
        arena: ArenaInstanceId,
        elements: usize,
        bytes: usize,
        total_bytes: u64,
    );
}

/// The default observer: discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl AllocObserver for NullObserver {
    fn block_allocated(&mut self, _: ArenaInstanceId, _: usize, _: usize, _: u64) {}
}

/// Writes one line per allocation to standard error.
///
/// Output shape: `[arena 3 total 128 KB] allocating 4096 bytes`.
/// Write failures are ignored; tracing never interferes with allocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrTrace;

impl AllocObserver for StderrTrace {
    fn block_allocated(
        &mut self,
        arena: ArenaInstanceId,
        _elements: usize,
        bytes: usize,
        total_bytes: u64,
    ) {
        let _ = writeln!(
            std::io::stderr(),
            "[arena {} total {} KB] allocating {} bytes",
            arena,
            total_bytes / 1000,
            bytes
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observer that appends every report to a shared vector.
    #[derive(Default)]
    struct Recording(Vec<(usize, usize, u64)>);

    impl AllocObserver for Recording {
        fn block_allocated(
            &mut self,
            _arena: ArenaInstanceId,
            elements: usize,
            bytes: usize,
            total_bytes: u64,
        ) {
            self.0.push((elements, bytes, total_bytes));
        }
    }

    #[test]
    fn null_observer_accepts_reports() {
        let mut obs = NullObserver;
        obs.block_allocated(ArenaInstanceId::next(), 10, 40, 40);
    }

    #[test]
    fn stderr_trace_accepts_reports() {
        let mut obs = StderrTrace;
        obs.block_allocated(ArenaInstanceId::next(), 10, 40, 40);
    }

    #[test]
    fn recording_observer_sees_each_report_in_order() {
        let id = ArenaInstanceId::next();
        let mut obs = Recording::default();
        obs.block_allocated(id, 10, 40, 40);
        obs.block_allocated(id, 5, 20, 60);
        assert_eq!(obs.0, vec![(10, 40, 40), (5, 20, 60)]);
    }
}
