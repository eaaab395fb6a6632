//! # Domain Statistics
//!
//! Instrumentation counters for a running domain. Tests use these to verify
//! the exclusivity invariant (at most one writer, zero readers during a
//! write); callers can use them for profiling.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Statistics for an execution domain.
#[derive(Debug, Default)]
pub struct DomainStats {
    /// Total read tasks picked up by the reader pool. Counted at pickup,
    /// so the counter already includes a blocking read by the time its
    /// caller unblocks.
    pub reads_executed: AtomicU64,
    /// Total write tasks completed.
    pub writes_executed: AtomicU64,
    /// Highest number of read tasks observed in flight at once.
    pub peak_concurrent_reads: AtomicUsize,
}

impl DomainStats {
    /// Takes a point-in-time snapshot of the counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads_executed: self.reads_executed.load(Ordering::Relaxed),
            writes_executed: self.writes_executed.load(Ordering::Relaxed),
            peak_concurrent_reads: self.peak_concurrent_reads.load(Ordering::Relaxed),
        }
    }

    /// Records a newly observed concurrent-read level.
    pub(crate) fn record_read_level(&self, level: usize) {
        self.peak_concurrent_reads.fetch_max(level, Ordering::Relaxed);
    }
}

/// Plain-value snapshot of [`DomainStats`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Total read tasks picked up by the reader pool.
    pub reads_executed: u64,
    /// Total write tasks completed.
    pub writes_executed: u64,
    /// Highest number of read tasks observed in flight at once.
    pub peak_concurrent_reads: usize,
}
