//! # Execution Domain
//!
//! The scheduling core. One coordinator thread drains a FIFO submission
//! queue; read tasks fan out to a reader pool, write tasks run inline on
//! the coordinator after the active readers drain.
//!
//! ## Exclusivity Argument
//!
//! Only the coordinator dispatches tasks. While it executes a write it is
//! not dispatching, so the in-flight read count can only fall; the write
//! starts once that count reaches zero and nothing overlaps it until it
//! returns. This is the whole proof - no lock is held around the store
//! itself.

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::DomainConfig;
use crate::error::DomainError;
use crate::stats::DomainStats;

/// A unit of work accepted into the domain.
type Job = Box<dyn FnOnce() + Send>;

/// A submitted task, tagged with its access mode.
enum Task {
    /// May overlap other reads.
    Read(Job),
    /// Runs alone.
    Write(Job),
}

/// Gate tracking in-flight read tasks.
///
/// The coordinator raises the count before dispatching a read; the reader
/// worker lowers it when the task finishes and wakes the coordinator once
/// the count hits zero.
struct ReaderGate {
    active: Mutex<usize>,
    drained: Condvar,
}

impl ReaderGate {
    fn new() -> Self {
        Self {
            active: Mutex::new(0),
            drained: Condvar::new(),
        }
    }

    /// Raises the in-flight count, returning the new level.
    fn begin_read(&self) -> usize {
        let mut active = self.active.lock();
        *active += 1;
        *active
    }

    /// Lowers the in-flight count, waking the coordinator at zero.
    fn end_read(&self) {
        let mut active = self.active.lock();
        *active -= 1;
        if *active == 0 {
            self.drained.notify_all();
        }
    }

    /// Blocks until no read task is in flight.
    fn wait_drained(&self) {
        let mut active = self.active.lock();
        while *active > 0 {
            self.drained.wait(&mut active);
        }
    }
}

/// A concurrent execution domain.
///
/// Offers two submission modes: [`submit_read`](Self::submit_read)
/// (blocking, may overlap other reads) and
/// [`submit_write`](Self::submit_write) (fire-and-forget, exclusive).
/// Submission order is preserved relative to writes: a task submitted
/// after a write never executes before it, and a task submitted before a
/// write is never delayed past it.
///
/// Dropping the domain closes the queue, drains the remaining tasks in
/// FIFO order and joins every thread it spawned. No task is abandoned
/// mid-execution.
pub struct ExecutionDomain {
    /// Submission side of the FIFO. `None` only during Drop.
    submissions: Option<Sender<Task>>,
    /// Shared instrumentation counters.
    stats: Arc<DomainStats>,
    /// Coordinator thread handle.
    coordinator: Option<JoinHandle<()>>,
    /// Reader worker handles.
    readers: Vec<JoinHandle<()>>,
}

impl ExecutionDomain {
    /// Creates a domain with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DomainConfig::default()).expect("default config is valid")
    }

    /// Creates a domain with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the configuration fails validation.
    pub fn with_config(config: DomainConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let (submit_tx, submit_rx) = unbounded::<Task>();
        let (read_tx, read_rx) = unbounded::<Job>();
        let gate = Arc::new(ReaderGate::new());
        let stats = Arc::new(DomainStats::default());

        let readers: Vec<JoinHandle<()>> = (0..config.reader_threads)
            .map(|_| {
                let read_rx = read_rx.clone();
                let gate = Arc::clone(&gate);
                let stats = Arc::clone(&stats);
                thread::spawn(move || Self::reader_loop(&read_rx, &gate, &stats))
            })
            .collect();

        let label = config.label.clone();
        let coordinator = {
            let gate = Arc::clone(&gate);
            let stats = Arc::clone(&stats);
            thread::spawn(move || Self::coordinator_loop(&submit_rx, read_tx, &gate, &stats))
        };

        tracing::debug!(
            "execution domain '{}' started with {} reader threads",
            label,
            config.reader_threads
        );

        Ok(Self {
            submissions: Some(submit_tx),
            stats,
            coordinator: Some(coordinator),
            readers,
        })
    }

    /// Runs `op` with read access and blocks until it completes.
    ///
    /// The task takes its FIFO position at submission: it will not run
    /// before any write submitted earlier, and no write submitted later
    /// can overtake it. It may overlap other reads.
    pub fn submit_read<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (result_tx, result_rx) = bounded(1);
        let task = Task::Read(Box::new(move || {
            let _ = result_tx.send(op());
        }));
        self.sender()
            .send(task)
            .expect("coordinator owns the receiver while the domain is alive");
        result_rx
            .recv()
            .expect("read task completes before the domain is dropped")
    }

    /// Enqueues `op` for exclusive execution and returns immediately.
    ///
    /// Fire-and-forget: the caller gets no result and no error channel.
    /// The task runs alone - no read or other write overlaps it - at its
    /// FIFO position in the submission order.
    pub fn submit_write<F>(&self, op: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let _ = self.sender().send(Task::Write(Box::new(op)));
    }

    /// Returns the instrumentation counters for this domain.
    #[must_use]
    pub fn stats(&self) -> &DomainStats {
        &self.stats
    }

    fn sender(&self) -> &Sender<Task> {
        // Invariant: `submissions` is only None inside Drop, where no
        // &self method can run concurrently.
        self.submissions
            .as_ref()
            .expect("domain is not being dropped")
    }

    /// Coordinator main loop. Exits once every sender is gone and the
    /// queue is fully drained.
    fn coordinator_loop(
        submit_rx: &Receiver<Task>,
        read_tx: Sender<Job>,
        gate: &ReaderGate,
        stats: &DomainStats,
    ) {
        while let Ok(task) = submit_rx.recv() {
            match task {
                Task::Read(job) => {
                    let level = gate.begin_read();
                    stats.record_read_level(level);
                    if read_tx.send(job).is_err() {
                        // Reader pool gone; unreachable while the
                        // coordinator holds `read_tx`, but never leave
                        // the gate raised.
                        gate.end_read();
                    }
                }
                Task::Write(job) => {
                    gate.wait_drained();
                    job();
                    stats
                        .writes_executed
                        .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                }
            }
        }
        // Dropping `read_tx` here lets the reader workers finish their
        // current task and exit.
        drop(read_tx);
    }

    /// Reader worker main loop. Exits when the coordinator goes away.
    fn reader_loop(read_rx: &Receiver<Job>, gate: &ReaderGate, stats: &DomainStats) {
        while let Ok(job) = read_rx.recv() {
            // Counted before running so the counter is already up to date
            // when the submitting caller unblocks.
            stats
                .reads_executed
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            job();
            gate.end_read();
        }
    }
}

impl Default for ExecutionDomain {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ExecutionDomain {
    fn drop(&mut self) {
        // Closing the submission queue lets the coordinator drain what
        // remains, in order, and then exit.
        drop(self.submissions.take());

        if let Some(handle) = self.coordinator.take() {
            let _ = handle.join();
        }
        for handle in self.readers.drain(..) {
            let _ = handle.join();
        }

        tracing::debug!("execution domain drained and stopped");
    }
}
