//! # CORRAL Execution Domain
//!
//! A task-scheduling primitive with two submission modes:
//!
//! - **concurrent-read**: many tasks may run in parallel
//! - **exclusive-write**: runs alone, FIFO-ordered against everything else
//!   submitted to the same domain
//!
//! ## Architecture
//!
//! ```text
//!   Thread 1 ──┐                        ┌──> [Reader Worker 1] ──┐
//!   Thread 2 ──┼──> [Submission FIFO] ──┤    [Reader Worker 2]   ├──> done
//!   Thread N ──┘     (coordinator)      │    [Reader Worker K] ──┘
//!                          │            │
//!                          └── writes run inline on the coordinator,
//!                              after active readers drain
//! ```
//!
//! A single coordinator thread pops the submission queue in FIFO order.
//! Read tasks are handed to the reader pool and may overlap each other.
//! Write tasks wait for the active readers to drain, then run exclusively
//! on the coordinator itself, so nothing can be dispatched around them.
//!
//! ## Ordering Contract
//!
//! For a single calling thread, a read submitted after a write observes
//! that write: both passed through the same FIFO and the coordinator never
//! reorders. Across threads, only the partial order "no read runs during a
//! write; writes run exclusively in acceptance order" is promised.

pub mod config;
pub mod domain;
pub mod error;
pub mod stats;

pub use config::DomainConfig;
pub use domain::ExecutionDomain;
pub use error::DomainError;
pub use stats::{DomainStats, StatsSnapshot};
