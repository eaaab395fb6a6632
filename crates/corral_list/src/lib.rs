//! # CORRAL Synchronized List
//!
//! A thread-safe facade over an ordered, indexable collection that is
//! itself not safe for concurrent access.
//!
//! ## Architecture
//!
//! ```text
//!   Thread 1 ──┐
//!   Thread 2 ──┼──> [SynchronizedList] ──> [ExecutionDomain] ──> [Store]
//!   Thread N ──┘      queries: read mode     FIFO + exclusion     (owned)
//!                     mutations: write mode
//! ```
//!
//! Queries block the caller and return a snapshot consistent with program
//! order. Mutations are fire-and-forget: they take their place in the
//! submission FIFO and run exclusively, but the caller gets no result and
//! no error channel. A mutation that turns out to be impossible (index out
//! of range, value absent) is silently absorbed - that trade-off is the
//! design, not a bug.
//!
//! ## Example
//!
//! ```rust,ignore
//! use corral_list::SynchronizedList;
//!
//! let list: SynchronizedList<String> = SynchronizedList::new();
//! list.append("one".to_string());          // fire-and-forget
//! assert_eq!(list.len(), 1);               // submitted after: observes it
//! assert_eq!(list.first(), Some("one".to_string()));
//! ```

mod cell;
pub mod contract;
pub mod deque;
pub mod sync;

pub use contract::OrderedStore;
pub use deque::DequeStore;
pub use sync::SynchronizedList;

// Re-exported so callers can tune the domain without a direct dependency.
pub use corral_domain::{DomainConfig, DomainError};
