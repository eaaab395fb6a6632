//! # Synchronized List Facade
//!
//! Wraps one store instance and routes every public operation through an
//! execution domain: read mode for queries, write mode for mutations.
//!
//! ## Thread Safety
//!
//! - Queries block the caller and may overlap each other
//! - Mutations are fire-and-forget and run exclusively
//! - A query submitted after a mutation (same thread) observes its effect
//!
//! ## Teardown Safety
//!
//! Every queued task captures only a `Weak` reference to the store. When
//! the list is dropped, the strong reference goes first (field order),
//! then the domain drains its queue: the leftover write tasks fail their
//! upgrade and skip themselves instead of touching freed state.

use crate::cell::StoreCell;
use crate::contract::OrderedStore;
use crate::deque::DequeStore;
use corral_domain::{DomainConfig, DomainError, ExecutionDomain};
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

/// A thread-safe facade over an ordered store.
///
/// All state lives in the wrapped store; the facade itself only holds the
/// ownership and the scheduling machinery. See the module docs for the
/// concurrency contract.
pub struct SynchronizedList<T, S = DequeStore<T>> {
    /// Declared before `domain` on purpose: the strong store reference
    /// must drop before the domain drains, so pending writes self-cancel.
    store: Arc<StoreCell<S>>,
    /// The domain every operation is routed through.
    domain: ExecutionDomain,
    _element: PhantomData<T>,
}

impl<T, S> SynchronizedList<T, S>
where
    T: Clone + PartialEq + Send + 'static,
    S: OrderedStore<T> + Default + Send + 'static,
{
    /// Creates an empty list with a default-configured domain.
    #[must_use]
    pub fn new() -> Self {
        let config = DomainConfig {
            label: "corral-list".to_string(),
            ..DomainConfig::default()
        };
        Self::with_config(config).expect("default config is valid")
    }

    /// Creates an empty list over a domain built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the configuration fails validation.
    pub fn with_config(config: DomainConfig) -> Result<Self, DomainError> {
        let domain = ExecutionDomain::with_config(config)?;
        tracing::debug!("synchronized list created");
        Ok(Self {
            store: Arc::new(StoreCell::new(S::default())),
            domain,
            _element: PhantomData,
        })
    }

    /// Creates a list holding a single element.
    #[must_use]
    pub fn from_value(value: T) -> Self {
        let list = Self::new();
        list.append(value);
        list
    }

    // ------------------------------------------------------------------
    // Queries (concurrent-read mode, blocking)
    // ------------------------------------------------------------------

    /// Returns a clone of the first element.
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.read(None, |store| store.first().cloned())
    }

    /// Returns a clone of the last element.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.read(None, |store| store.last().cloned())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read(0, |store| store.len())
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read(true, |store| store.is_empty())
    }

    /// Renders the contents as a human-readable line.
    #[must_use]
    pub fn describe(&self) -> String
    where
        T: Display,
    {
        self.read(String::new(), |store| store.describe())
    }

    /// Returns a clone of the element at `index`, or `None` when out of
    /// range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.read(None, move |store| store.get(index).cloned())
    }

    /// Alias of [`get`](Self::get).
    #[must_use]
    pub fn find(&self, index: usize) -> Option<T> {
        self.get(index)
    }

    /// Returns the position of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: T) -> Option<usize> {
        self.read(None, move |store| store.index_of(&value))
    }

    /// Runs `visitor` over a snapshot of the list, in forward or reverse
    /// order.
    ///
    /// The snapshot is taken under read access; the visitor then runs on
    /// the calling thread, so it cannot re-enter the write path while the
    /// store is held.
    pub fn for_each<F>(&self, reversed: bool, mut visitor: F)
    where
        F: FnMut(&T),
    {
        let snapshot = self.read(Vec::new(), move |store| {
            let mut out = Vec::with_capacity(store.len());
            store.for_each(reversed, &mut |item| out.push(item.clone()));
            out
        });
        for item in &snapshot {
            visitor(item);
        }
    }

    /// Like [`for_each`](Self::for_each), but supplies `(element, index)`
    /// pairs and a stop flag checked after each element.
    pub fn enumerate<F>(&self, reversed: bool, mut visitor: F)
    where
        F: FnMut(&T, usize, &mut bool),
    {
        let snapshot = self.read(Vec::new(), move |store| {
            let mut out = Vec::with_capacity(store.len());
            store.enumerate(reversed, &mut |item, index, _stop| {
                out.push((item.clone(), index));
            });
            out
        });
        let mut stop = false;
        for (item, index) in &snapshot {
            visitor(item, *index, &mut stop);
            if stop {
                break;
            }
        }
    }

    /// Blocks until every previously submitted task has executed.
    ///
    /// A plain FIFO consequence: a no-op read cannot run before anything
    /// submitted ahead of it. Useful before inspecting the net effect of
    /// a burst of fire-and-forget mutations.
    pub fn flush(&self) {
        self.domain.submit_read(|| ());
    }

    // ------------------------------------------------------------------
    // Mutations (exclusive-write mode, fire-and-forget)
    // ------------------------------------------------------------------

    /// Appends one element at the back.
    pub fn append(&self, value: T) {
        self.write(move |store| store.append(value));
    }

    /// Appends many elements at the back, preserving their order.
    pub fn append_many(&self, values: Vec<T>) {
        self.write(move |store| store.append_many(values));
    }

    /// Inserts one element at the front.
    pub fn prepend(&self, value: T) {
        self.write(move |store| store.prepend(value));
    }

    /// Inserts many elements at the front, preserving their order.
    pub fn prepend_many(&self, values: Vec<T>) {
        self.write(move |store| store.prepend_many(values));
    }

    /// Inserts `value` at `index`.
    ///
    /// An index of `len()` appends; anything beyond that is silently
    /// dropped, matching the wrapped store's policy. Fire-and-forget: no
    /// feedback either way.
    pub fn insert(&self, value: T, index: usize) {
        self.write(move |store| {
            store.insert_at(value, index);
        });
    }

    /// Replaces the element at `index`. An index of `len()` appends;
    /// beyond that the write is silently dropped.
    pub fn set(&self, index: usize, value: T) {
        self.write(move |store| {
            store.replace_at(index, value);
        });
    }

    /// Removes the first element, if any.
    pub fn remove_first(&self) {
        self.write(|store| {
            store.remove_first();
        });
    }

    /// Removes the last element, if any.
    pub fn remove_last(&self) {
        self.write(|store| {
            store.remove_last();
        });
    }

    /// Drops every element.
    pub fn clear(&self) {
        self.write(|store| store.remove_all());
    }

    /// Removes the first element equal to `value`; no-op when absent.
    pub fn remove(&self, value: T) {
        self.write(move |store| {
            store.remove_value(&value);
        });
    }

    /// Removes the element at `index`; no-op when out of bounds.
    pub fn remove_at(&self, index: usize) {
        self.write(move |store| {
            store.remove_at(index);
        });
    }

    /// Prints the contents, in forward or reverse order.
    ///
    /// Submitted in write mode but side-effect-only: it mutates nothing
    /// and the caller is never held up by the output.
    pub fn print_all(&self, reversed: bool)
    where
        T: Display,
    {
        self.write(move |store| {
            let mut line = String::from("[");
            let mut first = true;
            store.for_each(reversed, &mut |item| {
                if !first {
                    line.push_str(", ");
                }
                first = false;
                line.push_str(&item.to_string());
            });
            line.push(']');
            println!("{line}");
        });
    }

    // ------------------------------------------------------------------
    // Routing
    // ------------------------------------------------------------------

    /// Routes a query through the domain in concurrent-read mode.
    ///
    /// The fallback arm is unreachable in practice: a blocking read holds
    /// `&self`, so the store cannot have been dropped. It mirrors the
    /// shape of the write path rather than introducing a panic.
    #[allow(unsafe_code)]
    fn read<R, F>(&self, fallback: R, op: F) -> R
    where
        R: Send + 'static,
        F: FnOnce(&S) -> R + Send + 'static,
    {
        let store = Arc::downgrade(&self.store);
        self.domain.submit_read(move || match store.upgrade() {
            Some(cell) => {
                // SAFETY: running as a concurrent-read task; the domain
                // guarantees no exclusive-write task is in flight.
                op(unsafe { cell.read() })
            }
            None => fallback,
        })
    }

    /// Routes a mutation through the domain in exclusive-write mode.
    ///
    /// The task holds only a weak reference: if the list was torn down
    /// before the task ran, the upgrade fails and the mutation skips
    /// itself instead of touching freed state.
    #[allow(unsafe_code)]
    fn write<F>(&self, op: F)
    where
        F: FnOnce(&mut S) + Send + 'static,
    {
        let store = Arc::downgrade(&self.store);
        self.domain.submit_write(move || {
            if let Some(cell) = store.upgrade() {
                // SAFETY: running as an exclusive-write task; nothing
                // else touches the store until this returns.
                op(unsafe { cell.write() });
            }
        });
    }
}

impl<T, S> Default for SynchronizedList<T, S>
where
    T: Clone + PartialEq + Send + 'static,
    S: OrderedStore<T> + Default + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> From<Vec<T>> for SynchronizedList<T, S>
where
    T: Clone + PartialEq + Send + 'static,
    S: OrderedStore<T> + Default + Send + 'static,
{
    fn from(values: Vec<T>) -> Self {
        let list = Self::new();
        list.append_many(values);
        list
    }
}

impl<T, S> FromIterator<T> for SynchronizedList<T, S>
where
    T: Clone + PartialEq + Send + 'static,
    S: OrderedStore<T> + Default + Send + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::mpsc;

    #[test]
    fn test_read_after_write_program_order() {
        let list: SynchronizedList<String> = SynchronizedList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());

        list.append("one".to_string());
        assert_eq!(list.len(), 1);
        assert_eq!(list.first(), Some("one".to_string()));
        assert_eq!(list.last(), Some("one".to_string()));
    }

    #[test]
    fn test_set_at_len_appends() {
        let list: SynchronizedList<i32> = SynchronizedList::from_value(1);
        list.set(1, 2);
        assert_eq!(list.get(1), Some(2));
        list.set(10, 99);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_impossible_writes_are_absorbed() {
        let list: SynchronizedList<i32> = SynchronizedList::new();
        list.remove_at(5);
        list.remove(42);
        list.remove_first();
        list.remove_last();
        list.insert(7, 3);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_enumerate_stops_early() {
        let list: SynchronizedList<i32> = vec![10, 20, 30, 40].into();
        let mut seen = Vec::new();
        list.enumerate(false, |item, index, stop| {
            seen.push((*item, index));
            if index == 1 {
                *stop = true;
            }
        });
        assert_eq!(seen, [(10, 0), (20, 1)]);
    }

    #[test]
    fn test_queued_write_skips_when_store_is_gone() {
        // Rebuilds the facade's weak-capture wiring by hand so the strong
        // reference can be dropped while the write is provably queued.
        let cell = Arc::new(StoreCell::new(DequeStore::<i32>::new()));
        let weak = Arc::downgrade(&cell);
        let domain = ExecutionDomain::new();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let ran_against_live = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&ran_against_live);
        domain.submit_write(move || {
            // Hold the task here until the strong reference is gone.
            release_rx.recv().ok();
            if weak.upgrade().is_some() {
                flag.store(true, Ordering::SeqCst);
            }
        });

        drop(cell);
        release_tx.send(()).unwrap();
        domain.submit_read(|| ()); // barrier
        assert!(!ran_against_live.load(Ordering::SeqCst));
    }

    #[test]
    fn test_drop_with_queued_writes_does_not_crash() {
        let list: SynchronizedList<u64> = SynchronizedList::new();
        for i in 0..10_000 {
            list.append(i);
        }
        // Dropped with most appends still queued; they skip, nothing
        // crashes, the domain drains and joins.
        drop(list);
    }
}
