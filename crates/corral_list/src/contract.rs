//! # Store Contract
//!
//! The behavioral surface of the wrapped collection. The facade calls
//! through exactly this trait under the domain's concurrency discipline;
//! it never reaches into an implementation's internals.
//!
//! Implementations do not need to be thread-safe. Exclusion is the
//! facade's job, not the store's.

use std::fmt::Display;

/// An ordered sequence of equatable elements, addressable by zero-based
/// index and searchable by value equality.
///
/// Out-of-range policy (uniform across mutations): an index equal to
/// `len()` is the one-past-the-end position and is valid for `insert_at`
/// and `replace_at` (both append there); anything beyond that is rejected
/// by returning `false` and changing nothing.
pub trait OrderedStore<T: PartialEq> {
    /// Returns the first element, if any.
    fn first(&self) -> Option<&T>;

    /// Returns the last element, if any.
    fn last(&self) -> Option<&T>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the contents as a human-readable line.
    fn describe(&self) -> String
    where
        T: Display;

    /// Returns the element at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>;

    /// Visits every element in forward or reverse order.
    fn for_each(&self, reversed: bool, visitor: &mut dyn FnMut(&T));

    /// Visits every element with its index. The visitor may set the stop
    /// flag; it is checked after each element.
    fn enumerate(&self, reversed: bool, visitor: &mut dyn FnMut(&T, usize, &mut bool));

    /// Appends one element at the back.
    fn append(&mut self, value: T);

    /// Appends many elements at the back, preserving their order.
    fn append_many(&mut self, values: Vec<T>);

    /// Inserts one element at the front.
    fn prepend(&mut self, value: T);

    /// Inserts many elements at the front, preserving their order.
    fn prepend_many(&mut self, values: Vec<T>);

    /// Inserts `value` so it ends up at `index`. Returns `false` (and
    /// changes nothing) when `index > len()`.
    fn insert_at(&mut self, value: T, index: usize) -> bool;

    /// Replaces the element at `index`. An index of `len()` appends.
    /// Returns `false` (and changes nothing) when `index > len()`.
    fn replace_at(&mut self, index: usize, value: T) -> bool;

    /// Removes and returns the first element.
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the last element.
    fn remove_last(&mut self) -> Option<T>;

    /// Drops every element.
    fn remove_all(&mut self);

    /// Removes the first element equal to `value`. Returns `false` when
    /// no element matches.
    fn remove_value(&mut self, value: &T) -> bool;

    /// Removes the element at `index`. Returns `false` (and changes
    /// nothing) when `index` is out of bounds.
    fn remove_at(&mut self, index: usize) -> bool;
}
