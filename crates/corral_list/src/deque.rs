//! # Reference Store
//!
//! A `VecDeque`-backed implementation of [`OrderedStore`]. It stands in
//! for the real doubly-linked-list dependency so the facade and its tests
//! have a collaborator; reimplementing linked-list pointer internals is
//! explicitly out of scope here.

use crate::contract::OrderedStore;
use std::collections::VecDeque;
use std::fmt::Display;

/// An ordered store over a `VecDeque`.
#[derive(Clone, Debug)]
pub struct DequeStore<T> {
    items: VecDeque<T>,
}

impl<T> DequeStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for DequeStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> OrderedStore<T> for DequeStore<T> {
    fn first(&self) -> Option<&T> {
        self.items.front()
    }

    fn last(&self) -> Option<&T> {
        self.items.back()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn describe(&self) -> String
    where
        T: Display,
    {
        let mut line = String::from("[");
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            line.push_str(&item.to_string());
        }
        line.push(']');
        line
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    fn for_each(&self, reversed: bool, visitor: &mut dyn FnMut(&T)) {
        if reversed {
            for item in self.items.iter().rev() {
                visitor(item);
            }
        } else {
            for item in &self.items {
                visitor(item);
            }
        }
    }

    fn enumerate(&self, reversed: bool, visitor: &mut dyn FnMut(&T, usize, &mut bool)) {
        let mut stop = false;
        if reversed {
            for (index, item) in self.items.iter().enumerate().rev() {
                visitor(item, index, &mut stop);
                if stop {
                    break;
                }
            }
        } else {
            for (index, item) in self.items.iter().enumerate() {
                visitor(item, index, &mut stop);
                if stop {
                    break;
                }
            }
        }
    }

    fn append(&mut self, value: T) {
        self.items.push_back(value);
    }

    fn append_many(&mut self, values: Vec<T>) {
        self.items.extend(values);
    }

    fn prepend(&mut self, value: T) {
        self.items.push_front(value);
    }

    fn prepend_many(&mut self, values: Vec<T>) {
        for value in values.into_iter().rev() {
            self.items.push_front(value);
        }
    }

    fn insert_at(&mut self, value: T, index: usize) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.insert(index, value);
        true
    }

    fn replace_at(&mut self, index: usize, value: T) -> bool {
        match index {
            i if i < self.items.len() => {
                self.items[i] = value;
                true
            }
            i if i == self.items.len() => {
                self.items.push_back(value);
                true
            }
            _ => false,
        }
    }

    fn remove_first(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn remove_last(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    fn remove_all(&mut self) {
        self.items.clear();
    }

    fn remove_value(&mut self, value: &T) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }
}
