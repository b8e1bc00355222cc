// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-capacity, newest-first log with drop-oldest eviction.

use livefeed_core::{FeedError, Result};
use std::collections::vec_deque::{self, VecDeque};

/// Number of events a feed retains unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 20;

/// Ring buffer holding at most `capacity` items, newest first.
///
/// Insertion order is the only ordering key: index 0 is always the most
/// recently pushed item. Pushing into a full log evicts the oldest item.
///
/// # Example
///
/// ```
/// use livefeed::BoundedLog;
///
/// let mut log = BoundedLog::new(2).unwrap();
/// log.push(1);
/// log.push(2);
/// assert_eq!(log.push(3), Some(1));
/// assert_eq!(log.to_vec(), vec![3, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedLog<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedLog<T> {
    /// Creates an empty log.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(FeedError::invalid_config("log capacity must be positive"));
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Prepends `item`, returning the evicted oldest item if the log was full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_back()
        } else {
            None
        };
        self.items.push_front(item);
        evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Item at `index`, where 0 is the newest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn newest(&self) -> Option<&T> {
        self.items.front()
    }

    #[must_use]
    pub fn oldest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterates newest-first.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Copies the log into a `Vec`, newest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a BoundedLog<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
