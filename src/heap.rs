/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! A generic indexed max-heap keyed by an arbitrary `Hash + Eq + Clone` key,
//! with O(log n) `update` and `remove`. `priority_queue::PriorityQueue`
//! already carries the key-to-index side table those operations need; this
//! just gives it the narrower, ΔQ-specific surface the core wants.
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::hash::Hash;

use crate::error::{CommunityError, CommunityResult};

/// Max-heap over `f32` values, keyed by `K`. Ordering among equal values is
/// whatever `PriorityQueue` does internally (a binary heap, so ties break
/// on insertion/sift order); deterministic given a fixed insertion sequence.
pub struct BinaryMaxHeap<K: Hash + Eq + Clone> {
    inner: PriorityQueue<K, OrderedFloat<f32>>,
}

impl<K: Hash + Eq + Clone> Default for BinaryMaxHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> BinaryMaxHeap<K> {
    pub fn new() -> Self {
        Self {
            inner: PriorityQueue::new(),
        }
    }

    /// Inserts `key` with `value`. Errors if `key` is already present --
    /// callers that mean to change a value already in the heap must use
    /// `update` instead.
    pub fn add(&mut self, key: K, value: f32) -> CommunityResult<()> {
        if self.inner.get(&key).is_some() {
            return Err(CommunityError::internal(
                "heap key already present on add".to_string(),
            ));
        }
        self.inner.push(key, OrderedFloat(value));
        Ok(())
    }

    pub fn try_top(&self) -> Option<(&K, f32)> {
        self.inner.peek().map(|(k, v)| (k, v.into_inner()))
    }

    /// Removes `key`. A no-op if `key` is absent.
    pub fn remove(&mut self, key: &K) {
        self.inner.remove(key);
    }

    /// Changes the value associated with `key`. A no-op if `key` is absent.
    pub fn update(&mut self, key: &K, new_value: f32) {
        self.inner.change_priority(key, OrderedFloat(new_value));
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_is_the_maximum_value() {
        let mut h: BinaryMaxHeap<u32> = BinaryMaxHeap::new();
        h.add(1, 0.5).unwrap();
        h.add(2, 0.9).unwrap();
        h.add(3, 0.1).unwrap();
        assert_eq!(h.try_top(), Some((&2, 0.9)));
    }

    #[test]
    fn update_reorders_the_heap() {
        let mut h: BinaryMaxHeap<u32> = BinaryMaxHeap::new();
        h.add(1, 0.5).unwrap();
        h.add(2, 0.9).unwrap();
        h.update(&2, 0.1);
        assert_eq!(h.try_top(), Some((&1, 0.5)));
    }

    #[test]
    fn remove_by_key_is_o_log_n_and_shrinks_len() {
        let mut h: BinaryMaxHeap<u32> = BinaryMaxHeap::new();
        h.add(1, 0.5).unwrap();
        h.add(2, 0.9).unwrap();
        h.remove(&2);
        assert_eq!(h.len(), 1);
        assert_eq!(h.try_top(), Some((&1, 0.5)));
    }

    #[test]
    fn add_fails_on_duplicate_key() {
        let mut h: BinaryMaxHeap<u32> = BinaryMaxHeap::new();
        h.add(1, 0.5).unwrap();
        assert!(h.add(1, 0.1).is_err());
    }

    #[test]
    fn remove_of_absent_key_is_a_no_op() {
        let mut h: BinaryMaxHeap<u32> = BinaryMaxHeap::new();
        h.add(1, 0.5).unwrap();
        h.remove(&99);
        assert_eq!(h.len(), 1);
    }
}
