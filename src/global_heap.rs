/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! The Wakita-Tsurumi global heap: one entry per live, non-isolated
//! community, valued by that community's own best ΔQ. Finding the global
//! maximum is then O(1) (a peek), and a merge only touches as many
//! global-heap entries as there are third-party communities it affects.
use crate::community::Community;
use crate::error::CommunityResult;
use crate::heap::BinaryMaxHeap;
use crate::id::CommunityId;

#[derive(Default)]
pub struct GlobalHeap {
    inner: BinaryMaxHeap<CommunityId>,
}

impl GlobalHeap {
    pub fn new() -> Self {
        Self {
            inner: BinaryMaxHeap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn try_top(&self) -> Option<(CommunityId, f32)> {
        self.inner.try_top().map(|(id, q)| (*id, q))
    }

    pub fn remove(&mut self, id: CommunityId) {
        self.inner.remove(&id);
    }

    /// Adds `community` to the heap if it has a best neighbor; a community
    /// with no neighbors is, by construction, absent from the global heap.
    pub fn sync_new(&mut self, community: &Community) -> CommunityResult<()> {
        if let Some((_, q)) = community.best() {
            self.inner.add(community.id(), q)?;
        }
        Ok(())
    }

    /// Reflects a community's possibly-changed best ΔQ into the heap. Must
    /// be called after any mutation to that community's `NeighborRow`.
    pub fn sync_existing(&mut self, community: &Community) -> CommunityResult<()> {
        match community.best() {
            Some((_, q)) => {
                if self.inner.contains(&community.id()) {
                    self.inner.update(&community.id(), q);
                } else {
                    self.inner.add(community.id(), q)?;
                }
            }
            None => self.inner.remove(&community.id()),
        }
        Ok(())
    }
}
