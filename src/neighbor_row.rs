/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! A community's ordered {neighbor community id -> ΔQ} row, plus a cached
//! best-neighbor pointer. Ordered (not hashed) so two rows can be merged in
//! a single linear pass by the Merger -- a hash map would force an O(n*m)
//! scan or an extra sort per merge.
use std::collections::BTreeMap;

use crate::id::CommunityId;

/// Back-edge information for one neighboring community. The neighbor's own
/// identity is the `NeighborRow`'s key, so only the ΔQ value needs storing
/// here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PairEntry {
    pub delta_q: f32,
}

/// Ordered mapping from neighbor community id to `PairEntry`, with a cached
/// pointer to the maximum-ΔQ entry.
///
/// Tie-break policy: when two entries share the maximum ΔQ, the one with
/// the lower `CommunityId` wins, because rescans iterate the underlying
/// `BTreeMap` in ascending key order and keep the first maximum seen. This
/// is deterministic given a fixed insertion/removal history, though it is
/// not the only valid choice.
#[derive(Default)]
pub struct NeighborRow {
    entries: BTreeMap<CommunityId, PairEntry>,
    best: Option<CommunityId>,
}

impl NeighborRow {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            best: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: CommunityId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: CommunityId) -> Option<&PairEntry> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CommunityId, &PairEntry)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// The entry currently responsible for the community's max ΔQ, or
    /// `None` if the row is empty.
    pub fn best(&self) -> Option<(CommunityId, f32)> {
        self.best
            .map(|id| (id, self.entries[&id].delta_q))
    }

    /// Inserts a new entry. Returns `false` without modifying the row if
    /// `id` is already present -- callers building the initial row treat
    /// that as "collapse parallel edges".
    pub fn insert_if_absent(&mut self, id: CommunityId, delta_q: f32) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, PairEntry { delta_q });
        self.promote_if_better(id, delta_q);
        true
    }

    /// Inserts a new entry, assuming `id` is not already present (the
    /// Merger's invariant when wiring a freshly-built row).
    pub fn insert(&mut self, id: CommunityId, delta_q: f32) {
        debug_assert!(!self.entries.contains_key(&id), "duplicate neighbor key {}", id);
        self.entries.insert(id, PairEntry { delta_q });
        self.promote_if_better(id, delta_q);
    }

    /// Removes `id`. A no-op if absent. Rescans for a new best if the
    /// removed entry was it.
    pub fn remove(&mut self, id: CommunityId) -> Option<PairEntry> {
        let removed = self.entries.remove(&id);
        if removed.is_some() && self.best == Some(id) {
            self.rescan();
        }
        removed
    }

    /// Updates an existing entry's ΔQ. Cheap when the new value still
    /// dominates; rescans only when the previous best shrinks.
    pub fn update(&mut self, id: CommunityId, new_delta_q: f32) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.delta_q = new_delta_q;
        } else {
            return;
        }
        if self.best == Some(id) {
            self.rescan();
        } else {
            self.promote_if_better(id, new_delta_q);
        }
    }

    fn promote_if_better(&mut self, id: CommunityId, delta_q: f32) {
        let should_promote = match self.best {
            None => true,
            Some(best_id) => delta_q > self.entries[&best_id].delta_q,
        };
        if should_promote {
            self.best = Some(id);
        }
    }

    fn rescan(&mut self) {
        self.best = self
            .entries
            .iter()
            .fold(None, |acc: Option<(CommunityId, f32)>, (&id, entry)| match acc {
                None => Some((id, entry.delta_q)),
                Some((_, best_q)) if entry.delta_q > best_q => Some((id, entry.delta_q)),
                Some(acc) => Some(acc),
            })
            .map(|(id, _)| id);
    }
}
