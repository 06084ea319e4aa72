/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! State threaded between the Initializer, Merger and Driver. Not part of
//! the public API: callers only ever see `try_compute`'s `Outcome`.
use fxhash::FxHashMap;

use crate::community::Community;
use crate::global_heap::GlobalHeap;
use crate::id::{CommunityId, IdGenerator};

pub(crate) struct DetectionState {
    pub communities: FxHashMap<CommunityId, Community>,
    pub global_heap: GlobalHeap,
    pub id_gen: IdGenerator,
    /// m in the CNM paper: the number of edges in the original graph.
    pub num_edges: usize,
    /// |V| in the CNM paper: the number of vertices in the original graph.
    /// Constant across the whole run -- every vertex lives in exactly one
    /// live community at all times (P2).
    pub num_vertices: usize,
}
