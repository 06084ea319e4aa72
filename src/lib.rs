/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! Agglomerative community detection for undirected graphs via
//! Clauset-Newman-Moore modularity maximization, with the Wakita-Tsurumi
//! two-level heap improvement (a global max-heap over each community's own
//! cached best-neighbor ΔQ, with incremental updates on every merge).
//!
//! The graph itself, any progress UI, and input parsing are all external
//! collaborators: this crate only implements the `NeighborRow`/`Community`/
//! `GlobalHeap` bookkeeping and the merge procedure (CNM eqs. 10a/10b/10c).
//! `graph::AdjacencyListGraph` is a small reference `Graph` implementation
//! provided so the crate is directly usable; bring your own graph type by
//! implementing `Graph`/`Vertex` over it instead.

mod cancel;
mod community;
mod error;
mod global_heap;
mod graph;
mod heap;
mod id;
mod initializer;
mod invariants;
mod merger;
mod metadata_sort;
mod neighbor_row;
mod state;

pub mod driver;

pub use crate::cancel::{Cancel, NoopCancel};
pub use crate::community::Community;
pub use crate::driver::{try_compute, Outcome};
pub use crate::error::{CommunityError, CommunityResult};
pub use crate::graph::{AdjacencyListGraph, AdjacencyListGraphBuilder, AdjacencyListVertex, Graph, Vertex};
pub use crate::id::{CommunityId, IdGenerator, VertexId};
pub use crate::metadata_sort::{sort_by_metadata, MetadataValue};
