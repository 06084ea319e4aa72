/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! Builds one singleton community per vertex, wires their `NeighborRow`s
//! from the graph's adjacency, computes initial ΔQs (CNM eq. 10a's base
//! case: merging two singletons), and seeds the GlobalHeap.
use fxhash::FxHashMap;

use crate::community::Community;
use crate::error::CommunityResult;
use crate::global_heap::GlobalHeap;
use crate::graph::{Graph, Vertex};
use crate::id::{CommunityId, IdGenerator, VertexId};
use crate::neighbor_row::NeighborRow;
use crate::state::DetectionState;

pub(crate) fn initialize<G: Graph>(graph: &G) -> CommunityResult<DetectionState> {
    let mut id_gen = IdGenerator::new();
    let num_edges = graph.edge_count();

    // One community per vertex, keyed provisionally by vertex id so the
    // adjacency pass below can look neighbors up before ΔQ is known.
    let mut community_of: FxHashMap<VertexId, CommunityId> = FxHashMap::default();
    let mut degree_of: FxHashMap<CommunityId, usize> = FxHashMap::default();
    let mut rows: FxHashMap<CommunityId, NeighborRow> = FxHashMap::default();
    let mut vertex_lists: FxHashMap<CommunityId, Vec<VertexId>> = FxHashMap::default();

    for v in graph.vertices() {
        let cid = id_gen.next();
        community_of.insert(v.id(), cid);
        degree_of.insert(cid, v.degree());
        rows.insert(cid, NeighborRow::new());
        vertex_lists.insert(cid, vec![v.id()]);
    }

    if num_edges > 0 {
        // ΔQ_ij for two singleton communities sharing an edge (CNM eq. 10a,
        // applied to the degenerate case of two one-vertex communities).
        let two_m = 2.0_f32 * num_edges as f32;
        let q_const = 1.0_f32 / two_m;

        for v in graph.vertices() {
            let i = community_of[&v.id()];
            let k_i = degree_of[&i] as f32;
            for &neighbor_vertex in v.adjacent() {
                if neighbor_vertex == v.id() {
                    continue; // self-loop: not a neighbor relationship
                }
                let j = community_of[&neighbor_vertex];
                let k_j = degree_of[&j] as f32;
                let delta_qij = q_const - (k_i * k_j) / (two_m * two_m);
                // Parallel edges produce repeat (i, j) pairs here; the row
                // is a set of distinct neighbors, so later attempts are
                // skipped rather than merged.
                rows.get_mut(&i).unwrap().insert_if_absent(j, delta_qij);
            }
        }
    }

    let mut communities: FxHashMap<CommunityId, Community> = FxHashMap::default();
    let mut global_heap = GlobalHeap::new();
    for (cid, row) in rows {
        let community = Community::new(cid, vertex_lists.remove(&cid).unwrap(), degree_of[&cid], row);
        global_heap.sync_new(&community)?;
        communities.insert(cid, community);
    }

    let num_vertices = graph.vertex_count();
    Ok(DetectionState {
        communities,
        global_heap,
        id_gen,
        num_edges,
        num_vertices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraphBuilder;

    #[test]
    fn no_edges_yields_singletons_with_empty_global_heap() {
        let g = AdjacencyListGraphBuilder::from_vertices_and_edges(5, &[]);
        let state = initialize(&g).unwrap();
        assert_eq!(state.communities.len(), 5);
        assert!(state.global_heap.is_empty());
        for c in state.communities.values() {
            assert_eq!(c.vertices().len(), 1);
            assert!(c.neighbors().is_empty());
        }
    }

    #[test]
    fn single_edge_has_the_expected_delta_q() {
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 1)]);
        let state = initialize(&g).unwrap();
        let (_, q) = state.global_heap.try_top().unwrap();
        assert!((q - 0.25).abs() < 1e-6, "expected 0.25, got {}", q);
    }

    #[test]
    fn parallel_edges_collapse_to_one_neighbor_row_entry() {
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 0), (0, 1), (0, 1)]);
        let state = initialize(&g).unwrap();
        let a = community_for_vertex(&state, &g, 0);
        let community = &state.communities[&a];
        assert_eq!(community.neighbors().len(), 1);
    }

    fn community_for_vertex(
        state: &DetectionState,
        g: &crate::graph::AdjacencyListGraph,
        raw: i64,
    ) -> CommunityId {
        let target = VertexId::from(raw);
        for c in state.communities.values() {
            if c.vertices().contains(&target) {
                return c.id();
            }
        }
        panic!("vertex {:?} not found in graph {:p}", target, g);
    }
}
