/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! P1-P6 from the testable-properties list, checked as assertions after
//! every merge when `debug_assertions` is on. A violation means a
//! programmer error in the Merger/GlobalHeap bookkeeping, so it is surfaced
//! as `CommunityError::Internal` rather than silently tolerated.
#![cfg(debug_assertions)]

use crate::error::{CommunityError, CommunityResult};
use crate::state::DetectionState;

const TOLERANCE: f32 = 1e-3;

pub(crate) fn check_invariants(state: &DetectionState) -> CommunityResult<()> {
    check_degree_sum(state)?;
    check_vertex_count(state)?;
    check_row_symmetry(state)?;
    check_global_heap_membership(state)?;
    check_global_heap_top(state)?;
    check_no_self_pairs(state)?;
    Ok(())
}

/// P1: sum of community.degree over live communities == 2|E|.
fn check_degree_sum(state: &DetectionState) -> CommunityResult<()> {
    let sum: usize = state.communities.values().map(|c| c.degree()).sum();
    let expected = 2 * state.num_edges;
    if sum != expected {
        return Err(CommunityError::internal(format!(
            "P1 violated: sum of community degrees is {} but 2|E| is {}",
            sum, expected
        )));
    }
    Ok(())
}

/// P2: sum of |community.vertices| over live communities == |V|.
fn check_vertex_count(state: &DetectionState) -> CommunityResult<()> {
    let sum: usize = state.communities.values().map(|c| c.vertices().len()).sum();
    if sum != state.num_vertices {
        return Err(CommunityError::internal(format!(
            "P2 violated: {} vertices across live communities, expected {}",
            sum, state.num_vertices
        )));
    }
    Ok(())
}

/// P3: for every PairEntry (A->B, q) there is a matching (B->A, q).
fn check_row_symmetry(state: &DetectionState) -> CommunityResult<()> {
    for community in state.communities.values() {
        for (neighbor_id, entry) in community.neighbors().iter() {
            let neighbor = state
                .communities
                .get(&neighbor_id)
                .ok_or_else(|| CommunityError::internal(format!("P3 violated: {} references dead community {}", community.id(), neighbor_id)))?;
            match neighbor.neighbors().get(community.id()) {
                Some(back) if (back.delta_q - entry.delta_q).abs() <= TOLERANCE => {}
                Some(back) => {
                    return Err(CommunityError::internal(format!(
                        "P3 violated: {}->{} is {} but {}->{} is {}",
                        community.id(),
                        neighbor_id,
                        entry.delta_q,
                        neighbor_id,
                        community.id(),
                        back.delta_q
                    )))
                }
                None => {
                    return Err(CommunityError::internal(format!(
                        "P3 violated: {}->{} has no matching back-edge",
                        community.id(),
                        neighbor_id
                    )))
                }
            }
        }
    }
    Ok(())
}

/// P4: GlobalHeap size == number of live communities with non-empty rows.
fn check_global_heap_membership(state: &DetectionState) -> CommunityResult<()> {
    let expected = state.communities.values().filter(|c| !c.neighbors().is_empty()).count();
    if state.global_heap.len() != expected {
        return Err(CommunityError::internal(format!(
            "P4 violated: global heap has {} entries, expected {}",
            state.global_heap.len(),
            expected
        )));
    }
    Ok(())
}

/// P5: GlobalHeap.top.value == max over live communities of best.delta_q.
fn check_global_heap_top(state: &DetectionState) -> CommunityResult<()> {
    let max_best = state.communities.values().filter_map(|c| c.best()).map(|(_, q)| q).fold(f32::NEG_INFINITY, f32::max);
    match state.global_heap.try_top() {
        Some((_, top_q)) => {
            if (top_q - max_best).abs() > TOLERANCE {
                return Err(CommunityError::internal(format!(
                    "P5 violated: global heap top is {} but max best ΔQ is {}",
                    top_q, max_best
                )));
            }
        }
        None if max_best != f32::NEG_INFINITY => {
            return Err(CommunityError::internal(
                "P5 violated: global heap is empty but a community has a best neighbor".to_string(),
            ));
        }
        None => {}
    }
    Ok(())
}

/// P6: no community's neighbors row contains itself as a key.
fn check_no_self_pairs(state: &DetectionState) -> CommunityResult<()> {
    for community in state.communities.values() {
        if community.neighbors().contains(community.id()) {
            return Err(CommunityError::internal(format!("P6 violated: {} lists itself as a neighbor", community.id())));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraphBuilder;
    use crate::initializer::initialize;
    use crate::merger::merge;

    /// Replays a fixed graph, merging the global max at every step, and
    /// asserts P1-P6 hold after each individual merge -- not just at the
    /// end of the run.
    fn replay_and_check(edges: &[(i64, i64)], num_vertices: usize) {
        let g = AdjacencyListGraphBuilder::from_vertices_and_edges(num_vertices, edges);
        let mut state = initialize(&g).unwrap();
        check_invariants(&state).unwrap();
        while let Some((community_id, q)) = state.global_heap.try_top() {
            if q < 0.0 {
                break;
            }
            let (neighbor_id, _) = state.communities[&community_id].best().unwrap();
            merge(&mut state, community_id, neighbor_id).unwrap();
            check_invariants(&state).unwrap();
        }
    }

    #[test]
    fn invariants_hold_throughout_a_triangle() {
        replay_and_check(&[(0, 1), (1, 2), (0, 2)], 0);
    }

    #[test]
    fn invariants_hold_throughout_two_cliques_and_a_bridge() {
        replay_and_check(&[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)], 0);
    }

    #[test]
    fn invariants_hold_throughout_parallel_edges_and_a_self_loop() {
        replay_and_check(&[(0, 0), (0, 1), (0, 1)], 0);
    }

    #[test]
    fn invariants_hold_with_isolated_vertices_present() {
        replay_and_check(&[(0, 1), (1, 2), (0, 2)], 6);
    }

    #[test]
    fn invariants_hold_on_a_larger_multi_component_graph() {
        replay_and_check(
            &[
                (0, 1),
                (1, 2),
                (0, 2),
                (3, 4),
                (4, 5),
                (3, 5),
                (6, 7),
                (7, 8),
                (8, 9),
                (9, 6),
                (2, 10),
                (10, 3),
                (5, 11),
                (11, 6),
            ],
            12,
        );
    }
}
