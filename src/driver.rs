/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! The main loop: pop the global max ΔQ, stop once it drops below zero or
//! the heap empties, otherwise merge and repeat.
use crate::cancel::Cancel;
use crate::community::Community;
use crate::error::{CommunityError, CommunityResult};
use crate::graph::Graph;
use crate::initializer::initialize;
use crate::merger::merge;

/// How often (in merges) the Driver polls `Cancel` and reports progress.
const PROGRESS_INTERVAL: usize = 100;

/// The result of `try_compute`: either the communities found before the
/// heap ran dry / ΔQ turned negative, or notice that the caller's
/// cancellation signal fired first.
pub enum Outcome {
    Completed(Vec<Community>),
    Cancelled,
}

/// Runs CNM/Wakita-Tsurumi agglomeration on `graph` to completion (or until
/// cancelled). `graph` is never mutated; cancellation discards whatever
/// partial merge state has accumulated.
pub fn try_compute<G: Graph>(graph: &G, cancel: &dyn Cancel) -> CommunityResult<Outcome> {
    let mut state = initialize(graph)?;
    let total = graph.vertex_count();
    let mut merges_done: usize = 0;

    loop {
        if merges_done % PROGRESS_INTERVAL == 0 {
            if cancel.is_cancelled() {
                return Ok(Outcome::Cancelled);
            }
            cancel.report_progress(merges_done, total);
        }

        let (community_id, delta_q) = match state.global_heap.try_top() {
            Some(top) => top,
            None => break,
        };
        if delta_q < 0.0 {
            break;
        }

        let (neighbor_id, _) = state
            .communities
            .get(&community_id)
            .ok_or_else(|| CommunityError::internal(format!("global heap references unknown community {}", community_id)))?
            .best()
            .ok_or_else(|| {
                CommunityError::internal(format!(
                    "community {} is in the global heap but has no best neighbor",
                    community_id
                ))
            })?;

        merge(&mut state, community_id, neighbor_id)?;
        #[cfg(debug_assertions)]
        crate::invariants::check_invariants(&state)?;
        merges_done += 1;
    }

    cancel.report_progress(merges_done, total);
    Ok(Outcome::Completed(state.communities.into_iter().map(|(_, c)| c).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::NoopCancel;
    use crate::graph::AdjacencyListGraphBuilder;

    fn total_degree(communities: &[Community]) -> usize {
        // Community::degree isn't public; total vertex count stands in for
        // the invariant check these unit tests actually care about.
        communities.iter().map(|c| c.vertices().len()).sum()
    }

    #[test]
    fn empty_graph_yields_empty_partition() {
        let g = AdjacencyListGraphBuilder::from_vertices_and_edges(0, &[]);
        match try_compute(&g, &NoopCancel).unwrap() {
            Outcome::Completed(cs) => assert!(cs.is_empty()),
            Outcome::Cancelled => panic!("should not cancel"),
        }
    }

    #[test]
    fn isolated_vertices_yield_singletons() {
        let g = AdjacencyListGraphBuilder::from_vertices_and_edges(5, &[]);
        match try_compute(&g, &NoopCancel).unwrap() {
            Outcome::Completed(cs) => {
                assert_eq!(cs.len(), 5);
                assert_eq!(total_degree(&cs), 5);
            }
            Outcome::Cancelled => panic!("should not cancel"),
        }
    }

    #[test]
    fn single_edge_merges_into_one_community() {
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 1)]);
        match try_compute(&g, &NoopCancel).unwrap() {
            Outcome::Completed(cs) => {
                assert_eq!(cs.len(), 1);
                assert_eq!(cs[0].vertices().len(), 2);
            }
            Outcome::Cancelled => panic!("should not cancel"),
        }
    }

    #[test]
    fn triangle_merges_into_one_community() {
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 1), (1, 2), (0, 2)]);
        match try_compute(&g, &NoopCancel).unwrap() {
            Outcome::Completed(cs) => assert_eq!(cs.len(), 1),
            Outcome::Cancelled => panic!("should not cancel"),
        }
    }

    #[test]
    fn two_cliques_joined_by_a_bridge_stay_separate() {
        let g = AdjacencyListGraphBuilder::from_edges(&[
            (0, 1),
            (1, 2),
            (0, 2), // clique {0,1,2}
            (3, 4),
            (4, 5),
            (3, 5), // clique {3,4,5}
            (2, 3), // bridge
        ]);
        match try_compute(&g, &NoopCancel).unwrap() {
            Outcome::Completed(cs) => {
                assert_eq!(cs.len(), 2);
                let mut sizes: Vec<usize> = cs.iter().map(|c| c.vertices().len()).collect();
                sizes.sort_unstable();
                assert_eq!(sizes, vec![3, 3]);
            }
            Outcome::Cancelled => panic!("should not cancel"),
        }
    }

    #[test]
    fn parallel_edges_collapse_and_self_loop_inflates_degree_past_merging() {
        // degree(0) = 4 (the self-loop counts twice, per the sum-degree == 2|E|
        // convention), degree(1) = 2, m = 3: the one surviving NeighborRow
        // entry (the two parallel (0,1) edges collapse to one) has
        // ΔQ = 1/6 - (4*2)/36 = -1/18 < 0, so the driver correctly halts
        // without merging.
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 0), (0, 1), (0, 1)]);
        match try_compute(&g, &NoopCancel).unwrap() {
            Outcome::Completed(cs) => {
                assert_eq!(cs.len(), 2);
                let mut sizes: Vec<usize> = cs.iter().map(|c| c.vertices().len()).collect();
                sizes.sort_unstable();
                assert_eq!(sizes, vec![1, 1]);
            }
            Outcome::Cancelled => panic!("should not cancel"),
        }
    }

    struct AlwaysCancel;
    impl Cancel for AlwaysCancel {
        fn is_cancelled(&self) -> bool {
            true
        }
        fn report_progress(&self, _done: usize, _total: usize) {}
    }

    #[test]
    fn cancellation_is_observed_before_any_merge() {
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 1), (1, 2), (0, 2)]);
        match try_compute(&g, &AlwaysCancel).unwrap() {
            Outcome::Cancelled => {}
            Outcome::Completed(_) => panic!("expected cancellation"),
        }
    }
}
