/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! Splices two communities' `NeighborRow`s into one, incrementally updating
//! every affected ΔQ, community best, and global-heap entry -- equations
//! 10a/10b/10c of Clauset-Newman-Moore, combined with the Wakita-Tsurumi
//! two-level heap.
use itertools::{EitherOrBoth, Itertools};

use crate::community::Community;
use crate::error::{CommunityError, CommunityResult};
use crate::id::CommunityId;
use crate::neighbor_row::NeighborRow;
use crate::state::DetectionState;

/// Merges communities `a` and `b` into a freshly-minted community, returning
/// its id. `a` and `b` must be live, distinct, and mutual neighbors -- the
/// Driver only ever calls this with a community and its own cached best
/// neighbor, so that invariant always holds in practice.
pub(crate) fn merge(state: &mut DetectionState, a: CommunityId, b: CommunityId) -> CommunityResult<CommunityId> {
    if a == b {
        return Err(CommunityError::internal("attempted to merge a community with itself"));
    }
    let community_a = state
        .communities
        .remove(&a)
        .ok_or_else(|| CommunityError::internal(format!("merge: {} is not a live community", a)))?;
    let community_b = state
        .communities
        .remove(&b)
        .ok_or_else(|| CommunityError::internal(format!("merge: {} is not a live community", b)))?;

    let two_m = 2.0_f32 * state.num_edges as f32;
    let degree_a = community_a.degree() as f32;
    let degree_b = community_b.degree() as f32;

    let new_id = state.id_gen.next();
    let mut new_vertices = community_a.vertices().to_vec();
    new_vertices.extend_from_slice(community_b.vertices());
    let new_degree = community_a.degree() + community_b.degree();

    let mut new_row = NeighborRow::new();

    let joined = community_a
        .neighbors()
        .iter()
        .merge_join_by(community_b.neighbors().iter(), |left, right| left.0.cmp(&right.0));

    for step in joined {
        match step {
            EitherOrBoth::Both((k, entry_a), (_, entry_b)) => {
                // k is connected to both A and B. eq. 10a

                let new_delta_q = entry_a.delta_q + entry_b.delta_q;
                new_row.insert(k, new_delta_q);
                retarget_third_party(state, k, a, b, new_id, new_delta_q)?;
            }
            EitherOrBoth::Left((k, entry_a)) => {
                if k == b {
                    continue; // the A-B tie itself: it disappears on merge
                }
                // eq. 10b: only A was connected to k
                let degree_k = state.communities[&k].degree() as f32;
                let new_delta_q = entry_a.delta_q - 2.0 * (degree_b / two_m) * (degree_k / two_m);
                new_row.insert(k, new_delta_q);
                retarget_third_party(state, k, a, b, new_id, new_delta_q)?;
            }
            EitherOrBoth::Right((k, entry_b)) => {
                if k == a {
                    continue; // the A-B tie itself: it disappears on merge
                }
                // eq. 10c: only B was connected to k
                let degree_k = state.communities[&k].degree() as f32;
                let new_delta_q = entry_b.delta_q - 2.0 * (degree_a / two_m) * (degree_k / two_m);
                new_row.insert(k, new_delta_q);
                retarget_third_party(state, k, a, b, new_id, new_delta_q)?;
            }
        }
    }

    let new_community = Community::new(new_id, new_vertices, new_degree, new_row);
    state.global_heap.remove(a);
    state.global_heap.remove(b);
    state.global_heap.sync_new(&new_community)?;
    state.communities.insert(new_id, new_community);

    Ok(new_id)
}

/// Re-wires third-party community `k`'s row: it was connected to `a`
/// and/or `b`, now it is connected to `new_id` with ΔQ `new_delta_q`. `k`'s
/// best and global-heap entry are refreshed as part of this.
fn retarget_third_party(
    state: &mut DetectionState,
    k: CommunityId,
    a: CommunityId,
    b: CommunityId,
    new_id: CommunityId,
    new_delta_q: f32,
) -> CommunityResult<()> {
    let community_k = state
        .communities
        .get_mut(&k)
        .ok_or_else(|| CommunityError::internal(format!("merge: third-party community {} is not live", k)))?;
    let row = community_k.neighbors_mut();
    row.remove(a);
    row.remove(b);
    row.insert(new_id, new_delta_q);
    state.global_heap.sync_existing(community_k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraphBuilder;
    use crate::initializer::initialize;

    fn only_community_id(state: &DetectionState) -> CommunityId {
        *state.communities.keys().next().unwrap()
    }

    #[test]
    fn merging_a_single_edge_leaves_one_isolated_community() {
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 1)]);
        let mut state = initialize(&g).unwrap();
        let (c, _) = state.global_heap.try_top().unwrap();
        let (neighbor, _) = state.communities[&c].best().unwrap();
        let new_id = merge(&mut state, c, neighbor).unwrap();
        assert_eq!(state.communities.len(), 1);
        assert!(state.global_heap.is_empty());
        let merged = &state.communities[&new_id];
        assert_eq!(merged.vertices().len(), 2);
        assert!(merged.neighbors().is_empty());
    }

    #[test]
    fn triangle_collapses_to_one_community() {
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 1), (1, 2), (0, 2)]);
        let mut state = initialize(&g).unwrap();
        while let Some((c, q)) = state.global_heap.try_top() {
            if q < 0.0 {
                break;
            }
            let (neighbor, _) = state.communities[&c].best().unwrap();
            merge(&mut state, c, neighbor).unwrap();
        }
        assert_eq!(state.communities.len(), 1);
        assert_eq!(only_community_id(&state), only_community_id(&state));
        let degree_sum: usize = state.communities.values().map(|c| c.degree()).sum();
        assert_eq!(degree_sum, 2 * state.num_edges);
    }
}
