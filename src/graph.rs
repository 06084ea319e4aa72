/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! The minimal graph interface the core consumes. A real application is
//! expected to bring its own graph representation and implement `Graph` /
//! `Vertex` over it; `AdjacencyListGraph` below is a small reference
//! implementation, used by this crate's own tests: a flat `id -> record`
//! map plus an insertion-ordered id list.
use crate::id::VertexId;
use fxhash::FxHashMap;

/// A single vertex, as seen by the community-detection core. `adjacent`
/// lists every tie the vertex participates in; it may contain the vertex's
/// own id (a self-loop) and may repeat a neighbor id (a parallel edge) --
/// the core, not the graph, is responsible for collapsing those.
pub trait Vertex {
    fn id(&self) -> VertexId;
    fn adjacent(&self) -> &[VertexId];
    /// Degree is simply the number of adjacency-list entries. Self-loops
    /// are stored twice (once for each "end"), matching the usual
    /// sum-of-degrees == 2|E| convention.
    fn degree(&self) -> usize {
        self.adjacent().len()
    }
}

/// General-purpose trait an external graph representation implements so the
/// community-detection core can consume it. Deliberately minimal: no edge
/// typing, no directedness, no weights -- those are out of scope here.
pub trait Graph {
    type V: Vertex;
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::V> + '_>;
    fn get_vertex(&self, id: VertexId) -> &Self::V;
    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;
}

/// Reference `Vertex` implementation: a plain adjacency list.
pub struct AdjacencyListVertex {
    pub vertex_id: VertexId,
    pub adjacent: Vec<VertexId>,
}
impl Vertex for AdjacencyListVertex {
    fn id(&self) -> VertexId {
        self.vertex_id
    }
    fn adjacent(&self) -> &[VertexId] {
        &self.adjacent
    }
}

/// Reference `Graph` implementation: an undirected graph that may contain
/// parallel edges and self-loops, stored as adjacency lists.
pub struct AdjacencyListGraph {
    pub vertices: FxHashMap<VertexId, AdjacencyListVertex>,
    pub ids: Vec<VertexId>,
    pub num_edges: usize,
}
impl Graph for AdjacencyListGraph {
    type V = AdjacencyListVertex;
    fn vertices(&self) -> Box<dyn Iterator<Item = &AdjacencyListVertex> + '_> {
        Box::new(self.ids.iter().map(move |id| &self.vertices[id]))
    }
    fn get_vertex(&self, id: VertexId) -> &AdjacencyListVertex {
        &self.vertices[&id]
    }
    fn vertex_count(&self) -> usize {
        self.ids.len()
    }
    fn edge_count(&self) -> usize {
        self.num_edges
    }
}
impl AdjacencyListGraph {
    pub fn create_empty() -> Self {
        Self {
            vertices: FxHashMap::default(),
            ids: Vec::new(),
            num_edges: 0,
        }
    }
}

/// Builds an `AdjacencyListGraph` from a raw edge list. Unlike a
/// deduplicating graph builder, parallel edges and self-loops are kept
/// verbatim: the community-detection core itself, not the graph layer, is
/// responsible for collapsing parallel edges and skipping self-loops when
/// it wires up neighbor rows.
pub struct AdjacencyListGraphBuilder {}
impl AdjacencyListGraphBuilder {
    pub fn from_edges(edges: &[(i64, i64)]) -> AdjacencyListGraph {
        let mut adjacency: FxHashMap<VertexId, Vec<VertexId>> = FxHashMap::default();
        let mut ids: Vec<VertexId> = Vec::new();

        for &(raw_u, raw_v) in edges {
            let u = VertexId::from(raw_u);
            let v = VertexId::from(raw_v);
            for id in [u, v] {
                if let std::collections::hash_map::Entry::Vacant(e) = adjacency.entry(id) {
                    e.insert(Vec::new());
                    ids.push(id);
                }
            }
            if u == v {
                // self-loop: counts twice towards this vertex's degree.
                adjacency.get_mut(&u).unwrap().push(v);
                adjacency.get_mut(&u).unwrap().push(v);
            } else {
                adjacency.get_mut(&u).unwrap().push(v);
                adjacency.get_mut(&v).unwrap().push(u);
            }
        }

        let vertices: FxHashMap<VertexId, AdjacencyListVertex> = adjacency
            .into_iter()
            .map(|(id, adjacent)| (id, AdjacencyListVertex { vertex_id: id, adjacent }))
            .collect();

        AdjacencyListGraph {
            vertices,
            num_edges: edges.len(),
            ids,
        }
    }

    pub fn from_vertices_and_edges(num_vertices: usize, edges: &[(i64, i64)]) -> AdjacencyListGraph {
        let mut graph = Self::from_edges(edges);
        for i in 0..num_vertices as i64 {
            let id = VertexId::from(i);
            if !graph.vertices.contains_key(&id) {
                graph.vertices.insert(
                    id,
                    AdjacencyListVertex {
                        vertex_id: id,
                        adjacent: Vec::new(),
                    },
                );
                graph.ids.push(id);
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_counts_twice_towards_degree() {
        let g = AdjacencyListGraphBuilder::from_edges(&[(0, 0), (0, 1), (0, 1)]);
        assert_eq!(g.get_vertex(VertexId::from(0i64)).degree(), 4);
        assert_eq!(g.get_vertex(VertexId::from(1i64)).degree(), 2);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn isolated_vertices_keep_their_ids_with_no_edges() {
        let g = AdjacencyListGraphBuilder::from_vertices_and_edges(5, &[]);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 0);
        for v in g.vertices() {
            assert_eq!(v.degree(), 0);
        }
    }
}
