//! Graph storage that keeps both outgoing and incoming edges of every vertex.
//!
//! Each stored edge is referenced from the outgoing list of its source and
//! from the incoming list of its target. Edges are never removed, so both
//! lists are only ever appended to, in edge insertion order.

use std::{hash::Hash, slice::Iter};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    marker::Direction,
    BidirectionalStore, Edge, GraphStore,
};

use super::shared::{AdjEdgesIter, EdgeTable, VertexTable};

#[derive(Debug, Clone)]
pub struct BidirectionalGraph<V, E> {
    vertices: VertexTable<V>,
    edges: EdgeTable<E>,
    adj: Vec<[Vec<usize>; 2]>,
}

impl<V: Eq + Hash + Clone, E: Edge<V>> BidirectionalGraph<V, E> {
    /// Creates an empty graph that allows parallel edges.
    pub fn new_multi() -> Self {
        <Self as GraphStore<V, E>>::new(true)
    }

    /// Creates an empty graph that rejects parallel edges.
    pub fn new_simple() -> Self {
        <Self as GraphStore<V, E>>::new(false)
    }

    fn adj_edges(&self, vertex: &V, dir: Direction) -> AdjEdgesIter<'_, E> {
        match self.vertices.position(vertex) {
            Some(pos) => AdjEdgesIter::new(&self.adj[pos][dir.index()], self.edges.as_slice()),
            None => AdjEdgesIter::empty(),
        }
    }

    fn adj_degree(&self, vertex: &V, dir: Direction) -> usize {
        self.vertices
            .position(vertex)
            .map_or(0, |pos| self.adj[pos][dir.index()].len())
    }
}

impl<V: Eq + Hash + Clone, E: Edge<V>> Default for BidirectionalGraph<V, E> {
    fn default() -> Self {
        Self::new_multi()
    }
}

impl<V, E> GraphStore<V, E> for BidirectionalGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    type VerticesIter<'a> = Iter<'a, V>
    where
        Self: 'a,
        V: 'a;

    type EdgesIter<'a> = Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    type OutEdgesIter<'a> = AdjEdgesIter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn with_capacity(
        allow_parallel_edges: bool,
        vertex_capacity: usize,
        edge_capacity: usize,
    ) -> Self {
        Self {
            vertices: VertexTable::with_capacity(vertex_capacity),
            edges: EdgeTable::with_capacity(allow_parallel_edges, edge_capacity),
            adj: Vec::with_capacity(vertex_capacity),
        }
    }

    fn allows_parallel_edges(&self) -> bool {
        self.edges.allows_parallel_edges()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.position(vertex).is_some()
    }

    fn contains_edge(&self, source: &V, target: &V) -> bool {
        match (self.vertices.position(source), self.vertices.position(target)) {
            (Some(src), Some(dst)) => self.edges.contains(src, dst),
            _ => false,
        }
    }

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.vertices.iter()
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        self.edges.iter()
    }

    fn out_edges(&self, vertex: &V) -> Self::OutEdgesIter<'_> {
        self.adj_edges(vertex, Direction::Outgoing)
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.adj_degree(vertex, Direction::Outgoing)
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        let (_, added) = self.vertices.insert(vertex);
        if added {
            self.adj.push([Vec::new(), Vec::new()]);
        }
        added
    }

    fn try_add_edge(&mut self, edge: E) -> Result<(), AddEdgeError<E>> {
        let Some(src) = self.vertices.position(edge.source()) else {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        };

        let Some(dst) = self.vertices.position(edge.target()) else {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::TargetAbsent));
        };

        let id = self.edges.push(src, dst, edge)?;

        // Both indices are updated together, a self-loop ends up in both
        // lists of the same vertex.
        self.adj[src][Direction::Outgoing.index()].push(id);
        self.adj[dst][Direction::Incoming.index()].push(id);

        Ok(())
    }
}

impl<V, E> BidirectionalStore<V, E> for BidirectionalGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    type InEdgesIter<'a> = AdjEdgesIter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn in_edges(&self, vertex: &V) -> Self::InEdgesIter<'_> {
        self.adj_edges(vertex, Direction::Incoming)
    }

    fn in_degree(&self, vertex: &V) -> usize {
        self.adj_degree(vertex, Direction::Incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infra::testing::check_bidirectional_consistency, storage::tests::*};

    #[test]
    fn basic() {
        test_basic::<BidirectionalGraph<_, _>>();
    }

    #[test]
    fn parallel_edges() {
        test_parallel_edges::<BidirectionalGraph<_, _>>();
    }

    #[test]
    fn missing_endpoints() {
        test_missing_endpoints::<BidirectionalGraph<_, _>>();
    }

    #[test]
    fn ranges() {
        test_ranges::<BidirectionalGraph<_, _>>();
    }

    #[test]
    fn in_edges() {
        let mut graph = BidirectionalGraph::new_multi();
        graph.add_vertices_and_edge_range([(0, 1, 'a'), (2, 1, 'b'), (1, 1, 'c'), (0, 1, 'd')]);

        let incoming = graph.in_edges(&1).map(|e| e.2).collect::<Vec<_>>();
        assert_eq!(incoming, vec!['a', 'b', 'c', 'd']);

        assert_eq!(graph.in_degree(&0), 0);
        assert_eq!(graph.in_degree(&1), 4);
        assert_eq!(graph.out_degree(&1), 1);
        assert_eq!(graph.degree(&1), 5);
        assert_eq!(graph.in_edges(&42).count(), 0);

        check_bidirectional_consistency(&graph).unwrap();
    }

    #[test]
    fn self_loop_counts_twice() {
        let mut graph = BidirectionalGraph::new_simple();
        graph.add_vertices_and_edge(("v", "v"));
        graph.add_vertices_and_edge(("v", "v"));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(&"v"), 1);
        assert_eq!(graph.in_degree(&"v"), 1);
        assert_eq!(graph.degree(&"v"), 2);

        check_bidirectional_consistency(&graph).unwrap();
    }
}
