//! Graph storage that keeps only the outgoing edges of every vertex.

use std::{hash::Hash, slice::Iter};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    Edge, GraphStore,
};

use super::shared::{AdjEdgesIter, EdgeTable, VertexTable};

#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E> {
    vertices: VertexTable<V>,
    edges: EdgeTable<E>,
    out: Vec<Vec<usize>>,
}

impl<V: Eq + Hash + Clone, E: Edge<V>> AdjacencyGraph<V, E> {
    /// Creates an empty graph that allows parallel edges.
    pub fn new_multi() -> Self {
        <Self as GraphStore<V, E>>::new(true)
    }

    /// Creates an empty graph that rejects parallel edges.
    pub fn new_simple() -> Self {
        <Self as GraphStore<V, E>>::new(false)
    }
}

impl<V: Eq + Hash + Clone, E: Edge<V>> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        Self::new_multi()
    }
}

impl<V, E> GraphStore<V, E> for AdjacencyGraph<V, E>
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
            out: Vec::with_capacity(vertex_capacity),
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
        match self.vertices.position(vertex) {
            Some(pos) => AdjEdgesIter::new(&self.out[pos], self.edges.as_slice()),
            None => AdjEdgesIter::empty(),
        }
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.vertices
            .position(vertex)
            .map_or(0, |pos| self.out[pos].len())
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        let (_, added) = self.vertices.insert(vertex);
        if added {
            self.out.push(Vec::new());
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
        self.out[src].push(id);

        Ok(())
    }
}
