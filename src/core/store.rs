//! The contract between graph builders and graph storages.

use std::hash::Hash;

use super::{
    edge::Edge,
    error::{AddEdgeError, AddEdgeErrorKind},
};

/// A graph storage that can be populated vertex by vertex and edge by edge.
///
/// Vertices are identified by value. The vertex set keeps insertion order and
/// never holds the same vertex twice. Edges keep insertion order too. If the
/// storage does not allow parallel edges, at most one edge is kept for each
/// (source, target) pair, the payload of the edges plays no role.
pub trait GraphStore<V, E>: Sized
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    type VerticesIter<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    type EdgesIter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    type OutEdgesIter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    fn with_capacity(
        allow_parallel_edges: bool,
        vertex_capacity: usize,
        edge_capacity: usize,
    ) -> Self;

    fn new(allow_parallel_edges: bool) -> Self {
        Self::with_capacity(allow_parallel_edges, 0, 0)
    }

    fn allows_parallel_edges(&self) -> bool;

    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Returns `true` if there is at least one edge going from `source` to
    /// `target`.
    fn contains_edge(&self, source: &V, target: &V) -> bool;

    /// Vertices in the order they were added.
    fn vertices(&self) -> Self::VerticesIter<'_>;

    /// Edges in the order they were added.
    fn edges(&self) -> Self::EdgesIter<'_>;

    /// Edges going out of `vertex`, in the order they were added. Empty if the
    /// vertex does not exist.
    fn out_edges(&self, vertex: &V) -> Self::OutEdgesIter<'_>;

    fn out_degree(&self, vertex: &V) -> usize {
        self.out_edges(vertex).count()
    }

    /// Adds the vertex unless it is already present. Returns `true` if the
    /// vertex was added.
    fn add_vertex(&mut self, vertex: V) -> bool;

    fn try_add_edge(&mut self, edge: E) -> Result<(), AddEdgeError<E>>;

    /// Adds the edge. Returns `false` if the edge was rejected because it would
    /// be parallel to an existing edge and the storage does not allow that.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints does not exist in the graph.
    fn add_edge(&mut self, edge: E) -> bool {
        match self.try_add_edge(edge) {
            Ok(()) => true,
            Err(error) if error.kind == AddEdgeErrorKind::ParallelEdge => false,
            Err(error) => panic!("{error}"),
        }
    }

    /// Adds the endpoints of the edge if they are not present yet and then adds
    /// the edge itself. Returns the same as [`add_edge`](GraphStore::add_edge).
    fn add_vertices_and_edge(&mut self, edge: E) -> bool {
        self.add_vertex(edge.source().clone());
        self.add_vertex(edge.target().clone());
        self.add_edge(edge)
    }

    /// Returns the number of vertices actually added.
    fn add_vertex_range<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        vertices
            .into_iter()
            .map(|vertex| self.add_vertex(vertex))
            .filter(|added| *added)
            .count()
    }

    /// Returns the number of edges actually added.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints does not exist in the graph.
    fn add_edge_range<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = E>,
    {
        edges
            .into_iter()
            .map(|edge| self.add_edge(edge))
            .filter(|added| *added)
            .count()
    }

    /// Returns the number of edges actually added.
    fn add_vertices_and_edge_range<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = E>,
    {
        edges
            .into_iter()
            .map(|edge| self.add_vertices_and_edge(edge))
            .filter(|added| *added)
            .count()
    }
}

/// A graph storage that additionally indexes edges by their target.
pub trait BidirectionalStore<V, E>: GraphStore<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    type InEdgesIter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    /// Edges coming into `vertex`, in the order they were added. Empty if the
    /// vertex does not exist.
    fn in_edges(&self, vertex: &V) -> Self::InEdgesIter<'_>;

    fn in_degree(&self, vertex: &V) -> usize {
        self.in_edges(vertex).count()
    }

    /// Sum of in and out degrees. A self-loop counts twice.
    fn degree(&self, vertex: &V) -> usize {
        self.out_degree(vertex) + self.in_degree(vertex)
    }
}
