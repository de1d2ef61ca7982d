//! Construction of graphs from a list of edges or from a list of vertices and
//! a function that expands a vertex into its outgoing edges.
//!
//! Both ways work with any [`GraphStore`], the choice of storage is made by
//! the type of the result. Unless told otherwise, the built graph allows
//! parallel edges. When parallel edges are not allowed, an edge whose (source,
//! target) pair is already present is silently skipped.
//!
//! The functions in this module take their inputs by value and cannot fail.
//! [`EdgeListBuilder`] and [`VertexExpansionBuilder`] accept inputs that may be
//! missing and report a missing input as [`BuildError::InvalidArgument`].
//!
//! # Examples
//!
//! ```
//! use graft::{
//!     build,
//!     core::{BidirectionalStore, GraphStore},
//!     storage::{AdjacencyGraph, BidirectionalGraph},
//! };
//!
//! let roads: AdjacencyGraph<_, _> = build::from_edges([
//!     ("Prague", "Brno"),
//!     ("Brno", "Ostrava"),
//!     ("Prague", "Brno"),
//! ]);
//!
//! assert_eq!(
//!     roads.vertices().copied().collect::<Vec<_>>(),
//!     vec!["Prague", "Brno", "Ostrava"]
//! );
//! assert_eq!(roads.edge_count(), 3);
//!
//! // Collatz successors of the first few numbers.
//! let collatz: BidirectionalGraph<u64, (u64, u64)> = build::from_vertices_with(
//!     1..=8,
//!     |&n| [(n, if n % 2 == 0 { n / 2 } else { 3 * n + 1 })],
//!     false,
//! );
//!
//! assert_eq!(collatz.in_degree(&4), 2);
//! assert!(collatz.contains_vertex(&16));
//! ```

use std::hash::Hash;

use tracing::{debug, trace};

use crate::core::{error::BuildError, Edge, GraphStore};

mod edge_list;
mod expansion;

pub use edge_list::EdgeListBuilder;
pub use expansion::VertexExpansionBuilder;

/// Parameters shared by all ways of building a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Whether the built graph keeps more than one edge between the same
    /// (source, target) pair. Defaults to `true`.
    pub allow_parallel_edges: bool,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_parallel_edges(self, allow_parallel_edges: bool) -> Self {
        Self {
            allow_parallel_edges,
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            allow_parallel_edges: true,
        }
    }
}

/// Builds a graph that allows parallel edges from a list of edges.
///
/// Equivalent to [`from_edges_with`] with `allow_parallel_edges` set to
/// `true`.
pub fn from_edges<G, V, E, I>(edges: I) -> G
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
    G: GraphStore<V, E>,
    I: IntoIterator<Item = E>,
{
    from_edges_with(edges, BuildOptions::default().allow_parallel_edges)
}

/// Builds a graph from a list of edges.
///
/// The edges are consumed in order, exactly once. The endpoints of every edge
/// are added to the graph when they are seen for the first time, so the order
/// of vertices in the graph is the order of their first appearance.
pub fn from_edges_with<G, V, E, I>(edges: I, allow_parallel_edges: bool) -> G
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
    G: GraphStore<V, E>,
    I: IntoIterator<Item = E>,
{
    let edges = edges.into_iter();
    let (edge_count, _) = edges.size_hint();

    let mut graph = G::with_capacity(allow_parallel_edges, 0, edge_count);
    populate_with_edges(&mut graph, edges);

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        allow_parallel_edges,
        "built graph from edge list"
    );

    graph
}

/// Builds a graph that allows parallel edges from a list of vertices and
/// their outgoing edges.
///
/// Equivalent to [`from_vertices_with`] with `allow_parallel_edges` set to
/// `true`.
pub fn from_vertices<G, V, E, I, F, J>(vertices: I, out_edges_of: F) -> G
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
    G: GraphStore<V, E>,
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> J,
    J: IntoIterator<Item = E>,
{
    from_vertices_with(
        vertices,
        out_edges_of,
        BuildOptions::default().allow_parallel_edges,
    )
}

/// Builds a graph from a list of vertices and a function that returns the
/// outgoing edges of a vertex.
///
/// All vertices are added first, without duplicates and in the order of their
/// first appearance. Then `out_edges_of` is called exactly once for each of
/// these vertices, in the same order, and the returned edges are added to the
/// graph. Edges may lead to vertices that are not in `vertices`. Such vertices
/// are added to the graph, but `out_edges_of` is never called for them.
pub fn from_vertices_with<G, V, E, I, F, J>(
    vertices: I,
    out_edges_of: F,
    allow_parallel_edges: bool,
) -> G
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
    G: GraphStore<V, E>,
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> J,
    J: IntoIterator<Item = E>,
{
    let vertices = vertices.into_iter();
    let (vertex_count, _) = vertices.size_hint();

    let mut graph = G::with_capacity(allow_parallel_edges, vertex_count, vertex_count);
    let expanded = expand_vertices(&mut graph, vertices, out_edges_of);

    debug!(
        vertices = graph.vertex_count(),
        expanded,
        edges = graph.edge_count(),
        allow_parallel_edges,
        "built graph from vertex expansion"
    );

    graph
}

/// Makes a missing input into an error carrying its name.
pub(crate) fn require<T>(input: Option<T>, name: &'static str) -> Result<T, BuildError> {
    input.ok_or(BuildError::InvalidArgument(name))
}

/// Adds all edges together with their endpoints. Returns the number of edges
/// actually added.
fn populate_with_edges<G, V, E, I>(graph: &mut G, edges: I) -> usize
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
    G: GraphStore<V, E>,
    I: IntoIterator<Item = E>,
{
    let mut added = 0;

    for edge in edges {
        if graph.add_vertices_and_edge(edge) {
            added += 1;
        } else {
            trace!("parallel edge skipped");
        }
    }

    added
}

/// Runs both phases of vertex expansion on an empty graph. Returns the number
/// of vertices `out_edges_of` was called for.
fn expand_vertices<G, V, E, I, F, J>(graph: &mut G, vertices: I, mut out_edges_of: F) -> usize
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
    G: GraphStore<V, E>,
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> J,
    J: IntoIterator<Item = E>,
{
    graph.add_vertex_range(vertices);

    // Vertices discovered through the edges below are appended to the graph,
    // but only this snapshot is expanded.
    let snapshot = graph.vertices().cloned().collect::<Vec<_>>();

    for (i, vertex) in snapshot.iter().enumerate() {
        let added = populate_with_edges(graph, out_edges_of(vertex));
        trace!(index = i, added, "expanded vertex");
    }

    snapshot.len()
}
