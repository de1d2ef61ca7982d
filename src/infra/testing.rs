use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::core::{marker::Direction, BidirectionalStore, Edge, GraphStore};

fn degree_dir(dir: Direction) -> &'static str {
    match dir {
        Direction::Outgoing => "out",
        Direction::Incoming => "in",
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("vertices iterator yields a vertex more than once")]
    DuplicateVertex,
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("edge endpoint is not a vertex of the graph")]
    DanglingEndpoint,
    #[error("{} edge is listed at a vertex it is not incident with", degree_dir(*.0))]
    MisplacedEdge(Direction),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", degree_dir(*.2))]
    HandshakingLemmaDirected(usize, usize, Direction),
    #[error("graph does not allow parallel edges, but has {0} edges and only {1} distinct pairs")]
    ParallelEdges(usize, usize),
    #[error("outgoing and incoming indices disagree on the edges between some pair of vertices")]
    IndexMismatch,
}

fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
where
    F: FnOnce(usize, usize) -> ConsistencyCheckError,
{
    if actual == expected {
        Ok(())
    } else {
        Err(error(actual, expected))
    }
}

/// Checks invariants that hold for every [`GraphStore`].
pub fn check_consistency<V, E, G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
    G: GraphStore<V, E>,
{
    let vertex_count = graph.vertex_count();

    cmp(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;

    let distinct = graph.vertices().collect::<FxHashSet<_>>();
    if distinct.len() != vertex_count {
        return Err(ConsistencyCheckError::DuplicateVertex);
    }

    let edge_count = graph.edge_count();

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for edge in graph.edges() {
        if !graph.contains_vertex(edge.source()) || !graph.contains_vertex(edge.target()) {
            return Err(ConsistencyCheckError::DanglingEndpoint);
        }

        if !graph.contains_edge(edge.source(), edge.target()) {
            return Err(ConsistencyCheckError::IndexMismatch);
        }
    }

    let mut out_degree_sum = 0;

    for vertex in graph.vertices() {
        for edge in graph.out_edges(vertex) {
            if edge.source() != vertex {
                return Err(ConsistencyCheckError::MisplacedEdge(Direction::Outgoing));
            }
        }

        let degree = graph.out_degree(vertex);
        cmp(
            graph.out_edges(vertex).count(),
            degree,
            |_, _| ConsistencyCheckError::MisplacedEdge(Direction::Outgoing),
        )?;
        out_degree_sum += degree;
    }

    cmp(out_degree_sum, edge_count, |actual, expected| {
        ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, Direction::Outgoing)
    })?;

    if !graph.allows_parallel_edges() {
        let pairs = graph
            .edges()
            .map(|edge| (edge.source(), edge.target()))
            .collect::<FxHashSet<_>>();

        if pairs.len() != edge_count {
            return Err(ConsistencyCheckError::ParallelEdges(edge_count, pairs.len()));
        }
    }

    Ok(())
}

/// Checks invariants of [`GraphStore`] and additionally that the outgoing and
/// incoming indices of a [`BidirectionalStore`] agree.
pub fn check_bidirectional_consistency<V, E, G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
    G: BidirectionalStore<V, E>,
{
    check_consistency(graph)?;

    let edge_count = graph.edge_count();
    let mut in_degree_sum = 0;

    // Multiset of (source, target) pairs seen from both sides. Each side
    // contributes with opposite sign, so a consistent graph sums to zero.
    let mut balance = FxHashMap::<(&V, &V), isize>::default();

    for vertex in graph.vertices() {
        for edge in graph.in_edges(vertex) {
            if edge.target() != vertex {
                return Err(ConsistencyCheckError::MisplacedEdge(Direction::Incoming));
            }

            *balance.entry((edge.source(), edge.target())).or_default() += 1;
        }

        for edge in graph.out_edges(vertex) {
            *balance.entry((edge.source(), edge.target())).or_default() -= 1;
        }

        let degree = graph.in_degree(vertex);
        cmp(
            graph.in_edges(vertex).count(),
            degree,
            |_, _| ConsistencyCheckError::MisplacedEdge(Direction::Incoming),
        )?;
        in_degree_sum += degree;
    }

    cmp(in_degree_sum, edge_count, |actual, expected| {
        ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, Direction::Incoming)
    })?;

    if balance.values().any(|count| *count != 0) {
        return Err(ConsistencyCheckError::IndexMismatch);
    }

    Ok(())
}
