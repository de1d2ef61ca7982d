use std::hash::Hash;

use crate::core::{error::BuildError, Edge, GraphStore};

use super::{from_edges_with, require, BuildOptions};

/// Builds a graph from a list of edges that may be missing.
///
/// See [`from_edges_with`] for how the graph is populated.
///
/// # Examples
///
/// ```
/// use graft::{build::EdgeListBuilder, core::error::BuildError, storage::AdjacencyGraph};
///
/// let edges: Option<Vec<(u32, u32)>> = None;
/// let graph = EdgeListBuilder::new_opt(edges).build::<AdjacencyGraph<_, _>, _, _>();
///
/// assert_eq!(graph.unwrap_err(), BuildError::InvalidArgument("edges"));
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListBuilder<I> {
    edges: Option<I>,
    options: BuildOptions,
}

impl<I> EdgeListBuilder<I> {
    pub fn new(edges: I) -> Self {
        Self::new_opt(Some(edges))
    }

    pub fn new_opt(edges: Option<I>) -> Self {
        Self {
            edges,
            options: BuildOptions::default(),
        }
    }

    pub fn allow_parallel_edges(self, allow_parallel_edges: bool) -> Self {
        Self {
            options: self.options.allow_parallel_edges(allow_parallel_edges),
            ..self
        }
    }

    pub fn options(self, options: BuildOptions) -> Self {
        Self { options, ..self }
    }

    /// Returns [`BuildError::InvalidArgument`] if the edges are missing. No
    /// graph is created in that case.
    pub fn build<G, V, E>(self) -> Result<G, BuildError>
    where
        V: Eq + Hash + Clone,
        E: Edge<V>,
        G: GraphStore<V, E>,
        I: IntoIterator<Item = E>,
    {
        let edges = require(self.edges, "edges")?;
        Ok(from_edges_with(edges, self.options.allow_parallel_edges))
    }
}
