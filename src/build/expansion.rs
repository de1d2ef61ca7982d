use std::hash::Hash;

use crate::core::{error::BuildError, Edge, GraphStore};

use super::{from_vertices_with, require, BuildOptions};

/// Builds a graph from a list of vertices and a function returning outgoing
/// edges of a vertex, any of which may be missing.
///
/// See [`from_vertices_with`] for how the graph is populated.
///
/// # Examples
///
/// ```
/// use graft::{build::VertexExpansionBuilder, core::GraphStore, storage::BidirectionalGraph};
///
/// let graph = VertexExpansionBuilder::new([1, 2], |v: &u32| [(*v, 0)])
///     .allow_parallel_edges(false)
///     .build::<BidirectionalGraph<_, _>, _, _, _>()
///     .unwrap();
///
/// assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct VertexExpansionBuilder<I, F> {
    vertices: Option<I>,
    out_edges_of: Option<F>,
    options: BuildOptions,
}

impl<I, F> VertexExpansionBuilder<I, F> {
    pub fn new(vertices: I, out_edges_of: F) -> Self {
        Self::new_opt(Some(vertices), Some(out_edges_of))
    }

    pub fn new_opt(vertices: Option<I>, out_edges_of: Option<F>) -> Self {
        Self {
            vertices,
            out_edges_of,
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

    /// Returns [`BuildError::InvalidArgument`] if the vertices or the function
    /// are missing, the vertices are checked first. No graph is created and the
    /// function is not called in that case.
    pub fn build<G, V, E, J>(self) -> Result<G, BuildError>
    where
        V: Eq + Hash + Clone,
        E: Edge<V>,
        G: GraphStore<V, E>,
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> J,
        J: IntoIterator<Item = E>,
    {
        let vertices = require(self.vertices, "vertices")?;
        let out_edges_of = require(self.out_edges_of, "out_edges_of")?;

        Ok(from_vertices_with(
            vertices,
            out_edges_of,
            self.options.allow_parallel_edges,
        ))
    }
}
