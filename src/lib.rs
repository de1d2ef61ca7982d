//! Construction of directed graphs from edge lists and from vertex expansion.
//!
//! A graph is built into one of two [storages](storage): the
//! [`AdjacencyGraph`](storage::AdjacencyGraph), which tracks outgoing edges of
//! every vertex, and the [`BidirectionalGraph`](storage::BidirectionalGraph),
//! which tracks incoming edges too. The [`build`] module populates any of them
//! either from a list of edges or from a list of vertices and a function that
//! produces outgoing edges of each vertex.
//!
//! ```
//! use graft::prelude::*;
//!
//! let graph: BidirectionalGraph<_, _> = build::from_edges_with([(1, 2), (2, 3), (1, 2)], false);
//!
//! assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.in_degree(&2), 1);
//! ```

pub mod build;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    pub use crate::{
        build::{self, BuildOptions, EdgeListBuilder, VertexExpansionBuilder},
        core::{BidirectionalStore, Edge, GraphStore, TaggedEdge},
        storage::{AdjacencyGraph, BidirectionalGraph},
    };
}
