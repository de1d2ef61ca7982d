//! Implementations of graph storages.
//!
//! A _storage_ holds the vertices and edges of a graph and implements the
//! [`GraphStore`](crate::core::GraphStore) contract that the
//! [builders](crate::build) drive. The available storages are:
//!
//! * [Adjacency graph](adjacency), which indexes edges by their source only
//! * [Bidirectional graph](bidirectional), which indexes edges by both their
//!   source and their target
//!
//! |                  | **[AdjacencyGraph]** | **[BidirectionalGraph]** |
//! |------------------|----------------------|--------------------------|
//! | add vertex       | _O*(1)_              | _O*(1)_                  |
//! | add edge         | _O*(1)_              | _O*(1)_                  |
//! | contains edge    | _O(1)_               | _O(1)_                   |
//! | out edges        | _O(d)_               | _O(d)_                   |
//! | in edges         | –                    | _O(d)_                   |
//! | space            | _O(V + E)_           | _O(V + E)_               |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity

pub mod adjacency;
pub mod bidirectional;
mod shared;

#[doc(inline)]
pub use self::{adjacency::AdjacencyGraph, bidirectional::BidirectionalGraph};

#[cfg(test)]
pub(crate) mod tests {
    use assert_matches::assert_matches;

    use crate::core::{
        error::{AddEdgeError, AddEdgeErrorKind},
        GraphStore,
    };

    pub fn test_basic<G>()
    where
        G: GraphStore<&'static str, (&'static str, &'static str)>,
    {
        let mut graph = G::new(true);

        assert!(graph.add_vertex("a"));
        assert!(graph.add_vertex("b"));
        assert!(!graph.add_vertex("a"));
        assert!(graph.add_vertex("c"));

        assert!(graph.add_edge(("a", "b")));
        assert!(graph.add_edge(("b", "c")));
        assert!(graph.add_edge(("a", "c")));
        assert!(graph.add_edge(("c", "c")));

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edges().count(), graph.edge_count());
        assert_eq!(
            graph.out_edges(&"a").copied().collect::<Vec<_>>(),
            vec![("a", "b"), ("a", "c")]
        );
        assert_eq!(graph.out_degree(&"c"), 1);
        assert_eq!(graph.out_degree(&"z"), 0);
        assert_eq!(graph.out_edges(&"z").count(), 0);

        assert!(graph.contains_vertex(&"b"));
        assert!(!graph.contains_vertex(&"z"));
        assert!(graph.contains_edge(&"a", &"b"));
        assert!(!graph.contains_edge(&"b", &"a"));
        assert!(!graph.contains_edge(&"z", &"a"));

        let sum: usize = graph.vertices().map(|v| graph.out_degree(v)).sum();
        assert_eq!(sum, graph.edge_count());
    }

    pub fn test_parallel_edges<G>()
    where
        G: GraphStore<u32, (u32, u32, char)>,
    {
        let mut multi = G::new(true);
        assert!(multi.allows_parallel_edges());
        multi.add_vertex(0);
        multi.add_vertex(1);

        assert!(multi.add_edge((0, 1, 'a')));
        assert!(multi.add_edge((0, 1, 'b')));
        assert_eq!(multi.edge_count(), 2);
        assert_eq!(multi.out_degree(&0), 2);

        let mut simple = G::new(false);
        assert!(!simple.allows_parallel_edges());
        simple.add_vertex(0);
        simple.add_vertex(1);

        assert!(simple.add_edge((0, 1, 'a')));
        assert!(!simple.add_edge((0, 1, 'b')));
        assert!(simple.add_edge((1, 0, 'c')));
        assert_eq!(simple.edge_count(), 2);
        assert_eq!(
            simple.out_edges(&0).copied().collect::<Vec<_>>(),
            vec![(0, 1, 'a')]
        );
    }

    pub fn test_missing_endpoints<G>()
    where
        G: GraphStore<u32, (u32, u32)>,
    {
        let mut graph = G::new(true);
        graph.add_vertex(0);

        assert_matches!(
            graph.try_add_edge((1, 0)),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SourceAbsent,
                ..
            })
        );
        assert_matches!(
            graph.try_add_edge((0, 1)),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::TargetAbsent,
                ..
            })
        );
        assert_eq!(graph.edge_count(), 0);

        assert!(graph.add_vertices_and_edge((0, 1)));
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(graph.edge_count(), 1);
    }

    pub fn test_ranges<G>()
    where
        G: GraphStore<u32, (u32, u32)>,
    {
        let mut graph = G::new(false);

        assert_eq!(graph.add_vertex_range([3, 1, 3, 2]), 3);
        assert_eq!(graph.add_edge_range([(3, 1), (1, 2), (3, 1)]), 2);
        assert_eq!(graph.add_vertices_and_edge_range([(2, 4), (4, 3), (2, 4)]), 2);

        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![3, 1, 2, 4]);
        assert_eq!(
            graph.edges().copied().collect::<Vec<_>>(),
            vec![(3, 1), (1, 2), (2, 4), (4, 3)]
        );
    }
}
