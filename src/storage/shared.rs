use std::{hash::Hash, slice::Iter};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::error::{AddEdgeError, AddEdgeErrorKind};

/// Insertion-ordered set of vertices with constant-time lookup of their
/// position.
#[derive(Debug, Clone)]
pub struct VertexTable<V> {
    vertices: Vec<V>,
    index: FxHashMap<V, usize>,
}

impl<V: Eq + Hash + Clone> VertexTable<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the position of the vertex and whether it was inserted just
    /// now.
    pub fn insert(&mut self, vertex: V) -> (usize, bool) {
        if let Some(&pos) = self.index.get(&vertex) {
            return (pos, false);
        }

        let pos = self.vertices.len();
        self.index.insert(vertex.clone(), pos);
        self.vertices.push(vertex);
        (pos, true)
    }

    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        self.vertices.iter()
    }
}

/// Insertion-ordered sequence of edges. Remembers which (source, target)
/// pairs are connected to enforce the parallel edge policy.
#[derive(Debug, Clone)]
pub struct EdgeTable<E> {
    edges: Vec<E>,
    pairs: FxHashSet<[usize; 2]>,
    allow_parallel_edges: bool,
}

impl<E> EdgeTable<E> {
    pub fn with_capacity(allow_parallel_edges: bool, capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            pairs: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            allow_parallel_edges,
        }
    }

    pub fn allows_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    /// Returns the position of the newly stored edge.
    pub fn push(&mut self, src: usize, dst: usize, edge: E) -> Result<usize, AddEdgeError<E>> {
        // The pair is recorded either way, `contains` depends on it.
        if !self.pairs.insert([src, dst]) && !self.allow_parallel_edges {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::ParallelEdge));
        }

        let pos = self.edges.len();
        self.edges.push(edge);
        Ok(pos)
    }

    pub fn contains(&self, src: usize, dst: usize) -> bool {
        self.pairs.contains(&[src, dst])
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn iter(&self) -> Iter<'_, E> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        self.edges.as_slice()
    }
}

/// Edges referenced by positions stored in an adjacency list of a vertex.
pub struct AdjEdgesIter<'a, E> {
    ids: Iter<'a, usize>,
    edges: &'a [E],
}

impl<'a, E> AdjEdgesIter<'a, E> {
    pub fn new(ids: &'a [usize], edges: &'a [E]) -> Self {
        Self {
            ids: ids.iter(),
            edges,
        }
    }

    pub fn empty() -> Self {
        Self::new(&[], &[])
    }
}

impl<'a, E> Iterator for AdjEdgesIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| &self.edges[id])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<E> ExactSizeIterator for AdjEdgesIter<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_table_dedup() {
        let mut table = VertexTable::with_capacity(0);

        assert_eq!(table.insert("a"), (0, true));
        assert_eq!(table.insert("b"), (1, true));
        assert_eq!(table.insert("a"), (0, false));

        assert_eq!(table.len(), 2);
        assert_eq!(table.position(&"b"), Some(1));
        assert_eq!(table.position(&"c"), None);
        assert_eq!(table.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn edge_table_parallel_policy() {
        let mut multi = EdgeTable::with_capacity(true, 0);
        assert_eq!(multi.push(0, 1, 'a'), Ok(0));
        assert_eq!(multi.push(0, 1, 'b'), Ok(1));
        assert_eq!(multi.len(), 2);

        let mut simple = EdgeTable::with_capacity(false, 0);
        assert_eq!(simple.push(0, 1, 'a'), Ok(0));
        assert_eq!(
            simple.push(0, 1, 'b'),
            Err(AddEdgeError::new('b', AddEdgeErrorKind::ParallelEdge))
        );
        assert_eq!(simple.push(1, 0, 'c'), Ok(1));
        assert!(simple.contains(1, 0));
        assert!(!simple.contains(1, 1));
        assert_eq!(simple.iter().copied().collect::<Vec<_>>(), vec!['a', 'c']);
    }
}
