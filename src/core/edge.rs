use std::fmt;

/// An edge going from a source vertex to a target vertex.
///
/// The stores only ever look at the endpoints of an edge. Anything else the
/// edge carries is opaque payload that is stored and handed back untouched.
pub trait Edge<V> {
    fn source(&self) -> &V;
    fn target(&self) -> &V;

    fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source() == self.target()
    }
}

/// Edge with an attached payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct TaggedEdge<V, T> {
    pub source: V,
    pub target: V,
    pub tag: T,
}

impl<V, T> TaggedEdge<V, T> {
    pub fn new(source: V, target: V, tag: T) -> Self {
        Self {
            source,
            target,
            tag,
        }
    }
}

impl<V: fmt::Display, T: fmt::Display> fmt::Display for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.tag)
    }
}

mod imp {
    use super::*;

    impl<V, T> Edge<V> for TaggedEdge<V, T> {
        fn source(&self) -> &V {
            &self.source
        }

        fn target(&self) -> &V {
            &self.target
        }
    }

    impl<V> Edge<V> for (V, V) {
        fn source(&self) -> &V {
            &self.0
        }

        fn target(&self) -> &V {
            &self.1
        }
    }

    impl<V, T> Edge<V> for (V, V, T) {
        fn source(&self) -> &V {
            &self.0
        }

        fn target(&self) -> &V {
            &self.1
        }
    }

    impl<V, E: Edge<V>> Edge<V> for &E {
        fn source(&self) -> &V {
            (**self).source()
        }

        fn target(&self) -> &V {
            (**self).target()
        }
    }
}
