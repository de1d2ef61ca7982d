use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    pub edge: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(edge: E, kind: AddEdgeErrorKind) -> Self {
        Self { edge, kind }
    }

    pub fn into_edge(self) -> E {
        self.edge
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    TargetAbsent,
    ParallelEdge,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::TargetAbsent => "target does not exist",
            AddEdgeErrorKind::ParallelEdge => {
                "an edge already exists and the graph does not allow parallel edges"
            }
        };
        f.write_str(reason)
    }
}

/// The error encountered when a graph cannot be built from the given input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// A required input was not provided. Holds the name of the input.
    #[error("invalid argument: `{0}` is required")]
    InvalidArgument(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let error = AddEdgeError::new((0, 1), AddEdgeErrorKind::TargetAbsent);
        assert_eq!(error.to_string(), "adding edge failed: target does not exist");
        assert_eq!(error.into_edge(), (0, 1));

        assert_eq!(
            BuildError::InvalidArgument("edges").to_string(),
            "invalid argument: `edges` is required"
        );
    }
}
