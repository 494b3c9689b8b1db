/// Errors raised by graph operations.
///
/// Only `degree` hard-fails on a missing vertex. Every other query degrades
/// to an empty, false, or `None` result instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested vertex is not in the graph.
    #[error("no such vertex: {vertex}")]
    NoSuchVertex { vertex: String },

    /// A path strategy name did not match any known strategy.
    #[error("unknown path strategy '{0}' (use 'exhaustive' or 'breadth')")]
    UnknownPathStrategy(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
