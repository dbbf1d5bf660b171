//! Errors surfaced by tree operations.

/// Errors triggered by tree operations with a precondition on their input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The operation needs at least one node but was given an empty tree.
    #[error("operation requires a non-empty tree")]
    EmptyTree,
}
