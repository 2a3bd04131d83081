use thiserror::Error;

// Error type for path enumeration operations.
//
// Both variants are caller bugs surfaced before any traversal begins; nothing
// here is recoverable or retryable at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Error when the caller supplies no start nodes.
    #[error("Start node set is empty, cannot enumerate paths.")]
    EmptyStartSet,

    /// Error when the caller supplies no end nodes.
    #[error("End node set is empty, cannot enumerate paths.")]
    EmptyEndSet,
}
