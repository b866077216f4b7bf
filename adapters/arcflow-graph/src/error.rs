use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graphs cover different sentences: expected {expected} vertices, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("head {head} of node {modifier} is not a vertex")]
    HeadOutOfRange { modifier: usize, head: usize },
}
