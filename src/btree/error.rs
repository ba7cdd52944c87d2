use thiserror::Error;

/// Errors that can occur during B+ tree operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BPlusTreeError {
    #[error("degree too small: {0} (must be >= 3)")]
    DegreeTooSmall(usize),

    #[error("key conflict: {0}")]
    KeyConflict(String),
}

pub type BPlusTreeResult<T> = Result<T, BPlusTreeError>;
