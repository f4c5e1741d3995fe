use thiserror::Error;

/// 比对构建与修剪过程中可能出现的错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrimError {
    #[error("alignment contains no records")]
    EmptyAlignment,

    #[error("record '{id}' has length {found}, expected alignment length {expected}")]
    RaggedAlignment { id: String, expected: usize, found: usize },

    #[error("duplicate record identifier '{id}'")]
    DuplicateId { id: String },

    #[error("trim guide '{id}' not found in alignment")]
    TrimGuideNotFound { id: String },

    #[error("no gap-to-residue boundary in trim guide '{id}': {reason}")]
    BoundaryNotFound { id: String, reason: &'static str },

    #[error("alignment has no residue left: every record or column is gap")]
    AllGapAlignment,

    #[error("alignment has {found} sequences, at least {required} required")]
    InsufficientSequenceCount { found: usize, required: usize },
}

pub type TrimResult<T> = Result<T, TrimError>;
