//! Error types for the embedding pipeline.
//!
//! Every failure is fatal for the whole invocation: the tool either writes
//! one valid generated file or nothing. The variants only classify *where*
//! the failure happened so the CLI can pick an exit code and name the
//! operation in its diagnostic.

use thiserror::Error;

/// The top-level error type for embedding operations.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A problem with the invocation's inputs (exit code 2): unreadable or
    /// nonexistent path, or a container name that could not be resolved.
    #[error("input error: {0:#}")]
    Input(#[source] anyhow::Error),

    /// Archive construction failed (exit code 1): stat, header encoding, or
    /// a write into the in-memory archive buffer.
    #[error("archive error: {0:#}")]
    Archive(#[source] anyhow::Error),

    /// Source emission failed (exit code 1): the rendered text did not
    /// parse, or one of the names is not a valid identifier.
    #[error("emit error: {0:#}")]
    Emit(#[source] anyhow::Error),
}

impl EmbedError {
    pub fn input(err: impl Into<anyhow::Error>) -> Self {
        EmbedError::Input(err.into())
    }

    pub fn archive(err: impl Into<anyhow::Error>) -> Self {
        EmbedError::Archive(err.into())
    }

    pub fn emit(err: impl Into<anyhow::Error>) -> Self {
        EmbedError::Emit(err.into())
    }

    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            EmbedError::Input(_) => 2,
            EmbedError::Archive(_) | EmbedError::Emit(_) => 1,
        }
    }
}

/// Result type alias using EmbedError.
pub type EmbedResult<T> = Result<T, EmbedError>;
