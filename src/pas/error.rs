use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShellError>;

/// Everything that can go wrong while running one input line.
///
/// Only `Syntax` leaves the previous outcome alone; every other variant
/// counts as a failed command.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("{name}: command not found")]
    CommandNotFound { name: String },

    #[error("{path}: {source}")]
    Redirection {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{program}: failed to start: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Misused or failed builtin (`cd` with the wrong arguments, ...).
    #[error("{0}")]
    Builtin(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
impl ShellError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, ShellError::Syntax(_))
    }
}
