//! Error taxonomy for parsing and running task documents.

use thiserror::Error;
use crate::runner::task::TaskType;

/// The document could not be turned into a task sequence. Nothing runs.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Not well-formed YAML, or not shaped like a list of tasks.
    #[error("malformed task document: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// A task declares a type outside the supported set.
    #[error("invalid type {found:?} (task {index})")]
    InvalidType { index: usize, found: String },
}

/// A single task failed while running.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{kind} without {arg}")]
    MissingArgument { kind: TaskType, arg: &'static str },

    #[error("{kind}.{arg} is neither \"true\" nor \"false\" (got {value:?})")]
    InvalidArgument {
        kind: TaskType,
        arg: &'static str,
        value: String,
    },

    /// Filesystem error, passed through untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Returned by the sequence executor when an `abortOnFail` task fails.
#[derive(Debug, Error)]
#[error("task {index} ({name:?}) failed, run aborted: {source}")]
pub struct TaskFailure {
    pub index: usize,
    pub name: String,
    #[source]
    pub source: TaskError,
}
