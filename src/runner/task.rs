use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use crate::error::TaskError;
use super::common::{parse_flag, required_path};
use super::handler::{mkdir, put, rm, touch};

pub type Args = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    CreateDir,
    CreateFile,
    RmFile,
    RmDir,
    PutContent,
}

impl TaskType {
    pub const ALL: [TaskType; 5] = [
        TaskType::CreateDir,
        TaskType::CreateFile,
        TaskType::RmFile,
        TaskType::RmDir,
        TaskType::PutContent,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        TaskType::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::CreateDir => "create_dir",
            TaskType::CreateFile => "create_file",
            TaskType::RmFile => "rm_file",
            TaskType::RmDir => "rm_dir",
            TaskType::PutContent => "put_content",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared unit of work, as read from the task document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    #[serde(rename = "abortOnFail")]
    pub abort_on_fail: bool,
    pub args: Args,
}

impl Task {
    /// Resolves `args` into the concrete operation for this task's type.
    /// Nothing touches the filesystem here.
    pub fn operation(&self) -> Result<Operation<'_>, TaskError> {
        let path = required_path(self.kind, &self.args)?;

        let op = match self.kind {
            TaskType::CreateDir => Operation::CreateDir { path },
            TaskType::CreateFile => Operation::CreateFile { path },
            TaskType::RmFile => Operation::RmFile { path },
            TaskType::RmDir => Operation::RmDir {
                path,
                recursive: parse_flag(self.kind, &self.args, "recursive")?,
            },
            TaskType::PutContent => Operation::PutContent {
                path,
                content: self.args.get("content").map(String::as_str).unwrap_or(""),
                append: parse_flag(self.kind, &self.args, "append")?,
            },
        };
        Ok(op)
    }

    pub fn run(&self) -> Result<(), TaskError> {
        self.operation()?.execute()
    }
}

/// A task with its arguments checked, ready to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    CreateDir { path: &'a Path },
    CreateFile { path: &'a Path },
    RmFile { path: &'a Path },
    RmDir { path: &'a Path, recursive: bool },
    PutContent { path: &'a Path, content: &'a str, append: bool },
}

impl Operation<'_> {
    pub fn execute(&self) -> Result<(), TaskError> {
        match *self {
            Operation::CreateDir { path } => mkdir::handle_mkdir(path)?,
            Operation::CreateFile { path } => touch::handle_touch(path)?,
            Operation::RmFile { path } => rm::handle_rm_file(path)?,
            Operation::RmDir { path, recursive } => rm::handle_rm_dir(path, recursive)?,
            Operation::PutContent { path, content, append } => put::handle_put(path, content, append)?,
        }
        Ok(())
    }
}

impl fmt::Display for Operation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::CreateDir { path } => write!(f, "mkdir {}", path.display()),
            Operation::CreateFile { path } => write!(f, "touch {}", path.display()),
            Operation::RmFile { path } => write!(f, "rm {}", path.display()),
            Operation::RmDir { path, recursive: true } => write!(f, "rm -r {}", path.display()),
            Operation::RmDir { path, recursive: false } => write!(f, "rmdir {}", path.display()),
            Operation::PutContent { path, content, append } => {
                let arrow = if *append { ">>" } else { ">" };
                write!(f, "put {} bytes {} {}", content.len(), arrow, path.display())
            }
        }
    }
}
