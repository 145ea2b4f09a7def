use std::path::Path;
use crate::error::TaskError;
use super::task::{Args, TaskType};

pub fn required_path(kind: TaskType, args: &Args) -> Result<&Path, TaskError> {
    args.get("path")
        .map(Path::new)
        .ok_or(TaskError::MissingArgument { kind, arg: "path" })
}

/// Reads a "true"/"false" argument. Absent means false; anything else is rejected.
pub fn parse_flag(kind: TaskType, args: &Args, arg: &'static str) -> Result<bool, TaskError> {
    match args.get(arg).map(String::as_str) {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(TaskError::InvalidArgument {
            kind,
            arg,
            value: other.to_string(),
        }),
    }
}
