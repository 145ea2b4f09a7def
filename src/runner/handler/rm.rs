// Rm handler

use std::fs;
use std::io;
use std::path::Path;

pub fn handle_rm_file(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// Removes a directory. Without `recursive` it must be empty.
/// A recursive removal of a path that is already gone succeeds.
pub fn handle_rm_dir(path: &Path, recursive: bool) -> io::Result<()> {
    if !recursive {
        return fs::remove_dir(path);
    }
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
