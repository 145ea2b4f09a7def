// Mkdir handler

use std::fs;
use std::io;
use std::path::Path;

/// Creates a single directory. The parent must already exist.
pub fn handle_mkdir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o750);
    }
    builder.create(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mkdir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("project");
        handle_mkdir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_mkdir_existing() {
        let dir = tempdir().unwrap();
        let err = handle_mkdir(dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_mkdir_is_not_recursive() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a").join("b");
        let err = handle_mkdir(&target).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!dir.path().join("a").exists());
    }
}
