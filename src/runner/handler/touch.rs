// Touch handler

use std::fs::File;
use std::io;
use std::path::Path;

/// Creates an empty file, truncating an existing one. The handle is closed on return.
pub fn handle_touch(path: &Path) -> io::Result<()> {
    File::create(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_touch_truncates() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("VERSION");
        fs::write(&file, "0.9.0").unwrap();

        handle_touch(&file).unwrap();
        assert!(file.is_file());
        assert_eq!(fs::metadata(&file).unwrap().len(), 0);
    }

    #[test]
    fn test_touch_missing_parent() {
        let dir = tempdir().unwrap();
        let err = handle_touch(&dir.path().join("nope").join("f")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
