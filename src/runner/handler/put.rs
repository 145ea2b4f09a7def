// Put handler

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Writes `content` to `path`, creating the file if needed.
/// Without `append` the previous content is truncated first.
pub fn handle_put(path: &Path, content: &str, append: bool) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o755);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())
}
