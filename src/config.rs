use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Loads `.env` from the working directory, if present, so `FSTASK_FILE`
/// and `RUST_LOG` can live there. Runs before the logger exists.
pub fn load_env() {
    match dotenvy::dotenv() {
        Ok(path) => eprintln!("{} Loading environment from: {}", "🌿".green(), path.display().to_string().bold()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("{} Ignoring .env: {}", "⚠️".yellow(), e),
    }
}

/// Reads the whole task document from `file`, or from stdin when it is
/// absent or `-`.
pub fn read_document(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("Failed to read task document {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read task document from stdin")?;
            Ok(buf)
        }
    }
}
