use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fstask", version, about = "Run a YAML list of filesystem tasks in order")]
pub struct Cli {
    /// Task document (YAML). Reads stdin when omitted or "-"
    #[arg(env = "FSTASK_FILE")]
    pub file: Option<PathBuf>,

    /// Check arguments and print what would be done, without touching the filesystem
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// List the tasks in the document
    #[arg(short = 'l', long = "list", conflicts_with = "dry_run")]
    pub list: bool,
}
