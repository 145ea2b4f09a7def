mod cli;
mod config;
mod error;
mod handlers;
mod logger;
mod runner;

use clap::Parser;
use cli::Cli;
use handlers::{list, run};
use log::error;
use std::process;

fn main() {
    config::load_env();
    logger::init();
    let cli = Cli::parse();

    let result = if cli.list {
        list::handle_list(cli.file.as_deref())
    } else {
        run::handle_run(cli.file.as_deref(), cli.dry_run)
    };

    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }
}
