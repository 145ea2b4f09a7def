use anyhow::{Context, Result, bail};
use colored::*;
use log::{info, warn};
use std::path::Path;
use crate::config::read_document;
use crate::logger::{LogSink, failure_line};
use crate::runner::parse::parse_tasks;
use crate::runner::run_tasks;
use crate::runner::task::Task;

pub fn handle_run(file: Option<&Path>, dry_run: bool) -> Result<()> {
    let input = read_document(file)?;
    let tasks = parse_tasks(&input).context("when parsing tasks")?;
    info!("{} Loaded {} task(s)", "📦".green(), tasks.len());

    if dry_run {
        return handle_dry_run(&tasks);
    }

    let mut sink = LogSink::new();
    run_all(&tasks, &mut sink)
}

/// The sink has already logged every failure, so an abort only reports
/// where the run stopped.
fn run_all(tasks: &[Task], sink: &mut LogSink) -> Result<()> {
    if let Err(failure) = run_tasks(tasks, sink) {
        bail!("run aborted at task {}", failure.index);
    }

    if sink.failures() == 0 {
        info!("{} All {} task(s) succeeded", "✨".green(), tasks.len());
    } else {
        warn!(
            "{} Finished with {} ignored failure(s) out of {} task(s)",
            "⚠️".yellow(),
            sink.failures(),
            tasks.len()
        );
    }
    Ok(())
}

/// Resolves every task's arguments and prints the planned operation.
/// Stops where a real run would abort on bad arguments.
fn handle_dry_run(tasks: &[Task]) -> Result<()> {
    for (index, task) in tasks.iter().enumerate() {
        match task.operation() {
            Ok(op) => println!("{} [DRY-RUN] {}: {}", "::".yellow(), index, op),
            Err(e) => {
                warn!("{} {}", "❌".red(), failure_line(index, &e));
                if task.abort_on_fail {
                    bail!("Dry run stops at task {}: {}", index, e);
                }
            }
        }
    }
    Ok(())
}
