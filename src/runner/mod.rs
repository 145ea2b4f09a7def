pub mod task;
pub mod parse;
pub mod handler;
pub mod common;

use colored::*;
use log::{debug, warn};
use crate::error::{TaskError, TaskFailure};
use self::task::Task;


/// Receives every task failure, whether or not it aborts the run.
pub trait FailureSink {
    fn on_failure(&mut self, index: usize, task: &Task, error: &TaskError);
}

impl<F> FailureSink for F
where
    F: FnMut(usize, &Task, &TaskError),
{
    fn on_failure(&mut self, index: usize, task: &Task, error: &TaskError) {
        self(index, task, error)
    }
}

/// Runs `tasks` in document order.
///
/// Every failure goes to `sink`. A failing task with `abort_on_fail` stops the
/// run and becomes the returned error; other failures never reach the result.
pub fn run_tasks<S>(tasks: &[Task], sink: &mut S) -> Result<(), TaskFailure>
where
    S: FailureSink + ?Sized,
{
    for (index, task) in tasks.iter().enumerate() {
        debug!("{} Running task {}: {} ({})", "⚡".yellow(), index, task.name.bold(), task.kind);

        let Err(error) = task.run() else {
            continue;
        };
        sink.on_failure(index, task, &error);

        if task.abort_on_fail {
            warn!("{} Aborting after task {}, {} task(s) skipped", "🛑".red(), index, tasks.len() - index - 1);
            return Err(TaskFailure {
                index,
                name: task.name.clone(),
                source: error,
            });
        }
    }
    Ok(())
}
