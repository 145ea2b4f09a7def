use colored::*;
use env_logger::Env;
use log::error;

use crate::error::TaskError;
use crate::runner::{FailureSink, task::Task};

/// Sets up `env_logger`. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .init();
}

pub fn failure_line(index: usize, error: &TaskError) -> String {
    format!("when running task {}, {}", index, error)
}

/// Logs each task failure as it happens and keeps count.
#[derive(Debug, Default)]
pub struct LogSink {
    failures: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl FailureSink for LogSink {
    fn on_failure(&mut self, index: usize, task: &Task, error: &TaskError) {
        self.failures += 1;
        if task.name.is_empty() {
            error!("{} {}", "❌".red(), failure_line(index, error));
        } else {
            error!("{} {} [{}]", "❌".red(), failure_line(index, error), task.name.dimmed());
        }
    }
}
