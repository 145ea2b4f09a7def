use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use crate::config::read_document;
use crate::runner::parse::parse_tasks;

pub fn handle_list(file: Option<&Path>) -> Result<()> {
    let input = read_document(file)?;
    let tasks = parse_tasks(&input).context("when parsing tasks")?;

    if tasks.is_empty() {
        println!("No tasks defined in document.");
        return Ok(());
    }

    println!("{}", "Tasks:".bold().underline());

    let max_len = tasks.iter().map(|t| t.kind.as_str().len()).max().unwrap_or(0);
    for (index, task) in tasks.iter().enumerate() {
        let padding = " ".repeat(max_len - task.kind.as_str().len() + 2);
        let abort = if task.abort_on_fail { "(abort on fail)".red().to_string() } else { String::new() };
        println!(
            "  {:>3}  {}{}{} {}",
            index,
            task.kind.as_str().cyan(),
            padding,
            task.name.italic(),
            abort
        );
    }

    Ok(())
}
