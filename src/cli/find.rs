//! taskbook find command implementation.

use serde::Serialize;

use crate::command;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};

use super::{load_context, Globals, TaskView};

#[derive(Serialize)]
struct FindOutput {
    keyword: String,
    total: usize,
    matches: Vec<FoundTask>,
}

#[derive(Serialize)]
struct FoundTask {
    /// Original 1-based number in the full list
    number: usize,
    task: TaskView,
}

pub fn run(keyword: String, globals: Globals) -> Result<()> {
    let ctx = load_context(&globals)?;
    let message = command::find(&keyword, &ctx.tasks)?;

    let matches: Vec<FoundTask> = ctx
        .tasks
        .matches(&keyword)
        .into_iter()
        .map(|(position, task)| FoundTask {
            number: position + 1,
            task: TaskView::from_task(task),
        })
        .collect();

    let output = FindOutput {
        total: matches.len(),
        keyword,
        matches,
    };

    emit_success(
        OutputOptions {
            json: globals.json,
            quiet: globals.quiet,
        },
        "find",
        &output,
        &message,
    )
}
