//! taskbook list command implementation.

use serde::Serialize;

use crate::command;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};

use super::{load_context, Globals, TaskView};

#[derive(Serialize)]
struct ListOutput {
    total: usize,
    tasks: Vec<TaskView>,
}

pub fn run(globals: Globals) -> Result<()> {
    let ctx = load_context(&globals)?;
    let message = command::list(&ctx.tasks);

    let output = ListOutput {
        total: ctx.tasks.len(),
        tasks: ctx.tasks.iter().map(TaskView::from_task).collect(),
    };

    emit_success(
        OutputOptions {
            json: globals.json,
            quiet: globals.quiet,
        },
        "list",
        &output,
        &message,
    )
}
