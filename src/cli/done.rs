//! taskbook done command implementation.

use serde::Serialize;

use crate::command;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};

use super::{load_context, Globals, TaskView};

#[derive(Serialize)]
struct DoneOutput {
    /// 1-based number as given on the command line
    number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<TaskView>,
    total: usize,
}

pub fn run(number: i64, globals: Globals) -> Result<()> {
    let mut ctx = load_context(&globals)?;

    // `list` numbers tasks from 1; the core indexes from 0.
    let index = number - 1;
    let message = command::done(index, &mut ctx.tasks)?;
    ctx.storage.save(&ctx.tasks)?;

    let task = ctx.tasks.get(index as usize).map(TaskView::from_task);
    let output = DoneOutput {
        number,
        task,
        total: ctx.tasks.len(),
    };

    emit_success(
        OutputOptions {
            json: globals.json,
            quiet: globals.quiet,
        },
        "done",
        &output,
        &message,
    )
}
