//! taskbook add commands: `todo`, `deadline`, `event`.

use serde::Serialize;

use crate::command;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};

use super::{load_context, Globals, TaskView};

#[derive(Serialize)]
struct TaskAddedOutput {
    /// 1-based number of the new task, as shown by `list`
    number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<TaskView>,
    total: usize,
}

pub fn run_todo(description: String, globals: Globals) -> Result<()> {
    let mut ctx = load_context(&globals)?;
    let message = command::todo(&description, &mut ctx.tasks)?;
    finish("todo", ctx, message, &globals)
}

pub fn run_deadline(description: String, by: String, globals: Globals) -> Result<()> {
    let mut ctx = load_context(&globals)?;
    let message = command::deadline(&description, &by, &mut ctx.tasks)?;
    finish("deadline", ctx, message, &globals)
}

pub fn run_event(description: String, at: String, globals: Globals) -> Result<()> {
    let mut ctx = load_context(&globals)?;
    let message = command::event(&description, &at, &mut ctx.tasks)?;
    finish("event", ctx, message, &globals)
}

fn finish(name: &str, ctx: super::Context, message: String, globals: &Globals) -> Result<()> {
    ctx.storage.save(&ctx.tasks)?;

    let total = ctx.tasks.len();
    let task = ctx.tasks.get(total.saturating_sub(1)).map(TaskView::from_task);
    let output = TaskAddedOutput {
        number: total,
        task,
        total,
    };

    emit_success(
        OutputOptions {
            json: globals.json,
            quiet: globals.quiet,
        },
        name,
        &output,
        &message,
    )
}
