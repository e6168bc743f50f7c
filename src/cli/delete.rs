//! taskbook delete command implementation.

use serde::Serialize;

use crate::command;
use crate::error::Result;
use crate::output::{emit_success, OutputOptions};

use super::{load_context, Globals};

#[derive(Serialize)]
struct DeleteOutput {
    /// 1-based number as given on the command line
    number: i64,
    total: usize,
}

pub fn run(number: i64, globals: Globals) -> Result<()> {
    let mut ctx = load_context(&globals)?;

    // `list` numbers tasks from 1; the core indexes from 0.
    let message = command::delete(number - 1, &mut ctx.tasks)?;
    ctx.storage.save(&ctx.tasks)?;

    let output = DeleteOutput {
        number,
        total: ctx.tasks.len(),
    };

    emit_success(
        OutputOptions {
            json: globals.json,
            quiet: globals.quiet,
        },
        "delete",
        &output,
        &message,
    )
}
