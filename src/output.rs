//! Shared output formatting for taskbook CLI commands.
//!
//! Core operations return one pre-formatted message string; this module only
//! decides how to present it (plain text, JSON envelope, or nothing under
//! `--quiet`).

use serde::Serialize;

use crate::error::Result;

pub const SCHEMA_VERSION: &str = "taskbook.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    message: &str,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
            message: &'a str,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
            message,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    println!("{message}");
    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    let next_steps = error_next_steps(err);
    let hint = next_steps.first().map(|step| step.as_str());
    if json {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            message: &'a str,
            code: i32,
            kind: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<serde_json::Value>,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody<'a>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            next_steps: Vec<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                message: &err.to_string(),
                code: err.exit_code(),
                kind: error_kind(err),
                details: err.details(),
            },
            next_steps,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

pub fn infer_command_name_from_args() -> String {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        // These global flags take a value; skip it so a leading
        // `--file <path>` is not mistaken for the subcommand.
        if arg == "--file" || arg == "--config" {
            let _ = args.next();
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return arg;
    }
    "taskbook".to_string()
}

fn error_kind(err: &crate::error::Error) -> &'static str {
    match err.exit_code() {
        2 => "user_error",
        3 => "data_error",
        _ => "operation_failed",
    }
}

fn error_next_steps(err: &crate::error::Error) -> Vec<String> {
    use crate::error::Error;

    match err {
        Error::DateFormat(_) => vec!["give the date as YYYY-MM-DD, e.g. 2024-12-01".to_string()],
        Error::NegativeIndex | Error::IndexOutOfRange { .. } => {
            vec!["taskbook list shows each task's number".to_string()]
        }
        Error::EmptyKeyword => vec!["taskbook find <keyword>".to_string()],
        Error::Decode { .. } => {
            vec!["fix or remove the bad line, or set storage.on_decode_error = \"skip\"".to_string()]
        }
        Error::TomlParse(_) => vec!["fix config.toml then retry".to_string()],
        _ => Vec::new(),
    }
}
