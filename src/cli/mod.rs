//! Command-line interface for taskbook
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.
//!
//! The CLI is the input layer: it parses index strings into integers and
//! joins word lists into descriptions, then hands raw values to the command
//! layer for validation. Task numbers on the command line are the 1-based
//! numbers shown by `taskbook list`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::list::TaskList;
use crate::storage::Storage;
use crate::task::{Task, TaskKind, RECORD_DATE_FORMAT};

mod add;
mod delete;
mod done;
mod find;
mod list;

/// taskbook - personal task tracker
///
/// Tracks to-dos, deadlines, and events in an ordered list persisted to a
/// flat text file.
#[derive(Parser, Debug)]
#[command(name = "taskbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the backing file (defaults to the configured path, then the
    /// platform data directory)
    #[arg(long, global = true, env = "TASKBOOK_FILE")]
    pub file: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true, env = "TASKBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an undated to-do
    Todo {
        /// Task description
        description: Vec<String>,
    },

    /// Add a task that is due by a date
    Deadline {
        /// Task description
        description: Vec<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        by: String,
    },

    /// Add a task that happens on a date
    Event {
        /// Task description
        description: Vec<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        at: String,
    },

    /// List all tasks in order
    List,

    /// Mark a task as done by its list number
    Done {
        /// Task number as shown by `taskbook list`
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Delete a task by its list number
    Delete {
        /// Task number as shown by `taskbook list`
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Find tasks whose description contains a keyword
    Find {
        /// Keyword to match (case-sensitive substring)
        keyword: Vec<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let globals = Globals {
            file: self.file,
            config: self.config,
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Todo { description } => add::run_todo(join_words(description), globals),
            Commands::Deadline { description, by } => {
                add::run_deadline(join_words(description), by, globals)
            }
            Commands::Event { description, at } => {
                add::run_event(join_words(description), at, globals)
            }
            Commands::List => list::run(globals),
            Commands::Done { number } => done::run(number, globals),
            Commands::Delete { number } => delete::run(number, globals),
            Commands::Find { keyword } => find::run(join_words(keyword), globals),
        }
    }
}

/// Global flags shared by every subcommand.
#[derive(Debug, Clone)]
pub(crate) struct Globals {
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

fn join_words(words: Vec<String>) -> String {
    words.join(" ")
}

/// Loaded state for one command invocation: the storage handle and the
/// task list read from it.
pub(crate) struct Context {
    pub storage: Storage,
    pub tasks: TaskList,
}

/// Resolve config and backing file, then load the task list.
///
/// A backing file given on the command line wins over the configured path,
/// which wins over the platform default. Lines skipped under the lenient
/// decode policy are reported on stderr unless `--quiet` is set.
pub(crate) fn load_context(globals: &Globals) -> Result<Context> {
    let config = match &globals.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let path = match &globals.file {
        Some(path) => path.clone(),
        None => config.data_file()?,
    };

    let storage = Storage::new(path, config.storage.on_decode_error);
    let loaded = storage.load()?;
    if loaded.skipped > 0 && !globals.quiet {
        eprintln!(
            "warning: skipped {} malformed line(s) in {}",
            loaded.skipped,
            storage.path().display()
        );
    }

    Ok(Context {
        storage,
        tasks: loaded.list,
    })
}

/// Serializable view of one task for JSON output.
#[derive(Debug, Serialize)]
pub(crate) struct TaskView {
    pub kind: String,
    pub done: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub display: String,
}

impl TaskView {
    pub fn from_task(task: &Task) -> Self {
        let date = match task.kind() {
            TaskKind::Todo => None,
            TaskKind::Deadline { by } => Some(by.format(RECORD_DATE_FORMAT).to_string()),
            TaskKind::Event { at } => Some(at.format(RECORD_DATE_FORMAT).to_string()),
        };
        Self {
            kind: task.kind().discriminator().to_string(),
            done: task.is_done(),
            description: task.description().to_string(),
            date,
            display: task.display_line(),
        }
    }
}
