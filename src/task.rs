//! Task model for taskbook.
//!
//! A task is a description plus a completion flag, with a calendar date
//! attached for the dated kinds. Each task renders to a one-line display
//! string and encodes to a one-line record in the backing file.

use chrono::NaiveDate;

/// Field delimiter in persisted records. Files written by earlier versions
/// use this exact token, so it must not change.
pub const RECORD_DELIMITER: &str = "/next";

/// Wire format for dates in records (ISO 8601 calendar date).
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-facing date format, e.g. `Jan 05 2024`.
pub const DISPLAY_DATE_FORMAT: &str = "%b %d %Y";

/// Kind-specific payload of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Undated to-do.
    Todo,
    /// Due by a date.
    Deadline { by: NaiveDate },
    /// Occurs on a date.
    Event { at: NaiveDate },
}

impl TaskKind {
    /// Single-letter discriminator used in records.
    pub fn discriminator(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Glyph shown in display lines, e.g. `[D]`.
    pub fn glyph(&self) -> String {
        format!("[{}]", self.discriminator())
    }
}

/// One trackable item.
///
/// The description is immutable after creation and never empty; emptiness is
/// rejected by the command layer before a `Task` is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    pub fn event(description: impl Into<String>, at: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { at },
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Mark the task completed. Idempotent: marking a done task again is a
    /// no-op. There is no way back to not-done.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Human-readable one-line rendering, e.g.
    /// `[D][ ] Pay rent (by: Jan 05 2024)`.
    pub fn display_line(&self) -> String {
        let marker = if self.done { "[X]" } else { "[ ]" };
        match self.kind {
            TaskKind::Todo => {
                format!("{}{} {}", self.kind.glyph(), marker, self.description)
            }
            TaskKind::Deadline { by } => format!(
                "{}{} {} (by: {})",
                self.kind.glyph(),
                marker,
                self.description,
                by.format(DISPLAY_DATE_FORMAT)
            ),
            TaskKind::Event { at } => format!(
                "{}{} {} (at: {})",
                self.kind.glyph(),
                marker,
                self.description,
                at.format(DISPLAY_DATE_FORMAT)
            ),
        }
    }

    /// Encode as one record line for the backing file.
    pub fn to_record(&self) -> String {
        let d = RECORD_DELIMITER;
        match self.kind {
            TaskKind::Todo => format!(
                "{}{d}{}{d}{}",
                self.kind.discriminator(),
                self.done,
                self.description
            ),
            TaskKind::Deadline { by } => format!(
                "{}{d}{}{d}{}{d}{}",
                self.kind.discriminator(),
                self.done,
                self.description,
                by.format(RECORD_DATE_FORMAT)
            ),
            TaskKind::Event { at } => format!(
                "{}{d}{}{d}{}{d}{}",
                self.kind.discriminator(),
                self.done,
                self.description,
                at.format(RECORD_DATE_FORMAT)
            ),
        }
    }

    /// Decode one record line.
    ///
    /// `Err` carries the reason the line is malformed; the storage layer
    /// attaches the line number and applies its decode policy.
    pub fn from_record(line: &str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.splitn(4, RECORD_DELIMITER).collect();
        if fields.len() < 3 {
            return Err(format!("expected at least 3 fields, found {}", fields.len()));
        }

        let discriminator = fields[0].trim();
        let done = fields[1].trim() == "true";

        let mut task = match discriminator {
            "T" => {
                if fields.len() != 3 {
                    return Err(format!("expected 3 fields for a todo, found {}", fields.len()));
                }
                Task::todo(fields[2])
            }
            "D" | "E" => {
                if fields.len() != 4 {
                    return Err(format!(
                        "expected 4 fields for a dated task, found {}",
                        fields.len()
                    ));
                }
                let raw_date = fields[3].trim();
                let date = NaiveDate::parse_from_str(raw_date, RECORD_DATE_FORMAT)
                    .map_err(|_| format!("unparseable date '{raw_date}'"))?;
                if discriminator == "D" {
                    Task::deadline(fields[2], date)
                } else {
                    Task::event(fields[2], date)
                }
            }
            other => return Err(format!("unknown discriminator '{other}'")),
        };

        if done {
            task.mark_done();
        }
        Ok(task)
    }
}
