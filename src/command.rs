//! Command layer: validates raw arguments before touching the task list.
//!
//! One entry point per user-facing action. Each takes already-split raw
//! arguments plus the task list, rejects invalid input with a typed error,
//! and otherwise returns the manager's confirmation message unchanged. The
//! front end is responsible for parsing index strings into integers; the
//! checks here run on the resulting value.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::list::TaskList;
use crate::task::RECORD_DATE_FORMAT;

pub fn todo(description: &str, tasks: &mut TaskList) -> Result<String> {
    let description = non_empty(description, "a todo")?;
    Ok(tasks.add_todo(description))
}

pub fn deadline(description: &str, by: &str, tasks: &mut TaskList) -> Result<String> {
    let description = non_empty(description, "a deadline")?;
    let by = parse_date(by)?;
    Ok(tasks.add_deadline(description, by))
}

pub fn event(description: &str, at: &str, tasks: &mut TaskList) -> Result<String> {
    let description = non_empty(description, "an event")?;
    let at = parse_date(at)?;
    Ok(tasks.add_event(description, at))
}

pub fn list(tasks: &TaskList) -> String {
    tasks.list()
}

pub fn delete(index: i64, tasks: &mut TaskList) -> Result<String> {
    tasks.delete(checked_index(index, tasks)?)
}

pub fn done(index: i64, tasks: &mut TaskList) -> Result<String> {
    tasks.mark_done(checked_index(index, tasks)?)
}

pub fn find(keyword: &str, tasks: &TaskList) -> Result<String> {
    if keyword.trim().is_empty() {
        return Err(Error::EmptyKeyword);
    }
    Ok(tasks.find(keyword))
}

/// Blank descriptions are rejected before any other check.
fn non_empty<'a>(description: &'a str, kind: &'static str) -> Result<&'a str> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDescription(kind));
    }
    Ok(trimmed)
}

/// Dates are trimmed and must parse as `YYYY-MM-DD`; a date is always
/// required, so a blank field fails like any other unparseable text.
fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, RECORD_DATE_FORMAT)
        .map_err(|_| Error::DateFormat(trimmed.to_string()))
}

/// Negative indices are rejected first, then the upper bound against the
/// current length. Both checks run before any mutation.
fn checked_index(index: i64, tasks: &TaskList) -> Result<usize> {
    if index < 0 {
        return Err(Error::NegativeIndex);
    }
    let index = index as usize;
    if index >= tasks.len() {
        return Err(Error::IndexOutOfRange { length: tasks.len() });
    }
    Ok(index)
}
