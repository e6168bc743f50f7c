//! Task-list manager.
//!
//! `TaskList` owns the ordered sequence of tasks. Insertion order is display
//! order is persisted order; indices are positions and are recomputed on
//! every query, so deleting a task shifts everything after it down by one.
//!
//! Every operation returns the user-facing confirmation message. The display
//! layer presents these strings as-is.

use crate::error::{Error, Result};
use crate::task::Task;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only access to the task at `index`.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Append an already-constructed task. Used when populating the list
    /// from the backing file; no confirmation message is produced.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn add_todo(&mut self, description: impl Into<String>) -> String {
        self.add(Task::todo(description))
    }

    pub fn add_deadline(&mut self, description: impl Into<String>, by: NaiveDate) -> String {
        self.add(Task::deadline(description, by))
    }

    pub fn add_event(&mut self, description: impl Into<String>, at: NaiveDate) -> String {
        self.add(Task::event(description, at))
    }

    fn add(&mut self, task: Task) -> String {
        let line = task.display_line();
        self.tasks.push(task);
        format!(
            "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
            line,
            self.tasks.len()
        )
    }

    /// 1-indexed rendering of all tasks in order. An empty list renders as
    /// an explicit message, never as an empty string.
    pub fn list(&self) -> String {
        if self.tasks.is_empty() {
            return "You have no tasks in your list.".to_string();
        }

        let mut lines = vec!["Here are the tasks in your list:".to_string()];
        for (position, task) in self.tasks.iter().enumerate() {
            lines.push(format!("{}.{}", position + 1, task.display_line()));
        }
        lines.join("\n")
    }

    /// Remove the task at the 0-based `index`.
    pub fn delete(&mut self, index: usize) -> Result<String> {
        if index >= self.tasks.len() {
            return Err(Error::IndexOutOfRange {
                length: self.tasks.len(),
            });
        }

        let removed = self.tasks.remove(index);
        Ok(format!(
            "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
            removed.display_line(),
            self.tasks.len()
        ))
    }

    /// Mark the task at the 0-based `index` as done.
    pub fn mark_done(&mut self, index: usize) -> Result<String> {
        let length = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { length })?;

        task.mark_done();
        Ok(format!(
            "Nice! I've marked this task as done:\n  {}",
            task.display_line()
        ))
    }

    /// Tasks whose description contains `keyword` as a case-sensitive
    /// substring, with their original 0-based positions, in order.
    pub fn matches<'a>(&'a self, keyword: &str) -> Vec<(usize, &'a Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().contains(keyword))
            .collect()
    }

    /// Rendering of all matching tasks with their original 1-based display
    /// indices.
    pub fn find(&self, keyword: &str) -> String {
        let matches = self.matches(keyword);
        if matches.is_empty() {
            return "No matching tasks found.".to_string();
        }

        let mut lines = vec!["Here are the matching tasks in your list:".to_string()];
        for (position, task) in matches {
            lines.push(format!("{}.{}", position + 1, task.display_line()));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn add_reports_task_and_count() {
        let mut list = TaskList::new();
        let message = list.add_todo("Buy milk");
        assert!(message.contains("[T][ ] Buy milk"));
        assert!(message.contains("you have 1 tasks"));

        let message = list.add_deadline("Pay rent", date(2024, 1, 5));
        assert!(message.contains("[D][ ] Pay rent (by: Jan 05 2024)"));
        assert!(message.contains("you have 2 tasks"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn list_is_one_indexed_and_ordered() {
        let mut list = TaskList::new();
        list.add_todo("Read book");
        list.add_deadline("Pay rent", date(2024, 1, 5));

        let rendered = list.list();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1.[T][ ] Read book");
        assert_eq!(lines[2], "2.[D][ ] Pay rent (by: Jan 05 2024)");
    }

    #[test]
    fn empty_list_renders_explicit_message() {
        let list = TaskList::new();
        assert_eq!(list.list(), "You have no tasks in your list.");
    }

    #[test]
    fn delete_shifts_later_indices_down() {
        let mut list = TaskList::new();
        list.add_todo("first");
        list.add_todo("second");
        list.add_todo("third");

        let message = list.delete(0).expect("delete");
        assert!(message.contains("[T][ ] first"));
        assert!(message.contains("you have 2 tasks"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).expect("task").description(), "second");
        assert_eq!(list.get(1).expect("task").description(), "third");
    }

    #[test]
    fn delete_out_of_range_fails_without_mutation() {
        let mut list = TaskList::new();
        list.add_todo("only");

        let err = list.delete(1).expect_err("out of range");
        assert!(matches!(err, Error::IndexOutOfRange { length: 1 }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn mark_done_updates_rendering() {
        let mut list = TaskList::new();
        list.add_todo("Read book");

        let message = list.mark_done(0).expect("done");
        assert!(message.contains("[T][X] Read book"));
        assert!(list.get(0).expect("task").is_done());

        // Marking again is a no-op, not an error.
        let again = list.mark_done(0).expect("done twice");
        assert!(again.contains("[T][X] Read book"));
    }

    #[test]
    fn mark_done_out_of_range_fails() {
        let mut list = TaskList::new();
        list.add_todo("a");
        list.add_todo("b");

        let err = list.mark_done(2).expect_err("out of range");
        assert!(matches!(err, Error::IndexOutOfRange { length: 2 }));
    }

    #[test]
    fn find_is_case_sensitive_and_keeps_original_indices() {
        let mut list = TaskList::new();
        list.add_todo("Buy milk");
        list.add_todo("Walk dog");
        list.add_todo("Spill milk");

        let rendered = list.find("milk");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1.[T][ ] Buy milk");
        assert_eq!(lines[2], "3.[T][ ] Spill milk");

        assert_eq!(list.find("Milk"), "No matching tasks found.");
    }
}
