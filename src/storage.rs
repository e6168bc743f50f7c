//! Persistence codec for the backing file.
//!
//! One record per line, fields joined with the `/next` delimiter (see
//! `task::RECORD_DELIMITER`). Loads happen once at startup; every mutation
//! saves by rewriting the whole file atomically (temp file + rename), so the
//! on-disk order always equals the in-memory order.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::DecodePolicy;
use crate::error::{Error, Result};
use crate::list::TaskList;
use crate::task::Task;

/// Result of loading the backing file.
#[derive(Debug)]
pub struct LoadedTasks {
    pub list: TaskList,
    /// Lines dropped under the `skip` decode policy.
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
    policy: DecodePolicy,
}

impl Storage {
    pub fn new(path: PathBuf, policy: DecodePolicy) -> Self {
        Self { path, policy }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file into a task list.
    ///
    /// A missing file is an empty list, not an error. Blank lines are
    /// ignored. A malformed line is dropped with a warning under
    /// `DecodePolicy::Skip` and fails the load under `DecodePolicy::Abort`.
    pub fn load(&self) -> Result<LoadedTasks> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "backing file missing, starting empty");
            return Ok(LoadedTasks {
                list: TaskList::new(),
                skipped: 0,
            });
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut list = TaskList::new();
        let mut skipped = 0;

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match Task::from_record(&line) {
                Ok(task) => list.push(task),
                Err(reason) => match self.policy {
                    DecodePolicy::Skip => {
                        warn!(
                            path = %self.path.display(),
                            line = number + 1,
                            reason = %reason,
                            "skipping malformed record"
                        );
                        skipped += 1;
                    }
                    DecodePolicy::Abort => {
                        return Err(Error::Decode {
                            line: number + 1,
                            reason,
                        });
                    }
                },
            }
        }

        debug!(
            path = %self.path.display(),
            tasks = list.len(),
            skipped,
            "loaded backing file"
        );
        Ok(LoadedTasks { list, skipped })
    }

    /// Rewrite the backing file with every task in list order.
    ///
    /// The write goes to a temp file in the same directory and is renamed
    /// into place, so readers never observe a partial file.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buffer = String::new();
        for task in list.iter() {
            buffer.push_str(&task.to_record());
            buffer.push('\n');
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(buffer.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        debug!(path = %self.path.display(), tasks = list.len(), "saved backing file");
        Ok(())
    }
}
