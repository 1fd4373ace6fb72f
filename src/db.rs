//! Task store and list rendering.
//!
//! This module provides the `TaskStore` that owns the in-memory task list and
//! the data file it was loaded from, along with the JSON helpers shared with
//! the config layer and the formatting used by both front ends.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TodoError};
use crate::fields::ListOption;
use crate::task::Task;

/// The ordered task list for one configured data file.
///
/// Tasks are addressed by position. Any call that changes the length of the
/// list (`remove_task`, `clear_tasks`) invalidates indices captured earlier.
/// Mutations only touch memory; call [`TaskStore::save`] to persist them.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    data_file: PathBuf,
}

impl TaskStore {
    /// Construct a store from a config file: read the config, then load the
    /// data file it points at. A missing data file gives an empty list.
    pub fn open(config_file: &Path) -> Result<Self> {
        let config = Config::load(config_file)?;
        Self::with_data_file(config.data_file())
    }

    /// Load a store directly from a data file.
    pub fn with_data_file(data_file: PathBuf) -> Result<Self> {
        let tasks = load_tasks(&data_file)?;
        debug!(file = %data_file.display(), count = tasks.len(), "loaded tasks");
        Ok(TaskStore { tasks, data_file })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Full path of the data file this store reads and writes.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Append a new, not-done task.
    pub fn add_task(&mut self, text: impl Into<String>) {
        self.tasks.push(Task::new(text));
    }

    /// Flip the completion flag of the task at `index`.
    pub fn toggle_task(&mut self, index: usize) -> Result<()> {
        let task = self.get_mut(index)?;
        task.done = !task.done;
        Ok(())
    }

    /// Delete the task at `index`; later tasks move down one position.
    pub fn remove_task(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Replace the text of the task at `index`, keeping its completion flag.
    pub fn edit_task(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.get_mut(index)?.text = text.into();
        Ok(())
    }

    /// Drop every task. Fine on an empty list.
    pub fn clear_tasks(&mut self) {
        self.tasks.clear();
    }

    /// Advisory check; the mutating calls validate again on their own.
    pub fn task_exists(&self, index: usize) -> bool {
        index < self.tasks.len()
    }

    /// Rewrite the whole data file (atomic-ish, temp file + rename), creating
    /// its directory if needed.
    pub fn save(&self) -> Result<()> {
        save_tasks(&self.data_file, &self.tasks)?;
        debug!(file = %self.data_file.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.task_exists(index) {
            Ok(())
        } else {
            Err(TodoError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        self.check_index(index)?;
        Ok(&mut self.tasks[index])
    }
}

/// Read a data file.
///
/// Missing file and zero-byte file both mean "no tasks". Anything that is not
/// an array of `{text: string, done: bool}` objects is `InvalidFormat`.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let buf = fs::read_to_string(path).map_err(|e| TodoError::invalid_format(path, e))?;
    if buf.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&buf).map_err(|e| TodoError::invalid_format(path, e))
}

/// Write the full task list to `path` as a pretty-printed JSON array.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| TodoError::persistence(dir, e))?;
        }
    }
    write_atomic(path, tasks).map_err(|e| TodoError::persistence(path, e))
}

fn write_atomic(path: &Path, tasks: &[Task]) -> io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = to_pretty_json(tasks)?;
    let mut f = File::create(&tmp)?;
    f.write_all(data.as_bytes())?;
    f.flush()?;
    fs::rename(tmp, path)
}

/// Serialize with 4-space indentation, the on-disk format of both files.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Render tasks one per line as `N. [x] text`, keeping each task's position in
/// the full list so the printed number can be used with `done`/`remove`/`edit`.
/// Returns an empty vector when nothing matches.
pub fn format_tasks(tasks: &[Task], filter: Option<ListOption>) -> Vec<String> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| filter.map_or(true, |f| f.matches(t.done)))
        .map(|(i, t)| format!("{}. {} {}", i, t.marker(), t.text))
        .collect()
}
