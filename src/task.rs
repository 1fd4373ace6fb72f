//! Task data structure.

use serde::{Deserialize, Serialize};

/// A single entry of the list.
///
/// Tasks carry no identifier: a task is addressed by its zero-based position
/// in the list, so any removal shifts the position of every later task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            done: false,
        }
    }

    /// Checkbox marker used when rendering the task.
    pub fn marker(&self) -> &'static str {
        if self.done {
            "[x]"
        } else {
            "[ ]"
        }
    }
}
