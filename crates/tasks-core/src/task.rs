//! A single to-do entry.

use serde::{Deserialize, Serialize};

/// A task description plus its completion flag.
///
/// The description is fixed at creation. Only [`crate::TaskManager`] can flip
/// the completion flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    description: String,
    is_completed: bool,
}

impl TaskItem {
    /// Create an incomplete task. Any description is accepted, including `""`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            is_completed: false,
        }
    }

    /// The task text as entered.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task has been marked complete.
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub(crate) fn mark_completed(&mut self) {
        self.is_completed = true;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
