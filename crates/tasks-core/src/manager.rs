//! Positional task collection.
//!
//! Key rules:
//!
//! - **Insertion order**: tasks are listed in the order they were added.
//! - **Unstable positions**: deleting index `i` shifts every later task down.
//! - **Out-of-range handling**: [`TaskManager::mark_complete`] ignores a bad
//!   index silently, [`TaskManager::delete`] reports it by returning `false`.
//!   Callers rely on the difference, so the two are kept separate.

use tracing::debug;

use crate::task::TaskItem;

/// Owns the ordered list of tasks for one session.
#[derive(Clone, Debug, Default)]
pub struct TaskManager {
    tasks: Vec<TaskItem>,
}

impl TaskManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an incomplete task to the end of the list.
    pub fn add(&mut self, description: impl Into<String>) {
        let task = TaskItem::new(description);
        debug!(position = self.tasks.len(), description = task.description(), "task added");
        self.tasks.push(task);
    }

    /// All tasks in insertion order.
    pub fn list(&self) -> &[TaskItem] {
        &self.tasks
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Mark the task at `index` complete.
    ///
    /// Out-of-range indices (negative or `>= len`) are ignored. Marking an
    /// already completed task changes nothing.
    pub fn mark_complete(&mut self, index: i64) {
        let Some(position) = self.position(index) else {
            debug!(index, len = self.tasks.len(), "mark_complete index out of range, ignoring");
            return;
        };
        self.tasks[position].mark_completed();
        debug!(index, "task marked complete");
    }

    /// Remove the task at `index`, shifting later tasks down by one.
    ///
    /// Returns `false` and leaves the list untouched when `index` is out of
    /// range.
    pub fn delete(&mut self, index: i64) -> bool {
        let Some(position) = self.position(index) else {
            debug!(index, len = self.tasks.len(), "delete index out of range");
            return false;
        };
        let removed = self.tasks.remove(position);
        debug!(index, description = removed.description(), "task deleted");
        true
    }

    fn position(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.tasks.len())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
