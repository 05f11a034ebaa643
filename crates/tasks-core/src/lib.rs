//! # tasks-core
//!
//! In-memory task records and the manager that owns them.
//!
//! Tasks are addressed by zero-based position only. Positions are not
//! stable: deleting a task shifts every later task down by one.

#![deny(unsafe_code)]

pub mod manager;
pub mod task;

pub use manager::TaskManager;
pub use task::TaskItem;
