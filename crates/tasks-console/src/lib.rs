//! # tasks-console
//!
//! Interactive text menu over a [`tasks_core::TaskManager`].
//!
//! [`Console`] is generic over its reader and writer: the binary drives it
//! with locked stdin/stdout, tests drive it with in-memory buffers.

#![deny(unsafe_code)]

pub mod console;
pub mod errors;
pub mod menu;

pub use console::Console;
pub use errors::{ConsoleError, Result};
pub use menu::{MenuChoice, parse_task_number, render_menu, render_task};
