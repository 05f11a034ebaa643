//! Menu choices, rendering, and task-number parsing.

use std::fmt::Write as _;

use tasks_core::TaskItem;

/// One entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: add a task.
    Add,
    /// `2`: list tasks.
    List,
    /// `3`: mark a task complete.
    MarkComplete,
    /// `4`: delete a task.
    Delete,
    /// `5`: leave the loop.
    Exit,
}

impl MenuChoice {
    /// Every choice, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::List,
        Self::MarkComplete,
        Self::Delete,
        Self::Exit,
    ];

    /// Match a raw input line exactly. `" 1"` or `"1 "` are not choices.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }

    /// The text the user types to pick this choice.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::List => "2",
            Self::MarkComplete => "3",
            Self::Delete => "4",
            Self::Exit => "5",
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add new task",
            Self::List => "List all tasks",
            Self::MarkComplete => "Mark task as complete",
            Self::Delete => "Delete task",
            Self::Exit => "Exit",
        }
    }
}

/// Render the full menu block, framed by `width` `=` characters and
/// preceded by a blank line.
pub fn render_menu(width: usize) -> String {
    let separator = "=".repeat(width);
    let mut out = format!("\n{separator}\nPlease select an option:\n");
    for choice in MenuChoice::ALL {
        let _ = writeln!(out, "{}. {}", choice.key(), choice.label());
    }
    let _ = writeln!(out, "{separator}");
    out
}

/// Render one listing line, e.g. `2. [X] Buy milk`. `number` is 1-based.
pub fn render_task(number: usize, task: &TaskItem) -> String {
    let mark = if task.is_completed() { 'X' } else { ' ' };
    format!("{number}. [{mark}] {}", task.description())
}

/// Parse a 1-based task number typed by the user.
///
/// Accepts a 32-bit signed integer with optional surrounding ASCII
/// whitespace and an optional leading sign. Range checks are left to the
/// caller.
pub fn parse_task_number(input: &str) -> Option<i64> {
    input
        .trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r'))
        .parse::<i32>()
        .ok()
        .map(i64::from)
}
