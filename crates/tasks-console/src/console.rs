//! The blocking read-eval menu loop.
//!
//! Each iteration prints the menu, blocks on one input line, and runs the
//! chosen action to completion. The loop ends on `5` or when input runs out;
//! running out of input in the middle of a prompt abandons that action.

use std::io::{BufRead, ErrorKind, Write};

use tasks_core::TaskManager;
use tasks_settings::ConsoleSettings;
use tracing::{debug, info};

use crate::errors::Result;
use crate::menu::{MenuChoice, parse_task_number, render_menu, render_task};

/// Banner printed once before the first menu.
pub const WELCOME: &str = "Welcome to the Task Manager Demo!";

/// Whether the loop should keep going after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Continue,
    EndOfInput,
}

/// Menu loop bound to one reader, one writer, and one task list.
pub struct Console<R, W> {
    input: R,
    output: W,
    manager: TaskManager,
    settings: ConsoleSettings,
    pending_cr: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with an empty task list.
    pub fn new(input: R, output: W, settings: ConsoleSettings) -> Self {
        Self {
            input,
            output,
            manager: TaskManager::new(),
            settings,
            pending_cr: false,
        }
    }

    /// The task list as it currently stands.
    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    /// Consume the console and hand back the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks `5` or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        if self.settings.show_welcome {
            writeln!(self.output, "{WELCOME}")?;
        }

        loop {
            self.output
                .write_all(render_menu(self.settings.separator_width).as_bytes())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("input ended at menu");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                debug!(input = %line, "unrecognized menu option");
                writeln!(self.output, "Invalid option. Please try again.")?;
                continue;
            };

            debug!(?choice, "menu choice");
            let step = match choice {
                MenuChoice::Add => self.add_task()?,
                MenuChoice::List => {
                    self.list_tasks()?;
                    Step::Continue
                }
                MenuChoice::MarkComplete => self.mark_task_complete()?,
                MenuChoice::Delete => self.delete_task()?,
                MenuChoice::Exit => break,
            };
            if step == Step::EndOfInput {
                debug!(?choice, "input ended at prompt");
                break;
            }
        }

        self.output.flush()?;
        info!(remaining = self.manager.len(), "session ended");
        Ok(())
    }

    fn add_task(&mut self) -> Result<Step> {
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(Step::EndOfInput);
        };
        self.manager.add(description);
        writeln!(self.output, "\nTask added successfully!")?;
        Ok(Step::Continue)
    }

    fn list_tasks(&mut self) -> Result<()> {
        if self.manager.is_empty() {
            writeln!(self.output, "No tasks found.")?;
            return Ok(());
        }
        for (i, task) in self.manager.list().iter().enumerate() {
            writeln!(self.output, "{}", render_task(i + 1, task))?;
        }
        Ok(())
    }

    fn mark_task_complete(&mut self) -> Result<Step> {
        self.list_tasks()?;
        let Some(line) = self.prompt("Enter task number to mark as complete: ")? else {
            return Ok(Step::EndOfInput);
        };
        match parse_task_number(&line) {
            Some(number) => {
                // out-of-range numbers are ignored by the manager
                self.manager.mark_complete(number - 1);
                writeln!(self.output, "\nTask marked as complete!")?;
            }
            None => writeln!(self.output, "Invalid task number.")?,
        }
        Ok(Step::Continue)
    }

    fn delete_task(&mut self) -> Result<Step> {
        if self.manager.is_empty() {
            writeln!(self.output, "No tasks to delete.")?;
            return Ok(Step::Continue);
        }

        self.list_tasks()?;
        let Some(line) = self.prompt("Enter task number to delete: ")? else {
            return Ok(Step::EndOfInput);
        };
        let count = i64::try_from(self.manager.len()).unwrap_or(i64::MAX);
        match parse_task_number(&line).filter(|n| (1..=count).contains(n)) {
            Some(number) => {
                if self.manager.delete(number - 1) {
                    writeln!(self.output, "\nTask deleted successfully!")?;
                } else {
                    writeln!(self.output, "Failed to delete task.")?;
                }
            }
            None => writeln!(self.output, "Invalid task number.")?,
        }
        Ok(Step::Continue)
    }

    /// Write `text` without a newline, then read the answer.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. `None` once input is exhausted.
    ///
    /// `\n`, `\r\n`, and a lone `\r` all end a line. Invalid UTF-8 is
    /// replaced with U+FFFD.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = Vec::new();
        let mut read_any = false;
        loop {
            let available = match self.input.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                break;
            }

            // the `\n` of a `\r\n` split across two reads
            if self.pending_cr && available[0] == b'\n' {
                self.pending_cr = false;
                self.input.consume(1);
                continue;
            }
            self.pending_cr = false;
            read_any = true;

            if let Some(end) = available.iter().position(|&b| b == b'\n' || b == b'\r') {
                let terminator = available[end];
                line.extend_from_slice(&available[..end]);
                let mut used = end + 1;
                if terminator == b'\r' {
                    if available.get(used) == Some(&b'\n') {
                        used += 1;
                    } else if used == available.len() {
                        self.pending_cr = true;
                    }
                }
                self.input.consume(used);
                return Ok(Some(String::from_utf8_lossy(&line).into_owned()));
            }

            let used = available.len();
            line.extend_from_slice(available);
            self.input.consume(used);
        }
        Ok(read_any.then(|| String::from_utf8_lossy(&line).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use tasks_core::TaskItem;
    use tasks_logging::capture_logs;
    use tracing::Level;

    use super::*;

    fn run_reader(input: impl BufRead) -> (String, TaskManager) {
        let mut console = Console::new(input, Vec::new(), ConsoleSettings::default());
        console.run().unwrap();
        let manager = console.manager().clone();
        let output = String::from_utf8(console.into_output()).unwrap();
        (output, manager)
    }

    fn run_script(script: &str) -> (String, TaskManager) {
        run_reader(Cursor::new(script.as_bytes().to_vec()))
    }

    #[test]
    fn exit_immediately() {
        let (output, manager) = run_script("5\n");
        assert_eq!(output, format!("{WELCOME}\n{}", render_menu(25)));
        assert!(manager.is_empty());
    }

    #[test]
    fn welcome_can_be_suppressed() {
        let settings = ConsoleSettings {
            show_welcome: false,
            separator_width: 5,
        };
        let mut console = Console::new(Cursor::new(b"5\n".to_vec()), Vec::new(), settings);
        console.run().unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, render_menu(5));
    }

    #[test]
    fn add_passes_line_verbatim() {
        let (output, manager) = run_script("1\n  spaced out  \n5\n");
        assert_eq!(manager.list()[0].description(), "  spaced out  ");
        assert!(output.contains("Enter task description: \nTask added successfully!\n"));
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let (_, manager) = run_script("1\r\nWindows task\r\n5\r\n");
        assert_eq!(manager.list()[0].description(), "Windows task");
    }

    #[test]
    fn lone_carriage_returns_end_lines() {
        let (_, manager) = run_script("1\rOld Mac task\r1\rB\n5\r");
        let descriptions: Vec<_> = manager.list().iter().map(TaskItem::description).collect();
        assert_eq!(descriptions, ["Old Mac task", "B"]);
    }

    #[test]
    fn crlf_split_across_reads_is_one_terminator() {
        let input = BufReader::with_capacity(1, Cursor::new(b"1\r\nA\r\n2\r\n5\r\n".to_vec()));
        let (output, manager) = run_reader(input);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.list()[0].description(), "A");
        assert!(!output.contains("Invalid option."));
    }

    #[test]
    fn invalid_utf8_description_is_kept_lossily() {
        let input = Cursor::new(b"1\nA\n1\ncaf\xE9\n2\n5\n".to_vec());
        let (output, manager) = run_reader(input);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.list()[1].description(), "caf\u{FFFD}");
        assert!(output.contains("2. [ ] caf\u{FFFD}\n"));
        assert!(output.ends_with(&render_menu(25)));
    }

    #[test]
    fn invalid_utf8_menu_choice_is_an_invalid_option() {
        let (output, manager) = run_reader(Cursor::new(b"\xFF\n5\n".to_vec()));
        assert!(manager.is_empty());
        assert!(output.contains("Invalid option. Please try again.\n"));
    }

    #[test]
    fn end_of_input_at_menu_ends_session() {
        let (output, manager) = run_script("1\nA\n");
        assert_eq!(manager.len(), 1);
        assert!(output.ends_with(&render_menu(25)));
    }

    #[test]
    fn end_of_input_during_add_adds_nothing() {
        let (output, manager) = run_script("1\n");
        assert!(manager.is_empty());
        assert!(output.ends_with("Enter task description: "));
    }

    #[test]
    fn end_of_input_during_mark_complete_changes_nothing() {
        let (output, manager) = run_script("1\nA\n3\n");
        assert_eq!(manager.len(), 1);
        assert!(!manager.list()[0].is_completed());
        assert!(output.ends_with("1. [ ] A\nEnter task number to mark as complete: "));
    }

    #[test]
    fn end_of_input_during_delete_changes_nothing() {
        let (output, manager) = run_script("1\nA\n4\n");
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.list()[0].description(), "A");
        assert!(output.ends_with("1. [ ] A\nEnter task number to delete: "));
    }

    #[test]
    fn final_line_without_newline_is_read() {
        let (_, manager) = run_script("1\nlast");
        assert_eq!(manager.list()[0].description(), "last");
    }

    #[test]
    fn invalid_option_is_reported() {
        let (output, _) = run_script("9\n5\n");
        assert!(output.contains("Invalid option. Please try again.\n"));
    }

    #[test]
    fn mark_complete_out_of_range_still_confirms() {
        let (output, manager) = run_script("1\nA\n3\n7\n5\n");
        assert!(!manager.list()[0].is_completed());
        assert!(output.contains("\nTask marked as complete!\n"));
    }

    #[test]
    fn delete_out_of_range_skips_manager() {
        let (logs, _guard) = capture_logs();
        let (output, manager) = run_script("1\nA\n4\n2\n5\n");
        assert_eq!(manager.len(), 1);
        assert!(output.contains("Enter task number to delete: Invalid task number.\n"));
        assert!(!logs.has_message("delete index out of range"));
    }

    #[test]
    fn session_logs_start_and_end() {
        let (logs, _guard) = capture_logs();
        let _ = run_script("1\nA\n5\n");
        assert!(logs.has_event(Level::INFO, "session started"));
        assert!(logs.has_event(Level::INFO, "session ended"));
        assert!(logs.has_event(Level::DEBUG, "menu choice"));
    }
}
