mod input;

pub mod io;

pub use self::input::{parse_first_value, parse_values, Choice, InputError};

use self::io::MenuIo;
use crate::stack::{BoundedStack, StackError};
use anyhow::Result;
use tracing::{debug, warn};

/// The interactive control panel: shows the menu, reads a choice, and forwards
/// it to the stack until the user exits or input runs out.
#[derive(Debug)]
pub struct Menu<'a> {
    stack: BoundedStack,
    io: &'a mut dyn MenuIo,
}

enum Flow {
    Continue,
    Exit,
}

impl<'a> Menu<'a> {
    pub fn new(stack: BoundedStack, io: &'a mut dyn MenuIo) -> Self {
        Self { stack, io }
    }

    /// Run to completion, handing back the stack as it was left.
    ///
    /// Stack errors and bad input are reported and the loop carries on; only
    /// I/O errors end it early.
    pub fn run(mut self) -> Result<BoundedStack> {
        loop {
            self.show()?;
            let flow = match self.io.prompt("Enter choice: ")? {
                Some(line) => self.dispatch(&line)?,
                None => Flow::Exit,
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        self.io.info("Exiting program...")?;
        Ok(self.stack)
    }

    fn show(&mut self) -> Result<()> {
        self.io.info("")?;
        self.io.heading("=== STACK CONTROL PANEL ===")?;
        for choice in Choice::ALL {
            self.io.info(&format!("{}. {}", choice.key(), choice.label()))?;
        }
        self.io.info(&format!(
            "Current stack size: {}/{}",
            self.stack.len(),
            self.stack.capacity()
        ))
    }

    fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let choice = match line.parse::<Choice>() {
            Ok(choice) => choice,
            Err(e) => {
                warn!(%e, "rejected menu input");
                self.io.error("Invalid choice! Please try again.")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?choice, "menu choice");

        match choice {
            Choice::PushMultiple => return self.push_multiple(),
            Choice::Pop => match self.stack.pop() {
                Ok(v) => {
                    debug!(value = v, len = self.stack.len(), "popped");
                    self.io.info(&format!("Popped: {v}"))?;
                }
                Err(e) => self.report(e, "nothing to pop")?,
            },
            Choice::Peek => match self.stack.peek() {
                Ok(v) => self.io.info(&format!("Top element: {v}"))?,
                Err(e) => self.report(e, "nothing to peek")?,
            },
            Choice::Display => self.io.info(&self.stack.to_string())?,
            Choice::Search => return self.search(),
            Choice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn push_multiple(&mut self) -> Result<Flow> {
        let Some(line) = self.io.prompt("Enter numbers separated by spaces: ")? else {
            return Ok(Flow::Exit);
        };

        let values = match parse_values(&line) {
            Ok(values) => values,
            Err(e) => {
                warn!(%e, "rejected bulk push input");
                self.io.error(&format!("Invalid input: {e}"))?;
                self.io.error("Pushed 0 elements.")?;
                return Ok(Flow::Continue);
            }
        };

        match self.stack.push_multiple(&values) {
            Ok(()) => {
                debug!(count = values.len(), len = self.stack.len(), "pushed");
                self.io
                    .info(&format!("Successfully pushed {} elements.", values.len()))?;
                self.io.info(&format!(
                    "Stack now has {}/{} elements.",
                    self.stack.len(),
                    self.stack.capacity()
                ))?;
            }
            Err(e) => {
                self.report(e, &format!("{} free slot(s) left", self.stack.remaining()))?;
                self.io.error("Pushed 0 elements.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(line) = self.io.prompt("Enter value to search: ")? else {
            return Ok(Flow::Exit);
        };

        let value = match parse_first_value(&line) {
            Ok(value) => value,
            Err(e) => {
                warn!(%e, "rejected search input");
                self.io.error(&format!("Invalid input: {e}"))?;
                return Ok(Flow::Continue);
            }
        };

        let msg = match self.stack.search(value) {
            Some(pos) => format!("Value {value} found at position {pos} from top."),
            None => format!("Value {value} not found in stack."),
        };
        self.io.info(&msg)?;
        Ok(Flow::Continue)
    }

    fn report(&mut self, e: StackError, detail: &str) -> Result<()> {
        warn!(%e, "stack operation failed");
        self.io.error(&format!("Operation failed: {e} ({detail})"))
    }
}
