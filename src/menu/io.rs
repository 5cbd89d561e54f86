use anyhow::Result;
use std::fmt::Debug;

/// The input/output methods needed by the menu loop.
pub trait MenuIo: Debug {
    /// Show `text` (without a trailing newline) and read one line of input.
    ///
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>>;

    fn heading(&mut self, text: &str) -> Result<()> {
        self.info(text)
    }

    fn info(&mut self, text: &str) -> Result<()>;

    fn error(&mut self, text: &str) -> Result<()>;
}
