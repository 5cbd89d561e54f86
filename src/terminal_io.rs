use crate::menu::io::MenuIo;
use anyhow::Result;
use crossterm::{
    style::{style, Print, PrintStyledContent, StyledContent, Stylize},
    QueueableCommand,
};
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};
use tracing::debug;

/// A `crossterm`-based implementation of `MenuIo`.
///
/// Errors go to their own writer (stderr, when attached to the process's
/// stdio), everything else to `out`.
#[derive(Debug)]
pub struct TerminalIo<R, W, E> {
    input: R,
    out: W,
    err: E,
    color: bool,
}

impl TerminalIo<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr(), color)
    }
}

impl<R: BufRead, W: Write, E: Write> TerminalIo<R, W, E> {
    pub fn new(input: R, out: W, err: E, color: bool) -> Self {
        Self {
            input,
            out,
            err,
            color,
        }
    }

    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}

/// Write `content` with or without its styling, then flush so prompts show up
/// before we block on input.
fn write_styled(w: &mut impl Write, content: StyledContent<&str>, color: bool) -> Result<()> {
    if color {
        w.queue(PrintStyledContent(content))?;
    } else {
        w.queue(Print(content.content()))?;
    }
    w.flush()?;
    Ok(())
}

fn write_line(w: &mut impl Write, content: StyledContent<&str>, color: bool) -> Result<()> {
    write_styled(w, content, color)?;
    writeln!(w)?;
    Ok(())
}

impl<R, W, E> MenuIo for TerminalIo<R, W, E>
where
    R: BufRead + std::fmt::Debug,
    W: Write + std::fmt::Debug,
    E: Write + std::fmt::Debug,
{
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write_styled(&mut self.out, style(text).bold(), self.color)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input exhausted");
            // Finish the prompt's line so later output starts on a fresh one.
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        write_line(&mut self.out, style(text).cyan().bold(), self.color)
    }

    fn info(&mut self, text: &str) -> Result<()> {
        write_line(&mut self.out, style(text), self.color)
    }

    fn error(&mut self, text: &str) -> Result<()> {
        write_line(&mut self.err, style(text).red(), self.color)
    }
}
