use anyhow::Result;
use clap::Parser;
use stack_panel::{BoundedStack, Menu, TerminalIo};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Interactive control panel for a 100-element integer stack.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Log filter, used when `RUST_LOG` is unset. Logs go to stderr.
    #[arg(long, value_name = "FILTER", default_value = "error")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let color = !args.no_color && io::stdout().is_terminal();
    let mut io = TerminalIo::stdio(color);
    let stack = Menu::new(BoundedStack::new(), &mut io).run()?;
    tracing::debug!(len = stack.len(), "stack discarded on exit");

    Ok(())
}
