mod stack;

pub mod menu;
pub mod terminal_io;

pub use menu::Menu;
pub use stack::{BoundedStack, StackError, CAPACITY};
pub use terminal_io::TerminalIo;
