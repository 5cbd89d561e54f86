use anyhow::Result;
use stack_panel::{menu::io::MenuIo, BoundedStack, Menu, TerminalIo, CAPACITY};
use std::collections::VecDeque;

/// Feeds canned lines to the menu and records what it printed.
#[derive(Debug, Default)]
struct ScriptedIo {
    input: VecDeque<String>,
    out: Vec<String>,
    err: Vec<String>,
}

impl ScriptedIo {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| format!("{l}\n")).collect(),
            ..Default::default()
        }
    }

    fn printed(&self, line: &str) -> bool {
        self.out.iter().any(|l| l == line)
    }

    fn complained(&self, prefix: &str) -> bool {
        self.err.iter().any(|l| l.starts_with(prefix))
    }
}

impl MenuIo for ScriptedIo {
    fn prompt(&mut self, _text: &str) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn info(&mut self, text: &str) -> Result<()> {
        self.out.push(text.to_owned());
        Ok(())
    }

    fn error(&mut self, text: &str) -> Result<()> {
        self.err.push(text.to_owned());
        Ok(())
    }
}

fn run(lines: &[&str]) -> (BoundedStack, ScriptedIo) {
    let mut io = ScriptedIo::new(lines);
    let stack = Menu::new(BoundedStack::new(), &mut io).run().unwrap();
    (stack, io)
}

#[test]
fn push_pop_peek_session() {
    let (stack, io) = run(&["1", "1 2 3", "3", "2", "2", "6"]);

    assert!(io.printed("Successfully pushed 3 elements."));
    assert!(io.printed("Stack now has 3/100 elements."));
    assert!(io.printed("Top element: 3"));
    assert!(io.printed("Popped: 3"));
    assert!(io.printed("Popped: 2"));
    assert!(io.printed("Exiting program..."));
    assert!(io.err.is_empty());

    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Ok(1));
}

#[test]
fn menu_shows_size_before_each_choice() {
    let (_, io) = run(&["1", "4 5", "6"]);

    assert!(io.printed("=== STACK CONTROL PANEL ==="));
    assert!(io.printed("1. Push multiple elements"));
    assert!(io.printed("6. Exit"));
    assert!(io.printed("Current stack size: 0/100"));
    assert!(io.printed("Current stack size: 2/100"));
}

#[test]
fn empty_stack_reports_underflow_and_continues() {
    let (stack, io) = run(&["2", "3", "4", "6"]);

    assert_eq!(io.err.len(), 2);
    assert!(io.complained("Operation failed: stack is empty"));
    assert!(io.printed("Current Stack: [Empty]"));
    assert!(io.printed("Exiting program..."));
    assert!(stack.is_empty());
}

#[test]
fn oversized_bulk_push_pushes_nothing() {
    let too_many = (1..=CAPACITY as i32 + 1)
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let (stack, io) = run(&["1", &too_many, "6"]);

    assert!(io.complained("Operation failed: stack is full"));
    assert!(io.complained("Pushed 0 elements."));
    assert!(stack.is_empty());
}

#[test]
fn bad_bulk_push_line_is_rejected_whole() {
    let (stack, io) = run(&["1", "1 two 3", "6"]);

    assert!(io.complained("Invalid input: not an integer: \"two\""));
    assert!(io.complained("Pushed 0 elements."));
    assert!(stack.is_empty());
}

#[test]
fn search_reports_position_from_top() {
    let (_, io) = run(&["1", "5 3 5", "5", "5", "5", "3", "5", "9", "5", "oops", "6"]);

    assert!(io.printed("Value 5 found at position 1 from top."));
    assert!(io.printed("Value 3 found at position 2 from top."));
    assert!(io.printed("Value 9 not found in stack."));
    assert!(io.complained("Invalid input: not an integer"));
}

#[test]
fn display_lists_top_to_bottom() {
    let (_, io) = run(&["1", "1 2 3", "4", "6"]);
    assert!(io.printed("Current Stack (3/100 elements):\nTop -> 3, 2, 1 <- Bottom"));
}

#[test]
fn invalid_choice_is_reported() {
    let (_, io) = run(&["9", "x", "", "6"]);
    assert_eq!(io.err, vec!["Invalid choice! Please try again."; 3]);
}

#[test]
fn end_of_input_exits() {
    let (_, io) = run(&["1"]);
    assert_eq!(io.out.last().map(String::as_str), Some("Exiting program..."));

    let (_, io) = run(&[]);
    assert_eq!(io.out.last().map(String::as_str), Some("Exiting program..."));
}

#[test]
fn terminal_session_over_buffers() {
    let input = "1\n10 20\n3\n2\n2\n2\n6\n";
    let mut io = TerminalIo::new(input.as_bytes(), vec![], vec![], false);
    let stack = Menu::new(BoundedStack::new(), &mut io).run().unwrap();
    assert!(stack.is_empty());

    let (out, err) = io.into_writers();
    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();

    assert!(out.contains("Enter choice: "));
    assert!(out.contains("Enter numbers separated by spaces: "));
    assert!(out.contains("Top element: 20\n"));
    assert!(out.contains("Popped: 20\n"));
    assert!(out.contains("Popped: 10\n"));
    assert!(out.ends_with("Exiting program...\n"));
    assert_eq!(
        err,
        "Operation failed: stack is empty (nothing to pop)\n"
    );
}
