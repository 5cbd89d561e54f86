use std::fmt::{self, Display};
use thiserror::Error;

pub const CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack is full: cannot add {requested} element(s) to {len}/{capacity}")]
    Overflow {
        capacity: usize,
        len: usize,
        requested: usize,
    },
    #[error("stack is empty")]
    Underflow,
}

/// A LIFO stack of integers that never holds more than `CAPACITY` values.
#[derive(Debug, Clone)]
pub struct BoundedStack {
    values: Vec<i32>,
}

impl BoundedStack {
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(CAPACITY),
        }
    }

    pub fn push(&mut self, value: i32) -> Result<(), StackError> {
        self.check_room(1)?;
        self.values.push(value);
        Ok(())
    }

    /// All-or-nothing: on overflow the stack is left untouched.
    ///
    /// The last value of `values` becomes the new top.
    pub fn push_multiple(&mut self, values: &[i32]) -> Result<(), StackError> {
        self.check_room(values.len())?;
        self.values.extend_from_slice(values);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<i32, StackError> {
        self.values.pop().ok_or(StackError::Underflow)
    }

    pub fn peek(&self) -> Result<i32, StackError> {
        self.values.last().copied().ok_or(StackError::Underflow)
    }

    /// 1-based distance from the top of the topmost `value` (the top itself is 1).
    pub fn search(&self, value: i32) -> Option<usize> {
        self.iter().position(|&v| v == value).map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= CAPACITY
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Free slots left before the stack is full.
    pub fn remaining(&self) -> usize {
        CAPACITY - self.values.len()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &i32> + '_ {
        self.values.iter().rev()
    }

    fn check_room(&self, requested: usize) -> Result<(), StackError> {
        if requested > self.remaining() {
            return Err(StackError::Overflow {
                capacity: CAPACITY,
                len: self.len(),
                requested,
            });
        }
        Ok(())
    }
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Current Stack: [Empty]");
        }

        writeln!(f, "Current Stack ({}/{} elements):", self.len(), CAPACITY)?;
        write!(f, "Top -> ")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, " <- Bottom")
    }
}
