//! Indentation-aware output buffer
//!
//! The printer owns the output string and the current indentation depth.
//! Depth is signed: unbalanced input can push it below zero, in which case
//! lines are simply rendered without indentation.

use crate::config::IndentStyle;

/// Line separator used for every manufactured line break
pub const LINE_SEPARATOR: char = '\n';

/// Pretty printer state
#[derive(Debug)]
pub struct Printer {
    output: String,
    unit: String,
    depth: i32,
}

impl Printer {
    /// Printer indenting with the given style
    pub fn new(style: &IndentStyle) -> Self {
        Self::with_unit(style.unit())
    }

    /// Printer indenting with a literal unit string
    pub fn with_unit(unit: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            unit: unit.into(),
            depth: 0,
        }
    }

    /// Write text to output
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.output.push_str(text);
        self
    }

    /// Write a single separating space unless the output already ends in
    /// whitespace or is empty
    pub fn space(&mut self) -> &mut Self {
        match self.output.chars().last() {
            Some(c) if !c.is_whitespace() => self.output.push(' '),
            _ => {}
        }
        self
    }

    /// Trim trailing blanks, then write a line break and the indentation
    pub fn newline(&mut self) -> &mut Self {
        let trimmed = self.output.trim_end_matches(|c| c == ' ' || c == '\t').len();
        self.output.truncate(trimmed);
        self.output.push(LINE_SEPARATOR);
        for _ in 0..self.depth.max(0) {
            self.output.push_str(&self.unit);
        }
        self
    }

    /// Increase indentation level
    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) -> &mut Self {
        self.depth -= 1;
        self
    }

    /// Reset indentation to zero
    pub fn reset(&mut self) -> &mut Self {
        self.depth = 0;
        self
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Get the output string
    pub fn finish(self) -> String {
        self.output
    }

    /// Get the output string without trailing whitespace
    pub fn finish_trimmed(self) -> String {
        let mut output = self.output;
        output.truncate(output.trim_end().len());
        output
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(&IndentStyle::default())
    }
}
