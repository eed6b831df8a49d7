//! Source positions for tree nodes.
//!
//! Lines are 1-based and columns are 0-based, following the convention of
//! the parser toolchains the trees are built from.

use serde::{Deserialize, Serialize};

/// A position in the input, used to recognise line breaks between tokens
/// during unparsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line number in the input (starts at 1).
    pub line: u32,
    /// Character index relative to the beginning of the line (starts at 0).
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// End position of `text` when it starts at `self`.
    ///
    /// Without line breaks the column advances by the character count; each
    /// `\n` advances the line and the column restarts after the last break.
    pub fn after(&self, text: &str) -> Position {
        let line_breaks = text.bytes().filter(|&b| b == b'\n').count() as u32;
        if line_breaks == 0 {
            return Position::new(self.line, self.column + text.chars().count() as u32);
        }
        let tail = &text[text.rfind('\n').unwrap() + 1..];
        Position::new(self.line + line_breaks, tail.chars().count() as u32)
    }

    /// Shift the position by prepending a starting position.
    pub fn shift(&mut self, start: Position) {
        if self.line > 1 {
            self.line += start.line - 1;
        } else {
            self.line = start.line;
            self.column += start.column;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}
