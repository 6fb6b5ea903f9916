//! A minimal whitespace-delimited scanner over in-memory command text.

use simhost_protocols::{Cursor, TokenScanner};

/// Scanner over one line (or block) of command input.
///
/// Tokens are maximal runs of non-whitespace characters. The full command
/// scanner of the host framework is richer than this; dispatchers only need
/// the [`TokenScanner`] surface, and this implementation covers it for
/// clients and tests that parse plain text.
pub struct TextScanner {
    input: String,
    pos: usize,
}

impl TextScanner {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
        }
    }

    /// Remaining unconsumed input, including any leading whitespace.
    pub fn remainder(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Returns whether only whitespace (or nothing) is left.
    pub fn is_exhausted(&self) -> bool {
        self.remainder().trim_start().is_empty()
    }
}

impl TokenScanner for TextScanner {
    fn cursor(&self) -> Cursor {
        Cursor::new(self.pos)
    }

    fn read_token(&mut self) -> String {
        let rest = &self.input[self.pos..];
        let start = self.pos + (rest.len() - rest.trim_start().len());
        let end = self.input[start..]
            .find(char::is_whitespace)
            .map(|i| start + i)
            .unwrap_or(self.input.len());
        self.pos = end;
        self.input[start..end].to_string()
    }

    fn reset(&mut self, cursor: Cursor) {
        self.pos = cursor.offset().min(self.input.len());
    }
}
