//! Command-scanner contract consumed by typed dispatchers.

/// An opaque position within a scanner's input.
///
/// Only meaningful to the scanner that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(usize);

impl Cursor {
    /// Wraps a scanner-specific byte offset.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Returns the wrapped offset.
    pub fn offset(&self) -> usize {
        self.0
    }
}

/// A scanner that yields delimited tokens from command input.
///
/// Dispatchers capture the cursor before consuming a candidate name so they
/// can rewind on a failed lookup, leaving the token available for the
/// caller's next parsing attempt (another dispatcher, or an "unrecognized
/// token" report).
pub trait TokenScanner {
    /// Returns the current position.
    fn cursor(&self) -> Cursor;

    /// Consumes and returns the next token, advancing the cursor past it.
    ///
    /// Returns an empty string at end of input.
    fn read_token(&mut self) -> String;

    /// Rewinds to a previously captured position.
    fn reset(&mut self, cursor: Cursor);
}
