//! Line/column conversion over source text.
//!
//! Editing hosts address text by byte offset; indentation rules need the
//! 0-based column of an offset on its line. [`LineIndex`] is built once per
//! document revision and answers both directions.

use text_size::TextSize;

/// A line/column pair (0-indexed, columns in bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Maps byte offsets to line/column pairs and back.
///
/// Stores the start offset of every line after the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Start offset of each line except line 0.
    line_starts: Vec<TextSize>,
    /// Total length of the indexed text.
    len: TextSize,
}

impl LineIndex {
    /// Build an index for `text`.
    pub fn new(text: &str) -> Self {
        let line_starts = text
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .map(|(i, _)| TextSize::from(i as u32 + 1))
            .collect();

        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset to its line/column pair.
    ///
    /// Offsets past the end of the text resolve as if on the last line.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = match line.checked_sub(1) {
            Some(prev) => self.line_starts[prev],
            None => TextSize::from(0),
        };

        LineCol {
            line: line as u32,
            col: u32::from(offset - line_start),
        }
    }

    /// Convert a line/column pair back to a byte offset.
    ///
    /// Returns `None` if the line does not exist in the indexed text.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line_start = match line_col.line.checked_sub(1) {
            Some(prev) => *self.line_starts.get(prev as usize)?,
            None => TextSize::from(0),
        };

        let offset = line_start + TextSize::from(line_col.col);
        (offset <= self.len).then_some(offset)
    }

    /// Number of lines in the indexed text.
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32 + 1
    }
}
