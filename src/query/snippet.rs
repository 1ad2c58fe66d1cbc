//! Context snippet extraction
//!
//! Each match grows outward into a `start | middle | end` triple. Both sides
//! grow one byte per step, but a side only moves when it is not longer than
//! the other one and its cursor sits on a boundary:
//!
//! - the end side stops after a `.`, before a newline, or at the end of the
//!   corpus;
//! - the start side stops at a newline, at a space that follows a `.`, or at
//!   the start of the corpus.
//!
//! Growth ends after [`MAX_EXPANSION_STEPS`] steps or once the snippet is at
//! least [`MAX_SNIPPET_LEN`] bytes long.

use crate::utils::escape_markup;
use std::ops::Range;

/// Snippets stop growing once they reach this many bytes
pub const MAX_SNIPPET_LEN: usize = 300;

/// Upper bound on expansion steps per snippet
pub const MAX_EXPANSION_STEPS: usize = 1000;

/// Byte ranges of one snippet within the corpus
///
/// `start.end == middle.start` and `middle.end == end.start` always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSpans {
    pub start: Range<usize>,
    pub middle: Range<usize>,
    pub end: Range<usize>,
}

impl SnippetSpans {
    /// Combined length of the three spans
    pub fn len(&self) -> usize {
        self.start.len() + self.middle.len() + self.end.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole snippet as one range
    pub fn full(&self) -> Range<usize> {
        self.start.start..self.end.end
    }
}

/// An escaped snippet, ready to embed in HTML or JSON output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub start: String,
    pub middle: String,
    pub end: String,
}

impl Snippet {
    /// The three parts concatenated
    pub fn joined(&self) -> String {
        let mut out = String::with_capacity(self.start.len() + self.middle.len() + self.end.len());
        out.push_str(&self.start);
        out.push_str(&self.middle);
        out.push_str(&self.end);
        out
    }
}

/// Builds snippets around match offsets in the original-case corpus
pub struct SnippetBuilder<'a> {
    text: &'a [u8],
    max_len: usize,
    max_steps: usize,
}

impl<'a> SnippetBuilder<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            max_len: MAX_SNIPPET_LEN,
            max_steps: MAX_EXPANSION_STEPS,
        }
    }

    /// Compute the spans around a match at `offset` of `match_len` bytes
    pub fn expand(&self, offset: usize, match_len: usize) -> SnippetSpans {
        let n = self.text.len();
        let idx = offset.min(n);
        let tail = idx.saturating_add(match_len).min(n);

        let mut start = idx..idx;
        let mut end = tail..tail;

        let mut step = 0;
        while step < self.max_steps && start.len() + (tail - idx) + end.len() < self.max_len {
            let cursor = tail + step;
            if end.len() <= start.len() && self.is_end_boundary(cursor) {
                end = tail..(cursor + 1).min(n);
            }

            let cursor = idx.saturating_sub(step);
            if start.len() <= end.len() && self.is_start_boundary(cursor) {
                start = cursor..idx;
            }

            step += 1;
        }

        SnippetSpans {
            start,
            middle: idx..tail,
            end,
        }
    }

    /// Build the escaped snippet for a match
    pub fn build(&self, offset: usize, match_len: usize) -> Snippet {
        let spans = self.expand(offset, match_len);
        Snippet {
            start: escape_markup(&self.text[spans.start]),
            middle: escape_markup(&self.text[spans.middle]),
            end: escape_markup(&self.text[spans.end]),
        }
    }

    /// Last byte of a sentence, last byte of a line, or end of corpus
    fn is_end_boundary(&self, cursor: usize) -> bool {
        cursor + 1 >= self.text.len()
            || self.text[cursor] == b'.'
            || self.text[cursor + 1] == b'\n'
    }

    /// Start of corpus, a newline, or the space after a full stop
    fn is_start_boundary(&self, cursor: usize) -> bool {
        if cursor <= 1 {
            return true;
        }
        match self.text.get(cursor) {
            Some(b'\n') => true,
            Some(b' ') => self.text[cursor - 1] == b'.',
            _ => false,
        }
    }
}
