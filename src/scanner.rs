//! Drives a [`SequenceMatcher`] across one input string.

use std::iter::FusedIterator;

use tracing::{trace, warn};

use crate::matcher::SequenceMatcher;

/// A raw match located by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedMatch<'t> {
  /// Matched substring of the input.
  pub text: &'t str,
  /// Half-open span in UTF-16 code units of the input.
  pub indices: [usize; 2],
}

/// Iterator over the emoji matches of a single text.
///
/// The scan position lives in the iterator itself and starts at zero, so nothing carries over
/// between scans even when they share a matcher.
#[derive(Debug)]
pub struct Scanner<'m, 't, M: ?Sized> {
  matcher: &'m M,
  text: &'t str,
  cursor: usize,
  utf16_cursor: usize,
  finished: bool,
}

impl<'m, 't, M> Scanner<'m, 't, M>
where
  M: SequenceMatcher + ?Sized,
{
  /// Start scanning `text` from its first character.
  pub fn new(matcher: &'m M, text: &'t str) -> Self {
    Self {
      matcher,
      text,
      cursor: 0,
      utf16_cursor: 0,
      finished: false,
    }
  }

  fn accepts(&self, start: usize, end: usize) -> bool {
    start >= self.cursor
      && end > start
      && end <= self.text.len()
      && self.text.is_char_boundary(start)
      && self.text.is_char_boundary(end)
  }
}

impl<'t, M> Iterator for Scanner<'_, 't, M>
where
  M: SequenceMatcher + ?Sized,
{
  type Item = ScannedMatch<'t>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.finished {
      return None;
    }

    let Some(found) = self.matcher.next_match(self.text, self.cursor) else {
      self.finished = true;
      return None;
    };

    if !self.accepts(found.start, found.end) {
      warn!(
        cursor = self.cursor,
        start = found.start,
        end = found.end,
        "sequence matcher returned an invalid span; stopping scan"
      );
      self.finished = true;
      return None;
    }

    let start = self.utf16_cursor + utf16_len(&self.text[self.cursor..found.start]);
    let matched = &self.text[found.start..found.end];
    let end = start + utf16_len(matched);

    self.cursor = found.end;
    self.utf16_cursor = end;

    trace!(start, end, text = matched, "matched emoji sequence");
    Some(ScannedMatch {
      text: matched,
      indices: [start, end],
    })
  }
}

impl<M> FusedIterator for Scanner<'_, '_, M> where M: SequenceMatcher + ?Sized {}

fn utf16_len(text: &str) -> usize {
  text.chars().map(char::len_utf16).sum()
}
