//! Recognisers deciding which runs of text form a single emoji.
//!
//! The parser only depends on the [`SequenceMatcher`] contract. The bundled implementation,
//! [`EmojiPattern`], compiles a [`SequenceTable`] of known joined sequences together with the
//! generic single-emoji forms into one regular expression, so updating to a newer emoji release
//! means loading newer table data rather than touching the scanner.

mod pattern;
mod table;

pub use pattern::EmojiPattern;
pub use table::{SequenceTable, SequenceTableError};

/// Byte span of a match inside the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawMatch {
  /// Byte offset of the first matched character.
  pub start: usize,
  /// Byte offset one past the last matched character.
  pub end: usize,
}

/// Finds the next emoji sequence in a text starting from a caller-owned offset.
///
/// Implementations must return maximal, non-empty matches starting at or after `from`, falling
/// on `char` boundaries. The offset is the only scan state, which keeps a single matcher usable
/// from any number of concurrent scans.
pub trait SequenceMatcher {
  /// Returns the next match at or after byte offset `from`, or `None` when there are no more.
  fn next_match(&self, text: &str, from: usize) -> Option<RawMatch>;
}

impl<M> SequenceMatcher for &M
where
  M: SequenceMatcher + ?Sized,
{
  fn next_match(&self, text: &str, from: usize) -> Option<RawMatch> {
    (**self).next_match(text, from)
  }
}
