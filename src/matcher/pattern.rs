//! Regular-expression backed implementation of [`SequenceMatcher`].

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::table::{SequenceTable, SequenceTableError};
use super::{RawMatch, SequenceMatcher};
use crate::normalize::TEXT_PRESENTATION_SELECTOR;

// Symbols that only count as emoji when followed by U+FE0F.
const TEXT_DEFAULT_SYMBOLS: &str = r"\x{00A9}\x{00AE}\x{2122}\x{265F}";

const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Compiled recogniser for emoji sequences.
///
/// Alternatives are tried leftmost-first: table sequences longest first, then keycaps, tag
/// sequences, modifier sequences, text-default symbols carrying U+FE0F, pictographs with an
/// optional selector, lone regional indicators, lone skin-tone modifiers and finally a stray
/// U+FE0F. Flags are only recognised as pairs when the table lists them.
#[derive(Debug, Clone)]
pub struct EmojiPattern {
  regex: Regex,
  sequence_count: usize,
}

impl EmojiPattern {
  /// Compile a pattern recognising the table's sequences plus generic single emoji.
  pub fn new(table: &SequenceTable) -> Result<Self, SequenceTableError> {
    let mut sequences: Vec<&str> = table.iter().collect();
    sequences.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut alternatives: Vec<String> = sequences.iter().map(|seq| regex::escape(seq)).collect();
    alternatives.extend(generic_alternatives());

    let regex = RegexBuilder::new(&alternatives.join("|"))
      .size_limit(PATTERN_SIZE_LIMIT)
      .build()?;

    debug!(sequences = sequences.len(), "compiled emoji pattern");
    Ok(Self {
      regex,
      sequence_count: sequences.len(),
    })
  }

  /// Shared pattern compiled from [`SequenceTable::bundled`].
  pub fn bundled() -> &'static Self {
    static PATTERN: OnceLock<EmojiPattern> = OnceLock::new();
    PATTERN.get_or_init(|| {
      Self::new(&SequenceTable::bundled()).expect("bundled emoji pattern compiles")
    })
  }

  /// Number of table sequences compiled into the pattern.
  pub fn sequence_count(&self) -> usize {
    self.sequence_count
  }
}

impl SequenceMatcher for EmojiPattern {
  fn next_match(&self, text: &str, from: usize) -> Option<RawMatch> {
    let mut cursor = from;
    loop {
      let found = self.regex.find_at(text, cursor)?;
      // Explicit text presentation opts the character out of emoji rendering.
      if found.as_str().ends_with(TEXT_PRESENTATION_SELECTOR) {
        cursor = found.end();
        continue;
      }

      return Some(RawMatch {
        start: found.start(),
        end: found.end(),
      });
    }
  }
}

fn generic_alternatives() -> [String; 8] {
  [
    r"[#*0-9]\x{FE0F}?\x{20E3}".to_string(),
    r"\x{1F3F4}[\x{E0020}-\x{E007E}]+\x{E007F}".to_string(),
    r"\p{Emoji_Modifier_Base}\p{Emoji_Modifier}".to_string(),
    format!(r"[{TEXT_DEFAULT_SYMBOLS}]\x{{FE0F}}"),
    format!(r"[\p{{Extended_Pictographic}}--[{TEXT_DEFAULT_SYMBOLS}]][\x{{FE0E}}\x{{FE0F}}]?"),
    r"\p{Regional_Indicator}".to_string(),
    r"\p{Emoji_Modifier}".to_string(),
    r"\x{FE0F}".to_string(),
  ]
}
