//! Presentation selector handling applied before codepoint conversion.

use std::borrow::Cow;

/// Variation selector 16, requesting emoji presentation.
pub const EMOJI_PRESENTATION_SELECTOR: char = '\u{FE0F}';
/// Variation selector 15, requesting text presentation.
pub const TEXT_PRESENTATION_SELECTOR: char = '\u{FE0E}';
/// Zero-width joiner gluing emoji into a single sequence.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Strip emoji presentation selectors from a matched run.
///
/// Joined sequences keep their selectors untouched: asset names for ZWJ sequences include
/// them, while single glyphs are named without.
pub fn strip_presentation_selectors(raw: &str) -> Cow<'_, str> {
  if raw.contains(ZERO_WIDTH_JOINER) || !raw.contains(EMOJI_PRESENTATION_SELECTOR) {
    return Cow::Borrowed(raw);
  }

  Cow::Owned(
    raw
      .chars()
      .filter(|&ch| ch != EMOJI_PRESENTATION_SELECTOR)
      .collect(),
  )
}
