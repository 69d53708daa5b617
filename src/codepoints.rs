//! Conversion from UTF-16 code units to the hex codepoints used in asset names.

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Convert text into lowercase hexadecimal codepoints.
///
/// ```
/// use emoji_entities::to_code_points;
///
/// assert_eq!(to_code_points("\u{1F62C}\u{2764}"), vec!["1f62c", "2764"]);
/// ```
pub fn to_code_points(text: &str) -> Vec<String> {
  convert_units(text.encode_utf16())
}

/// Convert raw UTF-16 code units into lowercase hexadecimal codepoints.
///
/// Surrogate pairs combine into a single supplementary codepoint. Unpaired surrogates are
/// emitted on their own rather than rejected, so ill-formed input still yields a value per unit.
pub fn to_code_points_utf16(units: &[u16]) -> Vec<String> {
  convert_units(units.iter().copied())
}

/// Hyphen-joined codepoint identifier for the text, as used in asset filenames.
pub fn codepoint_identifier(text: &str) -> String {
  to_code_points(text).join("-")
}

fn convert_units(units: impl IntoIterator<Item = u16>) -> Vec<String> {
  let units = units.into_iter();
  let mut points = Vec::with_capacity(units.size_hint().0);
  let mut pending: Option<u16> = None;

  for unit in units {
    if let Some(high) = pending.take() {
      if LOW_SURROGATES.contains(&unit) {
        points.push(format!("{:x}", combine_surrogates(high, unit)));
        continue;
      }
      points.push(format!("{high:x}"));
    }

    if HIGH_SURROGATES.contains(&unit) {
      pending = Some(unit);
    } else {
      points.push(format!("{unit:x}"));
    }
  }

  if let Some(high) = pending {
    points.push(format!("{high:x}"));
  }

  points
}

fn combine_surrogates(high: u16, low: u16) -> u32 {
  0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
}
