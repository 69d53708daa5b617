//! Versioned tables of emoji sequences in the Unicode data file format.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

const BUNDLED_ZWJ_SEQUENCES: &str = include_str!("../../data/emoji-zwj-sequences.txt");
const BUNDLED_EMOJI_SEQUENCES: &str = include_str!("../../data/emoji-sequences.txt");

/// Set of multi-codepoint emoji sequences recognised as single entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceTable {
  sequences: BTreeSet<String>,
}

/// Errors that can occur while loading a sequence table or compiling it into a pattern.
#[derive(Debug)]
pub enum SequenceTableError {
  /// Failed to read the table from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// A data line could not be interpreted.
  Parse {
    /// File the line came from, when loaded from disk.
    path: Option<PathBuf>,
    /// One-based line number.
    line: usize,
    /// Description of the problem.
    reason: String,
  },
  /// The compiled pattern was rejected by the regex engine.
  Pattern(regex::Error),
}

impl SequenceTable {
  /// Empty table; the resulting pattern only knows the generic single-emoji forms.
  pub fn new() -> Self {
    Self::default()
  }

  /// Table shipped with the crate: the Emoji 12.1 ZWJ sequences plus keycap, flag and tag
  /// sequences.
  pub fn bundled() -> Self {
    let mut table = Self::parse(BUNDLED_ZWJ_SEQUENCES).expect("bundled ZWJ data is well-formed");
    table.merge(Self::parse(BUNDLED_EMOJI_SEQUENCES).expect("bundled sequence data is well-formed"));
    table
  }

  /// Parse table data in the `emoji-zwj-sequences.txt` / `emoji-sequences.txt` layout.
  ///
  /// Only the first `;`-separated field is read. It holds either space-separated hex codepoints
  /// forming one sequence or an `XXXX..YYYY` range of single codepoints. Comments after `#`
  /// and blank lines are ignored.
  pub fn parse(source: &str) -> Result<Self, SequenceTableError> {
    let mut table = Self::new();

    for (index, line) in source.lines().enumerate() {
      let content = line.split_once('#').map_or(line, |(data, _)| data);
      let field = content
        .split_once(';')
        .map_or(content, |(field, _)| field)
        .trim();
      if field.is_empty() {
        continue;
      }

      let sequences = parse_field(field).map_err(|reason| SequenceTableError::Parse {
        path: None,
        line: index + 1,
        reason,
      })?;
      table.sequences.extend(sequences);
    }

    Ok(table)
  }

  /// Read and parse a table file.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SequenceTableError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| SequenceTableError::Io {
      path: path.to_path_buf(),
      source: err,
    })?;

    let table = Self::parse(&contents).map_err(|err| match err {
      SequenceTableError::Parse { line, reason, .. } => SequenceTableError::Parse {
        path: Some(path.to_path_buf()),
        line,
        reason,
      },
      other => other,
    })?;

    debug!(path = %path.display(), sequences = table.len(), "loaded emoji sequence table");
    Ok(table)
  }

  /// Add a single sequence. Returns `false` when it was already present or empty.
  pub fn insert(&mut self, sequence: impl Into<String>) -> bool {
    let sequence = sequence.into();
    !sequence.is_empty() && self.sequences.insert(sequence)
  }

  /// Absorb every sequence from another table.
  pub fn merge(&mut self, other: SequenceTable) {
    self.sequences.extend(other.sequences);
  }

  /// Returns `true` when the exact sequence is listed.
  pub fn contains(&self, sequence: &str) -> bool {
    self.sequences.contains(sequence)
  }

  /// Number of distinct sequences.
  pub fn len(&self) -> usize {
    self.sequences.len()
  }

  /// Returns `true` when no sequences are listed.
  pub fn is_empty(&self) -> bool {
    self.sequences.is_empty()
  }

  /// Sequences in codepoint order.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.sequences.iter().map(String::as_str)
  }
}

impl std::fmt::Display for SequenceTableError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse {
        path: Some(path),
        line,
        reason,
      } => write!(f, "failed to parse {} line {}: {}", path.display(), line, reason),
      Self::Parse {
        path: None,
        line,
        reason,
      } => write!(f, "failed to parse line {}: {}", line, reason),
      Self::Pattern(source) => write!(f, "failed to compile emoji pattern: {}", source),
    }
  }
}

impl std::error::Error for SequenceTableError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { .. } => None,
      Self::Pattern(source) => Some(source),
    }
  }
}

impl From<regex::Error> for SequenceTableError {
  fn from(err: regex::Error) -> Self {
    Self::Pattern(err)
  }
}

fn parse_field(field: &str) -> Result<Vec<String>, String> {
  if let Some((first, last)) = field.split_once("..") {
    let first = parse_scalar(first.trim())?;
    let last = parse_scalar(last.trim())?;
    if first > last {
      return Err(format!("range `{field}` is reversed"));
    }

    return Ok(
      (u32::from(first)..=u32::from(last))
        .filter_map(char::from_u32)
        .map(String::from)
        .collect(),
    );
  }

  let sequence = field
    .split_whitespace()
    .map(parse_scalar)
    .collect::<Result<String, _>>()?;
  Ok(vec![sequence])
}

fn parse_scalar(value: &str) -> Result<char, String> {
  let code = u32::from_str_radix(value, 16).map_err(|_| format!("invalid codepoint `{value}`"))?;
  char::from_u32(code).ok_or_else(|| format!("`{value}` is not a Unicode scalar value"))
}
