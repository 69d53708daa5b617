#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod codepoints;
pub mod config;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod scanner;
pub mod url;

pub use codepoints::{codepoint_identifier, to_code_points, to_code_points_utf16};
pub use config::ParserConfig;
pub use matcher::{EmojiPattern, RawMatch, SequenceMatcher, SequenceTable, SequenceTableError};
pub use models::{AssetType, EmojiEntity, EntityKind, ParsingOptions, TYPE_NAME};
pub use parser::EmojiParser;
pub use url::{CdnTemplate, UrlBuilder};

/// Extract emoji entities from `text` with the bundled sequence data.
///
/// Never fails: text without emoji, including the empty string, yields an empty list.
pub fn parse(text: &str, options: &ParsingOptions<'_>) -> Vec<EmojiEntity> {
  EmojiParser::bundled().parse(text, options)
}
