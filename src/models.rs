//! Data structures produced and consumed by the emoji parser.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::url::UrlBuilder;

/// Type tag carried by every entity returned from [`crate::parse`].
pub const TYPE_NAME: &str = "emoji";

/// Kind of entity extracted from the input text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
  /// An emoji sequence.
  #[default]
  Emoji,
}

impl EntityKind {
  /// Tag used when the entity is serialised.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Emoji => TYPE_NAME,
    }
  }
}

/// Image format requested from the asset CDN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum AssetType {
  /// Raster assets at 72x72 pixels.
  Png,
  /// Vector assets.
  #[default]
  Svg,
}

impl AssetType {
  /// Interpret an asset type name. Anything other than `png` reads as SVG.
  pub fn from_name(name: &str) -> Self {
    if name == "png" { Self::Png } else { Self::Svg }
  }

  /// Name of the asset type, also used as the file extension.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Png => "png",
      Self::Svg => "svg",
    }
  }
}

impl From<&str> for AssetType {
  fn from(name: &str) -> Self {
    Self::from_name(name)
  }
}

impl From<String> for AssetType {
  fn from(name: String) -> Self {
    Self::from_name(&name)
  }
}

impl fmt::Display for AssetType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single emoji run found in the input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct EmojiEntity {
  /// Entity tag, always [`EntityKind::Emoji`].
  #[serde(rename = "type")]
  pub kind: EntityKind,
  /// Matched substring exactly as it appears in the input.
  pub text: String,
  /// Resolved asset URL, empty when the match carries no codepoints after normalisation.
  pub url: String,
  /// Half-open `[start, end)` span in UTF-16 code units of the input.
  pub indices: [usize; 2],
}

impl EmojiEntity {
  /// UTF-16 span of the entity as a range.
  pub fn span(&self) -> Range<usize> {
    self.indices[0]..self.indices[1]
  }
}

/// Per-call options accepted by [`crate::parse`] and [`crate::EmojiParser::parse`].
#[derive(Clone, Copy, Default)]
pub struct ParsingOptions<'a> {
  /// Requested image format.
  pub asset_type: AssetType,
  /// Replaces the parser's CDN template entirely when set.
  pub build_url: Option<&'a dyn UrlBuilder>,
}

impl<'a> ParsingOptions<'a> {
  /// Options using SVG assets and the default CDN template.
  pub fn new() -> Self {
    Self::default()
  }

  /// Request a specific asset type.
  pub fn with_asset_type(mut self, asset_type: AssetType) -> Self {
    self.asset_type = asset_type;
    self
  }

  /// Resolve URLs with a caller-supplied builder instead of the CDN template.
  pub fn with_url_builder(mut self, builder: &'a dyn UrlBuilder) -> Self {
    self.build_url = Some(builder);
    self
  }
}

impl fmt::Debug for ParsingOptions<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ParsingOptions")
      .field("asset_type", &self.asset_type)
      .field("build_url", &self.build_url.map(|_| "<custom>"))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unrecognised_asset_names_fall_back_to_svg() {
    assert_eq!(AssetType::from_name("png"), AssetType::Png);
    assert_eq!(AssetType::from_name("svg"), AssetType::Svg);
    assert_eq!(AssetType::from_name("PNG"), AssetType::Svg);
    assert_eq!(AssetType::from_name("gif"), AssetType::Svg);
    assert_eq!(AssetType::from_name(""), AssetType::Svg);
  }

  #[test]
  fn deserialises_asset_type_leniently() {
    let png: AssetType = serde_json::from_str("\"png\"").unwrap();
    let other: AssetType = serde_json::from_str("\"webp\"").unwrap();
    assert_eq!(png, AssetType::Png);
    assert_eq!(other, AssetType::Svg);
  }

  #[test]
  fn serialises_entity_with_type_tag() {
    let entity = EmojiEntity {
      kind: EntityKind::Emoji,
      text: "\u{2764}".into(),
      url: "https://example.com/2764.svg".into(),
      indices: [2, 3],
    };

    let json = serde_json::to_value(&entity).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "type": "emoji",
        "text": "\u{2764}",
        "url": "https://example.com/2764.svg",
        "indices": [2, 3],
      })
    );
    assert_eq!(entity.kind.as_str(), TYPE_NAME);
    assert_eq!(entity.span(), 2..3);
  }

  #[test]
  fn options_default_to_svg_without_builder() {
    let options = ParsingOptions::new();
    assert_eq!(options.asset_type, AssetType::Svg);
    assert!(options.build_url.is_none());
    assert_eq!(
      format!("{options:?}"),
      "ParsingOptions { asset_type: Svg, build_url: None }"
    );
  }
}
