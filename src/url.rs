//! Asset URL resolution for codepoint identifiers.

use crate::models::AssetType;

/// Base URL of the public Twemoji CDN.
pub const DEFAULT_CDN_BASE_URL: &str = "https://twemoji.maxcdn.com/v/latest";

/// Pixel size segment used for raster assets.
pub const PNG_SIZE_SEGMENT: &str = "72x72";

/// Builds an asset URL from a hyphen-joined codepoint identifier.
///
/// Implemented for any `Fn(&str, AssetType) -> String`, so closures can be passed directly.
pub trait UrlBuilder {
  /// Returns the URL for the identifier in the requested format.
  fn build_url(&self, codepoints: &str, asset_type: AssetType) -> String;
}

impl<F> UrlBuilder for F
where
  F: Fn(&str, AssetType) -> String,
{
  fn build_url(&self, codepoints: &str, asset_type: AssetType) -> String {
    self(codepoints, asset_type)
  }
}

/// Default URL layout: `{base}/72x72/{id}.png` or `{base}/svg/{id}.svg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnTemplate {
  base_url: String,
}

impl CdnTemplate {
  /// Template rooted at a custom base URL. Trailing slashes are ignored.
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into();
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  /// Base URL every asset path is appended to.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

impl Default for CdnTemplate {
  fn default() -> Self {
    Self::new(DEFAULT_CDN_BASE_URL)
  }
}

impl UrlBuilder for CdnTemplate {
  fn build_url(&self, codepoints: &str, asset_type: AssetType) -> String {
    match asset_type {
      AssetType::Png => format!("{}/{PNG_SIZE_SEGMENT}/{codepoints}.png", self.base_url),
      AssetType::Svg => format!("{}/svg/{codepoints}.svg", self.base_url),
    }
  }
}

/// Resolve the URL for an identifier, preferring the caller's builder over the template.
///
/// An empty identifier never produces a URL.
pub fn resolve_url(
  codepoints: &str,
  asset_type: AssetType,
  builder: Option<&dyn UrlBuilder>,
  template: &CdnTemplate,
) -> String {
  if codepoints.is_empty() {
    return String::new();
  }

  match builder {
    Some(builder) => builder.build_url(codepoints, asset_type),
    None => template.build_url(codepoints, asset_type),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formats_default_svg_and_png_urls() {
    let template = CdnTemplate::default();
    assert_eq!(
      template.build_url("2764", AssetType::Svg),
      "https://twemoji.maxcdn.com/v/latest/svg/2764.svg"
    );
    assert_eq!(
      template.build_url("2764", AssetType::Png),
      "https://twemoji.maxcdn.com/v/latest/72x72/2764.png"
    );
  }

  #[test]
  fn trims_trailing_slashes_from_base() {
    let template = CdnTemplate::new("https://cdn.example.com/emoji//");
    assert_eq!(template.base_url(), "https://cdn.example.com/emoji");
    assert_eq!(
      template.build_url("1f62c", AssetType::Svg),
      "https://cdn.example.com/emoji/svg/1f62c.svg"
    );
  }

  #[test]
  fn empty_identifier_resolves_to_empty_url() {
    let builder = |_: &str, _: AssetType| "https://example.com/never".to_string();
    assert_eq!(resolve_url("", AssetType::Png, None, &CdnTemplate::default()), "");
    assert_eq!(
      resolve_url("", AssetType::Png, Some(&builder), &CdnTemplate::default()),
      ""
    );
  }

  #[test]
  fn custom_builder_replaces_template() {
    let builder =
      |codepoints: &str, asset_type: AssetType| format!("https://example.com/{codepoints}.{asset_type}");
    let url = resolve_url("2764", AssetType::Png, Some(&builder), &CdnTemplate::default());
    assert_eq!(url, "https://example.com/2764.png");
  }

  #[test]
  fn builder_output_is_used_verbatim() {
    let builder = |_: &str, _: AssetType| String::from("not a url");
    let url = resolve_url("2764", AssetType::Svg, Some(&builder), &CdnTemplate::default());
    assert_eq!(url, "not a url");
  }
}
