//! Entity extraction: scanning, selector normalisation, URL resolution and assembly.

use std::sync::OnceLock;

use crate::codepoints::codepoint_identifier;
use crate::matcher::{EmojiPattern, SequenceMatcher};
use crate::models::{EmojiEntity, EntityKind, ParsingOptions};
use crate::normalize::strip_presentation_selectors;
use crate::scanner::{ScannedMatch, Scanner};
use crate::url::{CdnTemplate, resolve_url};

/// Turns text into [`EmojiEntity`] values using a pluggable [`SequenceMatcher`].
///
/// The parser holds no per-call state; it can be shared between threads whenever the matcher
/// can.
#[derive(Debug, Clone)]
pub struct EmojiParser<M = EmojiPattern> {
  matcher: M,
  template: CdnTemplate,
}

impl EmojiParser<EmojiPattern> {
  /// Process-wide parser built from the bundled sequence table and the default CDN.
  pub fn bundled() -> &'static Self {
    static PARSER: OnceLock<EmojiParser> = OnceLock::new();
    PARSER.get_or_init(|| Self::new(EmojiPattern::bundled().clone()))
  }
}

impl<M: SequenceMatcher> EmojiParser<M> {
  /// Create a parser using the default CDN template.
  pub fn new(matcher: M) -> Self {
    Self {
      matcher,
      template: CdnTemplate::default(),
    }
  }

  /// Replace the URL template used when no per-call builder is supplied.
  pub fn with_template(mut self, template: CdnTemplate) -> Self {
    self.template = template;
    self
  }

  /// Matcher deciding what counts as one emoji.
  pub fn matcher(&self) -> &M {
    &self.matcher
  }

  /// Template used for default URLs.
  pub fn template(&self) -> &CdnTemplate {
    &self.template
  }

  /// Iterate over raw matches without resolving URLs.
  pub fn scan<'t>(&self, text: &'t str) -> Scanner<'_, 't, M> {
    Scanner::new(&self.matcher, text)
  }

  /// Extract every emoji entity from `text`, in order of appearance.
  pub fn parse(&self, text: &str, options: &ParsingOptions<'_>) -> Vec<EmojiEntity> {
    self
      .scan(text)
      .map(|found| self.assemble(found, options))
      .collect()
  }

  fn assemble(&self, found: ScannedMatch<'_>, options: &ParsingOptions<'_>) -> EmojiEntity {
    let codepoints = codepoint_identifier(&strip_presentation_selectors(found.text));
    let url = resolve_url(
      &codepoints,
      options.asset_type,
      options.build_url,
      &self.template,
    );

    EmojiEntity {
      kind: EntityKind::Emoji,
      text: found.text.to_string(),
      url,
      indices: found.indices,
    }
  }
}
