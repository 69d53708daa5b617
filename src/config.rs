//! Parser configuration loader for CDN layout and extra sequence data.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::matcher::{EmojiPattern, SequenceTable, SequenceTableError};
use crate::models::{AssetType, ParsingOptions};
use crate::parser::EmojiParser;
use crate::url::{CdnTemplate, DEFAULT_CDN_BASE_URL};

const DEFAULT_CONFIG_FILE: &str = "emoji.config.json";

/// Discoverable configuration describing how entities should be resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
  /// Asset format requested when the caller does not choose one.
  pub asset_type: AssetType,
  /// Base URL of the asset CDN.
  pub cdn_base_url: String,
  /// Sequence table files merged over the bundled table, relative to the config directory.
  pub sequence_files: Vec<PathBuf>,
}

impl Default for ParserConfig {
  fn default() -> Self {
    Self {
      asset_type: AssetType::Svg,
      cdn_base_url: DEFAULT_CDN_BASE_URL.into(),
      sequence_files: Vec::new(),
    }
  }
}

impl ParserConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall back to default
  /// values, matching the behaviour of an unconfigured parser.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Paths of the configured sequence files resolved against `base_dir`.
  pub fn sequence_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
    self
      .sequence_files
      .iter()
      .map(|file| base_dir.join(file))
      .collect()
  }

  /// Bundled sequences merged with every configured file.
  pub fn sequence_table(&self, base_dir: &Path) -> Result<SequenceTable, SequenceTableError> {
    let mut table = SequenceTable::bundled();
    for path in self.sequence_paths(base_dir) {
      table.merge(SequenceTable::load_from_path(&path)?);
    }
    Ok(table)
  }

  /// URL template rooted at the configured CDN.
  pub fn template(&self) -> CdnTemplate {
    CdnTemplate::new(self.cdn_base_url.as_str())
  }

  /// Per-call options reflecting the configured asset type.
  pub fn parsing_options(&self) -> ParsingOptions<'static> {
    ParsingOptions::new().with_asset_type(self.asset_type)
  }

  /// Build a parser from this configuration.
  ///
  /// Without extra sequence files the shared bundled pattern is reused instead of recompiled.
  pub fn build_parser(&self, base_dir: &Path) -> Result<EmojiParser, SequenceTableError> {
    let pattern = if self.sequence_files.is_empty() {
      EmojiPattern::bundled().clone()
    } else {
      EmojiPattern::new(&self.sequence_table(base_dir)?)?
    };

    Ok(EmojiParser::new(pattern).with_template(self.template()))
  }
}
