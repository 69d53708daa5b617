//! Command-line front end printing emoji entities as JSON.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use emoji_entities::{AssetType, ParserConfig, to_code_points};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "emoji-entities", version, about = "Extract emoji entities from text as JSON")]
struct Cli {
  /// Text to scan. Standard input is read when omitted.
  text: Vec<String>,

  /// Asset format for resolved URLs (`png` or `svg`).
  #[arg(long)]
  asset_type: Option<String>,

  /// Configuration file. Defaults to `emoji.config.json` in the working directory.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Additional sequence table in the Unicode data file format.
  #[arg(long = "sequences", value_name = "FILE")]
  sequences: Vec<PathBuf>,

  /// Base URL of the asset CDN.
  #[arg(long)]
  base_url: Option<String>,

  /// Print the codepoints of the whole input instead of entities.
  #[arg(long)]
  code_points: bool,

  /// Pretty-print the JSON output.
  #[arg(long)]
  pretty: bool,

  /// Increase log verbosity (`-v` debug, `-vv` trace).
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let text = read_input(&cli.text)?;
  if cli.code_points {
    return print_json(&to_code_points(&text), cli.pretty);
  }

  let cwd = std::env::current_dir().context("failed to resolve working directory")?;
  let (config, config_dir) = resolve_config(&cli, &cwd)?;

  let parser = config
    .build_parser(&config_dir)
    .context("failed to prepare emoji parser")?;
  let entities = parser.parse(&text, &config.parsing_options());
  tracing::debug!(entities = entities.len(), "parsed input");

  print_json(&entities, cli.pretty)
}

/// Load the configuration and apply command-line overrides.
///
/// Returns the configuration together with the directory its sequence files are relative to.
fn resolve_config(cli: &Cli, cwd: &Path) -> Result<(ParserConfig, PathBuf)> {
  let (mut config, config_dir) = match &cli.config {
    Some(path) => {
      let path = cwd.join(path);
      let config = ParserConfig::from_path(&path)
        .ok_or_else(|| anyhow!("failed to load configuration from {}", path.display()))?;
      let dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());
      (config, dir)
    }
    None => (ParserConfig::discover(cwd), cwd.to_path_buf()),
  };

  if let Some(asset_type) = &cli.asset_type {
    config.asset_type = AssetType::from_name(asset_type);
  }
  if let Some(base_url) = &cli.base_url {
    config.cdn_base_url = base_url.clone();
  }
  config
    .sequence_files
    .extend(cli.sequences.iter().map(|path| cwd.join(path)));

  Ok((config, config_dir))
}

fn init_tracing(verbosity: u8) {
  let level = match verbosity {
    0 => Level::WARN,
    1 => Level::DEBUG,
    _ => Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(io::stderr)
    .init();
}

fn read_input(args: &[String]) -> Result<String> {
  if !args.is_empty() {
    return Ok(args.join(" "));
  }

  let mut buffer = String::new();
  io::stdin()
    .read_to_string(&mut buffer)
    .context("failed to read standard input")?;
  trim_line_ending(&mut buffer);
  Ok(buffer)
}

fn trim_line_ending(text: &mut String) {
  if text.ends_with("\r\n") {
    text.truncate(text.len() - 2);
  } else if text.ends_with('\n') {
    text.pop();
  }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
  let output = if pretty {
    serde_json::to_string_pretty(value)?
  } else {
    serde_json::to_string(value)?
  };
  println!("{output}");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("emoji-entities").chain(args.iter().copied()))
  }

  #[test]
  fn discovers_config_in_working_directory() {
    let temp = tempdir().expect("failed to create temp dir");
    std::fs::write(temp.path().join("emoji.config.json"), r#"{"asset_type": "png"}"#)
      .expect("failed to write config");

    let (config, dir) = resolve_config(&cli(&["x"]), temp.path()).expect("config should resolve");
    assert_eq!(config.asset_type, AssetType::Png);
    assert_eq!(dir, temp.path());
  }

  #[test]
  fn flags_override_config_values() {
    let temp = tempdir().expect("failed to create temp dir");
    std::fs::write(
      temp.path().join("emoji.config.json"),
      r#"{"asset_type": "png", "cdn_base_url": "https://cdn.example.com"}"#,
    )
    .expect("failed to write config");

    let args = cli(&["--asset-type", "svg", "--base-url", "https://other.example.com", "x"]);
    let (config, _) = resolve_config(&args, temp.path()).expect("config should resolve");

    assert_eq!(config.asset_type, AssetType::Svg);
    assert_eq!(config.cdn_base_url, "https://other.example.com");
  }

  #[test]
  fn explicit_config_sets_sequence_directory() {
    let temp = tempdir().expect("failed to create temp dir");
    let nested = temp.path().join("settings");
    std::fs::create_dir(&nested).expect("failed to create config dir");
    std::fs::write(nested.join("custom.json"), r#"{"sequence_files": ["extra.txt"]}"#)
      .expect("failed to write config");

    let args = cli(&["--config", "settings/custom.json", "x"]);
    let (config, dir) = resolve_config(&args, temp.path()).expect("config should resolve");

    assert_eq!(dir, nested);
    assert_eq!(config.sequence_paths(&dir), vec![nested.join("extra.txt")]);
  }

  #[test]
  fn missing_explicit_config_is_an_error() {
    let temp = tempdir().expect("failed to create temp dir");
    let args = cli(&["--config", "absent.json", "x"]);

    let err = resolve_config(&args, temp.path()).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
  }

  #[test]
  fn sequence_flags_merge_into_parser() {
    let temp = tempdir().expect("failed to create temp dir");
    std::fs::write(
      temp.path().join("cats.txt"),
      "1F408 200D 2B1B ; RGI_Emoji_ZWJ_Sequence ; black cat # E13.0\n",
    )
    .expect("failed to write sequences");

    let args = cli(&["--sequences", "cats.txt", "x"]);
    let (config, dir) = resolve_config(&args, temp.path()).expect("config should resolve");
    assert_eq!(config.sequence_files, vec![temp.path().join("cats.txt")]);

    let parser = config.build_parser(&dir).expect("parser should build");
    let entities = parser.parse("\u{1F408}\u{200D}\u{2B1B}", &config.parsing_options());
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].indices, [0, 4]);
  }

  #[test]
  fn trims_one_trailing_line_ending() {
    for (input, expected) in [
      ("\u{1F9D7}\n", "\u{1F9D7}"),
      ("\u{1F9D7}\r\n", "\u{1F9D7}"),
      ("\u{1F9D7}\n\n", "\u{1F9D7}\n"),
      ("\u{1F9D7}", "\u{1F9D7}"),
      ("", ""),
    ] {
      let mut text = input.to_string();
      trim_line_ending(&mut text);
      assert_eq!(text, expected);
    }
  }
}
