//! Runtime configuration describing how assets are resolved.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "mix.config.json";

/// Discoverable configuration for asset resolution.
///
/// Only the narrow slice of host-application configuration the resolver needs
/// lives here; anything else belongs to the surrounding application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
  /// Debug flag distinguishing development (loud failures) from production
  /// (report-and-degrade) behaviour.
  pub debug: bool,
  /// File name of the manifest written by the Mix build.
  pub manifest_file: String,
  /// Marker file whose presence redirects resolution to the dev server.
  pub hot_file: String,
  /// Scheme-relative dev server location used when the hot file names none.
  pub dev_server_url: String,
}

impl Default for AssetConfig {
  fn default() -> Self {
    Self {
      debug: false,
      manifest_file: "mix-manifest.json".into(),
      hot_file: "hot".into(),
      dev_server_url: "//localhost:8080".into(),
    }
  }
}

impl AssetConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall back
  /// to default values so downstream callers can continue operating with
  /// sensible assumptions.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Default configuration with the debug flag set as given.
  pub fn with_debug(debug: bool) -> Self {
    Self {
      debug,
      ..Self::default()
    }
  }
}
