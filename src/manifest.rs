//! Loading and querying the manifest written by the Mix build.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Deserialised `mix-manifest.json`: a flat mapping from unversioned asset
/// path to its fingerprinted counterpart, both slash-prefixed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MixManifest {
  entries: BTreeMap<String, String>,
}

/// Errors that can occur while loading a manifest from disk.
#[derive(Debug)]
pub enum ManifestError {
  /// Failed to read the manifest file.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the manifest JSON.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl MixManifest {
  /// Read and parse a manifest file.
  ///
  /// The file is opened, fully read and closed within this call; nothing is
  /// cached, so callers observe manifest rewrites on their next load.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| ManifestError::Io {
      path: path.to_path_buf(),
      source: err,
    })?;
    serde_json::from_str(&contents).map_err(|err| ManifestError::Parse {
      path: path.to_path_buf(),
      source: err,
    })
  }

  /// Look up the fingerprinted path recorded for a normalised asset path.
  pub fn get(&self, path: &str) -> Option<&str> {
    self.entries.get(path).map(String::as_str)
  }

  /// Returns `true` when the manifest holds no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl std::fmt::Display for ManifestError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for ManifestError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}
