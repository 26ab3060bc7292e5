//! Resolution of logical asset paths to their fingerprinted counterparts.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::config::AssetConfig;
use crate::manifest::{ManifestError, MixManifest};
use crate::paths::{is_external_reference, normalize_asset_path};
use crate::report::ErrorSink;

/// Errors surfaced to the caller when resolution fails in debug mode.
#[derive(Debug)]
pub enum MixError {
  /// The manifest could not be read or parsed.
  Manifest(ManifestError),
  /// The manifest holds no entry for the requested asset path.
  UnknownAsset {
    /// Normalised path that was looked up.
    path: String,
    /// Manifest file consulted for the lookup.
    manifest: PathBuf,
  },
}

impl fmt::Display for MixError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Manifest(err) => write!(f, "{err}"),
      Self::UnknownAsset { path, manifest } => {
        write!(f, "no entry for {} in {}", path, manifest.display())
      }
    }
  }
}

impl std::error::Error for MixError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Manifest(err) => Some(err),
      Self::UnknownAsset { .. } => None,
    }
  }
}

/// Stateless resolver mapping logical asset paths to fingerprinted paths.
///
/// The resolver borrows its collaborators: the public root hosting manifests,
/// the configuration carrying the debug flag, and the sink receiving reports
/// for production-mode misses. Nothing is cached between calls; the manifest
/// and the hot-file marker are re-read on every resolution.
pub struct MixResolver<'a, S: ErrorSink> {
  public_root: &'a Path,
  config: &'a AssetConfig,
  sink: &'a S,
}

impl<'a, S: ErrorSink> MixResolver<'a, S> {
  /// Create a resolver over the given public root, configuration and sink.
  pub fn new(public_root: &'a Path, config: &'a AssetConfig, sink: &'a S) -> Self {
    Self {
      public_root,
      config,
      sink,
    }
  }

  /// Resolve an asset path against the manifest in the public root.
  pub fn resolve(&self, path: &str) -> Result<String, MixError> {
    self.resolve_in(path, "")
  }

  /// Resolve an asset path against a manifest in a subdirectory of the
  /// public root.
  ///
  /// On a manifest miss the behaviour splits on the debug flag: production
  /// reports a descriptive error through the sink and returns the normalised
  /// path unchanged, while debug mode returns the underlying lookup failure
  /// to the caller. Exactly one of the two happens per miss; neither happens
  /// on a hit.
  pub fn resolve_in(&self, path: &str, manifest_dir: &str) -> Result<String, MixError> {
    if is_external_reference(path) {
      return Ok(path.to_string());
    }

    let normalized = normalize_asset_path(path);
    let base = self.manifest_base(manifest_dir);

    if let Some(url) = self.dev_server_redirect(&base) {
      return Ok(format!("{url}{normalized}"));
    }

    let manifest_path = base.join(&self.config.manifest_file);
    let manifest = match MixManifest::load(&manifest_path) {
      Ok(manifest) => manifest,
      Err(err) => return self.miss(normalized, MixError::Manifest(err)),
    };

    match manifest.get(&normalized) {
      Some(versioned) => Ok(versioned.to_string()),
      None => {
        let cause = MixError::UnknownAsset {
          path: normalized.clone(),
          manifest: manifest_path,
        };
        self.miss(normalized, cause)
      }
    }
  }

  fn manifest_base(&self, manifest_dir: &str) -> PathBuf {
    let trimmed = manifest_dir.trim_matches('/');
    if trimmed.is_empty() {
      self.public_root.to_path_buf()
    } else {
      self.public_root.join(trimmed)
    }
  }

  /// Dev-server location when the hot marker file is present.
  ///
  /// The marker's first line may name the dev server; `http(s):` schemes are
  /// stripped so generated markup stays scheme-relative. A blank or schemeless
  /// marker falls back to the configured dev server URL.
  fn dev_server_redirect(&self, base: &Path) -> Option<String> {
    let contents = fs::read_to_string(base.join(&self.config.hot_file)).ok()?;
    let first_line = contents.lines().next().unwrap_or("").trim();
    let url = first_line
      .strip_prefix("https:")
      .or_else(|| first_line.strip_prefix("http:"))
      .unwrap_or(self.config.dev_server_url.as_str());
    Some(url.trim_end_matches('/').to_string())
  }

  fn miss(&self, normalized: String, cause: MixError) -> Result<String, MixError> {
    if self.config.debug {
      return Err(cause);
    }
    self
      .sink
      .report(anyhow!("Unable to locate Mix file: {normalized}."));
    Ok(normalized)
  }
}
