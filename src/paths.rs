//! Normalisation and filtering of asset references prior to manifest lookup.

use regex::Regex;

fn external_reference_patterns() -> &'static [Regex] {
  use std::sync::OnceLock;

  static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
  PATTERNS
    .get_or_init(|| {
      vec![
        Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
        Regex::new(r"^//").expect("invalid protocol-relative regex"),
        Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
        Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
      ]
    })
    .as_slice()
}

/// Determine whether an asset reference points outside the local public root.
///
/// External URLs and data URIs carry no manifest entry and are served exactly as
/// written, so resolution hands them back untouched without consulting the
/// manifest.
pub fn is_external_reference(value: &str) -> bool {
  external_reference_patterns()
    .iter()
    .any(|pattern| pattern.is_match(value))
}

/// Normalise a logical asset path so it begins with a leading slash.
///
/// Manifest keys are always slash-prefixed, while callers routinely pass bare
/// relative paths such as `css/app.css`.
pub fn normalize_asset_path(path: &str) -> String {
  if path.starts_with('/') {
    path.to_string()
  } else {
    format!("/{path}")
  }
}
