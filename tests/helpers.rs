//! End-to-end scenarios for the crate's two helper surfaces, exercised
//! against on-disk fixtures the way a host application would use them.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use mix_resolver::{AssetConfig, ErrorSink, MixResolver, rescue, rescue_with};
use tempfile::tempdir;

#[derive(Default)]
struct FakeHandler {
  reported: Mutex<Vec<String>>,
}

impl FakeHandler {
  fn reported(&self) -> Vec<String> {
    self.reported.lock().unwrap().clone()
  }
}

impl ErrorSink for FakeHandler {
  fn report(&self, error: anyhow::Error) {
    self.reported.lock().unwrap().push(error.to_string());
  }
}

fn make_manifest(dir: &Path) {
  // The Mix build prints JSON pretty and with unescaped slashes, so the
  // fixture does the same for consistency.
  fs::write(
    dir.join("mix-manifest.json"),
    "{\n    \"/unversioned.css\": \"/versioned.css\"\n}",
  )
  .expect("failed to write manifest fixture");
}

#[test]
fn rescue_substitutes_fallbacks_for_failed_operations() {
  let rescued = rescue(|| "nope".parse::<u32>().map(|_| "parsed"), "rescued!");
  assert_eq!(rescued, "rescued!");

  let rescued = rescue_with(|| "nope".parse::<u32>().map(|_| "parsed"), || "rescued!");
  assert_eq!(rescued, "rescued!");

  let untouched = rescue(
    || Ok::<_, std::num::ParseIntError>("no need to rescue"),
    "rescued!",
  );
  assert_eq!(untouched, "no need to rescue");
}

#[test]
fn mix_reports_miss_through_the_handler() {
  let temp = tempdir().expect("failed to create temp dir");
  make_manifest(temp.path());
  let config = AssetConfig::default();
  let handler = FakeHandler::default();
  let resolver = MixResolver::new(temp.path(), &config, &handler);

  let path = resolver.resolve("missing.js").expect("miss should degrade");

  assert_eq!(path, "/missing.js");
  assert_eq!(
    handler.reported(),
    ["Unable to locate Mix file: /missing.js."]
  );
}

#[test]
fn mix_silently_falls_back_to_the_unversioned_path_outside_debug() {
  let temp = tempdir().expect("failed to create temp dir");
  make_manifest(temp.path());
  let config = AssetConfig::with_debug(false);
  let handler = FakeHandler::default();
  let resolver = MixResolver::new(temp.path(), &config, &handler);

  let path = resolver.resolve("missing.js").expect("miss should degrade");

  assert_eq!(path, "/missing.js");
}

#[test]
fn mix_errors_on_miss_in_debug_mode() {
  let temp = tempdir().expect("failed to create temp dir");
  make_manifest(temp.path());
  let config = AssetConfig::with_debug(true);
  let handler = FakeHandler::default();
  let resolver = MixResolver::new(temp.path(), &config, &handler);

  let err = resolver.resolve("missing.js").expect_err("miss should error");

  assert!(err.to_string().contains("/missing.js"));
  assert!(handler.reported().is_empty());
}

#[test]
fn mix_resolves_fingerprinted_paths_from_a_subdirectory_manifest() {
  let temp = tempdir().expect("failed to create temp dir");
  let nested = temp.path().join("build");
  fs::create_dir_all(&nested).expect("failed to create subdirectory");
  make_manifest(&nested);
  let config = AssetConfig::default();
  let handler = FakeHandler::default();
  let resolver = MixResolver::new(temp.path(), &config, &handler);

  let path = resolver
    .resolve_in("unversioned.css", "build")
    .expect("hit should resolve");

  assert_eq!(path, "/versioned.css");
  assert!(handler.reported().is_empty());
}

#[test]
fn mix_prefers_the_dev_server_while_hot_reloading() {
  let temp = tempdir().expect("failed to create temp dir");
  make_manifest(temp.path());
  fs::write(temp.path().join("hot"), "http://localhost:8080/")
    .expect("failed to write hot marker");
  let config = AssetConfig::default();
  let handler = FakeHandler::default();
  let resolver = MixResolver::new(temp.path(), &config, &handler);

  let path = resolver.resolve("unversioned.css").expect("hot path should resolve");

  assert_eq!(path, "//localhost:8080/unversioned.css");
  assert!(handler.reported().is_empty());
}
