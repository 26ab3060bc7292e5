#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod manifest;
pub mod paths;
pub mod report;
pub mod rescue;
pub mod resolve;

pub use config::AssetConfig;
pub use manifest::{ManifestError, MixManifest};
pub use report::{ErrorSink, NullSink, TracingSink};
pub use rescue::{rescue, rescue_with};
pub use resolve::{MixError, MixResolver};
