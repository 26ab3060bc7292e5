//! Seam through which production-mode resolution misses reach the host's
//! error reporting.

use anyhow::Error;

/// Sink receiving errors the resolver reports instead of returning.
///
/// This mirrors the narrow exception-handler surface of the host application:
/// `report` takes ownership of the error, its return value is ignored, and
/// implementations must not fail themselves.
pub trait ErrorSink {
  /// Consume a reported error.
  fn report(&self, error: Error);
}

/// Sink forwarding reported errors to the `tracing` error stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
  fn report(&self, error: Error) {
    tracing::error!(error = %error, "asset resolution failure reported");
  }
}

/// Sink discarding every report, for callers that want misses swallowed
/// entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ErrorSink for NullSink {
  fn report(&self, _error: Error) {}
}
