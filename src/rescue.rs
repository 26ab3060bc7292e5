//! Call-and-substitute-on-failure helpers.
//!
//! These wrappers exist for call sites that must never propagate a failure:
//! the operation is attempted, and any error is traded for a caller-supplied
//! substitute. The error itself is discarded rather than logged or reported.

/// Invoke `op` and return its value, substituting `fallback` when it fails.
///
/// Success is determined solely by the operation returning `Ok`; empty or
/// otherwise "falsy" values pass through unchanged. The fallback is evaluated
/// eagerly, so prefer [`rescue_with`] when producing it is expensive.
pub fn rescue<T, E>(op: impl FnOnce() -> Result<T, E>, fallback: T) -> T {
  op().unwrap_or(fallback)
}

/// Invoke `op` and return its value, invoking `fallback` for one when it fails.
///
/// `fallback` is only called on failure, making it the right choice when the
/// substitute is costly to build or has side effects of its own.
pub fn rescue_with<T, E>(op: impl FnOnce() -> Result<T, E>, fallback: impl FnOnce() -> T) -> T {
  op().unwrap_or_else(|_| fallback())
}
