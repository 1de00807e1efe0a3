//! Error types for CRC algorithm construction and lookup.
//!
//! Only two things can fail in this crate: building an [`AlgorithmSpec`] from
//! raw parameters, and looking up a variant by name. Everything downstream of a
//! valid spec (`update`, `finalize`, `compute`) is total.
//!
//! All errors are `Copy`, allocation-free and usable in `no_std` builds.
//!
//! [`AlgorithmSpec`]: crate::AlgorithmSpec

use core::fmt;

use crate::registry::Algorithm;

/// A CRC parameter that is subject to width validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
  /// Generator polynomial.
  Polynomial,
  /// Initial register value.
  Init,
  /// Final XOR mask.
  XorOut,
}

impl Parameter {
  /// Lower-case parameter name as used in the CRC catalogue.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Polynomial => "polynomial",
      Self::Init => "init",
      Self::XorOut => "xorout",
    }
  }
}

impl fmt::Display for Parameter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Raw parameters do not describe a supported CRC.
///
/// Raised by [`AlgorithmSpec::new`](crate::AlgorithmSpec::new). Fatal to that
/// construction only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidSpec {
  /// Width is not one of 8, 16 or 32.
  #[error("unsupported CRC width {0} (expected 8, 16 or 32)")]
  UnsupportedWidth(u8),

  /// A parameter has bits set above the register width.
  #[error("{parameter} 0x{value:X} does not fit in a {width}-bit register")]
  ParameterTooWide {
    /// Offending parameter.
    parameter: Parameter,
    /// Value as supplied.
    value: u32,
    /// Register width in bits.
    width: u8,
  },
}

/// A registry lookup named no known variant.
///
/// Carries the catalog that was searched so callers can fall back to listing
/// what is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown CRC algorithm (available: {})", AvailableNames(.available))]
pub struct UnknownAlgorithm {
  available: &'static [Algorithm],
}

impl UnknownAlgorithm {
  #[inline]
  #[must_use]
  pub(crate) const fn new(available: &'static [Algorithm]) -> Self {
    Self { available }
  }

  /// Canonical names of every variant in the searched catalog.
  #[inline]
  pub fn available(&self) -> impl Iterator<Item = &'static str> + 'static {
    self.available.iter().map(Algorithm::name)
  }
}

/// Comma-separated catalog names, formatted without allocating.
struct AvailableNames<'a>(&'a [Algorithm]);

impl fmt::Display for AvailableNames<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, algorithm) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      f.write_str(algorithm.name())?;
    }
    Ok(())
  }
}

/// Any error produced by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  /// See [`InvalidSpec`].
  #[error(transparent)]
  InvalidSpec(#[from] InvalidSpec),

  /// See [`UnknownAlgorithm`].
  #[error(transparent)]
  UnknownAlgorithm(#[from] UnknownAlgorithm),
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;
  use crate::AlgorithmRegistry;

  #[test]
  fn invalid_width_message() {
    assert_eq!(
      InvalidSpec::UnsupportedWidth(12).to_string(),
      "unsupported CRC width 12 (expected 8, 16 or 32)"
    );
  }

  #[test]
  fn too_wide_message() {
    let err = InvalidSpec::ParameterTooWide {
      parameter: Parameter::Init,
      value: 0x1FF,
      width: 8,
    };
    assert_eq!(err.to_string(), "init 0x1FF does not fit in a 8-bit register");
  }

  #[test]
  fn unknown_algorithm_lists_catalog() {
    let err = AlgorithmRegistry::builtin()
      .get("CRC64-XZ")
      .expect_err("CRC64-XZ is not in the catalog");
    let msg = err.to_string();
    assert!(msg.starts_with("unknown CRC algorithm (available: CRC8-1WIRE, "));
    assert!(msg.ends_with("CRC32-POSIX)"));
    assert_eq!(err.available().count(), 8);
  }

  #[test]
  fn error_is_transparent() {
    let err: Error = InvalidSpec::UnsupportedWidth(64).into();
    assert_eq!(err.to_string(), InvalidSpec::UnsupportedWidth(64).to_string());
    assert!(matches!(err, Error::InvalidSpec(InvalidSpec::UnsupportedWidth(64))));
  }

  #[test]
  fn error_trait_impl() {
    fn assert_error<T: core::error::Error + Send + Sync + 'static>() {}
    assert_error::<InvalidSpec>();
    assert_error::<UnknownAlgorithm>();
    assert_error::<Error>();
  }
}
