//! The engine contract shared by every CRC implementation.
//!
//! An engine is a pure function from `(state, byte)` to the next register
//! value, bound to one [`AlgorithmSpec`]. Register state belongs to the
//! caller; engines hold no per-stream data.
//!
//! # Free-function interface
//!
//! The crate root re-exports [`init`], [`update`], [`update_many`],
//! [`finalize`] and [`compute`], which take the spec and the engine as
//! separate arguments:
//!
//! ```
//! use checksum::{BitwiseEngine, registry};
//!
//! let engine = BitwiseEngine::new(registry::CRC16_XMODEM);
//! let mut state = checksum::init(&registry::CRC16_XMODEM);
//! state = checksum::update_many(&engine, state, b"1234");
//! state = checksum::update_many(&engine, state, b"56789");
//! assert_eq!(checksum::finalize(&registry::CRC16_XMODEM, state), 0x31C3);
//! ```
//!
//! [`compute`] applies `spec`'s init and xorout around `engine`'s update. With
//! two specs that share a polynomial, one engine therefore serves both:
//!
//! ```
//! use checksum::{BitwiseEngine, registry};
//!
//! let ccitt = BitwiseEngine::new(registry::CRC16_CCITT);
//! assert_eq!(checksum::compute(&ccitt, &registry::CRC16_XMODEM, b"123456789"), 0x31C3);
//! ```

use core::{fmt, str::FromStr};

use crate::{bitwise::BitwiseEngine, nibble::NibbleTableEngine, reference::ReferenceEngine, spec::AlgorithmSpec};

/// A CRC update implementation bound to one algorithm.
pub trait Engine {
  /// Which implementation this is.
  fn kind(&self) -> EngineKind;

  /// The bound algorithm.
  fn spec(&self) -> &AlgorithmSpec;

  /// Fold one byte into `state`.
  fn update(&self, state: u32, byte: u8) -> u32;

  /// Fold a byte sequence into `state`.
  ///
  /// Equivalent to calling [`update`](Self::update) once per byte in order,
  /// however the caller chunks the input.
  #[inline]
  fn update_many(&self, state: u32, bytes: &[u8]) -> u32 {
    bytes.iter().fold(state, |crc, &byte| self.update(crc, byte))
  }

  /// Initial register value of the bound algorithm.
  #[inline]
  fn init(&self) -> u32 {
    self.spec().init()
  }

  /// Apply the bound algorithm's output mask.
  #[inline]
  fn finalize(&self, state: u32) -> u32 {
    self.spec().finalize(state)
  }

  /// One-shot CRC of `bytes`.
  #[inline]
  fn compute(&self, bytes: &[u8]) -> u32 {
    self.finalize(self.update_many(self.init(), bytes))
  }
}

impl<E: Engine + ?Sized> Engine for &E {
  #[inline]
  fn kind(&self) -> EngineKind {
    (**self).kind()
  }

  #[inline]
  fn spec(&self) -> &AlgorithmSpec {
    (**self).spec()
  }

  #[inline]
  fn update(&self, state: u32, byte: u8) -> u32 {
    (**self).update(state, byte)
  }

  #[inline]
  fn update_many(&self, state: u32, bytes: &[u8]) -> u32 {
    (**self).update_many(state, bytes)
  }
}

/// Initial register value for `spec`.
#[inline]
#[must_use]
pub const fn init(spec: &AlgorithmSpec) -> u32 {
  spec.init()
}

/// Fold one byte into `state` with `engine`.
#[inline]
#[must_use]
pub fn update<E: Engine + ?Sized>(engine: &E, state: u32, byte: u8) -> u32 {
  engine.update(state, byte)
}

/// Fold a byte sequence into `state` with `engine`.
#[inline]
#[must_use]
pub fn update_many<E: Engine + ?Sized>(engine: &E, state: u32, bytes: &[u8]) -> u32 {
  engine.update_many(state, bytes)
}

/// Apply `spec`'s output mask to `state`.
#[inline]
#[must_use]
pub const fn finalize(spec: &AlgorithmSpec, state: u32) -> u32 {
  spec.finalize(state)
}

/// `finalize(spec, update_many(engine, init(spec), bytes))`.
#[inline]
#[must_use]
pub fn compute<E: Engine + ?Sized>(engine: &E, spec: &AlgorithmSpec, bytes: &[u8]) -> u32 {
  finalize(spec, update_many(engine, init(spec), bytes))
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine selection
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies one of the built-in engine implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EngineKind {
  /// [`BitwiseEngine`].
  Bitwise,
  /// [`ReferenceEngine`].
  Reference,
  /// [`NibbleTableEngine`].
  Nibble,
}

impl EngineKind {
  /// Every kind, in report order.
  pub const ALL: [Self; 3] = [Self::Reference, Self::Bitwise, Self::Nibble];

  /// Stable lower-case name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Bitwise => "bitwise",
      Self::Reference => "reference",
      Self::Nibble => "nibble",
    }
  }
}

impl fmt::Display for EngineKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A string did not name an [`EngineKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown engine (expected one of: bitwise, reference, nibble)")]
pub struct ParseEngineKindError;

impl FromStr for EngineKind {
  type Err = ParseEngineKindError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|kind| kind.name().eq_ignore_ascii_case(s))
      .ok_or(ParseEngineKindError)
  }
}

/// Any built-in engine, chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnyEngine {
  /// Bit-serial.
  Bitwise(BitwiseEngine),
  /// Oracle.
  Reference(ReferenceEngine),
  /// Nibble table.
  Nibble(NibbleTableEngine),
}

impl AnyEngine {
  /// Build the engine of `kind` for `spec`.
  #[must_use]
  pub const fn new(kind: EngineKind, spec: AlgorithmSpec) -> Self {
    match kind {
      EngineKind::Bitwise => Self::Bitwise(BitwiseEngine::new(spec)),
      EngineKind::Reference => Self::Reference(ReferenceEngine::new(spec)),
      EngineKind::Nibble => Self::Nibble(NibbleTableEngine::new(spec)),
    }
  }
}

impl Engine for AnyEngine {
  #[inline]
  fn kind(&self) -> EngineKind {
    match self {
      Self::Bitwise(e) => e.kind(),
      Self::Reference(e) => e.kind(),
      Self::Nibble(e) => e.kind(),
    }
  }

  #[inline]
  fn spec(&self) -> &AlgorithmSpec {
    match self {
      Self::Bitwise(e) => e.spec(),
      Self::Reference(e) => e.spec(),
      Self::Nibble(e) => e.spec(),
    }
  }

  #[inline]
  fn update(&self, state: u32, byte: u8) -> u32 {
    match self {
      Self::Bitwise(e) => e.update(state, byte),
      Self::Reference(e) => e.update(state, byte),
      Self::Nibble(e) => e.update(state, byte),
    }
  }

  #[inline]
  fn update_many(&self, state: u32, bytes: &[u8]) -> u32 {
    match self {
      Self::Bitwise(e) => e.update_many(state, bytes),
      Self::Reference(e) => e.update_many(state, bytes),
      Self::Nibble(e) => e.update_many(state, bytes),
    }
  }
}
