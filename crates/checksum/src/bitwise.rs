//! Table-less CRC engine using branchless bit-serial reduction.
//!
//! One input byte costs eight single-bit steps. Each step is a shift plus a
//! conditional XOR of the polynomial:
//!
//! ```text
//! reflected:      mask = 0 - (crc & 1)
//!                 crc  = (crc >> 1) ^ (poly & mask)
//!
//! non-reflected:  mask = 0 - (crc >> (width - 1))
//!                 crc  = ((crc << 1) & width_mask) ^ (poly & mask)
//! ```
//!
//! The conditional XOR uses a `wrapping_sub` mask instead of a branch, which
//! keeps the loop free of data-dependent jumps.
//!
//! This engine needs zero bytes of table storage. The single-bit [`step`] is
//! also what [`NibbleTableEngine`](crate::NibbleTableEngine) uses to derive
//! its lookup table.

use crate::{
  engine::{Engine, EngineKind},
  spec::AlgorithmSpec,
};

/// Advance a register by one bit, without mixing in any input.
///
/// Bits shifted past the register width are discarded.
#[inline]
#[must_use]
pub const fn step(spec: &AlgorithmSpec, state: u32) -> u32 {
  let poly = spec.polynomial();
  if spec.reflected() {
    let mask = 0u32.wrapping_sub(state & 1);
    (state >> 1) ^ (poly & mask)
  } else {
    let width = spec.width();
    let mask = 0u32.wrapping_sub((state >> (width.bits() - 1)) & 1);
    ((state << 1) & width.mask()) ^ (poly & mask)
  }
}

/// Fold one byte into a register.
///
/// This is a `const fn` to allow compile-time CRC computation.
#[inline]
#[must_use]
pub const fn update_byte(spec: &AlgorithmSpec, state: u32, byte: u8) -> u32 {
  let mut crc = if spec.reflected() {
    state ^ byte as u32
  } else {
    state ^ ((byte as u32) << (spec.width().bits() - 8))
  };

  let mut bit = 0;
  while bit < 8 {
    crc = step(spec, crc);
    bit += 1;
  }
  crc
}

/// Fold a byte slice into a register.
#[inline]
#[must_use]
pub fn update_slice(spec: &AlgorithmSpec, crc: u32, data: &[u8]) -> u32 {
  data.iter().fold(crc, |crc, &byte| update_byte(spec, crc, byte))
}

/// Bit-serial CRC engine.
///
/// # Example
///
/// ```
/// use checksum::{BitwiseEngine, Engine, registry};
///
/// let engine = BitwiseEngine::new(registry::CRC32);
/// assert_eq!(engine.compute(b"123456789"), 0xCBF4_3926);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitwiseEngine {
  spec: AlgorithmSpec,
}

impl BitwiseEngine {
  /// Bind an engine to `spec`.
  #[inline]
  #[must_use]
  pub const fn new(spec: AlgorithmSpec) -> Self {
    Self { spec }
  }
}

impl Engine for BitwiseEngine {
  #[inline]
  fn kind(&self) -> EngineKind {
    EngineKind::Bitwise
  }

  #[inline]
  fn spec(&self) -> &AlgorithmSpec {
    &self.spec
  }

  #[inline]
  fn update(&self, state: u32, byte: u8) -> u32 {
    update_byte(&self.spec, state, byte)
  }

  #[inline]
  fn update_many(&self, state: u32, bytes: &[u8]) -> u32 {
    update_slice(&self.spec, state, bytes)
  }
}
