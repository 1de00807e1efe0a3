//! Half-byte table-driven CRC engine.
//!
//! A 16-entry table maps each 4-bit value to the register contribution of
//! four bit-serial steps. Each input byte then costs two lookups instead of
//! eight shift/XOR rounds.
//!
//! # Table layout
//!
//! | Mode | Entry `i` is four [`step`]s applied to |
//! |------|----------------------------------------|
//! | reflected | `i` (nibble in the low bits) |
//! | non-reflected | `i << (width - 4)` (nibble in the high bits) |
//!
//! # Update
//!
//! ```text
//! reflected:      crc ^= byte
//!                 crc  = (crc >> 4) ^ T[crc & 0xF]            (twice)
//!
//! non-reflected:  crc ^= byte << (width - 8)
//!                 idx  = (crc >> (width - 4)) & 0xF
//!                 crc  = ((crc << 4) & width_mask) ^ T[idx]   (twice)
//! ```
//!
//! Both reductions are exact because a CRC step is linear over GF(2): the
//! nibble that leaves the register and the bits that stay can be reduced
//! independently and XORed back together.
//!
//! The table is built once at construction and never mutated, so a single
//! engine can be shared across threads by reference.

// Table indices are masked with `& 0xF`; the table always has 16 entries.
#![allow(clippy::indexing_slicing)]

use crate::{
  bitwise::step,
  engine::{Engine, EngineKind},
  error::Error,
  registry::AlgorithmRegistry,
  spec::AlgorithmSpec,
};

/// Build the 16-entry nibble table for `spec`.
#[must_use]
pub const fn build_table(spec: &AlgorithmSpec) -> [u32; 16] {
  let load_shift = if spec.reflected() { 0 } else { spec.width().bits() - 4 };
  let mut table = [0u32; 16];
  let mut i = 0u32;
  while i < 16 {
    let mut crc = i << load_shift;
    let mut bit = 0;
    while bit < 4 {
      crc = step(spec, crc);
      bit += 1;
    }
    table[i as usize] = crc;
    i += 1;
  }
  table
}

/// Fold one byte into a register using `table`.
#[inline]
#[must_use]
pub const fn update_byte(spec: &AlgorithmSpec, table: &[u32; 16], state: u32, byte: u8) -> u32 {
  if spec.reflected() {
    let mut crc = state ^ byte as u32;
    crc = (crc >> 4) ^ table[(crc & 0xF) as usize];
    (crc >> 4) ^ table[(crc & 0xF) as usize]
  } else {
    let width = spec.width();
    let top = width.bits() - 4;
    let mask = width.mask();
    let mut crc = state ^ ((byte as u32) << (width.bits() - 8));
    crc = ((crc << 4) & mask) ^ table[((crc >> top) & 0xF) as usize];
    ((crc << 4) & mask) ^ table[((crc >> top) & 0xF) as usize]
  }
}

/// Nibble-table CRC engine.
///
/// Owns its 64-byte table. Construction is `const`, so an engine for a catalog
/// variant can live in a `static`:
///
/// ```
/// use checksum::{Engine, NibbleTableEngine, registry};
///
/// static CCITT: NibbleTableEngine = NibbleTableEngine::new(registry::CRC16_CCITT);
///
/// assert_eq!(CCITT.table()[1], 0x1021);
/// assert_eq!(CCITT.compute(b"123456789"), 0x29B1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NibbleTableEngine {
  spec: AlgorithmSpec,
  table: [u32; 16],
}

impl NibbleTableEngine {
  /// Bind an engine to `spec`, building its lookup table.
  #[must_use]
  pub const fn new(spec: AlgorithmSpec) -> Self {
    Self {
      table: build_table(&spec),
      spec,
    }
  }

  /// Build an engine for a named catalog variant.
  ///
  /// # Errors
  ///
  /// [`Error::UnknownAlgorithm`] if `name` is not in the built-in catalog.
  pub fn by_name(name: &str) -> Result<Self, Error> {
    let spec = AlgorithmRegistry::builtin().get(name)?;
    Ok(Self::new(*spec))
  }

  /// The lookup table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[u32; 16] {
    &self.table
  }
}

impl Engine for NibbleTableEngine {
  #[inline]
  fn kind(&self) -> EngineKind {
    EngineKind::Nibble
  }

  #[inline]
  fn spec(&self) -> &AlgorithmSpec {
    &self.spec
  }

  #[inline]
  fn update(&self, state: u32, byte: u8) -> u32 {
    update_byte(&self.spec, &self.table, state, byte)
  }
}
