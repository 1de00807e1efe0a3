//! Straightforward reference implementation used as a test oracle.
//!
//! This code deliberately avoids sharing arithmetic with the production
//! engines. Reflected variants run the textbook branchy LSB-first loop.
//! Non-reflected variants shift the register up to bit 31 and reduce there,
//! so the top-bit test and width masking never go through [`Width::mask`].
//!
//! Everything here is `const fn` so catalog check values can be asserted at
//! compile time.
//!
//! [`Width::mask`]: crate::Width::mask

// Indexing is bounded by `data.len()`; slice iterators are not usable in const fn.
#![allow(clippy::indexing_slicing)]

use crate::{
  engine::{Engine, EngineKind},
  spec::AlgorithmSpec,
};

/// Fold one byte into a register.
#[must_use]
pub const fn update_byte(spec: &AlgorithmSpec, state: u32, byte: u8) -> u32 {
  if spec.reflected() {
    let mut crc = state ^ byte as u32;
    let mut i = 0;
    while i < 8 {
      if crc & 1 != 0 {
        crc = (crc >> 1) ^ spec.polynomial();
      } else {
        crc >>= 1;
      }
      i += 1;
    }
    crc
  } else {
    // Expanded form: register occupies the top `width` bits of a u32.
    let shift = 32 - spec.width().bits();
    let poly = spec.polynomial() << shift;
    let mut crc = (state << shift) ^ ((byte as u32) << 24);
    let mut i = 0;
    while i < 8 {
      if crc & 0x8000_0000 != 0 {
        crc = (crc << 1) ^ poly;
      } else {
        crc <<= 1;
      }
      i += 1;
    }
    crc >> shift
  }
}

/// Fold a byte slice into a register.
#[must_use]
pub const fn update_slice(spec: &AlgorithmSpec, mut state: u32, data: &[u8]) -> u32 {
  let mut i = 0;
  while i < data.len() {
    state = update_byte(spec, state, data[i]);
    i += 1;
  }
  state
}

/// Complete CRC of `data`: init, update and finalize in one call.
#[must_use]
pub const fn checksum(spec: &AlgorithmSpec, data: &[u8]) -> u32 {
  spec.finalize(update_slice(spec, spec.init(), data))
}

/// Oracle engine backed by [`update_byte`].
///
/// Slow and simple. Other engines are tested for equality against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceEngine {
  spec: AlgorithmSpec,
}

impl ReferenceEngine {
  /// Bind an engine to `spec`.
  #[must_use]
  pub const fn new(spec: AlgorithmSpec) -> Self {
    Self { spec }
  }
}

impl Engine for ReferenceEngine {
  fn kind(&self) -> EngineKind {
    EngineKind::Reference
  }

  fn spec(&self) -> &AlgorithmSpec {
    &self.spec
  }

  fn update(&self, state: u32, byte: u8) -> u32 {
    update_byte(&self.spec, state, byte)
  }

  fn update_many(&self, state: u32, bytes: &[u8]) -> u32 {
    update_slice(&self.spec, state, bytes)
  }
}
