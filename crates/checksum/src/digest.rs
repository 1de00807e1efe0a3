//! Streaming CRC computation over an [`Engine`].

use crate::engine::Engine;

/// Incremental CRC state bound to an engine.
///
/// `E` may be an owned engine or a reference to a shared one; `&E` is itself
/// an [`Engine`].
///
/// # Example
///
/// ```
/// use checksum::{Digest, NibbleTableEngine, registry};
///
/// let engine = NibbleTableEngine::new(registry::CRC32);
/// let mut digest = Digest::new(&engine);
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0xCBF4_3926);
///
/// // Pick up where a previous computation left off.
/// let mut resumed = Digest::resume(&engine, Digest::new(&engine).chain(b"1234").finalize());
/// resumed.update(b"56789");
/// assert_eq!(resumed.finalize(), 0xCBF4_3926);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Digest<E> {
  engine: E,
  state: u32,
}

impl<E: Engine> Digest<E> {
  /// Start a fresh computation.
  #[inline]
  #[must_use]
  pub fn new(engine: E) -> Self {
    let state = engine.init();
    Self { engine, state }
  }

  /// Continue from a previously finalized checksum.
  ///
  /// Undoes the output mask so that feeding the remaining bytes yields the
  /// same result as an uninterrupted computation.
  #[inline]
  #[must_use]
  pub fn resume(engine: E, crc: u32) -> Self {
    let spec = engine.spec();
    let state = (crc ^ spec.xorout()) & spec.mask();
    Self { engine, state }
  }

  /// Fold `bytes` into the running state.
  #[inline]
  pub fn update(&mut self, bytes: &[u8]) {
    self.state = self.engine.update_many(self.state, bytes);
  }

  /// Fold `bytes` in and return `self`, for one-expression use.
  #[inline]
  #[must_use]
  pub fn chain(mut self, bytes: &[u8]) -> Self {
    self.update(bytes);
    self
  }

  /// Finalized checksum of everything fed so far. Does not consume the state.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u32 {
    self.engine.finalize(self.state)
  }

  /// Discard all input and return to the initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.engine.init();
  }

  /// Raw register value, before the output mask.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> u32 {
    self.state
  }

  /// The underlying engine.
  #[inline]
  #[must_use]
  pub const fn engine(&self) -> &E {
    &self.engine
  }
}

#[cfg(feature = "std")]
impl<E: Engine> std::io::Write for Digest<E> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
