//! `std::io` adapters that checksum a byte stream as it passes through.
//!
//! Only bytes that actually move count: short reads and partial writes fold in
//! exactly the prefix the inner reader or writer reported.

use std::io::{self, IoSliceMut, Read, Write};

use crate::{digest::Digest, engine::Engine};

/// Wraps a [`Read`] and checksums every byte read through it.
///
/// # Example
///
/// ```
/// use std::io::{Cursor, Read};
///
/// use checksum::{BitwiseEngine, io::ChecksumReader, registry};
///
/// let engine = BitwiseEngine::new(registry::CRC16_ANSI);
/// let mut reader = ChecksumReader::new(Cursor::new(b"123456789"), &engine);
/// let mut sink = Vec::new();
/// reader.read_to_end(&mut sink)?;
/// assert_eq!(reader.crc(), 0x4B37);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChecksumReader<R, E> {
  inner: R,
  digest: Digest<E>,
}

impl<R, E: Engine> ChecksumReader<R, E> {
  /// Start a fresh checksum over `inner`.
  #[inline]
  #[must_use]
  pub fn new(inner: R, engine: E) -> Self {
    Self {
      inner,
      digest: Digest::new(engine),
    }
  }

  /// Continue a checksum from a previously finalized value.
  #[inline]
  #[must_use]
  pub fn resume(inner: R, engine: E, crc: u32) -> Self {
    Self {
      inner,
      digest: Digest::resume(engine, crc),
    }
  }

  /// Finalized checksum of everything read so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.digest.finalize()
  }

  /// The running digest.
  #[inline]
  pub const fn digest(&self) -> &Digest<E> {
    &self.digest
  }

  /// Split into the inner reader and the finalized checksum.
  #[inline]
  pub fn into_parts(self) -> (R, u32) {
    let crc = self.digest.finalize();
    (self.inner, crc)
  }

  /// Borrow the inner reader.
  #[inline]
  pub const fn get_ref(&self) -> &R {
    &self.inner
  }
}

impl<R: Read, E: Engine> Read for ChecksumReader<R, E> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.digest.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs.iter() {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.digest.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }
}

/// Wraps a [`Write`] and checksums every byte the inner writer accepts.
///
/// # Example
///
/// ```
/// use std::io::Write;
///
/// use checksum::{NibbleTableEngine, io::ChecksumWriter, registry};
///
/// let mut writer = ChecksumWriter::new(Vec::new(), NibbleTableEngine::new(registry::CRC32));
/// writer.write_all(b"123456789")?;
/// let (out, crc) = writer.into_parts();
/// assert_eq!(out, b"123456789");
/// assert_eq!(crc, 0xCBF4_3926);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W, E> {
  inner: W,
  digest: Digest<E>,
}

impl<W, E: Engine> ChecksumWriter<W, E> {
  /// Start a fresh checksum in front of `inner`.
  #[inline]
  #[must_use]
  pub fn new(inner: W, engine: E) -> Self {
    Self {
      inner,
      digest: Digest::new(engine),
    }
  }

  /// Finalized checksum of everything written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.digest.finalize()
  }

  /// Split into the inner writer and the finalized checksum.
  #[inline]
  pub fn into_parts(self) -> (W, u32) {
    let crc = self.digest.finalize();
    (self.inner, crc)
  }

  /// Borrow the inner writer.
  #[inline]
  pub const fn get_ref(&self) -> &W {
    &self.inner
  }
}

impl<W: Write, E: Engine> Write for ChecksumWriter<W, E> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.digest.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::{io::Cursor, vec::Vec};

  use super::*;
  use crate::{
    BitwiseEngine, NibbleTableEngine, reference,
    registry::{CRC8_1WIRE, CRC32_POSIX},
    vectors::TEST_DATA_B,
  };

  /// Reader that hands out at most `limit` bytes per call.
  struct Trickle<'a> {
    data: &'a [u8],
    limit: usize,
  }

  impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      let n = self.limit.min(buf.len()).min(self.data.len());
      let (head, tail) = self.data.split_at(n);
      buf[..n].copy_from_slice(head);
      self.data = tail;
      Ok(n)
    }
  }

  /// Writer that accepts at most `limit` bytes per call.
  struct Narrow {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Narrow {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = self.limit.min(buf.len());
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn short_reads() {
    let expected = reference::checksum(&CRC32_POSIX, TEST_DATA_B);
    for limit in [1, 3, 7, 64, 1000] {
      let engine = NibbleTableEngine::new(CRC32_POSIX);
      let mut reader = ChecksumReader::new(Trickle { data: TEST_DATA_B, limit }, &engine);
      io::copy(&mut reader, &mut io::sink()).unwrap();
      assert_eq!(reader.crc(), expected, "limit {limit}");
    }
  }

  #[test]
  fn partial_writes() {
    let expected = reference::checksum(&CRC8_1WIRE, TEST_DATA_B);
    for limit in [1, 5, 100] {
      let mut writer = ChecksumWriter::new(
        Narrow {
          out: Vec::new(),
          limit,
        },
        BitwiseEngine::new(CRC8_1WIRE),
      );
      writer.write_all(TEST_DATA_B).unwrap();
      writer.flush().unwrap();
      let (inner, crc) = writer.into_parts();
      assert_eq!(inner.out, TEST_DATA_B);
      assert_eq!(crc, expected, "limit {limit}");
    }
  }

  #[test]
  fn vectored_read_counts_only_filled_bytes() {
    let engine = BitwiseEngine::new(CRC32_POSIX);
    let mut reader = ChecksumReader::new(Cursor::new(&b"123456789"[..]), &engine);
    let mut a = [0u8; 4];
    let mut b = [0u8; 16];
    let n = reader
      .read_vectored(&mut [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)])
      .unwrap();
    assert_eq!(n, 9);
    assert_eq!(reader.crc(), 0x765E_7680);
  }

  #[test]
  fn resume_across_readers() {
    let engine = BitwiseEngine::new(CRC32_POSIX);
    let (head, tail) = TEST_DATA_B.split_at(100);

    let mut first = ChecksumReader::new(head, &engine);
    io::copy(&mut first, &mut io::sink()).unwrap();
    let mut second = ChecksumReader::resume(tail, &engine, first.crc());
    io::copy(&mut second, &mut io::sink()).unwrap();

    assert_eq!(second.crc(), 0x4D84_D9B6);
  }
}
