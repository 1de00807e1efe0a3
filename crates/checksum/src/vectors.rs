//! Fixed test vectors with expected checksums.
//!
//! [`TEST_DATA_A`] and [`TEST_DATA_B`] cover every catalog variant. The
//! CRC32-POSIX entries over [`TEST_DATA_POSIX`] match `cksum`-style output.
//! [`CHECK_INPUT`] is the ASCII string behind each catalog check value.

/// `"123456789"`, the input the CRC catalogue's `check` values are defined over.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// Short mixed-bit sequence.
pub const TEST_DATA_A: &[u8] = &[0x01, 0x32, 0xF0, 0x21, 0x97, 0x68, 0x22, 0x3E];

/// 256 bytes of pseudo-random data.
#[rustfmt::skip]
pub const TEST_DATA_B: &[u8] = &[
  0x03, 0x58, 0x24, 0x45, 0x19, 0x6B, 0x82, 0x62, 0x10, 0xCC, 0xD2, 0x47, 0x71, 0xAA, 0xB6, 0xF9,
  0x3B, 0x68, 0x2D, 0x10, 0x80, 0x7B, 0x26, 0xC8, 0xDD, 0x15, 0x58, 0xD6, 0x22, 0x06, 0x0B, 0xA1,
  0xC4, 0xF0, 0xCE, 0xCF, 0xEF, 0x69, 0x54, 0x47, 0x53, 0x40, 0xEF, 0x7C, 0xFD, 0x71, 0x58, 0xE0,
  0xDF, 0x64, 0xCE, 0xBB, 0xD5, 0x22, 0xB8, 0xA9, 0x46, 0x15, 0x3B, 0x6C, 0xB4, 0x1E, 0x93, 0xDE,
  0xD2, 0x88, 0x0D, 0xB1, 0x04, 0x1C, 0xEF, 0xF7, 0x4E, 0x69, 0xB3, 0x1A, 0x1B, 0xEA, 0x64, 0xB4,
  0x68, 0xA9, 0xFB, 0x46, 0x34, 0xC0, 0x0B, 0x93, 0x47, 0x9B, 0x22, 0xC2, 0xAB, 0xD2, 0xA7, 0xAD,
  0x6D, 0xE3, 0x1E, 0x35, 0x7E, 0x6A, 0x14, 0x1E, 0xD0, 0x23, 0x29, 0x2D, 0x02, 0xFB, 0xEE, 0x5A,
  0x35, 0x7B, 0x8F, 0x08, 0xE3, 0xF1, 0x83, 0x37, 0xCE, 0x34, 0xB9, 0xD4, 0x60, 0x3D, 0xFB, 0x72,
  0x15, 0x44, 0x7B, 0x29, 0xC5, 0xC4, 0xC7, 0x02, 0xE8, 0x68, 0x9B, 0x4D, 0x29, 0x4F, 0x48, 0x84,
  0xE6, 0x17, 0xA4, 0x30, 0x6B, 0x94, 0xC2, 0x81, 0x0A, 0x83, 0xEA, 0x05, 0x68, 0x74, 0x81, 0x76,
  0x87, 0x5E, 0xDF, 0x8C, 0x7F, 0x90, 0x4B, 0xBE, 0xE4, 0x3D, 0x95, 0x52, 0x48, 0xC3, 0x06, 0xDC,
  0x5A, 0xA5, 0x95, 0x78, 0x91, 0x32, 0xAB, 0xC3, 0x6B, 0x2B, 0xE1, 0xCC, 0x9B, 0xF7, 0x6C, 0x13,
  0xC4, 0x46, 0x44, 0x3F, 0x93, 0x99, 0x22, 0x68, 0x55, 0xA4, 0xE3, 0xFF, 0x55, 0xD6, 0xFB, 0x38,
  0xAF, 0x21, 0xFE, 0xD2, 0x5D, 0x75, 0x62, 0xE6, 0x9E, 0xC7, 0x07, 0x66, 0x0F, 0x21, 0x30, 0xE8,
  0x09, 0x61, 0xE7, 0xB1, 0x29, 0x82, 0x11, 0x47, 0x08, 0x8A, 0x8E, 0xB6, 0x86, 0x19, 0x3A, 0xCD,
  0x44, 0x53, 0xBA, 0x1B, 0x16, 0x94, 0x4A, 0x9A, 0x95, 0xD5, 0x09, 0x83, 0x1C, 0x95, 0x7E, 0x06,
];

/// Input for the CRC32-POSIX vector.
pub const TEST_DATA_POSIX: &[u8] = &[0x33, 0x22, 0x55, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];

/// One input sequence and the checksum a named variant must produce for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
  /// Registry name of the variant.
  pub algorithm: &'static str,
  /// Input bytes.
  pub data: &'static [u8],
  /// Finalized checksum.
  pub expected: u32,
}

impl TestVector {
  const fn new(algorithm: &'static str, data: &'static [u8], expected: u32) -> Self {
    Self {
      algorithm,
      data,
      expected,
    }
  }
}

/// Every built-in vector, grouped by algorithm in catalog order.
pub const VECTORS: &[TestVector] = &[
  TestVector::new("CRC8-1WIRE", TEST_DATA_A, 0x7C),
  TestVector::new("CRC8-1WIRE", TEST_DATA_B, 0xE3),
  TestVector::new("CRC8-AUTOSAR", TEST_DATA_A, 0x92),
  TestVector::new("CRC8-AUTOSAR", TEST_DATA_B, 0xB3),
  TestVector::new("CRC8-J1850", TEST_DATA_A, 0x04),
  TestVector::new("CRC8-J1850", TEST_DATA_B, 0x28),
  TestVector::new("CRC16-ANSI", TEST_DATA_A, 0x2B0E),
  TestVector::new("CRC16-ANSI", TEST_DATA_B, 0x4173),
  TestVector::new("CRC16-CCITT", TEST_DATA_A, 0x6EBB),
  TestVector::new("CRC16-CCITT", TEST_DATA_B, 0x61DE),
  TestVector::new("CRC16-XMODEM", TEST_DATA_A, 0x5F85),
  TestVector::new("CRC16-XMODEM", TEST_DATA_B, 0x2036),
  TestVector::new("CRC32", TEST_DATA_A, 0x7FC7_6C2F),
  TestVector::new("CRC32", TEST_DATA_B, 0x791F_F31F),
  TestVector::new("CRC32-POSIX", TEST_DATA_A, 0x93E5_A427),
  TestVector::new("CRC32-POSIX", TEST_DATA_B, 0x4D84_D9B6),
  TestVector::new("CRC32-POSIX", TEST_DATA_POSIX, 0x5CD4_F325),
];
