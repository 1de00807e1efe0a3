//! Known-answer tests and third-party oracle cross-checks.
//!
//! Every engine is checked against the fixed vectors and against the `crc`
//! crate's catalogue implementations. The reflected CRC32 is additionally
//! checked against `crc-fast`.

use checksum::{
  AlgorithmRegistry, AlgorithmSpec, AnyEngine, Engine, EngineKind, compute,
  registry::{CRC8_1WIRE, CRC8_AUTOSAR, CRC8_J1850, CRC16_ANSI, CRC16_CCITT, CRC16_XMODEM, CRC32, CRC32_POSIX},
  vectors::{CHECK_INPUT, TEST_DATA_A, TEST_DATA_B, TEST_DATA_POSIX, VECTORS},
};
use crc::{
  CRC_8_AUTOSAR, CRC_8_MAXIM_DOW, CRC_8_SAE_J1850, CRC_16_IBM_3740, CRC_16_MODBUS, CRC_16_XMODEM, CRC_32_CKSUM,
  CRC_32_ISO_HDLC, Crc,
};
use crc_fast::CrcAlgorithm;

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

fn engines(spec: AlgorithmSpec) -> [AnyEngine; 3] {
  EngineKind::ALL.map(|kind| AnyEngine::new(kind, spec))
}

/// Assert every engine matches `oracle` over a spread of lengths and seeds.
fn assert_matches_oracle(name: &str, spec: AlgorithmSpec, oracle: impl Fn(&[u8]) -> u32) {
  let lengths = [0usize, 1, 2, 3, 4, 5, 7, 8, 15, 16, 31, 64, 255, 256, 1024];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for &len in &lengths {
    for &seed in &seeds {
      let data = gen_bytes(len, seed ^ len as u64);
      let expected = oracle(&data);
      for engine in engines(spec) {
        assert_eq!(
          engine.compute(&data),
          expected,
          "{name} / {} mismatch at len={len} seed={seed:#x}",
          engine.kind()
        );
      }
    }
  }
}

#[test]
fn known_data_set_checksums() {
  let expectations: [(AlgorithmSpec, &[u8], u32); 6] = [
    (CRC8_1WIRE, TEST_DATA_A, 0x7C),
    (CRC16_ANSI, TEST_DATA_A, 0x2B0E),
    (CRC16_CCITT, TEST_DATA_A, 0x6EBB),
    (CRC16_XMODEM, TEST_DATA_A, 0x5F85),
    (CRC32, TEST_DATA_A, 0x7FC7_6C2F),
    (CRC32, TEST_DATA_B, 0x791F_F31F),
  ];

  for (spec, data, expected) in expectations {
    for engine in engines(spec) {
      assert_eq!(engine.compute(data), expected, "{spec} / {}", engine.kind());
    }
  }
}

#[test]
fn builtin_vector_table() {
  let registry = AlgorithmRegistry::builtin();
  for vector in VECTORS {
    let spec = registry.get(vector.algorithm).unwrap();
    for engine in engines(*spec) {
      assert_eq!(
        compute(&engine, spec, vector.data),
        vector.expected,
        "{} / {} over {} bytes",
        vector.algorithm,
        engine.kind(),
        vector.data.len()
      );
    }
  }
}

#[test]
fn check_values() {
  for algorithm in AlgorithmRegistry::builtin() {
    for engine in engines(*algorithm.spec()) {
      assert_eq!(
        engine.compute(CHECK_INPUT),
        algorithm.check(),
        "{} / {}",
        algorithm.name(),
        engine.kind()
      );
    }
  }
}

#[test]
fn crc32_posix_matches_cksum_oracle() {
  let oracle = Crc::<u32>::new(&CRC_32_CKSUM);
  let expected = oracle.checksum(TEST_DATA_POSIX);
  assert_eq!(expected, 0x5CD4_F325);
  for engine in engines(CRC32_POSIX) {
    assert_eq!(engine.compute(TEST_DATA_POSIX), expected, "{}", engine.kind());
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// `crc` crate oracle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn crc8_1wire_matches_crc_crate() {
  let oracle = Crc::<u8>::new(&CRC_8_MAXIM_DOW);
  assert_matches_oracle("CRC8-1WIRE", CRC8_1WIRE, |d| u32::from(oracle.checksum(d)));
}

#[test]
fn crc8_autosar_matches_crc_crate() {
  let oracle = Crc::<u8>::new(&CRC_8_AUTOSAR);
  assert_matches_oracle("CRC8-AUTOSAR", CRC8_AUTOSAR, |d| u32::from(oracle.checksum(d)));
}

#[test]
fn crc8_j1850_matches_crc_crate() {
  let oracle = Crc::<u8>::new(&CRC_8_SAE_J1850);
  assert_matches_oracle("CRC8-J1850", CRC8_J1850, |d| u32::from(oracle.checksum(d)));
}

#[test]
fn crc16_ansi_matches_crc_crate() {
  let oracle = Crc::<u16>::new(&CRC_16_MODBUS);
  assert_matches_oracle("CRC16-ANSI", CRC16_ANSI, |d| u32::from(oracle.checksum(d)));
}

#[test]
fn crc16_ccitt_matches_crc_crate() {
  let oracle = Crc::<u16>::new(&CRC_16_IBM_3740);
  assert_matches_oracle("CRC16-CCITT", CRC16_CCITT, |d| u32::from(oracle.checksum(d)));
}

#[test]
fn crc16_xmodem_matches_crc_crate() {
  let oracle = Crc::<u16>::new(&CRC_16_XMODEM);
  assert_matches_oracle("CRC16-XMODEM", CRC16_XMODEM, |d| u32::from(oracle.checksum(d)));
}

#[test]
fn crc32_matches_crc_crate() {
  let oracle = Crc::<u32>::new(&CRC_32_ISO_HDLC);
  assert_matches_oracle("CRC32", CRC32, |d| oracle.checksum(d));
}

#[test]
fn crc32_posix_matches_crc_crate() {
  let oracle = Crc::<u32>::new(&CRC_32_CKSUM);
  assert_matches_oracle("CRC32-POSIX", CRC32_POSIX, |d| oracle.checksum(d));
}

#[test]
fn crc32_matches_crc_fast() {
  assert_matches_oracle("CRC32", CRC32, |d| {
    crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, d) as u32
  });
}

#[test]
fn catalog_parameters_match_crc_crate() {
  fn assert_params<W: crc::Width + Into<u64> + Copy>(name: &str, spec: &AlgorithmSpec, algo: &crc::Algorithm<W>) {
    assert_eq!(u32::from(algo.width), spec.width().bits(), "{name} width");
    assert_eq!(u64::from(spec.normal_polynomial()), algo.poly.into(), "{name} poly");
    assert_eq!(u64::from(spec.init()), algo.init.into(), "{name} init");
    assert_eq!(spec.reflected(), algo.refin, "{name} refin");
    assert_eq!(spec.reflected(), algo.refout, "{name} refout");
    assert_eq!(u64::from(spec.xorout()), algo.xorout.into(), "{name} xorout");
  }

  assert_params("CRC8-1WIRE", &CRC8_1WIRE, &CRC_8_MAXIM_DOW);
  assert_params("CRC8-AUTOSAR", &CRC8_AUTOSAR, &CRC_8_AUTOSAR);
  assert_params("CRC8-J1850", &CRC8_J1850, &CRC_8_SAE_J1850);
  assert_params("CRC16-ANSI", &CRC16_ANSI, &CRC_16_MODBUS);
  assert_params("CRC16-CCITT", &CRC16_CCITT, &CRC_16_IBM_3740);
  assert_params("CRC16-XMODEM", &CRC16_XMODEM, &CRC_16_XMODEM);
  assert_params("CRC32", &CRC32, &CRC_32_ISO_HDLC);
  assert_params("CRC32-POSIX", &CRC32_POSIX, &CRC_32_CKSUM);
}
