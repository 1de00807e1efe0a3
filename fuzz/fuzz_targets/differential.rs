//! Differential fuzzing of the three engines against each other and the `crc` crate.
//!
//! Every catalog variant is checked on the same input, plus one arbitrary
//! spec derived from the fuzzer's parameters.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{AlgorithmRegistry, AlgorithmSpec, AnyEngine, Engine, EngineKind, Width, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u32,
  init: u32,
  reflected: bool,
  xorout: u32,
  state: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  for algorithm in AlgorithmRegistry::builtin() {
    check_agreement(algorithm.name(), *algorithm.spec(), input.state, &input.data);
  }

  let width = Width::ALL[usize::from(input.width) % Width::ALL.len()];
  let mask = width.mask();
  let spec = match AlgorithmSpec::new(
    width.bits() as u8,
    input.polynomial & mask,
    input.init & mask,
    input.reflected,
    input.xorout & mask,
  ) {
    Ok(spec) => spec,
    Err(err) => panic!("masked parameters rejected: {err}"),
  };
  check_agreement("custom", spec, input.state, &input.data);

  check_against_crc_crate(&input.data);
});

fn check_agreement(name: &str, spec: AlgorithmSpec, state: u32, data: &[u8]) {
  let state = state & spec.mask();
  let expected = reference::update_slice(&spec, state, data);
  for kind in EngineKind::ALL {
    let ours = AnyEngine::new(kind, spec).update_many(state, data);
    assert_eq!(
      ours,
      expected,
      "{name} {kind} mismatch: ours={ours:#010x}, reference={expected:#010x}, spec={spec}, len={}",
      data.len()
    );
  }
}

fn check_against_crc_crate(data: &[u8]) {
  let registry = AlgorithmRegistry::builtin();
  let oracles: [(&str, u32); 8] = [
    ("CRC8-1WIRE", u32::from(crc::Crc::<u8>::new(&crc::CRC_8_MAXIM_DOW).checksum(data))),
    ("CRC8-AUTOSAR", u32::from(crc::Crc::<u8>::new(&crc::CRC_8_AUTOSAR).checksum(data))),
    ("CRC8-J1850", u32::from(crc::Crc::<u8>::new(&crc::CRC_8_SAE_J1850).checksum(data))),
    ("CRC16-ANSI", u32::from(crc::Crc::<u16>::new(&crc::CRC_16_MODBUS).checksum(data))),
    ("CRC16-CCITT", u32::from(crc::Crc::<u16>::new(&crc::CRC_16_IBM_3740).checksum(data))),
    ("CRC16-XMODEM", u32::from(crc::Crc::<u16>::new(&crc::CRC_16_XMODEM).checksum(data))),
    ("CRC32", crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(data)),
    ("CRC32-POSIX", crc::Crc::<u32>::new(&crc::CRC_32_CKSUM).checksum(data)),
  ];

  for (name, expected) in oracles {
    let Ok(spec) = registry.get(name) else {
      panic!("{name} missing from catalog");
    };
    let ours = AnyEngine::new(EngineKind::Nibble, *spec).compute(data);
    assert_eq!(ours, expected, "{name} differs from crc crate, len={}", data.len());
  }
}
