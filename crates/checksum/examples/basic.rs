//! Basic checksum usage: registry lookup, one-shot, streaming and custom specs.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{AlgorithmRegistry, AlgorithmSpec, BitwiseEngine, Digest, Engine, NibbleTableEngine, ReferenceEngine};

fn main() -> Result<(), checksum::Error> {
  println!("=== Checksum Basic Examples ===\n");

  catalog_examples();
  streaming_examples()?;
  custom_spec_example()?;
  Ok(())
}

/// One-shot computation over every catalog variant, with all three engines.
fn catalog_examples() {
  println!("--- Catalog Check Values ---\n");

  let data = b"123456789";

  for algorithm in AlgorithmRegistry::builtin() {
    let spec = *algorithm.spec();
    let digits = spec.width().hex_digits();

    let bitwise = BitwiseEngine::new(spec).compute(data);
    let nibble = NibbleTableEngine::new(spec).compute(data);
    let reference = ReferenceEngine::new(spec).compute(data);

    println!("{:<14} 0x{bitwise:0digits$X}", algorithm.name());
    assert_eq!(bitwise, algorithm.check());
    assert_eq!(nibble, bitwise);
    assert_eq!(reference, bitwise);
  }

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() -> Result<(), checksum::Error> {
  println!("--- Streaming Computation ---\n");

  let engine = NibbleTableEngine::by_name("CRC32")?;

  // Process in chunks - result matches one-shot
  let mut digest = Digest::new(&engine);
  digest.update(b"1234");
  digest.update(b"56789");
  let crc = digest.finalize();
  println!("Streaming CRC32: 0x{crc:08X}");
  assert_eq!(crc, engine.compute(b"123456789"));

  // finalize() is non-consuming: can continue after
  digest.update(b"...");
  println!("Extended CRC32:  0x{:08X}", digest.finalize());

  // Resume from a saved checksum
  let part1 = b"first part of data";
  let part2 = b" and the second part";
  let saved = Digest::new(&engine).chain(part1).finalize();
  let resumed = Digest::resume(&engine, saved).chain(part2).finalize();
  println!("Resumed CRC32:   0x{resumed:08X}");
  assert_eq!(resumed, Digest::new(&engine).chain(part1).chain(part2).finalize());

  println!();
  Ok(())
}

/// Build a variant that is not in the catalog.
fn custom_spec_example() -> Result<(), checksum::Error> {
  println!("--- Custom Spec ---\n");

  // CRC-16/KERMIT: reflected 0x1021, init 0, no final XOR.
  let kermit = AlgorithmSpec::new(16, checksum::reflect_bits(0x1021, checksum::Width::W16), 0, true, 0)?;
  let crc = NibbleTableEngine::new(kermit).compute(b"123456789");
  println!("{kermit}");
  println!("CRC-16/KERMIT:   0x{crc:04X}");
  assert_eq!(crc, 0x2189);

  // Parameters wider than the register are rejected.
  match AlgorithmSpec::new(8, 0x107, 0, false, 0) {
    Ok(_) => unreachable!("0x107 does not fit in 8 bits"),
    Err(err) => println!("Rejected:        {err}"),
  }

  println!();
  Ok(())
}
