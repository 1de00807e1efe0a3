//! Fuzz target for streaming and resume.
//!
//! Tests that arbitrary chunkings and resume points produce the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{AlgorithmRegistry, AnyEngine, Digest, Engine, EngineKind};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  algorithm: u8,
  engine: u8,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Chunk index after which the digest is finalized and resumed
  resume_at: usize,
}

fuzz_target!(|input: Input| {
  let registry = AlgorithmRegistry::builtin();
  let Some(algorithm) = registry.iter().nth(usize::from(input.algorithm) % registry.len()) else {
    return;
  };
  let kind = EngineKind::ALL[usize::from(input.engine) % EngineKind::ALL.len()];
  let engine = AnyEngine::new(kind, *algorithm.spec());

  let data = &input.data;
  let expected = engine.compute(data);

  let mut digest = Digest::new(&engine);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    digest.update(&data[offset..end]);
    offset = end;

    if chunk_idx == input.resume_at {
      digest = Digest::resume(&engine, digest.finalize());
    }
    chunk_idx += 1;
  }

  assert_eq!(
    digest.finalize(),
    expected,
    "{} {kind} streaming mismatch, len={}",
    algorithm.name(),
    data.len()
  );
});
