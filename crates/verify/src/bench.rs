//! Single-byte update timing.
//!
//! Each measurement seeds the register with the algorithm's initial value and
//! feeds the same byte `iterations` times through one engine, one `update`
//! call per byte.

use core::{fmt, hint::black_box, time::Duration};
use std::time::Instant;

use checksum::{Algorithm, AnyEngine, Engine, EngineKind};

/// Timing of one engine over one algorithm.
#[derive(Clone, Copy, Debug)]
pub struct BenchResult {
  /// Catalog entry measured.
  pub algorithm: &'static Algorithm,
  /// Engine measured.
  pub engine: EngineKind,
  /// Bytes fed.
  pub iterations: u32,
  /// Wall-clock time for the whole loop.
  pub elapsed: Duration,
  /// Final register, kept so the loop cannot be optimized away.
  pub state: u32,
}

impl BenchResult {
  /// Average nanoseconds per byte.
  #[must_use]
  pub fn ns_per_byte(&self) -> f64 {
    self.elapsed.as_secs_f64() * 1e9 / f64::from(self.iterations)
  }

  /// Elapsed nanoseconds, saturating at `u64::MAX`.
  #[must_use]
  pub fn elapsed_ns(&self) -> u64 {
    u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
  }

  /// Bytes per second, or infinity for a loop too short to measure.
  #[must_use]
  pub fn throughput(&self) -> f64 {
    let secs = self.elapsed.as_secs_f64();
    if secs == 0.0 {
      f64::INFINITY
    } else {
      f64::from(self.iterations) / secs
    }
  }
}

impl fmt::Display for BenchResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = self.algorithm.spec().width().hex_digits();
    write!(
      f,
      "  {:<14} {:<10} {:>10.3} ms {:>8.2} ns/byte  (0x{:0digits$X})",
      self.algorithm.name(),
      self.engine.name(),
      self.elapsed.as_secs_f64() * 1e3,
      self.ns_per_byte(),
      self.state,
    )
  }
}

/// Time `iterations` updates of `byte` through `kind` for `algorithm`.
#[must_use]
pub fn measure(algorithm: &'static Algorithm, kind: EngineKind, iterations: u32, byte: u8) -> BenchResult {
  let engine = AnyEngine::new(kind, *algorithm.spec());
  let mut state = engine.init();

  let start = Instant::now();
  for _ in 0..iterations {
    state = engine.update(black_box(state), black_box(byte));
  }
  let elapsed = start.elapsed();

  let result = BenchResult {
    algorithm,
    engine: kind,
    iterations,
    elapsed,
    state: black_box(state),
  };

  tracing::debug!(
    algorithm = algorithm.name(),
    engine = kind.name(),
    iterations,
    elapsed_ns = result.elapsed_ns(),
    "measured"
  );

  result
}

/// Measure every engine for each of `algorithms`, in engine report order.
pub fn run<'a>(
  algorithms: impl IntoIterator<Item = &'static Algorithm> + 'a,
  iterations: u32,
  byte: u8,
) -> impl Iterator<Item = BenchResult> + 'a {
  algorithms
    .into_iter()
    .flat_map(move |algorithm| EngineKind::ALL.map(|kind| measure(algorithm, kind, iterations, byte)))
}

#[cfg(test)]
mod tests {
  use checksum::{AlgorithmRegistry, Digest};

  use super::*;

  #[test]
  fn final_state_matches_repeated_input() {
    let registry = AlgorithmRegistry::builtin();
    for algorithm in registry {
      for kind in EngineKind::ALL {
        let result = measure(algorithm, kind, 100, 0x55);
        let engine = AnyEngine::new(kind, *algorithm.spec());
        let expected = Digest::new(&engine).chain(&[0x55; 100]).state();
        assert_eq!(result.state, expected, "{} {kind}", algorithm.name());
      }
    }
  }

  #[test]
  fn run_covers_every_engine() {
    let registry = AlgorithmRegistry::builtin();
    let results: Vec<_> = run(registry.iter(), 10, 0xAA).collect();
    assert_eq!(results.len(), registry.len() * EngineKind::ALL.len());
    for (result, kind) in results.iter().zip(EngineKind::ALL.iter().cycle()) {
      assert_eq!(result.engine, *kind);
      assert_eq!(result.iterations, 10);
    }
  }

  #[test]
  fn rates() {
    let registry = AlgorithmRegistry::builtin();
    let result = BenchResult {
      algorithm: registry.lookup("CRC32").unwrap(),
      engine: EngineKind::Nibble,
      iterations: 1000,
      elapsed: Duration::from_micros(2),
      state: 0,
    };
    assert!((result.ns_per_byte() - 2.0).abs() < 1e-9);
    assert!((result.throughput() - 5e8).abs() < 1.0);

    assert_eq!(result.elapsed_ns(), 2_000);

    let instant = BenchResult {
      elapsed: Duration::ZERO,
      ..result
    };
    assert!(instant.throughput().is_infinite());

    let forever = BenchResult {
      elapsed: Duration::MAX,
      ..result
    };
    assert_eq!(forever.elapsed_ns(), u64::MAX);
  }

  #[test]
  fn display_pads_state_to_width() {
    let registry = AlgorithmRegistry::builtin();
    let result = BenchResult {
      algorithm: registry.lookup("CRC8-1WIRE").unwrap(),
      engine: EngineKind::Bitwise,
      iterations: 1,
      elapsed: Duration::from_millis(1),
      state: 0x0A,
    };
    let line = result.to_string();
    assert!(line.starts_with("  CRC8-1WIRE"), "{line}");
    assert!(line.contains("bitwise"), "{line}");
    assert!(line.ends_with("(0x0A)"), "{line}");
  }
}
