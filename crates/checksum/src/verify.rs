//! Cross-engine verification against known vectors.
//!
//! [`check`] runs every [`EngineKind`] over one [`TestVector`] and records
//! what each computed. A mismatch is a result, not an error. The only error
//! is a vector naming an algorithm the registry does not know.
//!
//! Reports render as indented text:
//!
//! ```text
//!   CRC16-ANSI:
//!     data = 01 32 F0 21 97 68 22 3E (8 bytes)
//!     expected = 0x2B0E
//!     reference = 0x2B0E - PASS
//!     bitwise = 0x2B0E - PASS
//!     nibble = 0x2B0E - PASS
//! ```

use core::fmt;

use crate::{
  engine::{AnyEngine, Engine, EngineKind},
  error::UnknownAlgorithm,
  registry::{Algorithm, AlgorithmRegistry},
  vectors::TestVector,
};

/// What one engine produced for a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOutcome {
  /// Engine that ran.
  pub engine: EngineKind,
  /// Finalized checksum it computed.
  pub computed: u32,
  /// Whether `computed` matched the expected value.
  pub passed: bool,
}

/// Per-engine results for one vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorReport {
  algorithm: &'static Algorithm,
  data: &'static [u8],
  expected: u32,
  outcomes: [EngineOutcome; 3],
}

impl VectorReport {
  /// The catalog entry the vector was resolved to.
  #[must_use]
  pub const fn algorithm(&self) -> &'static Algorithm {
    self.algorithm
  }

  /// Input bytes.
  #[must_use]
  pub const fn data(&self) -> &'static [u8] {
    self.data
  }

  /// Expected checksum.
  #[must_use]
  pub const fn expected(&self) -> u32 {
    self.expected
  }

  /// Outcomes in [`EngineKind::ALL`] order.
  #[must_use]
  pub const fn outcomes(&self) -> &[EngineOutcome; 3] {
    &self.outcomes
  }

  /// Whether every engine produced the expected value.
  #[must_use]
  pub fn passed(&self) -> bool {
    self.outcomes.iter().all(|o| o.passed)
  }

  /// Whether every engine produced the same value, right or wrong.
  #[must_use]
  pub fn engines_agree(&self) -> bool {
    let [a, b, c] = self.outcomes.map(|o| o.computed);
    a == b && b == c
  }

  /// Render the report to `out`.
  ///
  /// # Errors
  ///
  /// Whatever `out` returns.
  pub fn write_to<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
    let digits = self.algorithm.spec().width().hex_digits();

    writeln!(out, "  {}:", self.algorithm.name())?;
    writeln!(out, "    data = {} ({} bytes)", HexBytes(self.data), self.data.len())?;
    writeln!(out, "    expected = 0x{:0digits$X}", self.expected)?;
    for outcome in &self.outcomes {
      writeln!(
        out,
        "    {} = 0x{:0digits$X} - {}",
        outcome.engine,
        outcome.computed,
        if outcome.passed { "PASS" } else { "FAIL" },
      )?;
    }
    Ok(())
  }
}

impl fmt::Display for VectorReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.write_to(f)
  }
}

/// Space-separated upper-case hex, e.g. `01 32 F0`.
#[derive(Clone, Copy, Debug)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, byte) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str(" ")?;
      }
      write!(f, "{byte:02X}")?;
    }
    Ok(())
  }
}

/// Run every engine over `vector`.
///
/// # Errors
///
/// [`UnknownAlgorithm`] if `vector.algorithm` is not in `registry`.
pub fn check(registry: &AlgorithmRegistry, vector: &TestVector) -> Result<VectorReport, UnknownAlgorithm> {
  let algorithm = registry.lookup(vector.algorithm)?;
  let outcomes = EngineKind::ALL.map(|kind| {
    let engine = AnyEngine::new(kind, *algorithm.spec());
    let computed = engine.compute(vector.data);
    EngineOutcome {
      engine: kind,
      computed,
      passed: computed == vector.expected,
    }
  });

  Ok(VectorReport {
    algorithm,
    data: vector.data,
    expected: vector.expected,
    outcomes,
  })
}

/// Lazily [`check`] each of `vectors` in order.
pub fn run<'a>(
  registry: &'a AlgorithmRegistry,
  vectors: &'a [TestVector],
) -> impl Iterator<Item = Result<VectorReport, UnknownAlgorithm>> + 'a {
  vectors.iter().map(move |vector| check(registry, vector))
}

/// Pass/fail tally over a verification run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
  /// Vectors whose every engine matched.
  pub passed: usize,
  /// Vectors with at least one mismatching engine.
  pub failed: usize,
}

impl Summary {
  /// Count `report`.
  pub fn record(&mut self, report: &VectorReport) {
    if report.passed() {
      self.passed += 1;
    } else {
      self.failed += 1;
    }
  }

  /// Number of vectors seen.
  #[must_use]
  pub const fn total(&self) -> usize {
    self.passed + self.failed
  }

  /// Whether nothing failed.
  #[must_use]
  pub const fn all_passed(&self) -> bool {
    self.failed == 0
  }
}

impl fmt::Display for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} vectors: {} passed, {} failed", self.total(), self.passed, self.failed)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{
    string::{String, ToString},
    vec::Vec,
  };

  use super::*;
  use crate::vectors::{TEST_DATA_A, VECTORS};

  #[test]
  fn all_builtin_vectors_pass() {
    let registry = AlgorithmRegistry::builtin();
    for result in run(&registry, VECTORS) {
      let report = result.unwrap();
      assert!(report.passed(), "{report}");
      assert!(report.engines_agree());
    }
  }

  #[test]
  fn layout() {
    let registry = AlgorithmRegistry::builtin();
    let vector = TestVector {
      algorithm: "CRC16-ANSI",
      data: TEST_DATA_A,
      expected: 0x2B0E,
    };
    let report = check(&registry, &vector).unwrap();
    assert_eq!(
      report.to_string(),
      "  CRC16-ANSI:\n\
       \x20   data = 01 32 F0 21 97 68 22 3E (8 bytes)\n\
       \x20   expected = 0x2B0E\n\
       \x20   reference = 0x2B0E - PASS\n\
       \x20   bitwise = 0x2B0E - PASS\n\
       \x20   nibble = 0x2B0E - PASS\n"
    );
  }

  #[test]
  fn mismatch_is_reported_not_raised() {
    let registry = AlgorithmRegistry::builtin();
    let vector = TestVector {
      algorithm: "CRC8-1WIRE",
      data: TEST_DATA_A,
      expected: 0x7D,
    };
    let report = check(&registry, &vector).unwrap();
    assert!(!report.passed());
    assert!(report.engines_agree());
    assert!(report.to_string().contains("    nibble = 0x7C - FAIL\n"));
  }

  #[test]
  fn unknown_algorithm_is_an_error() {
    let registry = AlgorithmRegistry::builtin();
    let vector = TestVector {
      algorithm: "CRC64-XZ",
      data: b"",
      expected: 0,
    };
    let err = check(&registry, &vector).unwrap_err();
    assert_eq!(err.available().count(), registry.len());

    let vectors = [VECTORS[0], vector];
    let results: Vec<_> = run(&registry, &vectors).collect();
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
  }

  #[test]
  fn summary_tallies() {
    let registry = AlgorithmRegistry::builtin();
    let mut vectors = VECTORS.to_vec();
    vectors[0].expected ^= 1;

    let mut out = String::new();
    let mut summary = Summary::default();
    for report in run(&registry, &vectors) {
      let report = report.unwrap();
      report.write_to(&mut out).unwrap();
      summary.record(&report);
    }
    assert_eq!(summary.total(), VECTORS.len());
    assert_eq!(summary.failed, 1);
    assert!(!summary.all_passed());
    assert_eq!(out.matches(" - FAIL").count(), 3);
    assert_eq!(summary.to_string(), "17 vectors: 16 passed, 1 failed");
  }

  #[test]
  fn hex_bytes() {
    assert_eq!(HexBytes(&[]).to_string(), "");
    assert_eq!(HexBytes(&[0x0A]).to_string(), "0A");
    assert_eq!(HexBytes(&[0xDE, 0xAD]).to_string(), "DE AD");
  }
}
