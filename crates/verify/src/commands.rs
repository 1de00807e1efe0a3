//! Subcommand implementations.
//!
//! Each command writes its human-readable output to a caller-supplied sink and
//! emits structured events through `tracing`.

use std::{
  fs::File,
  io::{self, BufReader, Read, Write},
  path::Path,
};

use anyhow::{Context, Result, bail};
use checksum::{
  Algorithm, AlgorithmRegistry, AnyEngine, Engine,
  io::ChecksumReader,
  vectors::TestVector,
  verify::{self, Summary},
};

use crate::{
  bench::{self, BenchResult},
  cli::{BenchArgs, ComputeArgs},
};

/// Run every vector through every engine, writing one report per vector.
///
/// Mismatches are counted in the returned [`Summary`], not raised as errors.
pub fn verify<W: Write + ?Sized>(registry: &AlgorithmRegistry, vectors: &[TestVector], out: &mut W) -> Result<Summary> {
  writeln!(out, "verify()")?;

  let mut summary = Summary::default();
  for report in verify::run(registry, vectors) {
    let report = report.with_context(|| "test vector names an algorithm outside the registry")?;
    write!(out, "{report}")?;

    for outcome in report.outcomes() {
      tracing::debug!(
        algorithm = report.algorithm().name(),
        engine = outcome.engine.name(),
        bytes = report.data().len(),
        computed = outcome.computed,
        passed = outcome.passed,
        "checked"
      );
    }
    if !report.passed() {
      tracing::warn!(
        algorithm = report.algorithm().name(),
        expected = report.expected(),
        engines_agree = report.engines_agree(),
        "vector failed"
      );
    }
    summary.record(&report);
  }

  writeln!(out, "{summary}")?;
  tracing::info!(passed = summary.passed, failed = summary.failed, "verification complete");
  Ok(summary)
}

/// Resolve `names` against `registry`, or the whole catalog when empty.
pub fn select(registry: &AlgorithmRegistry, names: &[String]) -> Result<Vec<&'static Algorithm>> {
  if names.is_empty() {
    return Ok(registry.iter().collect());
  }
  names
    .iter()
    .map(|name| registry.lookup(name).with_context(|| format!("algorithm {name:?}")))
    .collect()
}

/// Time single-byte updates for the selected algorithms.
pub fn bench<W: Write + ?Sized>(registry: &AlgorithmRegistry, args: &BenchArgs, out: &mut W) -> Result<Vec<BenchResult>> {
  let algorithms = select(registry, &args.algorithms)?;
  tracing::info!(
    algorithms = algorithms.len(),
    iterations = args.iterations,
    byte = args.byte,
    "benchmarking"
  );

  writeln!(out, "benchmark()")?;
  writeln!(out, "  {} x 0x{:02X}", args.iterations, args.byte)?;

  let mut results = Vec::with_capacity(algorithms.len() * checksum::EngineKind::ALL.len());
  for result in bench::run(algorithms, args.iterations, args.byte) {
    writeln!(out, "{result}")?;
    results.push(result);
  }
  Ok(results)
}

/// Print the catalog as a table.
pub fn list<W: Write + ?Sized>(registry: &AlgorithmRegistry, out: &mut W) -> Result<()> {
  writeln!(
    out,
    "{:<14} {:>5} {:>9} {:>10} {:>10} {:>10} {:>10}  aliases",
    "name", "width", "reflected", "poly", "init", "xorout", "check"
  )?;
  for algorithm in registry.iter() {
    let spec = algorithm.spec();
    let digits = spec.width().hex_digits();
    writeln!(
      out,
      "{:<14} {:>5} {:>9} {:>10} {:>10} {:>10} {:>10}  {}",
      algorithm.name(),
      spec.width().bits(),
      spec.reflected(),
      format!("0x{:0digits$X}", spec.polynomial()),
      format!("0x{:0digits$X}", spec.init()),
      format!("0x{:0digits$X}", spec.xorout()),
      format!("0x{:0digits$X}", algorithm.check()),
      algorithm.aliases().join(", "),
    )?;
  }
  Ok(())
}

/// Checksum `--hex` input, a file, or `stdin`, and print the result.
pub fn compute<R: Read, W: Write + ?Sized>(
  registry: &AlgorithmRegistry,
  args: &ComputeArgs,
  stdin: R,
  out: &mut W,
) -> Result<u32> {
  let algorithm = registry
    .lookup(&args.algorithm)
    .with_context(|| format!("algorithm {:?}", args.algorithm))?;
  let engine = AnyEngine::new(args.engine, *algorithm.spec());

  let (crc, bytes) = match (&args.hex, &args.file) {
    (Some(hex), _) => {
      let data = parse_hex(hex)?;
      (engine.compute(&data), data.len() as u64)
    }
    (None, Some(path)) if path != Path::new("-") => {
      let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
      checksum_reader(BufReader::new(file), &engine).with_context(|| format!("failed to read {}", path.display()))?
    }
    (None, _) => checksum_reader(stdin, &engine).context("failed to read stdin")?,
  };

  tracing::info!(
    algorithm = algorithm.name(),
    engine = args.engine.name(),
    bytes,
    crc,
    "computed"
  );

  let digits = algorithm.spec().width().hex_digits();
  writeln!(out, "0x{crc:0digits$X}")?;
  Ok(crc)
}

/// Drain `reader` through a [`ChecksumReader`], returning the CRC and byte count.
fn checksum_reader<R: Read>(reader: R, engine: &AnyEngine) -> io::Result<(u32, u64)> {
  let mut reader = ChecksumReader::new(reader, engine);
  let bytes = io::copy(&mut reader, &mut io::sink())?;
  Ok((reader.crc(), bytes))
}

/// Parse hex bytes, ignoring whitespace, commas and `0x` prefixes.
///
/// Accepts `"01 32 F0"`, `"0132f0"` and `"0x01, 0x32, 0xF0"`.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
  let mut digits = Vec::with_capacity(input.len());
  for token in input.split(|c: char| c.is_ascii_whitespace() || c == ',') {
    let token = token
      .strip_prefix("0x")
      .or_else(|| token.strip_prefix("0X"))
      .unwrap_or(token);
    if let Some(bad) = token.chars().find(|c| !c.is_ascii_hexdigit()) {
      bail!("invalid hex digit {bad:?} in {input:?}");
    }
    if token.len() % 2 != 0 {
      bail!("odd number of hex digits in {token:?}");
    }
    digits.extend_from_slice(token.as_bytes());
  }

  digits
    .chunks_exact(2)
    .map(|pair| {
      let pair = std::str::from_utf8(pair).context("hex digits are ASCII")?;
      u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex byte {pair:?}"))
    })
    .collect()
}
