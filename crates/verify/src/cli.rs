//! Command-line definition.

use std::path::PathBuf;

use checksum::EngineKind;
use clap::{Args, Parser, Subcommand};

/// Cross-check the CRC engines against known vectors, time them, and checksum data.
#[derive(Debug, Parser)]
#[command(name = "crc-verify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
  /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Defaults to `run`.
  #[command(subcommand)]
  pub command: Option<Command>,
}

impl Cli {
  /// The selected subcommand, falling back to `run` with default settings.
  #[must_use]
  pub fn command_or_default(&self) -> Command {
    self.command.clone().unwrap_or_else(|| Command::Run(BenchArgs::default()))
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
  /// Run every test vector through every engine and report PASS/FAIL.
  Verify(VerifyArgs),

  /// Time single-byte updates for each engine.
  Bench(BenchArgs),

  /// List the algorithm catalog.
  List,

  /// Checksum hex input, a file, or stdin.
  Compute(ComputeArgs),

  /// Verify, then benchmark.
  Run(BenchArgs),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Args)]
pub struct VerifyArgs {
  /// Write the report here instead of stdout.
  #[arg(short, long)]
  pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub struct BenchArgs {
  /// Number of bytes fed to each engine.
  #[arg(short = 'n', long, default_value_t = 10_000, value_parser = clap::value_parser!(u32).range(1..))]
  pub iterations: u32,

  /// Byte value fed on every iteration (decimal or 0x-prefixed hex).
  #[arg(short, long, default_value = "0x55", value_parser = parse_byte)]
  pub byte: u8,

  /// Restrict to these algorithms (repeatable). Defaults to the whole catalog.
  #[arg(short, long = "algorithm", value_name = "NAME")]
  pub algorithms: Vec<String>,
}

impl Default for BenchArgs {
  fn default() -> Self {
    Self {
      iterations: 10_000,
      byte: 0x55,
      algorithms: Vec::new(),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Args)]
pub struct ComputeArgs {
  /// Algorithm name or alias, e.g. CRC32 or crc16-modbus.
  #[arg(short, long)]
  pub algorithm: String,

  /// Engine to compute with.
  #[arg(short, long, default_value_t = EngineKind::Nibble)]
  pub engine: EngineKind,

  /// Hex bytes to checksum, e.g. "01 32 F0" or "0132f0".
  #[arg(long, conflicts_with = "file")]
  pub hex: Option<String>,

  /// File to checksum. Reads stdin when omitted or `-`.
  pub file: Option<PathBuf>,
}

/// Parse `0x55`, `0X55` or `85`.
pub fn parse_byte(s: &str) -> Result<u8, String> {
  let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
    Some(hex) => u8::from_str_radix(hex, 16),
    None => s.parse(),
  };
  parsed.map_err(|e| format!("invalid byte {s:?}: {e}"))
}
