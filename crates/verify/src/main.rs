//! Cross-engine CRC verification and benchmarking.
//!
//! Usage:
//!   cargo run --release -p crc-verify
//!   cargo run --release -p crc-verify -- verify --output report.txt
//!   cargo run --release -p crc-verify -- bench -n 100000 -a CRC32
//!   cargo run --release -p crc-verify -- compute -a CRC16-MODBUS --hex "01 32 F0"

use std::{
  fs::File,
  io::{self, BufWriter, Write},
  process::ExitCode,
};

use anyhow::{Context, Result};
use checksum::{AlgorithmRegistry, vectors::VECTORS};
use clap::Parser;
use crc_verify::{
  cli::{Cli, Command},
  commands, logging,
};

/// Exit status for usage and I/O errors, distinct from a verification failure.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
  let cli = Cli::parse();

  if let Err(e) = logging::init(cli.verbose) {
    eprintln!("warning: {e:#}");
  }

  match run(&cli) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(e) => {
      tracing::error!("{e:#}");
      eprintln!("error: {e:#}");
      ExitCode::from(EXIT_ERROR)
    }
  }
}

/// Returns whether every verified vector passed.
fn run(cli: &Cli) -> Result<bool> {
  let registry = AlgorithmRegistry::builtin();
  let stdout = io::stdout();

  match cli.command_or_default() {
    Command::Verify(args) => {
      let summary = match &args.output {
        Some(path) => {
          let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
          let mut out = BufWriter::new(file);
          let summary = commands::verify(&registry, VECTORS, &mut out)?;
          out.flush().with_context(|| format!("failed to write {}", path.display()))?;
          summary
        }
        None => commands::verify(&registry, VECTORS, &mut stdout.lock())?,
      };
      Ok(summary.all_passed())
    }
    Command::Bench(args) => {
      commands::bench(&registry, &args, &mut stdout.lock())?;
      Ok(true)
    }
    Command::List => {
      commands::list(&registry, &mut stdout.lock())?;
      Ok(true)
    }
    Command::Compute(args) => {
      commands::compute(&registry, &args, io::stdin().lock(), &mut stdout.lock())?;
      Ok(true)
    }
    Command::Run(args) => {
      let mut out = stdout.lock();
      let summary = commands::verify(&registry, VECTORS, &mut out)?;
      commands::bench(&registry, &args, &mut out)?;
      Ok(summary.all_passed())
    }
  }
}
