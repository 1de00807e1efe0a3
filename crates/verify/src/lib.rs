//! Library half of `crc-verify`.
//!
//! The binary is a thin shell over these modules so the command logic can be
//! driven from tests with in-memory sinks.

pub mod bench;
pub mod cli;
pub mod commands;
pub mod logging;
