//! Parameterized CRC-8/16/32 engines.
//!
//! Every supported variant is described by an [`AlgorithmSpec`]: width,
//! polynomial, initial value, reflection and output mask. Three independent
//! engines consume the same spec and must agree byte for byte:
//!
//! | Engine | Per byte | Storage | Role |
//! |--------|----------|---------|------|
//! | [`BitwiseEngine`] | 8 branchless bit steps | none | Production, smallest footprint |
//! | [`NibbleTableEngine`] | 2 table lookups | 16 × `u32` | Production, fastest |
//! | [`ReferenceEngine`] | 8 branchy bit steps | none | Test oracle |
//!
//! # Supported Algorithms
//!
//! | Name | Width | Polynomial (normal) | Use Cases |
//! |------|-------|---------------------|-----------|
//! | CRC8-1WIRE | 8 | 0x31 | Dallas/Maxim 1-Wire ROM codes |
//! | CRC8-AUTOSAR | 8 | 0x2F | AUTOSAR E2E profiles |
//! | CRC8-J1850 | 8 | 0x1D | SAE J1850, automotive OBD |
//! | CRC16-ANSI | 16 | 0x8005 | Modbus RTU |
//! | CRC16-CCITT | 16 | 0x1021 | HDLC-style framing, IBM 3740 |
//! | CRC16-XMODEM | 16 | 0x1021 | XMODEM/ZMODEM transfers |
//! | CRC32 | 32 | 0x04C11DB7 | Ethernet, gzip, zip, PNG |
//! | CRC32-POSIX | 32 | 0x04C11DB7 | POSIX `cksum` |
//!
//! # Example
//!
//! ```rust
//! use checksum::{AlgorithmRegistry, Digest, Engine, NibbleTableEngine};
//!
//! let spec = AlgorithmRegistry::builtin().get("CRC32")?;
//! let engine = NibbleTableEngine::new(*spec);
//!
//! // One-shot computation
//! let crc = engine.compute(b"123456789");
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut digest = Digest::new(&engine);
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), crc);
//! # Ok::<(), checksum::Error>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod bitwise;
mod digest;
mod engine;
mod error;
#[cfg(feature = "std")]
pub mod io;
pub mod nibble;
pub mod reference;
pub mod registry;
mod spec;
pub mod vectors;
pub mod verify;

pub use bitwise::BitwiseEngine;
pub use digest::Digest;
pub use engine::{AnyEngine, Engine, EngineKind, ParseEngineKindError, compute, finalize, init, update, update_many};
pub use error::{Error, InvalidSpec, Parameter, UnknownAlgorithm};
pub use nibble::NibbleTableEngine;
pub use reference::ReferenceEngine;
pub use registry::{Algorithm, AlgorithmRegistry};
pub use spec::{AlgorithmSpec, Width, reflect_bits};
