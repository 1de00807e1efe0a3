//! Catalog of well-known CRC variants.
//!
//! # Variants
//!
//! | Name | Width | Reflected | Polynomial | Init | XorOut | Check |
//! |------|-------|-----------|------------|------|--------|-------|
//! | CRC8-1WIRE | 8 | yes | 0x8C | 0x00 | 0x00 | 0xA1 |
//! | CRC8-AUTOSAR | 8 | no | 0x2F | 0xFF | 0xFF | 0xDF |
//! | CRC8-J1850 | 8 | no | 0x1D | 0xFF | 0xFF | 0x4B |
//! | CRC16-ANSI | 16 | yes | 0xA001 | 0xFFFF | 0x0000 | 0x4B37 |
//! | CRC16-CCITT | 16 | no | 0x1021 | 0xFFFF | 0x0000 | 0x29B1 |
//! | CRC16-XMODEM | 16 | no | 0x1021 | 0x0000 | 0x0000 | 0x31C3 |
//! | CRC32 | 32 | yes | 0xEDB88320 | 0xFFFFFFFF | 0xFFFFFFFF | 0xCBF43926 |
//! | CRC32-POSIX | 32 | no | 0x04C11DB7 | 0x00000000 | 0xFFFFFFFF | 0x765E7680 |
//!
//! Polynomials are listed in the bit order the engine consumes them
//! (bit-reversed for reflected variants). "Check" is the CRC of the ASCII
//! string `123456789`.
//!
//! # Example
//!
//! ```
//! use checksum::{AlgorithmRegistry, BitwiseEngine, Engine};
//!
//! let registry = AlgorithmRegistry::builtin();
//! let spec = registry.get("CRC16-XMODEM")?;
//! assert_eq!(BitwiseEngine::new(*spec).compute(b"123456789"), 0x31C3);
//!
//! assert!(registry.get("CRC16-KERMIT").is_err());
//! # Ok::<(), checksum::UnknownAlgorithm>(())
//! ```

use crate::{error::UnknownAlgorithm, spec::AlgorithmSpec};

/// A named catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Algorithm {
  name: &'static str,
  aliases: &'static [&'static str],
  spec: AlgorithmSpec,
  check: u32,
}

impl Algorithm {
  /// Create a catalog entry.
  ///
  /// `check` is the expected CRC of `b"123456789"`.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, aliases: &'static [&'static str], spec: AlgorithmSpec, check: u32) -> Self {
    Self {
      name,
      aliases,
      spec,
      check,
    }
  }

  /// Canonical name.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Alternative names this entry answers to.
  #[inline]
  #[must_use]
  pub const fn aliases(&self) -> &'static [&'static str] {
    self.aliases
  }

  /// Parameters.
  #[inline]
  #[must_use]
  pub const fn spec(&self) -> &AlgorithmSpec {
    &self.spec
  }

  /// CRC of the ASCII string `123456789`.
  #[inline]
  #[must_use]
  pub const fn check(&self) -> u32 {
    self.check
  }

  /// Whether `query` names this entry (ASCII case-insensitive, aliases included).
  #[must_use]
  pub fn answers_to(&self, query: &str) -> bool {
    self.name.eq_ignore_ascii_case(query) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(query))
  }
}

/// Build a catalog spec, failing the build if the parameters are invalid.
const fn catalog_spec(width: u8, polynomial: u32, init: u32, reflected: bool, xorout: u32) -> AlgorithmSpec {
  match AlgorithmSpec::new(width, polynomial, init, reflected, xorout) {
    Ok(spec) => spec,
    Err(_) => panic!("invalid catalog CRC parameters"),
  }
}

/// CRC8-1WIRE (aka Dallas, Maxim, iButton). x^8 + x^5 + x^4 + 1.
pub const CRC8_1WIRE: AlgorithmSpec = catalog_spec(8, 0x8C, 0x00, true, 0x00);

/// CRC8-AUTOSAR. x^8 + x^5 + x^3 + x^2 + x + 1.
pub const CRC8_AUTOSAR: AlgorithmSpec = catalog_spec(8, 0x2F, 0xFF, false, 0xFF);

/// CRC8-J1850 (SAE J1850). x^8 + x^4 + x^3 + x^2 + 1.
pub const CRC8_J1850: AlgorithmSpec = catalog_spec(8, 0x1D, 0xFF, false, 0xFF);

/// CRC16-ANSI (aka Modbus, USB). x^16 + x^15 + x^2 + 1.
pub const CRC16_ANSI: AlgorithmSpec = catalog_spec(16, 0xA001, 0xFFFF, true, 0x0000);

/// CRC16-CCITT (aka CCITT-FALSE, IBM-3740). x^16 + x^12 + x^5 + 1.
pub const CRC16_CCITT: AlgorithmSpec = catalog_spec(16, 0x1021, 0xFFFF, false, 0x0000);

/// CRC16-XMODEM. Same register transform as CRC16-CCITT, zero initial value.
pub const CRC16_XMODEM: AlgorithmSpec = catalog_spec(16, 0x1021, 0x0000, false, 0x0000);

/// CRC32 (aka Ethernet, GZIP, PKZIP, PNG, ZMODEM).
pub const CRC32: AlgorithmSpec = catalog_spec(32, 0xEDB8_8320, 0xFFFF_FFFF, true, 0xFFFF_FFFF);

/// CRC32-POSIX (aka `cksum`, without the length suffix).
pub const CRC32_POSIX: AlgorithmSpec = catalog_spec(32, 0x04C1_1DB7, 0x0000_0000, false, 0xFFFF_FFFF);

/// Every built-in variant, in presentation order.
pub const CATALOG: [Algorithm; 8] = [
  Algorithm::new("CRC8-1WIRE", &["CRC8-MAXIM", "CRC8-DALLAS", "CRC8-IBUTTON"], CRC8_1WIRE, 0xA1),
  Algorithm::new("CRC8-AUTOSAR", &[], CRC8_AUTOSAR, 0xDF),
  Algorithm::new("CRC8-J1850", &["CRC8-SAE-J1850"], CRC8_J1850, 0x4B),
  Algorithm::new("CRC16-ANSI", &["CRC16-MODBUS"], CRC16_ANSI, 0x4B37),
  Algorithm::new("CRC16-CCITT", &["CRC16-CCITT-FALSE", "CRC16-IBM-3740"], CRC16_CCITT, 0x29B1),
  Algorithm::new("CRC16-XMODEM", &["CRC16-ZMODEM", "CRC16-ACORN"], CRC16_XMODEM, 0x31C3),
  Algorithm::new("CRC32", &["CRC32-ISO-HDLC", "CRC32-IEEE"], CRC32, 0xCBF4_3926),
  Algorithm::new("CRC32-POSIX", &["CRC32-CKSUM"], CRC32_POSIX, 0x765E_7680),
];

static BUILTIN: [Algorithm; 8] = CATALOG;

/// Read-only lookup over a catalog of named variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmRegistry {
  entries: &'static [Algorithm],
}

impl AlgorithmRegistry {
  /// The built-in catalog.
  #[inline]
  #[must_use]
  pub const fn builtin() -> Self {
    Self { entries: &BUILTIN }
  }

  /// A registry over a caller-supplied catalog.
  #[inline]
  #[must_use]
  pub const fn with_entries(entries: &'static [Algorithm]) -> Self {
    Self { entries }
  }

  /// Look up a variant's parameters by name or alias.
  ///
  /// # Errors
  ///
  /// [`UnknownAlgorithm`] if nothing in the catalog answers to `name`.
  #[inline]
  pub fn get(&self, name: &str) -> Result<&'static AlgorithmSpec, UnknownAlgorithm> {
    self.lookup(name).map(Algorithm::spec)
  }

  /// Look up a full catalog entry by name or alias.
  ///
  /// # Errors
  ///
  /// [`UnknownAlgorithm`] if nothing in the catalog answers to `name`.
  pub fn lookup(&self, name: &str) -> Result<&'static Algorithm, UnknownAlgorithm> {
    let entries: &'static [Algorithm] = self.entries;
    entries
      .iter()
      .find(|algorithm| algorithm.answers_to(name))
      .ok_or(UnknownAlgorithm::new(entries))
  }

  /// Catalog entries in presentation order.
  #[inline]
  pub fn iter(&self) -> core::slice::Iter<'static, Algorithm> {
    self.entries.iter()
  }

  /// Canonical names in presentation order.
  #[inline]
  pub fn names(&self) -> impl Iterator<Item = &'static str> + 'static {
    self.entries.iter().map(Algorithm::name)
  }

  /// Number of entries.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the catalog is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for AlgorithmRegistry {
  #[inline]
  fn default() -> Self {
    Self::builtin()
  }
}

impl IntoIterator for AlgorithmRegistry {
  type Item = &'static Algorithm;
  type IntoIter = core::slice::Iter<'static, Algorithm>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Every catalog check value must reproduce through the reference engine. If one
// does not, the build fails.
#[allow(clippy::indexing_slicing)]
const _: () = {
  let mut i = 0;
  while i < CATALOG.len() {
    let algorithm = &CATALOG[i];
    let raw = crate::reference::update_slice(&algorithm.spec, algorithm.spec.init(), crate::vectors::CHECK_INPUT);
    assert!(algorithm.spec.finalize(raw) == algorithm.check);
    i += 1;
  }
};

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Width;

  const NAMES: [&str; 8] = [
    "CRC8-1WIRE",
    "CRC8-AUTOSAR",
    "CRC8-J1850",
    "CRC16-ANSI",
    "CRC16-CCITT",
    "CRC16-XMODEM",
    "CRC32",
    "CRC32-POSIX",
  ];

  #[test]
  fn every_listed_name_resolves() {
    let registry = AlgorithmRegistry::builtin();
    for name in NAMES {
      let algorithm = registry.lookup(name).unwrap();
      assert_eq!(algorithm.name(), name);
    }
    assert!(registry.names().eq(NAMES));
  }

  #[test]
  fn unregistered_names_fail() {
    let registry = AlgorithmRegistry::builtin();
    for name in ["", "CRC", "CRC16", "CRC64-XZ", "CRC32C", " CRC32", "CRC32 "] {
      assert!(registry.get(name).is_err(), "{name:?} should not resolve");
    }
  }

  #[test]
  fn lookup_ignores_ascii_case_and_accepts_aliases() {
    let registry = AlgorithmRegistry::builtin();
    assert_eq!(registry.get("crc16-ccitt").unwrap(), &CRC16_CCITT);
    assert_eq!(registry.get("CRC16-MODBUS").unwrap(), &CRC16_ANSI);
    assert_eq!(registry.get("crc32-cksum").unwrap(), &CRC32_POSIX);
    assert_eq!(registry.get("CRC8-Maxim").unwrap(), &CRC8_1WIRE);
  }

  #[test]
  fn names_and_aliases_are_unique() {
    let registry = AlgorithmRegistry::builtin();
    for a in registry {
      for b in registry {
        if core::ptr::eq(a, b) {
          continue;
        }
        assert!(!b.answers_to(a.name()), "{} shadowed by {}", a.name(), b.name());
        for alias in a.aliases() {
          assert!(!b.answers_to(alias), "alias {alias} of {} shadowed by {}", a.name(), b.name());
        }
      }
    }
  }

  #[test]
  fn xmodem_differs_from_ccitt_only_in_init() {
    assert_eq!(CRC16_XMODEM.width(), CRC16_CCITT.width());
    assert_eq!(CRC16_XMODEM.polynomial(), CRC16_CCITT.polynomial());
    assert_eq!(CRC16_XMODEM.reflected(), CRC16_CCITT.reflected());
    assert_eq!(CRC16_XMODEM.xorout(), CRC16_CCITT.xorout());
    assert_ne!(CRC16_XMODEM.init(), CRC16_CCITT.init());
    assert_ne!(CRC16_XMODEM, CRC16_CCITT);
  }

  #[test]
  fn catalog_widths() {
    let widths: [Width; 8] = core::array::from_fn(|i| CATALOG[i].spec().width());
    assert_eq!(
      widths,
      [
        Width::W8,
        Width::W8,
        Width::W8,
        Width::W16,
        Width::W16,
        Width::W16,
        Width::W32,
        Width::W32
      ]
    );
  }

  #[test]
  fn custom_catalog() {
    static KERMIT: [Algorithm; 1] = [Algorithm::new(
      "CRC16-KERMIT",
      &[],
      catalog_spec(16, 0x8408, 0x0000, true, 0x0000),
      0x2189,
    )];
    let registry = AlgorithmRegistry::with_entries(&KERMIT);
    assert_eq!(registry.len(), 1);
    assert!(registry.get("CRC16-KERMIT").is_ok());
    let err = registry.get("CRC32").unwrap_err();
    assert!(err.available().eq(["CRC16-KERMIT"]));
  }
}
