//! CRC algorithm parameters.
//!
//! An [`AlgorithmSpec`] captures everything that distinguishes one CRC variant
//! from another, in the spirit of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//!
//! | Parameter    | Description |
//! |--------------|-------------|
//! | `width`      | Register width in bits (8, 16 or 32) |
//! | `polynomial` | Generator polynomial, in the bit order matching `reflected` |
//! | `init`       | Initial register value |
//! | `reflected`  | LSB-first processing with the bit-reversed polynomial |
//! | `xorout`     | Mask XORed into the final register |
//!
//! The catalogue's separate `refin`/`refout` flags collapse into one
//! `reflected` flag here: every supported variant reflects both or neither.
//!
//! # Register representation
//!
//! All widths share a `u32` register. Values are kept masked to `width` bits,
//! so 8- and 16-bit variants never carry stray high bits.

use core::fmt;

use crate::error::{InvalidSpec, Parameter};

/// Supported CRC register widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
  /// 8-bit register.
  W8,
  /// 16-bit register.
  W16,
  /// 32-bit register.
  W32,
}

impl Width {
  /// All supported widths, narrowest first.
  pub const ALL: [Self; 3] = [Self::W8, Self::W16, Self::W32];

  /// Parse a width given in bits.
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u8) -> Option<Self> {
    match bits {
      8 => Some(Self::W8),
      16 => Some(Self::W16),
      32 => Some(Self::W32),
      _ => None,
    }
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::W8 => 8,
      Self::W16 => 16,
      Self::W32 => 32,
    }
  }

  /// Mask with the low `bits()` bits set.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u32 {
    match self {
      Self::W8 => 0xFF,
      Self::W16 => 0xFFFF,
      Self::W32 => 0xFFFF_FFFF,
    }
  }

  /// The register's most-significant bit.
  #[inline]
  #[must_use]
  pub const fn top_bit(self) -> u32 {
    1 << (self.bits() - 1)
  }

  /// Number of hex digits needed to print a full register.
  #[inline]
  #[must_use]
  pub const fn hex_digits(self) -> usize {
    (self.bits() / 4) as usize
  }
}

impl fmt::Display for Width {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.bits())
  }
}

/// Immutable description of one CRC variant.
///
/// Construction validates every parameter against the register width, so a
/// value of this type is always a usable algorithm. Engines built from it have
/// no failure modes.
///
/// # Example
///
/// ```
/// use checksum::AlgorithmSpec;
///
/// // CRC-16/KERMIT: reflected 0x1021 (0x8408), init 0, no final XOR.
/// let kermit = AlgorithmSpec::new(16, 0x8408, 0x0000, true, 0x0000)?;
/// assert_eq!(kermit.normal_polynomial(), 0x1021);
///
/// assert!(AlgorithmSpec::new(12, 0x80F, 0, false, 0).is_err());
/// assert!(AlgorithmSpec::new(8, 0x107, 0, false, 0).is_err());
/// # Ok::<(), checksum::InvalidSpec>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlgorithmSpec {
  width: Width,
  polynomial: u32,
  init: u32,
  reflected: bool,
  xorout: u32,
}

impl AlgorithmSpec {
  /// Build a spec from raw parameters.
  ///
  /// `polynomial` must already be in the bit order that matches `reflected`
  /// (bit-reversed for reflected variants). Use [`reflect_bits`] to convert a
  /// catalogue "poly" value.
  ///
  /// # Errors
  ///
  /// [`InvalidSpec::UnsupportedWidth`] if `width` is not 8, 16 or 32, and
  /// [`InvalidSpec::ParameterTooWide`] if `polynomial`, `init` or `xorout`
  /// has bits set above `width`.
  #[allow(clippy::indexing_slicing)] // i < checks.len()
  pub const fn new(width: u8, polynomial: u32, init: u32, reflected: bool, xorout: u32) -> Result<Self, InvalidSpec> {
    let w = match Width::from_bits(width) {
      Some(w) => w,
      None => return Err(InvalidSpec::UnsupportedWidth(width)),
    };

    let mask = w.mask();
    let checks = [
      (Parameter::Polynomial, polynomial),
      (Parameter::Init, init),
      (Parameter::XorOut, xorout),
    ];
    let mut i = 0;
    while i < checks.len() {
      let (parameter, value) = checks[i];
      if value & !mask != 0 {
        return Err(InvalidSpec::ParameterTooWide { parameter, value, width });
      }
      i += 1;
    }

    Ok(Self {
      width: w,
      polynomial,
      init,
      reflected,
      xorout,
    })
  }

  /// Register width.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.width
  }

  /// Generator polynomial in the bit order matching [`reflected`](Self::reflected).
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.polynomial
  }

  /// Initial register value.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u32 {
    self.init
  }

  /// Whether bits are processed least-significant first.
  #[inline]
  #[must_use]
  pub const fn reflected(&self) -> bool {
    self.reflected
  }

  /// Final XOR mask.
  #[inline]
  #[must_use]
  pub const fn xorout(&self) -> u32 {
    self.xorout
  }

  /// Register mask for this width.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u32 {
    self.width.mask()
  }

  /// Polynomial in MSB-first ("normal") form, regardless of reflection.
  ///
  /// This is the `poly` column of the CRC Catalogue.
  #[inline]
  #[must_use]
  pub const fn normal_polynomial(&self) -> u32 {
    if self.reflected {
      reflect_bits(self.polynomial, self.width)
    } else {
      self.polynomial
    }
  }

  /// Apply the output mask to a register.
  #[inline]
  #[must_use]
  pub const fn finalize(&self, state: u32) -> u32 {
    (state ^ self.xorout) & self.width.mask()
  }
}

impl fmt::Display for AlgorithmSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = self.width.hex_digits();
    write!(
      f,
      "width={} poly=0x{:0digits$X} init=0x{:0digits$X} reflected={} xorout=0x{:0digits$X}",
      self.width, self.polynomial, self.init, self.reflected, self.xorout,
    )
  }
}

/// Reflect (bit-reverse) the low `width` bits of `value`.
#[inline]
#[must_use]
pub const fn reflect_bits(value: u32, width: Width) -> u32 {
  value.reverse_bits() >> (32 - width.bits())
}
