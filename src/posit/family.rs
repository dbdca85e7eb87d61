use core::fmt;

use crate::{PositError, Result};

/// A posit format: `nbits` total bits, of which (at most) `es` are exponent bits.
///
/// Every [Posit](crate::Posit) belongs to exactly one family, which never changes over its
/// lifetime, and the result of an arithmetic operation always belongs to the same family as its
/// operands.
///
/// ```
/// # use exact_posit::Family;
/// assert_eq!(Family::default(), Family::new(32, 2)?);
/// assert_eq!(Family::P16.nbits(), 16);
/// assert!(Family::new(1, 0).is_err());
/// # Ok::<(), exact_posit::PositError>(())
/// ```
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub struct Family {
  nbits: u32,
  es: u32,
}

impl Family {
  /// Smallest supported width; `0b00`, `0b01`, `0b10`, `0b11` are `0`, `1`, `∞`, `-1`.
  pub const MIN_NBITS: u32 = 2;

  /// Bit patterns are carried around in a `u128`.
  pub const MAX_NBITS: u32 = 128;

  /// The exact intermediates of an operation can be around `2^ES × NBITS` bits wide (see the
  /// guard shift in division), so `es` is kept to sane values.
  pub const MAX_ES: u32 = 16;

  /// Standard-defined 8-bit posit (with 2-bit exponent).
  pub const P8: Self = Self { nbits: 8, es: 2 };

  /// Standard-defined 16-bit posit (with 2-bit exponent).
  pub const P16: Self = Self { nbits: 16, es: 2 };

  /// Standard-defined 32-bit posit (with 2-bit exponent).
  pub const P32: Self = Self { nbits: 32, es: 2 };

  /// Standard-defined 64-bit posit (with 2-bit exponent).
  pub const P64: Self = Self { nbits: 64, es: 2 };

  /// Validate and construct a family.
  pub fn new(nbits: u32, es: u32) -> Result<Self> {
    if (Self::MIN_NBITS ..= Self::MAX_NBITS).contains(&nbits) && es <= Self::MAX_ES {
      Ok(Self { nbits, es })
    } else {
      tracing::debug!(nbits, es, "rejected posit family");
      Err(PositError::InvalidFamily { nbits, es })
    }
  }

  /// Construct without validating, e.g. to report what was requested in an error.
  pub(crate) const fn unchecked(nbits: u32, es: u32) -> Self {
    Self { nbits, es }
  }

  /// Resolve an optionally specified `nbits` and `es`, falling back to the default family's.
  pub fn resolve(nbits: Option<u32>, es: Option<u32>) -> Result<Self> {
    let default = Self::default();
    Self::new(nbits.unwrap_or(default.nbits), es.unwrap_or(default.es))
  }

  /// Total width in bits.
  #[inline]
  pub const fn nbits(self) -> u32 {
    self.nbits
  }

  /// Width of the exponent field in bits.
  #[inline]
  pub const fn es(self) -> u32 {
    self.es
  }

  /// Each regime step scales by `useed = 2^(2^es)`; this is `log2(useed) = 2^es`.
  #[inline]
  pub const fn useed_log2(self) -> i64 {
    1 << self.es
  }

  /// The biggest regime any bit pattern can encode, `nbits - 2`; the smallest is its negation.
  #[inline]
  pub const fn max_regime(self) -> i64 {
    self.nbits as i64 - 2
  }

  /// The maximum exponent; maxpos = 2 <sup>[`Self::max_exp`]</sup>.
  #[inline]
  pub const fn max_exp(self) -> i64 {
    self.useed_log2() * self.max_regime()
  }

  /// The minimum exponent; minpos = 2 <sup>[`Self::min_exp`]</sup>.
  #[inline]
  pub const fn min_exp(self) -> i64 {
    -self.max_exp()
  }

  /// Mask of the lowest `nbits` bits.
  #[inline]
  pub(crate) const fn mask(self) -> u128 {
    u128::MAX >> (u128::BITS - self.nbits)
  }

  /// The sign bit alone, `0b1000…`, which is also the bit pattern of infinity.
  #[inline]
  pub(crate) const fn sign_bit(self) -> u128 {
    1 << (self.nbits - 1)
  }

  /// Fail with [`PositError::MismatchedFamily`] unless `self == other`.
  pub(crate) fn check(self, other: Self) -> Result<()> {
    if self == other {
      Ok(())
    } else {
      Err(PositError::MismatchedFamily { expected: self, found: other })
    }
  }
}

impl Default for Family {
  /// 32 bits, 2 exponent bits.
  fn default() -> Self {
    Self::P32
  }
}

impl fmt::Display for Family {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "posit<{}, {}>", self.nbits, self.es)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bounds() {
    assert!(Family::new(2, 0).is_ok());
    assert!(Family::new(128, 16).is_ok());
    assert_eq!(Family::new(1, 0), Err(PositError::InvalidFamily { nbits: 1, es: 0 }));
    assert_eq!(Family::new(129, 2), Err(PositError::InvalidFamily { nbits: 129, es: 2 }));
    assert_eq!(Family::new(32, 17), Err(PositError::InvalidFamily { nbits: 32, es: 17 }));
  }

  #[test]
  fn resolve() {
    assert_eq!(Family::resolve(None, None), Ok(Family::P32));
    assert_eq!(Family::resolve(Some(8), None), Ok(Family::P8));
    assert_eq!(Family::resolve(Some(8), Some(0)), Family::new(8, 0));
    assert_eq!(Family::resolve(None, Some(3)), Family::new(32, 3));
  }

  #[test]
  fn exponents() {
    // Cf. Posit Arithmetic, John L. Gustafson: p8 (es = 2) ranges from 2^-24 to 2^24.
    assert_eq!(Family::P8.max_exp(), 24);
    assert_eq!(Family::P8.min_exp(), -24);
    assert_eq!(Family::P16.max_exp(), 56);
    assert_eq!(Family::new(8, 0).unwrap().max_exp(), 6);
    assert_eq!(Family::new(6, 3).unwrap().useed_log2(), 8);
  }

  #[test]
  fn masks() {
    assert_eq!(Family::P8.mask(), 0xff);
    assert_eq!(Family::P8.sign_bit(), 0x80);
    assert_eq!(Family::new(128, 2).unwrap().mask(), u128::MAX);
    assert_eq!(Family::new(128, 2).unwrap().sign_bit(), 1 << 127);
  }

  #[test]
  fn check() {
    assert_eq!(Family::P8.check(Family::P8), Ok(()));
    assert_eq!(
      Family::P8.check(Family::P16),
      Err(PositError::MismatchedFamily { expected: Family::P8, found: Family::P16 }),
    );
  }
}
