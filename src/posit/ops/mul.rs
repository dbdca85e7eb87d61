use super::*;

use crate::Result;

impl Posit {
  /// Exact product of two normal posits, rounded.
  pub(crate) fn mul_kernel(x: &Normal, y: &Normal, family: Family) -> Self {
    // If
    //   a = xa × 2^ma
    //   b = xb × 2^mb
    // then
    //   a × b = (xa × xb) × 2^(ma + mb)
    //
    // The signs are handled separately: the product of two nonzero significands is never 0.
    let (xa, ma) = (x.significand(), x.scale(family));
    let (xb, mb) = (y.significand(), y.scale(family));
    let xc = xa * xb;
    let mc = ma + mb;
    Self::from_exact(x.sign ^ y.sign, xc, mc, family)
  }

  /// Return `self × other`, correctly rounded.
  ///
  /// Infinity takes priority over zero: `∞ × 0` is `∞`.
  ///
  /// Fails with [`PositError::MismatchedFamily`](crate::PositError::MismatchedFamily) if `self`
  /// and `other` aren't of the same family.
  ///
  /// ```
  /// # use exact_posit::{Family, Posit};
  /// let family = Family::new(8, 0)?;
  /// let two = Posit::from_bits(0b0110_0000, family);
  /// let minus_half = Posit::from_bits(0b1110_0000, family);
  /// assert_eq!(two.mul(&minus_half)?.to_string(), "-1");
  /// assert!(Posit::infinity(family).mul(&Posit::zero(family))?.is_infinity());
  /// # Ok::<(), exact_posit::PositError>(())
  /// ```
  pub fn mul(&self, other: &Self) -> Result<Self> {
    let family = self.family();
    family.check(other.family())?;
    Ok(match (&self.0.kind, &other.0.kind) {
      (Kind::Infinity, _) | (_, Kind::Infinity) => Self::infinity(family),
      (Kind::Zero, _) | (_, Kind::Zero) => Self::zero(family),
      (Kind::Normal(x), Kind::Normal(y)) => Self::mul_kernel(x, y, family),
    })
  }
}

super::mk_ops!{Mul, mul}
