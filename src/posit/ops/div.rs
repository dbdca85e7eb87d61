use super::*;

use crate::Result;

impl Posit {
  /// Quotient of two normal posits, rounded.
  pub(crate) fn div_kernel(x: &Normal, y: &Normal, family: Family) -> Self {
    // If
    //   a = xa × 2^ma
    //   b = xb × 2^mb
    // then
    //   a / b = (xa / xb) × 2^(ma - mb)
    //
    // But `xa / xb` is not an integer. To keep enough bits of it, shift `xa` left by a guard
    // amount `g0` first, then divide (rounding down):
    //
    //   a / b ≈ floor(xa × 2^g0 / xb) × 2^(ma - mb - g0)
    //
    // The guard is big enough that every *representable* quotient comes out exact.
    let (xa, ma) = (x.significand(), x.scale(family));
    let (xb, mb) = (y.significand(), y.scale(family));
    let g0 = (ma - mb + family.max_exp() + family.nbits() as i64 - 1).max(0);
    let xc = (xa << g0 as u64) / xb;
    let mc = ma - mb - g0;

    tracing::trace!(g0, xc_bits = xc.significant_bits(), "division guard shift");
    // Only when `a` is so much smaller than `b` that the guard shift is clamped at 0.
    if xc == 0u32 {
      return Self::zero(family)
    }
    Self::from_exact(x.sign ^ y.sign, xc, mc, family)
  }

  /// Return `self / other`, rounded.
  ///
  /// Division by zero is infinity, as is infinity divided by anything. Otherwise zero divided by
  /// anything, or anything divided by infinity, is zero.
  ///
  /// Fails with [`PositError::MismatchedFamily`](crate::PositError::MismatchedFamily) if `self`
  /// and `other` aren't of the same family.
  ///
  /// ```
  /// # use exact_posit::{Family, Posit};
  /// let family = Family::new(8, 0)?;
  /// let one = Posit::one(family);
  /// let two = Posit::from_bits(0b0110_0000, family);
  /// assert_eq!(one.div(&two)?.to_string(), "0.5");
  /// assert!(one.div(&Posit::zero(family))?.is_infinity());
  /// assert!(Posit::zero(family).div(&Posit::zero(family))?.is_infinity());
  /// # Ok::<(), exact_posit::PositError>(())
  /// ```
  pub fn div(&self, other: &Self) -> Result<Self> {
    let family = self.family();
    family.check(other.family())?;
    Ok(match (&self.0.kind, &other.0.kind) {
      (Kind::Infinity, _) | (_, Kind::Zero) => Self::infinity(family),
      (Kind::Zero, _) | (_, Kind::Infinity) => Self::zero(family),
      (Kind::Normal(x), Kind::Normal(y)) => Self::div_kernel(x, y, family),
    })
  }
}

super::mk_ops!{Div, div}
