use super::*;

use malachite::base::num::arithmetic::traits::UnsignedAbs;
use malachite::base::num::basic::traits::Zero;

use crate::Result;

impl Posit {
  /// Exact sum of two normal posits, rounded.
  pub(crate) fn add_kernel(x: &Normal, y: &Normal, family: Family) -> Self {
    // Write both numbers as `x × 2^m`, with `x` a signed integer.
    let (xa, ma) = x.decompose(family);
    let (xb, mb) = y.decompose(family);

    // To add them we need them at the same scale; bring the one with the bigger scale *down* to
    // the smaller scale, by shifting its integer left. For example
    //
    //     0b11 × 2^1
    //   + 0b1  × 2^-2
    //   = 0b11000 × 2^-2 + 0b1 × 2^-2
    //   = 0b11001 × 2^-2
    //
    // Nothing is lost: the integers are arbitrary precision.
    let m = ma.max(mb);
    let xc = (xa << (m - mb) as u64) + (xb << (m - ma) as u64);
    let mc = ma + mb - m;

    // Adding a number to its negation is the only way to get an exact 0.
    if xc == Integer::ZERO {
      return Self::zero(family)
    }
    let sign = xc < Integer::ZERO;
    Self::from_exact(sign, xc.unsigned_abs(), mc, family)
  }

  /// Return `self + other`, correctly rounded.
  ///
  /// Zero is the identity; infinity absorbs everything, **including** infinity (there is only
  /// one, unsigned, infinity, so `∞ + ∞` and `∞ + -∞` are both `∞`).
  ///
  /// Fails with [`PositError::MismatchedFamily`](crate::PositError::MismatchedFamily) if `self`
  /// and `other` aren't of the same family.
  ///
  /// ```
  /// # use exact_posit::{Family, Posit};
  /// let family = Family::new(8, 0)?;
  /// let one = Posit::from_bits(0b0100_0000, family);
  /// assert_eq!(one.add(&one)?.to_bits(), 0b0110_0000);
  /// assert_eq!(one.add(&-&one)?.to_bits(), 0);
  /// # Ok::<(), exact_posit::PositError>(())
  /// ```
  pub fn add(&self, other: &Self) -> Result<Self> {
    let family = self.family();
    family.check(other.family())?;
    Ok(match (&self.0.kind, &other.0.kind) {
      (Kind::Zero, _) => other.clone(),
      (_, Kind::Zero) => self.clone(),
      (Kind::Infinity, _) | (_, Kind::Infinity) => Self::infinity(family),
      (Kind::Normal(x), Kind::Normal(y)) => Self::add_kernel(x, y, family),
    })
  }

  /// Return `self - other`, correctly rounded. This is exactly `self + (-other)`.
  pub fn sub(&self, other: &Self) -> Result<Self> {
    self.add(&other.neg())
  }
}

super::mk_ops!{Add, add}
super::mk_ops!{Sub, sub}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::PositError;
  use malachite::rational::Rational;

  fn p8_0() -> Family {
    Family::new(8, 0).unwrap()
  }

  #[test]
  fn one_plus_one() {
    let one = Posit::from_bits(64, p8_0());
    let two = (&one + &one).unwrap();
    assert_eq!(two.to_bits(), 0b0110_0000);
    assert_eq!(two.to_rational(), Ok(Rational::from(2)));
  }

  #[test]
  fn zero_is_identity() {
    let family = p8_0();
    let zero = Posit::from_bits(0, family);
    for x in Posit::cases_exhaustive_all(family) {
      assert_eq!((&x + &zero).unwrap().rep(), x.rep());
      assert_eq!((&zero + &x).unwrap().rep(), x.rep());
    }
  }

  #[test]
  fn infinity_absorbs() {
    let family = p8_0();
    let inf = Posit::from_bits(0x80, family);
    for x in Posit::cases_exhaustive(family) {
      assert!((&x + &inf).unwrap().is_infinity());
      assert!((&inf + &x).unwrap().is_infinity());
      assert!((&x - &inf).unwrap().is_infinity());
    }
    assert!((&inf + &inf).unwrap().is_infinity());
  }

  #[test]
  fn cancellation() {
    for family in [p8_0(), Family::P8, Family::new(10, 1).unwrap()] {
      for x in Posit::cases_exhaustive(family) {
        assert!((&x + &-&x).unwrap().is_zero(), "{x:?}");
        assert!((&x - &x).unwrap().is_zero(), "{x:?}");
      }
    }
  }

  #[test]
  fn sub_is_add_neg() {
    let family = Family::new(6, 1).unwrap();
    for a in Posit::cases_exhaustive_all(family) {
      for b in Posit::cases_exhaustive_all(family) {
        assert_eq!((&a - &b).unwrap().rep(), (&a + -&b).unwrap().rep());
      }
    }
  }

  #[test]
  fn mismatched_family() {
    let a = Posit::one(Family::P8);
    let b = Posit::one(Family::P16);
    assert_eq!(
      (&a + &b).unwrap_err(),
      PositError::MismatchedFamily { expected: Family::P8, found: Family::P16 },
    );
    // Checked even when the gating would not look at the operand
    assert!((Posit::zero(Family::P8) + Posit::zero(Family::P16)).is_err());
    assert!((&b - &a).is_err());
  }

  #[test]
  fn saturates_at_max() {
    let max = Posit::max(Family::P16);
    assert_eq!((&max + &max).unwrap().rep(), max.rep());
    let min_positive = Posit::min_positive(Family::P16);
    assert_eq!((&max + &min_positive).unwrap().rep(), max.rep());
  }

  #[test]
  fn far_apart() {
    // The smaller operand is far below the last bit of the bigger one, only sticks
    let family = Family::P32;
    let one = Posit::one(family);
    let min_positive = Posit::min_positive(family);
    assert_eq!((&one + &min_positive).unwrap().rep(), one.rep());
    assert_eq!((&one - &min_positive).unwrap().rep(), one.rep());
  }

  mod rounding {
    use super::*;
    super::super::super::mk_tests!{+}
  }

  mod rounding_sub {
    use super::*;
    super::super::super::mk_tests!{-}
  }
}
