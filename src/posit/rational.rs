use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::PowerOf2;

use crate::{PositError, Result};

impl Normal {
  /// The exact value, `signed_significand × 2^scale`.
  pub fn to_rational(&self, family: Family) -> Rational {
    let (x, m) = (self.signed_significand(), self.scale(family));
    Rational::from(x) * Rational::power_of_2(m)
  }
}

impl Posit {
  /// Convert `self` into the exact [Rational] value it represents. Fails with
  /// [`PositError::IsInfinity`] if `self` is infinity.
  ///
  /// ```
  /// # use exact_posit::{Family, Posit, PositError};
  /// # use malachite::rational::Rational;
  /// let family = Family::new(6, 1)?;
  /// assert_eq!(Posit::from_bits(0b001101, family).to_rational()?, Rational::from_signeds(5, 8));
  /// assert_eq!(Posit::infinity(family).to_rational(), Err(PositError::IsInfinity));
  /// # Ok::<(), exact_posit::PositError>(())
  /// ```
  pub fn to_rational(&self) -> Result<Rational> {
    match &self.0.kind {
      Kind::Zero => Ok(Rational::from(0)),
      Kind::Infinity => Err(PositError::IsInfinity),
      Kind::Normal(n) => Ok(n.to_rational(self.family())),
    }
  }
}

/// Check whether the rational number `exact` should be rounded to `posit`.
///
///   - Over- or under-flow (beyond [`Posit::max`] or below [`Posit::min_positive`] in absolute
///     value): round to those respectively, never to 0 or infinity.
///   - Geometric case (exponent bits are cut off): round to nearest posit in terms of absolute
///     **ratio**, ties to even.
///   - Normal case (remaining domain): round to nearest posit in terms of absolute **difference**,
///     ties to even.
#[cfg(test)]
pub(crate) fn is_correct_rounded(exact: Rational, posit: &Posit) -> bool {
  use malachite::base::num::arithmetic::traits::{Abs, Reciprocal};

  let family = posit.family();
  let zero = Rational::from(0);
  let value = |p: Posit| p.to_rational().ok();

  // Only the exact number 0 is rounded to posit 0.
  if posit.is_zero() { return exact == zero }
  // No number is rounded to infinity.
  if posit.is_infinity() { return false }

  let max = Posit::max(family);
  let min_positive = Posit::min_positive(family);
  let (max_value, min_positive_value) = (value(max.clone()), value(min_positive.clone()));
  let (Some(max_value), Some(min_positive_value)) = (max_value, min_positive_value) else {
    return false
  };

  // Overflow case: if exact is > MAX, < -MAX, > 0 and < MIN_POSITIVE, or < 0 and > -MIN_POSITIVE
  if exact > zero {
    if exact >= max_value {
      return posit.rep() == max.rep()
    } else if exact <= min_positive_value {
      return posit.rep() == min_positive.rep()
    }
  } else if exact < zero {
    if exact <= -max_value {
      return posit.rep() == (-&max).rep()
    } else if exact >= -min_positive_value {
      return posit.rep() == (-&min_positive).rep()
    }
  } else {
    return false
  }

  // Remaining cases: round to nearest (arithmetic nearest, or geometric nearest *only if* exponent
  // bits are cut). `distance` uses arithmetic or geometric distance accordingly.
  let distance = {
    // If `1 + regime_len + 1 + es > nbits`, i.e. on the edges of the posit's dynamic range, some
    // exponent bits are chopped and hence we are in a region of geometric rounding. This
    // corresponds to an exponent of `(nbits - 2 - es) << es`. For very narrow families there may
    // be no arithmetic region at all.
    let cutoff_exp = (family.nbits() as i64 - 2 - family.es() as i64) * family.useed_log2();
    let is_arithmetic_rounding = cutoff_exp >= 0 && {
      let geometric_cutoff = Rational::power_of_2(cutoff_exp);
      let arithmetic_range = (&geometric_cutoff).reciprocal() ..= geometric_cutoff;
      arithmetic_range.contains(&(&exact).abs())
    };

    move |x: &Rational, y: &Rational| {
      if is_arithmetic_rounding {
        x - y
      } else {
        if x.abs() >= y.abs() {x / y} else {y / x}
      }
    }
  };

  // `posit` represents exactly the number `curr`, while the immediately previous and next posits
  // represent exactly the numbers `prev` and `next`, respectively.
  let prev = value(posit.prior());
  let Some(curr) = value(posit.clone()) else { return false };
  let next = value(posit.next());
  let posit_is_even = posit.to_bits() & 1 == 0;

  if exact == curr {
    // `exact` is exactly represented by `posit`
    true
  } else if let Some(prev) = prev && prev < exact && exact < curr {
    // `exact` lies in interval `]posit.prior(), posit[`: needs to be closer to `posit` than to
    // `posit.prior()`, or same distance if `posit` is even.
    let distance_curr = distance(&curr, &exact);
    let distance_prev = distance(&exact, &prev);
    distance_curr < distance_prev || distance_curr == distance_prev && posit_is_even
  } else if let Some(next) = next && curr < exact && exact < next {
    // `exact` lies in interval `]posit, posit.next()[`: needs to be closer to `posit` than to
    // `posit.next()`, or same distance if `posit` is even.
    let distance_curr = distance(&exact, &curr);
    let distance_next = distance(&next, &exact);
    distance_curr < distance_next || distance_curr == distance_next && posit_is_even
  } else {
    // Not in interval
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Manually test all bit patterns for a 6-bit positive with 2-bit exponent (cf. Posit
  /// Arithmetic, John L. Gustafson, Chapter 2).
  #[test]
  fn exhaustive_posit_6_2() {
    let family = Family::new(6, 2).unwrap();

    assert_eq!(Posit::from_bits(0b000000, family).to_rational(), Ok(Rational::from(0)));
    assert_eq!(Posit::from_bits(0b100000, family).to_rational(), Err(PositError::IsInfinity));

    for (bits, (num, den)) in [
      (0b000001, (1, 65536)),
      (0b000010, (1, 4096)),
      (0b000011, (1, 1024)),
      (0b000100, (1, 256)),
      (0b000101, (1, 128)),
      (0b000110, (1, 64)),
      (0b000111, (1, 32)),
      (0b001000, (2, 32)),
      (0b001001, (3, 32)),
      (0b001010, (4, 32)),
      (0b001011, (6, 32)),
      (0b001100, (8, 32)),
      (0b001101, (12, 32)),
      (0b001110, (16, 32)),
      (0b001111, (24, 32)),
      (0b010000, (1, 1)),
      (0b010001, (3, 2)),
      (0b010010, (2, 1)),
      (0b010011, (3, 1)),
      (0b010100, (4, 1)),
      (0b010101, (6, 1)),
      (0b010110, (8, 1)),
      (0b010111, (12, 1)),
      (0b011000, (16, 1)),
      (0b011001, (32, 1)),
      (0b011010, (64, 1)),
      (0b011011, (128, 1)),
      (0b011100, (256, 1)),
      (0b011101, (1024, 1)),
      (0b011110, (4096, 1)),
      (0b011111, (65536, 1)),
    ] {
      let neg_bits = (bits as u128).wrapping_neg() & family.mask();
      assert_eq!(Posit::from_bits(bits, family).to_rational(), Ok(Rational::from_signeds(num, den)));
      assert_eq!(Posit::from_bits(neg_bits, family).to_rational(), Ok(Rational::from_signeds(-num, den)));
    }
  }

  /// More manual examples from the notebook.
  #[test]
  fn examples() {
    let p6_1 = Family::new(6, 1).unwrap();
    assert_eq!(Posit::from_bits(0b100001, p6_1).to_rational(), Ok(Rational::from(-256)));
    assert_eq!(Posit::from_bits(0b000001, p6_1).to_rational(), Ok(Rational::from_signeds(1, 256)));
    assert_eq!(Posit::from_bits(0b001101, p6_1).to_rational(), Ok(Rational::from_signeds(5, 8)));
    assert_eq!(Posit::from_bits(0b110010, p6_1).to_rational(), Ok(Rational::from_signeds(-3, 4)));

    let p16 = Family::P16;
    assert_eq!(Posit::from_bits(0b0_01_00_10000001000, p16).to_rational(), Ok(Rational::from_signeds(3080, 1 << 15)));
    assert_eq!(Posit::from_bits(0b0_01_00_11011001000, p16).to_rational(), Ok(Rational::from_signeds(3784, 1 << 15)));
    assert_eq!(Posit::from_bits(0b0_01_01_11011001000, p16).to_rational(), Ok(Rational::from_signeds(3784, 1 << 14)));
    assert_eq!(Posit::from_bits(0b0_01_10_11011001000, p16).to_rational(), Ok(Rational::from_signeds(3784, 1 << 13)));
    assert_eq!(Posit::from_bits(0b0_01_11_11011001000, p16).to_rational(), Ok(Rational::from_signeds(3784, 1 << 12)));
    assert_eq!(Posit::from_bits(0b0_11110_10_11001000, p16).to_rational(), Ok(Rational::from(456 << 6)));
    assert_eq!(Posit::from_bits(0b0_11110_01_11001000, p16).to_rational(), Ok(Rational::from(456 << 5)));

    assert_eq!(Posit::from_bits(0b1_00001_10_00111000, p16).to_rational(), Ok(Rational::from(-456 << 5)));
    assert_eq!(Posit::from_bits(0b1_00001_01_00111000, p16).to_rational(), Ok(Rational::from(-456 << 6)));
    assert_eq!(Posit::from_bits(0b1_001_01_0100111000, p16).to_rational(), Ok(Rational::from_signeds(-1736, 1 << 4)));
    assert_eq!(Posit::from_bits(0b1_1110_10_100111000, p16).to_rational(), Ok(Rational::from_signeds(-712, 1 << 20)));

    assert_eq!(Posit::from_bits(0b1_11111111111110_1_, p16).to_rational(), Ok(Rational::from_signeds(-1, 1i64 << 50)));
    assert_eq!(Posit::from_bits(0b1_11111111111110_0_, p16).to_rational(), Ok(Rational::from_signeds(-1, 1i64 << 48)));
    assert_eq!(Posit::from_bits(0b0_11111111110_00_10, p16).to_rational(), Ok(Rational::from(3i64 << 35)));

    assert_eq!(Posit::max(p16).to_rational(), Ok(Rational::from(1i64 << 56)));
    assert_eq!((-Posit::max(p16)).to_rational(), Ok(Rational::from(-1i64 << 56)));
    assert_eq!(Posit::min_positive(p16).to_rational(), Ok(Rational::from_signeds(1, 1i64 << 56)));
    assert_eq!((-Posit::min_positive(p16)).to_rational(), Ok(Rational::from_signeds(1, -1i64 << 56)));

    assert_eq!(Posit::zero(p16).to_rational(), Ok(Rational::from(0)));
    assert_eq!(Posit::one(p16).to_rational(), Ok(Rational::from(1)));
    assert_eq!((-Posit::one(p16)).to_rational(), Ok(Rational::from(-1)));
    assert_eq!(Posit::infinity(p16).to_rational(), Err(PositError::IsInfinity));
  }

  #[test]
  fn monotonic() {
    // Bit patterns, read as signed integers, are ordered like the values they represent
    for family in [Family::new(8, 0).unwrap(), Family::P8, Family::new(9, 3).unwrap()] {
      let mut p = Posit::from_bits(family.sign_bit() + 1, family);
      let mut prev = p.to_rational().unwrap();
      while !p.next().is_infinity() {
        p = p.next();
        let curr = p.to_rational().unwrap();
        assert!(prev < curr, "{p:?}");
        prev = curr;
      }
    }
  }

  #[test]
  fn correct_rounded() {
    let family = Family::new(6, 2).unwrap();
    let one = Posit::one(family);
    // 1 and 3/2 are neighbours: 5/4 is a tie, goes to the even 1
    assert!(is_correct_rounded(Rational::from(1), &one));
    assert!(is_correct_rounded(Rational::from_signeds(5, 4), &one));
    assert!(!is_correct_rounded(Rational::from_signeds(5, 4), &one.next()));
    assert!(is_correct_rounded(Rational::from_signeds(11, 8), &one.next()));
    // Saturation
    assert!(is_correct_rounded(Rational::from(1 << 20), &Posit::max(family)));
    assert!(is_correct_rounded(Rational::from_signeds(-1, 1 << 20), &-Posit::min_positive(family)));
    assert!(!is_correct_rounded(Rational::from(1 << 20), &Posit::infinity(family)));
    assert!(!is_correct_rounded(Rational::from(0), &Posit::min_positive(family)));
    assert!(is_correct_rounded(Rational::from(0), &Posit::zero(family)));
  }
}
