use super::*;

use malachite::{Integer, Natural};
use malachite::base::num::arithmetic::traits::PowerOf2;
use malachite::base::num::logic::traits::SignificantBits;

/// Addition and subtraction (both use the same addition algorithm, and `a - b` is simply
/// `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

impl Normal {
  /// Decompose into an exact signed integer `x` and scale `m`, such that the value is `x × 2^m`.
  #[inline]
  pub(crate) fn decompose(&self, family: Family) -> (Integer, i64) {
    (self.signed_significand(), self.scale(family))
  }
}

impl Posit {
  /// Turn the exact, nonzero result `(-1)^sign × xc × 2^mc` of an operation into a posit.
  ///
  /// First renormalise it into posit fields: this is lossless, but the fields may have far more
  /// fraction bits than `family` allows. Then round-trip through the codec, which is the only
  /// place where rounding (and saturation) happens.
  pub(crate) fn from_exact(sign: bool, xc: Natural, mc: i64, family: Family) -> Self {
    debug_assert!(xc != 0u32, "exact result must be nonzero");

    // Strip trailing 0 bits, compensating in the scale. This changes nothing about the value,
    // but keeps the fraction as short as it can be.
    let zeros = xc.trailing_zeros().unwrap_or(0);
    let xc = xc >> zeros;
    let mc = mc + zeros as i64;

    // Find `g` such that `xc × 2^g` is in [1, 2[; that is, `-g` is the position of the leading 1.
    // The bits below the leading 1 are the fraction, and `-g` is the fraction length.
    let fraction_len = xc.significant_bits() - 1;
    let fraction = xc - Natural::power_of_2(fraction_len);

    // The value is now `1.fraction × 2^(mc - g)`. Split the exponent `mc - g` into regime and
    // exponent fields; these are floor division and modulo, also for negative exponents.
    let exp = mc + fraction_len as i64;
    let useed_log2 = family.useed_log2();
    let regime = exp.div_euclid(useed_log2);
    let exponent = exp.rem_euclid(useed_log2) as u64;

    tracing::trace!(sign, regime, exponent, fraction_len, "exact result");
    let exact = Rep {
      family,
      kind: Kind::Normal(Normal { sign, regime, exponent, fraction, fraction_len }),
    };
    Self::round_trip(&exact)
  }
}

/// Helper macro for implementing operators for all combinations of value and reference.
///
/// Since the operands may be of different families, the `Output` is a
/// [`Result`](crate::Result).
macro_rules! mk_ops {
  ($trait:ident, $name:ident) => {
    impl core::ops::$trait<Posit> for Posit {
      type Output = crate::Result<Posit>;

      #[inline]
      fn $name(self, rhs: Posit) -> Self::Output { Posit::$name(&self, &rhs) }
    }

    impl core::ops::$trait<&Posit> for Posit {
      type Output = crate::Result<Posit>;

      #[inline]
      fn $name(self, rhs: &Posit) -> Self::Output { Posit::$name(&self, rhs) }
    }

    impl core::ops::$trait<Posit> for &Posit {
      type Output = crate::Result<Posit>;

      #[inline]
      fn $name(self, rhs: Posit) -> Self::Output { Posit::$name(self, &rhs) }
    }

    impl core::ops::$trait<&Posit> for &Posit {
      type Output = crate::Result<Posit>;

      #[inline]
      fn $name(self, rhs: &Posit) -> Self::Output { Posit::$name(self, rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator of posits, checking every
/// result against the exact rational result.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt) => {
    use crate::posit::rational::is_correct_rounded;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let a = Posit::one(Family::P32);
      let b = Posit::one(Family::P32);
      let _ = &a $op &b;
      let _ = &a $op b.clone();
      let _ = a.clone() $op &b;
      let _ = a $op b;
    }

    /// Aux function: check that `a $op b` is rounded correctly.
    fn is_correct(a: &Posit, b: &Posit) -> bool {
      let Ok(posit) = a $op b else { return false };
      match (a.to_rational(), b.to_rational()) {
        (Ok(a), Ok(b)) => is_correct_rounded(a $op b, &posit),
        _ => posit.is_infinity(),
      }
    }

    macro_rules! test_exhaustive {
      ($name:ident, $nbits:expr, $es:expr) => {
        #[test]
        fn $name() {
          let family = Family::new($nbits, $es).unwrap();
          for a in Posit::cases_exhaustive_all(family) {
            for b in Posit::cases_exhaustive_all(family) {
              assert!(is_correct(&a, &b), "{:?} ⋅ {:?}", a, b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $family:expr) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in Posit::cases_proptest_all($family),
            b in Posit::cases_proptest_all($family),
          ) {
            assert!(is_correct(&a, &b), "{:?} ⋅ {:?}", a, b)
          }
        }
      };
    }

    test_exhaustive!{posit_6_0_exhaustive, 6, 0}
    test_exhaustive!{posit_6_1_exhaustive, 6, 1}
    test_exhaustive!{posit_6_2_exhaustive, 6, 2}
    test_exhaustive!{posit_6_3_exhaustive, 6, 3}

    test_exhaustive!{posit_8_0_exhaustive, 8, 0}
    test_exhaustive!{p8_exhaustive, 8, 2}

    // Arbitrary precision arithmetic is *slow*; above 8 bits exhaustive testing of binary
    // operations is out of the question.
    test_proptest!{p16_proptest, Family::P16}
    test_proptest!{p32_proptest, Family::P32}
    test_proptest!{p64_proptest, Family::P64}

    test_exhaustive!{posit_3_0_exhaustive, 3, 0}
    test_exhaustive!{posit_4_0_exhaustive, 4, 0}
    test_exhaustive!{posit_4_1_exhaustive, 4, 1}
  }
}

#[cfg(test)]
pub(crate) use mk_tests;
