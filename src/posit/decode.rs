use super::*;

use malachite::Natural;

impl Rep {
  /// Decode the lowest `nbits` bits of `bits` into a representation. Higher bits are ignored.
  ///
  /// Posits are interpreted in two's complement: the fields of a negative posit are those of the
  /// bit pattern of its absolute value. The fields are, from the most significant bit:
  ///
  ///   - 1 sign bit;
  ///   - the regime: a run of `n` 1s terminated by a 0 (regime `n-1`), or a run of `n` 0s
  ///     terminated by a 1 (regime `-n`); the run may also extend to the end of the posit, with
  ///     no terminating bit;
  ///   - up to `es` exponent bits; if the posit ends before all of them, the missing (rightmost)
  ///     bits are 0;
  ///   - the fraction, i.e. all the remaining bits.
  ///
  /// The resulting [`Normal::fraction_len`] is the number of fraction bits present in the
  /// pattern, trailing zeros included, so that two equal patterns always decode to equal fields.
  pub fn decode(bits: u128, family: Family) -> Self {
    let bits = bits & family.mask();
    if bits == 0 {
      return Self::zero(family)
    }
    if bits == family.sign_bit() {
      return Self::infinity(family)
    }

    // First extract the sign; the rest of the algorithm takes place with the two's complement
    // absolute value of the posit.
    let sign = bits & family.sign_bit() != 0;
    let abs = if sign {bits.wrapping_neg() & family.mask()} else {bits};

    // The `nbits - 1` bits after the sign are the body. Left-align it to the top of a `u128` so
    // that the regime run can be counted with `leading_zeros`; the bits shifted in from the right
    // are 0s.
    let body_len = family.nbits() - 1;
    let body = abs << (u128::BITS - body_len);

    // If the body starts with 1, the run of 1s can go all the way to the end of the body, then
    // hits the 0s shifted in, so the count is at most `body_len` as it should be. If it starts
    // with 0, the run of 0s is always terminated by a 1 inside the body, because `abs` is not 0.
    let regime_sign = body >> (u128::BITS - 1) == 1;
    let run = if regime_sign {(!body).leading_zeros()} else {body.leading_zeros()};
    debug_assert!(run <= body_len);
    let regime = if regime_sign {run as i64 - 1} else {-(run as i64)};

    // Shift out the regime bits incl. the terminating bit, if any. The lowest `rest_len` bits of
    // `abs` hold the exponent and fraction.
    let rest_len = body_len.saturating_sub(run + 1);
    let rest = abs & low_mask(rest_len);

    // The leftmost ES bits are the exponent, the rest are the fraction. If there are fewer than
    // ES bits left, the exponent is partially (or totally) missing and we fill in 0s from the
    // right.
    let es = family.es();
    let (exponent, fraction, fraction_len) = if rest_len >= es {
      let fraction_len = rest_len - es;
      (rest >> fraction_len, rest & low_mask(fraction_len), fraction_len)
    } else {
      (rest << (es - rest_len), 0, 0)
    };

    Self {
      family,
      kind: Kind::Normal(Normal {
        sign,
        regime,
        exponent: exponent as u64,
        fraction: Natural::from(fraction),
        fraction_len: fraction_len as u64,
      }),
    }
  }
}

/// Mask of the lowest `n` bits, `n < 128`.
#[inline]
fn low_mask(n: u32) -> u128 {
  (1u128 << n) - 1
}

impl Posit {
  /// Construct a posit from its raw bit representation. Bits higher (more significant) than the
  /// lowest `nbits` bits, if any, are ignored.
  ///
  /// ```
  /// # use exact_posit::{Family, Posit};
  /// let family = Family::new(8, 0)?;
  /// assert!(Posit::from_bits(0, family).is_zero());
  /// assert!(Posit::from_bits(0b1000_0000, family).is_infinity());
  /// assert_eq!(Posit::from_bits(0b0100_0000, family).to_string(), "1");
  /// # Ok::<(), exact_posit::PositError>(())
  /// ```
  pub fn from_bits(bits: u128, family: Family) -> Self {
    Self(Rep::decode(bits, family))
  }
}
