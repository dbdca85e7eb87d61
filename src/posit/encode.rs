use super::*;

use malachite::Natural;
use malachite::base::num::arithmetic::traits::{ModPowerOf2, PowerOf2};
use malachite::base::num::logic::traits::BitAccess;

impl Rep {
  /// Encode into the `nbits`-wide bit pattern, rounding if necessary. The rounding rule is always
  /// the same: "round to nearest, round ties to even bit pattern, never round to 0 or to
  /// infinity (i.e. never over- or under-flow)".
  ///
  /// This is the *only* place where rounding happens in this crate. Arithmetic operations
  /// produce an exact result in a [`Normal`] of whatever width it needs, and then round-trip it
  /// through `encode` and [`decode`](Self::decode) to obtain a legal posit.
  ///
  /// The returned pattern occupies the lowest `nbits` bits; the bits above are 0.
  pub fn encode(&self) -> u128 {
    match &self.kind {
      Kind::Zero => 0,
      Kind::Infinity => self.family.sign_bit(),
      Kind::Normal(n) => encode_normal(n, self.family),
    }
  }
}

fn encode_normal(n: &Normal, family: Family) -> u128 {
  debug_assert!(n.is_well_formed(family), "{n:?} has out-of-range fields for {family}");

  let max_regime = family.max_regime();
  let maxpos = family.sign_bit() - 1;
  let body_len = family.nbits() as u64 - 1;

  // Posit rounding rules state that, for a positive number, any number > MAX is rounded to MAX,
  // and any number < MIN_POSITIVE is rounded to MIN_POSITIVE (conversely for negatives). I.e. we
  // **never** round to 0 or to infinity.
  //
  // A regime beyond ±(nbits - 2) can't even be written down in `nbits - 1` bits, and it is
  // precisely the numbers beyond MAX or below MIN_POSITIVE, so we saturate right away. Regimes
  // of exactly ±(nbits - 2) are taken care of by the general case below: MAX is a run of
  // nbits - 1 1s and anything after it is cut, MIN_POSITIVE is a run of nbits - 2 0s terminated
  // by a 1 and anything after it rounds normally.
  let magnitude = if n.regime > max_regime {
    maxpos
  } else if n.regime < -max_regime {
    1
  } else {
    // Write the fields as one unbounded bit string: regime ‖ exponent ‖ fraction.
    //
    //   - A regime of k ≥ 0 is a run of k+1 1s followed by a 0;
    //   - A regime of k < 0 is a run of -k 0s followed by a 1.
    let (regime_bits, regime_len) = if n.regime >= 0 {
      let run = n.regime as u64 + 1;
      ((Natural::power_of_2(run) - Natural::from(1u32)) << 1u64, run + 1)
    } else {
      (Natural::from(1u32), n.regime.unsigned_abs() + 1)
    };
    let es = family.es() as u64;
    let string =
      (regime_bits << (es + n.fraction_len))
      + (Natural::from(n.exponent) << n.fraction_len)
      + &n.fraction;
    let string_len = regime_len + es + n.fraction_len;

    round_to_width(string, string_len, body_len)
  };

  // `magnitude` has at most `nbits - 1` bits; see `round_to_width`.
  debug_assert!(magnitude != 0 && magnitude <= maxpos);

  // Remember the fields are those of the two's complement absolute value.
  if n.sign {
    magnitude.wrapping_neg() & family.mask()
  } else {
    magnitude
  }
}

/// Round the `len`-bit string `string` to its leading `width` bits.
///
/// The rounding rules translate to a very simple rule in terms of bit patterns: just "represent
/// as an infinite-precision bit string, then round to nearest, if tied round to even bit
/// pattern". Some examples, rounding at the |
///
/// ```text
///   0b010101|011011 -> round to nearest = down    -> 0b010101
///   0b010101|111011 -> round to nearest = up      -> 0b010110
///   0b010101|100000 -> tied, round to even = up   -> 0b010110
///   0b010100|100000 -> tied, round to even = down -> 0b010100
/// ```
///
/// Call the lsb of the bits we keep `odd`, the first bit afterwards `round`, and the remaining
/// bits `sticky`; then we round up iff `round & (odd | (sticky != 0))`.
///
/// If `len` ≤ `width` nothing is lost and the string is padded with 0s on the right.
fn round_to_width(string: Natural, len: u64, width: u64) -> u128 {
  let kept = if len <= width {
    string << (width - len)
  } else {
    let shift = len - width;
    let round = string.get_bit(shift - 1);
    let sticky = (&string).mod_power_of_2(shift - 1) != 0u32;
    let kept = string >> shift;
    let odd = kept.get_bit(0);
    if round && (odd || sticky) {kept + Natural::from(1u32)} else {kept}
  };

  // Rounding up never carries out of `width` bits: the leading run of 1s of a regime
  // k < nbits - 2 is always terminated by a 0 within the kept bits, and a regime of exactly
  // nbits - 2 has `round` = its terminating 0.
  u128::try_from(&kept).unwrap_or(u128::MAX >> (u128::BITS as u64 - width))
}

impl Posit {
  /// Return the underlying bit representation of `self`, in the lowest `nbits` bits.
  ///
  /// ```
  /// # use exact_posit::{Family, Posit};
  /// let family = Family::new(8, 0)?;
  /// assert_eq!(Posit::one(family).to_bits(), 0b0100_0000);
  /// assert_eq!(Posit::infinity(family).to_bits(), 0b1000_0000);
  /// # Ok::<(), exact_posit::PositError>(())
  /// ```
  pub fn to_bits(&self) -> u128 {
    self.0.encode()
  }

  /// Round an exact, arbitrarily wide representation to the nearest legal posit: encode, then
  /// decode.
  pub(crate) fn round_trip(rep: &Rep) -> Self {
    let bits = rep.encode();
    tracing::trace!(family = %rep.family, "round-trip to {bits:#b}");
    Self::from_bits(bits, rep.family)
  }
}
