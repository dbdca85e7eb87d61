use super::*;

use malachite::Natural;

impl Rep {
  /// Zero (`0`), the additive identity element.
  pub fn zero(family: Family) -> Self {
    Self { family, kind: Kind::Zero }
  }

  /// Unsigned infinity.
  //
  // Represented by the bit pattern `0b1000...0`.
  pub fn infinity(family: Family) -> Self {
    Self { family, kind: Kind::Infinity }
  }

  /// A normal skeleton to be filled in by an operation: all fields zero, i.e. the number `1`.
  //
  // Represented by the bit pattern `0b0100...0`.
  pub fn normal_skeleton(family: Family) -> Self {
    Self {
      family,
      kind: Kind::Normal(Normal {
        sign: false,
        regime: 0,
        exponent: 0,
        fraction: Natural::from(0u32),
        fraction_len: 0,
      }),
    }
  }
}

impl Posit {
  /// Zero (`0`) of a given family.
  pub fn zero(family: Family) -> Self {
    Self(Rep::zero(family))
  }

  /// Unsigned infinity of a given family.
  pub fn infinity(family: Family) -> Self {
    Self(Rep::infinity(family))
  }

  /// One (`1`) of a given family.
  pub fn one(family: Family) -> Self {
    // The skeleton has no fraction bits; the round-trip gives it as many as the pattern has.
    Self::round_trip(&Rep::normal_skeleton(family))
  }

  /// Largest representable value, 2 <sup>[`Family::max_exp`]</sup>.
  //
  // Represented by the bit pattern `0b0111...1`.
  pub fn max(family: Family) -> Self {
    Self::from_bits(family.sign_bit() - 1, family)
  }

  /// Smallest *positive* value, 2 <sup>[`Family::min_exp`]</sup>.
  //
  // Represented by the bit pattern `0b000...01`.
  pub fn min_positive(family: Family) -> Self {
    Self::from_bits(1, family)
  }
}
