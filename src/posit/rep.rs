use malachite::{Integer, Natural};
use malachite::base::num::arithmetic::traits::PowerOf2;

use super::family::Family;

/// The structured representation of a posit: its [`Family`] plus what kind of value it is.
///
/// A `Rep` is immutable once built; every operation produces a fresh one.
#[derive(Clone, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub struct Rep {
  pub(crate) family: Family,
  pub(crate) kind: Kind,
}

/// The three classes of posit values.
#[derive(Clone, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub enum Kind {
  /// The number `0`.
  Zero,
  /// Unsigned infinity: the single value for overflow and division by zero (called NaR, "not a
  /// real", in the 2022 standard).
  Infinity,
  /// Any other value; see [`Normal`].
  Normal(Normal),
}

/// The fields of a posit that is neither zero nor infinity, representing the value
///
/// ```text
/// (-1)^sign × 2^(2^es × regime + exponent - fraction_len) × (2^fraction_len + fraction)
/// ```
///
/// where `2^fraction_len + fraction` is the *significand*, always in
/// `[2^fraction_len, 2^(fraction_len+1)[`. Put differently, `fraction` is the string of
/// `fraction_len` bits after the hidden bit of `1.ffff`.
///
/// Note that `fraction_len` is not bounded by `nbits`: the result of an exact operation is
/// represented in these same fields, at whatever width it needs, before being rounded.
#[derive(Clone, Debug)]
#[derive(PartialEq, Eq, Hash)]
pub struct Normal {
  /// `true` if negative.
  pub sign: bool,
  /// Coarse scale, in multiples of `2^es`.
  pub regime: i64,
  /// Fine scale, `< 2^es`.
  pub exponent: u64,
  /// The explicit fraction bits, `< 2^fraction_len`.
  pub fraction: Natural,
  /// Number of fraction bits.
  pub fraction_len: u64,
}

impl Normal {
  /// The significand `2^h + f`, unsigned.
  pub fn significand(&self) -> Natural {
    Natural::power_of_2(self.fraction_len) + &self.fraction
  }

  /// The significand with the sign applied, `(-1)^sign × (2^h + f)`.
  pub fn signed_significand(&self) -> Integer {
    let abs = Integer::from(self.significand());
    if self.sign {-abs} else {abs}
  }

  /// The power-of-two scale `m` such that the value is `significand × 2^m`, i.e.
  /// `2^es × regime + exponent - h`.
  pub fn scale(&self, family: Family) -> i64 {
    family.useed_log2() * self.regime + self.exponent as i64 - self.fraction_len as i64
  }

  /// Whether the fields satisfy their own invariants (`exponent < 2^es`, `fraction < 2^h`).
  pub(crate) fn is_well_formed(&self, family: Family) -> bool {
    (self.exponent as u128) < (1u128 << family.es())
      && self.fraction < Natural::power_of_2(self.fraction_len)
  }
}

impl Rep {
  /// The format this value belongs to.
  #[inline]
  pub fn family(&self) -> Family {
    self.family
  }

  /// What kind of value this is.
  #[inline]
  pub fn kind(&self) -> &Kind {
    &self.kind
  }

  /// The [`Normal`] fields, if this is neither zero nor infinity.
  #[inline]
  pub fn as_normal(&self) -> Option<&Normal> {
    match &self.kind {
      Kind::Normal(n) => Some(n),
      _ => None,
    }
  }

  pub fn is_zero(&self) -> bool {
    matches!(self.kind, Kind::Zero)
  }

  pub fn is_infinity(&self) -> bool {
    matches!(self.kind, Kind::Infinity)
  }

  pub fn is_normal(&self) -> bool {
    matches!(self.kind, Kind::Normal(_))
  }
}
