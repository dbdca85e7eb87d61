use super::*;

use core::fmt::{Debug, Display};

use malachite::Natural;
use malachite::base::num::arithmetic::traits::Pow;

impl Debug for Posit {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let family = self.family();
    let bits = self.to_bits();
    f.debug_struct("Posit")
      .field("nbits", &family.nbits())
      .field("es", &family.es())
      .field("bits", &format_args!("0b{bits:0w$b}", w=family.nbits() as usize))
      .finish()
  }
}

/// The exact decimal expansion of `significand × 2^scale`, without sign. Always finite, since
/// `2^-k = 5^k / 10^k`.
fn decimal(significand: Natural, scale: i64) -> String {
  if scale >= 0 {
    return (significand << scale as u64).to_string()
  }
  let k = scale.unsigned_abs() as usize;
  let digits = (significand * Natural::from(5u32).pow(k as u64)).to_string();
  // Make sure there is at least one digit before the point
  let digits = format!("{digits:0>w$}", w=k + 1);
  let (int, frac) = digits.split_at(digits.len() - k);
  let frac = frac.trim_end_matches('0');
  if frac.is_empty() {
    int.to_string()
  } else {
    format!("{int}.{frac}")
  }
}

impl Display for Posit {
  /// The exact value in decimal (every posit is a dyadic rational, so it has a finite decimal
  /// expansion), `0`, or `inf`.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match &self.0.kind {
      Kind::Zero => f.write_str("0"),
      Kind::Infinity => f.write_str("inf"),
      Kind::Normal(n) => {
        let sign = if n.sign {"-"} else {""};
        write!(f, "{sign}{}", decimal(n.significand(), n.scale(self.family())))
      },
    }
  }
}
