//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{Family, Normal, Posit};

impl Posit {
  /// The exact addition of two normal posits, skipping the classification of the operands.
  pub fn bench_add_kernel(x: &Normal, y: &Normal, family: Family) -> Posit {
    Self::add_kernel(x, y, family)
  }

  /// The exact multiplication of two normal posits, skipping the classification of the operands.
  pub fn bench_mul_kernel(x: &Normal, y: &Normal, family: Family) -> Posit {
    Self::mul_kernel(x, y, family)
  }

  /// The exact division of two normal posits, skipping the classification of the operands.
  pub fn bench_div_kernel(x: &Normal, y: &Normal, family: Family) -> Posit {
    Self::div_kernel(x, y, family)
  }

  /// Renormalise an exact result and round it, as the end of every operation does.
  pub fn bench_from_exact(sign: bool, xc: malachite::Natural, mc: i64, family: Family) -> Posit {
    Self::from_exact(sign, xc, mc, family)
  }
}
