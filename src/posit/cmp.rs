use super::*;

use crate::{PositError, Result};

/// Every comparison fails the same way; log it, then fail.
fn unimplemented<T>(what: &'static str, a: &Posit, b: &Posit) -> Result<T> {
  tracing::debug!(?a, ?b, "{what} is not implemented");
  Err(PositError::Unimplemented(what))
}

/// Ordering and equality of posit *values*.
///
/// None of these are implemented: they all fail with [`PositError::Unimplemented`]. Which is also
/// why [`Posit`] implements neither [`PartialEq`] nor [`PartialOrd`]. To check two posits for
/// identical fields, compare their [representations](Posit::rep) instead.
///
/// ```
/// # use exact_posit::{Family, Posit, PositError};
/// let one = Posit::one(Family::P8);
/// assert_eq!(one.try_eq(&one), Err(PositError::Unimplemented("equality")));
/// assert_eq!(one.rep(), Posit::one(Family::P8).rep());
/// ```
impl Posit {
  /// `self == other`. Not implemented.
  pub fn try_eq(&self, other: &Self) -> Result<bool> {
    unimplemented("equality", self, other)
  }

  /// `self != other`. Not implemented.
  pub fn try_ne(&self, other: &Self) -> Result<bool> {
    unimplemented("inequality", self, other)
  }

  /// `self < other`. Not implemented.
  pub fn try_lt(&self, other: &Self) -> Result<bool> {
    unimplemented("ordering", self, other)
  }

  /// `self <= other`. Not implemented.
  pub fn try_le(&self, other: &Self) -> Result<bool> {
    unimplemented("ordering", self, other)
  }

  /// `self > other`. Not implemented.
  pub fn try_gt(&self, other: &Self) -> Result<bool> {
    unimplemented("ordering", self, other)
  }

  /// `self >= other`. Not implemented.
  pub fn try_ge(&self, other: &Self) -> Result<bool> {
    unimplemented("ordering", self, other)
  }

  /// `floor(self / other)`. Not implemented.
  pub fn floor_div(&self, other: &Self) -> Result<Self> {
    unimplemented("floor division", self, other)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_unimplemented() {
    let a = Posit::one(Family::P16);
    let b = Posit::zero(Family::P16);
    assert_eq!(a.try_eq(&a), Err(PositError::Unimplemented("equality")));
    assert_eq!(a.try_ne(&b), Err(PositError::Unimplemented("inequality")));
    for result in [a.try_lt(&b), a.try_le(&b), a.try_gt(&b), a.try_ge(&b)] {
      assert_eq!(result, Err(PositError::Unimplemented("ordering")));
    }
    assert!(matches!(a.floor_div(&b), Err(PositError::Unimplemented("floor division"))));
  }

  #[test]
  fn even_across_families() {
    // Fails as unimplemented before anything looks at the families
    let a = Posit::one(Family::P16);
    let b = Posit::one(Family::P32);
    assert_eq!(a.try_lt(&b), Err(PositError::Unimplemented("ordering")));
  }
}
