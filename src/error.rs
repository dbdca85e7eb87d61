use thiserror::Error;

use crate::Family;

/// The error type for every fallible operation on a [Posit](crate::Posit).
///
/// None of these are recoverable at the call site: a failing operation never leaves a partially
/// built value behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositError {
  /// The constructor was given a kind of input it does not know how to interpret.
  #[error("cannot construct a posit from {0}")]
  ConstructionNotSupported(&'static str),

  /// Two posits (or a posit and an explicitly requested format) disagree on `nbits` or `es`.
  #[error("mismatched posit family: expected {expected}, found {found}")]
  MismatchedFamily { expected: Family, found: Family },

  /// The operation exists but deliberately has no implementation.
  #[error("{0} is not implemented")]
  Unimplemented(&'static str),

  /// The `(nbits, es)` pair is outside the supported range.
  #[error("unsupported posit family: nbits = {nbits}, es = {es}")]
  InvalidFamily { nbits: u32, es: u32 },

  /// Infinity has no exact rational value.
  #[error("posit is infinity")]
  IsInfinity,
}

/// Shorthand for results of this crate.
pub type Result<T> = core::result::Result<T, PositError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      PositError::ConstructionNotSupported("a bit string").to_string(),
      "cannot construct a posit from a bit string",
    );
    assert_eq!(
      PositError::MismatchedFamily { expected: Family::P8, found: Family::P16 }.to_string(),
      "mismatched posit family: expected posit<8, 2>, found posit<16, 2>",
    );
    assert_eq!(
      PositError::Unimplemented("comparison").to_string(),
      "comparison is not implemented",
    );
    assert_eq!(
      PositError::InvalidFamily { nbits: 1, es: 0 }.to_string(),
      "unsupported posit family: nbits = 1, es = 0",
    );
  }
}
