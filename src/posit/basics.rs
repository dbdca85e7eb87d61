use super::*;

use crate::{PositError, Result};

/// The kinds of input a [`Posit`] can be [built](Posit::build) from.
///
/// Only [`Source::Default`], [`Source::Value`] and [`Source::Bits`] are supported; the others are
/// recognised so that they fail with [`PositError::ConstructionNotSupported`] rather than being
/// silently misinterpreted.
#[derive(Clone, Copy, Debug)]
pub enum Source<'a> {
  /// No input: zero.
  Default,
  /// A copy of another posit.
  Value(&'a Posit),
  /// A raw bit pattern.
  Bits(u128),
  /// A textual bit pattern such as `"0b01000000"`. Not implemented.
  BitString(&'a str),
  /// An integer *value* (as opposed to a bit pattern). Not supported.
  Integer(i128),
  /// A floating point value. Not supported.
  Float(f64),
}

impl Posit {
  /// Zero of the default family (32 bits, 2 exponent bits).
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a posit from any [`Source`], with an optional explicit `nbits` and `es`. When absent,
  /// `nbits` and `es` are those of the source value, if it has one, or 32 and 2 otherwise.
  ///
  /// ```
  /// # use exact_posit::{Family, Posit, PositError, Source};
  /// let one = Posit::build(Source::Bits(0x40), Some(8), Some(0))?;
  /// assert_eq!(one.family(), Family::new(8, 0)?);
  ///
  /// let copy = Posit::build(Source::Value(&one), None, Some(0))?;
  /// assert_eq!(copy.rep(), one.rep());
  ///
  /// assert!(matches!(
  ///   Posit::build(Source::Value(&one), Some(16), None),
  ///   Err(PositError::MismatchedFamily { .. }),
  /// ));
  /// assert!(matches!(
  ///   Posit::build(Source::Float(1.5), None, None),
  ///   Err(PositError::ConstructionNotSupported(_)),
  /// ));
  /// # Ok::<(), exact_posit::PositError>(())
  /// ```
  pub fn build(source: Source<'_>, nbits: Option<u32>, es: Option<u32>) -> Result<Self> {
    let result = match source {
      Source::Default => Family::resolve(nbits, es).map(Self::zero),
      Source::Value(value) => Self::from_value(value, nbits, es),
      Source::Bits(bits) => Family::resolve(nbits, es).map(|family| Self::from_bits(bits, family)),
      Source::BitString(s) => Family::resolve(nbits, es).and_then(|family| Self::from_bit_string(s, family)),
      Source::Integer(_) => Err(PositError::ConstructionNotSupported("an integer value")),
      Source::Float(_) => Err(PositError::ConstructionNotSupported("a floating point value")),
    };
    if let Err(e) = &result {
      tracing::debug!(?source, ?nbits, ?es, "cannot build posit: {e}");
    }
    result
  }

  /// Copy `value`. If `nbits` or `es` are given, they must be the same as `value`'s (conversion
  /// between families is not supported).
  pub fn from_value(value: &Posit, nbits: Option<u32>, es: Option<u32>) -> Result<Self> {
    let family = value.family();
    let requested = Family::unchecked(
      nbits.unwrap_or(family.nbits()),
      es.unwrap_or(family.es()),
    );
    family.check(requested)?;
    Ok(value.clone())
  }

  /// Parse a textual bit pattern.
  ///
  /// Not implemented: always fails with [`PositError::ConstructionNotSupported`].
  pub fn from_bit_string(_bits: &str, _family: Family) -> Result<Self> {
    Err(PositError::ConstructionNotSupported("a bit string"))
  }

  /// The underlying representation.
  #[inline]
  pub fn rep(&self) -> &Rep {
    &self.0
  }

  /// Consume `self`, returning the underlying representation.
  #[inline]
  pub fn into_rep(self) -> Rep {
    self.0
  }

  /// The format of `self`.
  #[inline]
  pub fn family(&self) -> Family {
    self.0.family
  }

  /// Whether `self` is zero.
  #[inline]
  pub fn is_zero(&self) -> bool {
    self.0.is_zero()
  }

  /// Whether `self` is (unsigned) infinity.
  #[inline]
  pub fn is_infinity(&self) -> bool {
    self.0.is_infinity()
  }

  /// Whether `self` is neither zero nor infinity.
  #[inline]
  pub fn is_normal(&self) -> bool {
    self.0.is_normal()
  }
}

impl Default for Posit {
  /// Zero, with 32 bits and 2 exponent bits.
  fn default() -> Self {
    Self::zero(Family::default())
  }
}
