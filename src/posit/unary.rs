use super::*;

impl Posit {
  /// Returns the posit value of the lexicographic successor of `self`'s representation,
  /// wrapping around within `nbits`.
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce an
  /// infinity output on an infinity input.
  ///
  /// Standard: "**next**".
  #[inline]
  pub fn next(&self) -> Self {
    let family = self.family();
    Self::from_bits(self.to_bits().wrapping_add(1) & family.mask(), family)
  }

  /// Returns the posit value of the lexicographic predecessor of `self`'s representation,
  /// wrapping around within `nbits`.
  ///
  /// Standard: "**prior**".
  #[inline]
  pub fn prior(&self) -> Self {
    let family = self.family();
    Self::from_bits(self.to_bits().wrapping_sub(1) & family.mask(), family)
  }

  /// Return `-self`. Only the sign of a normal posit changes; zero and infinity are their own
  /// negations. Never rounds.
  pub fn neg(&self) -> Self {
    match &self.0.kind {
      Kind::Zero | Kind::Infinity => self.clone(),
      Kind::Normal(n) => Self(Rep {
        family: self.family(),
        kind: Kind::Normal(Normal { sign: !n.sign, ..n.clone() }),
      }),
    }
  }
}

impl core::ops::Neg for Posit {
  type Output = Posit;

  /// Standard: "**negate**".
  #[inline]
  fn neg(self) -> Self::Output {
    Posit::neg(&self)
  }
}

impl core::ops::Neg for &Posit {
  type Output = Posit;

  /// Standard: "**negate**".
  #[inline]
  fn neg(self) -> Self::Output {
    Posit::neg(self)
  }
}
