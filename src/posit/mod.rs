//! This module and its submodules contain a reference implementation of Posit arithmetic, for
//! posits of any width up to 128 bits and any exponent width up to 16, chosen at runtime.
//!
//! Unlike an optimised implementation, which works on the bit pattern directly and has to be
//! very careful about every bit it shifts out, here every operation works on the *fields* of a
//! posit ([`Rep`]) and computes its result exactly with arbitrary precision integers, only
//! rounding at the very end (see [`Rep::encode`]). The point is to be obviously correct, so that
//! other implementations can be checked against this one.
//!
//! Some notation used in the comments:
//!
//!   - **h, f**: the fraction length and fraction bits of a [`Normal`], so the significand is
//!     `2^h + f`.
//!   - **Scale m**: the power of two such that a value is `significand × 2^m`.
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.

use family::Family;
use rep::{Kind, Normal, Rep};

/// A posit number of a runtime-chosen [`Family`].
///
/// A `Posit` exclusively owns its [`Rep`]resentation, and is never mutated: every operation
/// returns a new `Posit`. Binary operations return a [`Result`](crate::Result) since both
/// operands have to be of the same family.
///
/// Examples:
///
/// ```
/// # use exact_posit::{Family, Posit};
/// let p8 = Posit::from_bits(0b0100_1000, Family::P8);
/// assert_eq!(p8.to_string(), "2");
/// assert_eq!((-&p8).to_string(), "-2");
/// assert_eq!(p8.mul(&p8)?.to_string(), "4");
/// # Ok::<(), exact_posit::PositError>(())
/// ```
#[derive(Clone)]
pub struct Posit(Rep);

/// The representation: [`Family`], [`Kind`], [`Normal`]
pub(crate) mod rep;

/// Posit formats
pub(crate) mod family;

/// Construction and basic accessors
pub(crate) mod basics;

/// Canonical zero, infinity, skeletons
mod consts;

/// Bit pattern → representation
mod decode;

/// Representation → bit pattern, and rounding
mod encode;

/// Display and Debug
mod fmt;

/// Arithmetic
mod ops;

/// Negation, next, prior
mod unary;

/// Comparisons (unimplemented)
mod cmp;

/// Exact conversion to and from rational numbers
mod rational;
