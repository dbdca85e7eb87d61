//! This crate provides a slow, obviously-correct reference implementation of
//! [Posit arithmetic](https://posithub.org/docs/posit_standard-2.pdf), intended as an oracle to
//! validate optimised posit implementations against.
//!
//! # Introduction
//!
//! Posits are an alternative floating point format proposed by John Gustafson in 2017. Instead of
//! a fixed-width exponent, they have a variable-length *regime* field which trades dynamic range
//! against precision: numbers close to 1 get more fraction bits, very big or very small numbers
//! get fewer.
//!
//! Every arithmetic operation in this crate follows the same protocol:
//!
//!   1. Decompose the operands into exact signed integers `x` with an explicit power-of-two scale
//!      `m`, such that the value is `x × 2^m`.
//!   2. Compute the result *exactly*, with arbitrary precision integers (no rounding at all).
//!   3. Renormalise the exact result back into posit fields (sign, regime, exponent, fraction),
//!      which may be far wider than the format allows.
//!   4. Round-trip through the codec: encode to a bit pattern, then decode. The encoder is the
//!      **single** authority for rounding and saturation.
//!
//! Nothing about this is fast. It is, however, very easy to convince oneself it is right.
//!
//! # Usage
//!
//! ```
//! use exact_posit::{Family, Posit};
//!
//! // An 8-bit posit with 0 exponent bits; 0b01000000 is the number 1.
//! let family = Family::new(8, 0)?;
//! let one = Posit::from_bits(0b0100_0000, family);
//!
//! let two = (&one + &one)?;
//! assert_eq!(two.to_bits(), 0b0110_0000);
//! assert_eq!(two.to_string(), "2");
//!
//! // Zero and (unsigned) infinity are absorbing in the usual ways.
//! let zero = Posit::zero(family);
//! let inf = Posit::infinity(family);
//! assert!((&inf * &zero)?.is_infinity());
//! assert!((&one / &zero)?.is_infinity());
//! assert!((&zero / &one)?.is_zero());
//! # Ok::<(), exact_posit::PositError>(())
//! ```
//!
//! Comparisons are deliberately not implemented: [`Posit`] is neither [`PartialEq`] nor
//! [`PartialOrd`], and the [`Posit::try_eq`] family of methods always fail. To compare results
//! field-wise, compare their representations ([`Posit::rep`]).

mod error;
mod posit;

pub use error::{PositError, Result};
pub use posit::Posit;
pub use posit::family::Family;
pub use posit::rep::{Kind, Normal, Rep};
pub use posit::basics::Source;

/// Number of cases for proptest-based tests.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x2000} else {0x1_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
