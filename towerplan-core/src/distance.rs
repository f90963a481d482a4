//! Exact Euclidean distances between grid points.
//!
//! [`ExactDistance`] stores the *squared* distance as an integer and compares
//! it against other distances and plain numbers by squaring the other operand
//! instead of taking a square root. Boundary cases such as a city sitting
//! exactly on the coverage radius therefore classify correctly.
//!
//! The type implements no arithmetic: adding or scaling squared distances
//! does not correspond to adding or scaling the distances they represent, so
//! `a + b` on two distances does not compile.
//!
//! # Examples
//!
//! ```
//! use towerplan_core::ExactDistance;
//!
//! let d = ExactDistance::from_squared(25);
//! assert!(d == 5_i64);
//! assert!(d == 5.0_f64);
//! assert!(d < 5.5_f64);
//! assert!(d > -1_i64);
//! ```

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// Errors raised when constructing or comparing an [`ExactDistance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// A squared distance cannot be negative.
    #[error("squared distance must be non-negative, got {value}")]
    Negative {
        /// Rejected squared value.
        value: i128,
    },
    /// The other operand has a nonzero imaginary part and cannot be ordered.
    #[error("cannot order a distance against a complex number with a nonzero imaginary part")]
    InvalidComparison,
    /// The other operand is `NaN`.
    #[error("cannot order a distance against NaN")]
    Unordered,
    /// Only the second power of a distance is an exact integer.
    #[error("only the second power of a distance is supported, got exponent {exponent}")]
    UnsupportedExponent {
        /// Requested exponent.
        exponent: u32,
    },
}

/// A number a distance can be compared against.
///
/// The set is closed: integers, reals and complex numbers whose
/// imaginary part is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    /// An exact integer.
    Integer(i64),
    /// A real number.
    Real(f64),
    /// A complex number; only comparable when `im == 0`.
    Complex {
        /// Real component.
        re: f64,
        /// Imaginary component.
        im: f64,
    },
}

impl From<i64> for Magnitude {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Magnitude {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The length `sqrt(squared)` between two grid points.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExactDistance {
    squared: u128,
}

impl ExactDistance {
    /// Wrap a signed squared distance.
    ///
    /// # Errors
    /// Returns [`DistanceError::Negative`] when `squared < 0`.
    ///
    /// # Examples
    /// ```
    /// use towerplan_core::{DistanceError, ExactDistance};
    ///
    /// assert_eq!(ExactDistance::new(9)?.squared(), 9);
    /// assert!(ExactDistance::new(-10).is_err());
    /// # Ok::<(), DistanceError>(())
    /// ```
    pub fn new(squared: i128) -> Result<Self, DistanceError> {
        u128::try_from(squared)
            .map(Self::from_squared)
            .map_err(|_| DistanceError::Negative { value: squared })
    }

    /// Wrap an unsigned squared distance.
    #[must_use]
    pub const fn from_squared(squared: u128) -> Self {
        Self { squared }
    }

    /// The squared distance, equivalent to raising the distance to the power two.
    #[must_use]
    pub const fn squared(self) -> u128 {
        self.squared
    }

    /// Raise the distance to `exponent`.
    ///
    /// Only `exponent == 2` yields an exact integer, so it is the only
    /// exponent accepted.
    ///
    /// # Errors
    /// Returns [`DistanceError::UnsupportedExponent`] for any other exponent.
    pub const fn pow(self, exponent: u32) -> Result<u128, DistanceError> {
        if exponent == 2 {
            Ok(self.squared)
        } else {
            Err(DistanceError::UnsupportedExponent { exponent })
        }
    }

    /// Order this distance against any [`Magnitude`].
    ///
    /// Negative operands are smaller than every distance.
    ///
    /// # Errors
    /// Returns [`DistanceError::InvalidComparison`] for a complex operand
    /// with a nonzero imaginary part and [`DistanceError::Unordered`] for
    /// `NaN`.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use towerplan_core::{DistanceError, ExactDistance, Magnitude};
    ///
    /// let d = ExactDistance::from_squared(9);
    /// assert_eq!(d.compare(Magnitude::Complex { re: 4.0, im: 0.0 })?, Ordering::Less);
    /// assert_eq!(
    ///     d.compare(Magnitude::Complex { re: 4.0, im: 1.0 }),
    ///     Err(DistanceError::InvalidComparison),
    /// );
    /// # Ok::<(), DistanceError>(())
    /// ```
    pub fn compare(self, other: impl Into<Magnitude>) -> Result<Ordering, DistanceError> {
        match other.into() {
            Magnitude::Integer(value) => Ok(cmp_integer(self.squared, value)),
            Magnitude::Real(value) => cmp_real(self.squared, value).ok_or(DistanceError::Unordered),
            Magnitude::Complex { re, im } => {
                if im != 0.0 {
                    return Err(DistanceError::InvalidComparison);
                }
                cmp_real(self.squared, re).ok_or(DistanceError::Unordered)
            }
        }
    }

    /// Whether this distance equals `other`.
    ///
    /// Unlike [`ExactDistance::compare`], a complex operand with a nonzero
    /// imaginary part is simply unequal rather than an error.
    #[must_use]
    pub fn equals(self, other: impl Into<Magnitude>) -> bool {
        self.compare(other) == Ok(Ordering::Equal)
    }
}

impl fmt::Debug for ExactDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDistance({})", self.squared)
    }
}

impl fmt::Display for ExactDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sqrt({})", self.squared)
    }
}

impl PartialEq<i64> for ExactDistance {
    fn eq(&self, other: &i64) -> bool {
        cmp_integer(self.squared, *other) == Ordering::Equal
    }
}

impl PartialOrd<i64> for ExactDistance {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(cmp_integer(self.squared, *other))
    }
}

impl PartialEq<u32> for ExactDistance {
    fn eq(&self, other: &u32) -> bool {
        *self == i64::from(*other)
    }
}

impl PartialOrd<u32> for ExactDistance {
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        self.partial_cmp(&i64::from(*other))
    }
}

impl PartialEq<f64> for ExactDistance {
    fn eq(&self, other: &f64) -> bool {
        cmp_real(self.squared, *other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for ExactDistance {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        cmp_real(self.squared, *other)
    }
}

fn cmp_integer(squared: u128, value: i64) -> Ordering {
    if value < 0 {
        return Ordering::Greater;
    }
    let magnitude = u128::from(value.unsigned_abs());
    squared.cmp(&(magnitude * magnitude))
}

/// Compare `squared` against `value * value` without rounding.
///
/// A finite `f64` is `mantissa * 2^exponent` exactly, so its square is
/// `mantissa^2 * 2^(2 * exponent)` with `mantissa^2 < 2^106`. Both sides are
/// scaled to integers before comparing.
fn cmp_real(squared: u128, value: f64) -> Option<Ordering> {
    if value.is_nan() {
        return None;
    }
    if value < 0.0 {
        return Some(Ordering::Greater);
    }
    if value.is_infinite() {
        return Some(Ordering::Less);
    }
    let (mantissa, exponent) = decompose(value);
    if mantissa == 0 {
        return Some(squared.cmp(&0));
    }
    let mantissa_sq = u128::from(mantissa) * u128::from(mantissa);
    let shift = exponent.unsigned_abs() * 2;
    if exponent >= 0 {
        if shift >= 128 || mantissa_sq.leading_zeros() < shift {
            return Some(Ordering::Less);
        }
        Some(squared.cmp(&(mantissa_sq << shift)))
    } else {
        if squared == 0 {
            return Some(Ordering::Less);
        }
        if shift >= 128 || squared.leading_zeros() < shift {
            return Some(Ordering::Greater);
        }
        Some((squared << shift).cmp(&mantissa_sq))
    }
}

/// Split a finite, non-negative `f64` into an odd mantissa and a binary exponent.
fn decompose(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the exponent field is masked to 11 bits"
    )]
    let biased = ((bits >> 52) & 0x7ff) as u16;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mut mantissa, mut exponent) = if biased == 0 {
        (fraction, -1074_i32)
    } else {
        (fraction | (1_u64 << 52), i32::from(biased) - 1075)
    };
    if mantissa != 0 {
        let zeros = mantissa.trailing_zeros();
        mantissa >>= zeros;
        exponent += i32::try_from(zeros).unwrap_or(0);
    }
    (mantissa, exponent)
}
