//! The numeric capability required of every differentiable value.
//!
//! The engine is generic over the scalars it differentiates: plain floats
//! for ordinary first-order gradients, or [`Dual`](crate::Dual) values when
//! one differentiation mode is nested inside another. [`Scalar`] names the
//! closed set of operations the chain-rule tables need — arithmetic,
//! identities, and the unary functions with known derivative rules — so that
//! both the forward value type and the reverse tape can be written once.

use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric type the differentiation engine can operate on.
///
/// Implemented for `f64` and `f32`, and for [`Dual<T>`](crate::Dual) over
/// any `Scalar` (which is what makes nested, higher-order differentiation
/// work: a reverse tape over `Dual<f64>` runs the same code as one over
/// `f64`).
///
/// Comparisons via [`PartialOrd`] are value comparisons; for `Dual` they
/// inspect the primal value only. Domain failures (`ln` of a non-positive
/// value, `sqrt` of a negative, division by zero) are not special-cased
/// anywhere in the engine — they produce whatever the underlying float
/// produces (`inf`/`NaN`) at the offending operation.
///
/// # Example
///
/// ```
/// use scalargrad::Scalar;
///
/// fn norm<T: Scalar>(x: T, y: T) -> T {
///     (x * x + y * y).sqrt()
/// }
///
/// assert_eq!(norm(3.0_f64, 4.0), 5.0);
/// assert_eq!(norm(3.0_f32, 4.0), 5.0);
/// ```
pub trait Scalar:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
{
    /// Lift an `f64` constant into this type.
    fn from_f64(c: f64) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Exponential `e^self`.
    fn exp(self) -> Self;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Raise to a power: `self^exp`.
    fn powf(self, exp: Self) -> Self;

    /// The error function `erf(self)`.
    fn erf(self) -> Self;
}

macro_rules! impl_scalar_for_float {
    ($t:ty, $erf:path) => {
        impl Scalar for $t {
            fn from_f64(c: f64) -> Self {
                c as $t
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn exp(self) -> Self {
                <$t>::exp(self)
            }

            fn ln(self) -> Self {
                <$t>::ln(self)
            }

            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            fn powf(self, exp: Self) -> Self {
                <$t>::powf(self, exp)
            }

            fn erf(self) -> Self {
                $erf(self)
            }
        }
    };
}

impl_scalar_for_float!(f64, libm::erf);
impl_scalar_for_float!(f32, libm::erff);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_impls_agree_with_std() {
        assert_eq!(2.0_f64.powf(3.0), 8.0);
        assert_eq!(Scalar::sqrt(9.0_f64), 3.0);
        assert_eq!(Scalar::abs(-1.5_f64), 1.5);
        assert_eq!(f64::from_f64(0.5), 0.5);
        assert_eq!(f32::from_f64(0.5), 0.5_f32);
    }

    #[test]
    fn erf_is_odd_and_saturates() {
        let e = Scalar::erf(1.0_f64);
        assert!((e - 0.8427007929497149).abs() < 1e-12);
        assert_eq!(Scalar::erf(-1.0_f64), -e);
        assert_eq!(Scalar::erf(0.0_f64), 0.0);
        assert!((Scalar::erf(6.0_f64) - 1.0).abs() < 1e-12);
    }
}
