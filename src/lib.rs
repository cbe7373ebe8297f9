//! Automatic differentiation for scalar functions.
//!
//! This crate computes derivatives two complementary ways:
//!
//! - **Forward mode**: [`Dual`] numbers carry a value and its directional
//!   derivative through each operation in one pass.
//! - **Reverse mode**: [`Var`] handles record a dependency graph on a
//!   [`Tape`] as the function executes; [`Var::backward`] then accumulates
//!   the gradient of every input in a single queue-driven traversal.
//!
//! The two modes compose: a reverse tape over `Dual` values differentiates
//! a derivative, yielding second-order (and, by further nesting, higher)
//! derivatives from the same machinery.
//!
//! # Forward mode
//!
//! ```
//! use scalargrad::Dual;
//!
//! // f(x) = x² + 2x at x = 3
//! let x = Dual::variable(3.0);
//! let f = x * x + x * 2.0;
//!
//! assert_eq!(f.value, 15.0);  // f(3)
//! assert_eq!(f.deriv, 8.0);   // f'(3) = 2x + 2
//! ```
//!
//! # Reverse mode
//!
//! ```
//! use scalargrad::Var;
//!
//! let tape = Var::tape();
//! let x = Var::variable_on(tape.clone(), 3.0);
//! let y = Var::variable_on(tape, 5.0);
//!
//! // z = (x + y)(x − y) — a diamond: both factors share both leaves.
//! let z = (x.clone() + y.clone()) * (x.clone() - y.clone());
//! z.backward();
//!
//! assert_eq!(x.grad(), 6.0);   // ∂z/∂x = 2x
//! assert_eq!(y.grad(), -10.0); // ∂z/∂y = -2y
//! ```
//!
//! # Higher-order derivatives
//!
//! ```
//! use scalargrad::{Dual, Var};
//!
//! // f(x) = x³ at x = 2, with the forward seed set to 1
//! let tape = Var::tape();
//! let x = Var::variable_on(tape, Dual::variable(2.0));
//! let f = x.clone() * x.clone() * x.clone();
//! f.backward();
//!
//! assert_eq!(x.grad().value, 12.0);  // f'(2) = 3x²
//! assert_eq!(x.grad().deriv, 12.0);  // f''(2) = 6x
//! ```
//!
//! # Gradient checking
//!
//! Reverse-mode results can be verified against a central-difference
//! estimate; see [`gradient_check`]:
//!
//! ```
//! use scalargrad::{gradient_check, Var};
//!
//! let f = |v: &[Var<f64>]| (v[0].clone() * v[1].clone()).erf() + v[0].clone().sqrt();
//! assert_eq!(gradient_check(f, &[0.9, 1.3], 1e-6, 1e-4), None);
//! ```

pub mod check;
pub mod dual;
pub mod scalar;
pub mod tape;

pub use check::{gradient_backward, gradient_check, gradient_numerical};
pub use dual::Dual;
pub use scalar::Scalar;
pub use tape::{Tape, Var};
