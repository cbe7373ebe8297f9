//! Numeric verification of reverse-mode gradients.
//!
//! The engine's only self-check: estimate each partial derivative with a
//! central difference and compare against the gradient the backward pass
//! produces. [`gradient_check`] reports the first input whose relative error
//! exceeds a tolerance, which localizes a bad chain-rule coefficient to the
//! operand that carries it.
//!
//! ```
//! use scalargrad::{gradient_check, Var};
//!
//! // f(x, y) = x·y + x
//! let f = |v: &[Var<f64>]| v[0].clone() * v[1].clone() + v[0].clone();
//! assert_eq!(gradient_check(f, &[3.0, 4.0], 1e-6, 1e-4), None);
//! ```

use crate::scalar::Scalar;
use crate::tape::Var;

/// Estimate the gradient of `f` at `inputs` by central differences.
///
/// For each input index `i`, evaluates
/// `(f(x + dx·eᵢ) − f(x − dx·eᵢ)) / (2·dx)` on a fresh throwaway tape per
/// probe, reading only the value. Returns one estimate per input.
///
/// ```
/// use scalargrad::{gradient_numerical, Var};
///
/// // f(x) = x² at x = 3
/// let g = gradient_numerical(|v: &[Var<f64>]| v[0].clone() * v[0].clone(), &[3.0], 1e-6);
/// assert!((g[0] - 6.0).abs() < 1e-4);
/// ```
pub fn gradient_numerical<T, F>(f: F, inputs: &[T], dx: T) -> Vec<T>
where
    T: Scalar,
    F: Fn(&[Var<T>]) -> Var<T>,
{
    let eval = |point: &[T]| -> T {
        let tape = Var::tape();
        let vars: Vec<_> = point
            .iter()
            .map(|&v| Var::variable_on(tape.clone(), v))
            .collect();
        f(&vars).value()
    };

    (0..inputs.len())
        .map(|i| {
            let mut hi = inputs.to_vec();
            let mut lo = inputs.to_vec();
            hi[i] = hi[i] + dx;
            lo[i] = lo[i] - dx;
            (eval(&hi) - eval(&lo)) / (dx + dx)
        })
        .collect()
}

/// Compute the exact gradient of `f` at `inputs` by reverse mode.
///
/// Wraps each input as a leaf on a fresh tape, evaluates `f` once, runs the
/// backward traversal from the result, and returns each leaf's gradient in
/// input order.
///
/// ```
/// use scalargrad::{gradient_backward, Var};
///
/// // f(x, y) = x·y + x at (3, 4): ∇f = (y + 1, x)
/// let f = |v: &[Var<f64>]| v[0].clone() * v[1].clone() + v[0].clone();
/// assert_eq!(gradient_backward(f, &[3.0, 4.0]), vec![5.0, 3.0]);
/// ```
pub fn gradient_backward<T, F>(f: F, inputs: &[T]) -> Vec<T>
where
    T: Scalar,
    F: Fn(&[Var<T>]) -> Var<T>,
{
    let tape = Var::tape();
    let vars: Vec<_> = inputs
        .iter()
        .map(|&v| Var::variable_on(tape.clone(), v))
        .collect();
    f(&vars).backward();
    vars.iter().map(Var::grad).collect()
}

/// Compare the backward gradient against the central-difference estimate.
///
/// Returns the index of the first input where the relative error
/// `|(numeric − backward) / backward|` exceeds `tol`, or `None` when every
/// component agrees within tolerance.
pub fn gradient_check<T, F>(f: F, inputs: &[T], dx: T, tol: T) -> Option<usize>
where
    T: Scalar,
    F: Fn(&[Var<T>]) -> Var<T>,
{
    let numeric = gradient_numerical(&f, inputs, dx);
    let backward = gradient_backward(&f, inputs);
    numeric
        .iter()
        .zip(backward.iter())
        .position(|(&n, &b)| ((n - b) / b).abs() > tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::Dual;

    const DX: f64 = 1e-6;
    const TOL: f64 = 1e-4;

    #[test]
    fn numeric_estimate_matches_closed_form() {
        // f(x, y) = x² + y·x at (3, 4): ∇f = (2x + y, x)
        let f = |v: &[Var<f64>]| {
            v[0].clone() * v[0].clone() + v[1].clone() * v[0].clone()
        };
        let g = gradient_numerical(f, &[3.0, 4.0], DX);
        assert!((g[0] - 10.0).abs() < TOL);
        assert!((g[1] - 3.0).abs() < TOL);
    }

    #[test]
    fn backward_matches_numeric_on_composite() {
        // f(x, y, z) = erf(x·y) + ln(z)·√y + z^x / y
        let f = |v: &[Var<f64>]| {
            let (x, y, z) = (v[0].clone(), v[1].clone(), v[2].clone());
            (x.clone() * y.clone()).erf()
                + v[2].clone().ln() * y.clone().sqrt()
                + z.pow(x) / y
        };
        assert_eq!(gradient_check(f, &[0.7, 2.5, 1.8], DX, TOL), None);
    }

    #[test]
    fn check_passes_for_correct_function() {
        let f = |v: &[Var<f64>]| v[0].clone() * v[1].clone() + v[0].clone();
        assert_eq!(gradient_check(f, &[3.0, 4.0], DX, TOL), None);
    }

    #[test]
    fn check_localizes_a_corrupted_coefficient() {
        // f(x, y) = x·y + x with the x-coefficient's sign flipped, the way
        // a buggy generated wrapper might record it.
        let bad = |v: &[Var<f64>]| {
            let (x, y) = (v[0].clone(), v[1].clone());
            Var::node(
                x.value() * y.value() + x.value(),
                vec![-(y.value() + 1.0), x.value()],
                &[x, y],
            )
        };
        assert_eq!(gradient_check(bad, &[3.0, 4.0], DX, TOL), Some(0));
    }

    #[test]
    fn oracle_runs_in_mixed_mode() {
        // f(x) = x³ over Dual values: grads carry second derivatives.
        let f = |v: &[Var<Dual<f64>>]| v[0].clone() * v[0].clone() * v[0].clone();
        let g = gradient_backward(f, &[Dual::variable(2.0)]);
        assert_eq!(g[0].value, 12.0); // f' = 3x²
        assert_eq!(g[0].deriv, 12.0); // f'' = 6x
    }

    #[test]
    fn erf_gradient_survives_the_oracle() {
        let f = |v: &[Var<f64>]| v[0].clone().erf();
        assert_eq!(gradient_check(f, &[0.0], DX, TOL), None);
        assert_eq!(gradient_check(f, &[1.2], DX, TOL), None);
    }
}
