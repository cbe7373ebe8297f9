//! Second derivatives by nesting forward mode inside reverse mode.
//!
//! A reverse tape over `Dual` values runs the identical backward traversal,
//! but every gradient carries a derivative of its own: `grad().value` is f′
//! and `grad().deriv` is f″.
//!
//! Run with: `cargo run --example nested_derivatives`

use scalargrad::{Dual, Var};

fn main() {
    println!("=== Reverse over forward: second derivatives ===\n");

    // f(x) = x³ at x = 2: f' = 3x² = 12, f'' = 6x = 12
    println!("f(x) = x³ at x = 2");
    let tape = Var::tape();
    let x = Var::variable_on(tape, Dual::variable(2.0));
    let f = x.clone() * x.clone() * x.clone();
    f.backward();
    println!("  f(2)   = {} (expected 8)", f.value().value);
    println!("  f'(2)  = {} (expected 12)", x.grad().value);
    println!("  f''(2) = {} (expected 12)\n", x.grad().deriv);

    // g(x) = erf(x) at x = 1: g' = (2/√π)e^(−x²), g'' = −2x·g'
    println!("g(x) = erf(x) at x = 1");
    let tape = Var::tape();
    let x = Var::variable_on(tape, Dual::variable(1.0));
    let g = x.clone().erf();
    g.backward();
    let d = x.grad();
    println!("  g'(1)  = {} (expected ≈ 0.4151)", d.value);
    println!("  g''(1) = {} (expected ≈ -0.8302)\n", d.deriv);

    // h(x) = 1/x at x = 2, nested twice over plain forward duals:
    // Dual<Dual<f64>> tracks h, h', and h'' in one pass.
    println!("h(x) = 1/x at x = 2, forward-over-forward");
    let x: Dual<Dual<f64>> = Dual::new(Dual::new(2.0, 1.0), Dual::new(1.0, 0.0));
    let h = x.recip();
    println!("  h(2)   = {} (expected 0.5)", h.value.value);
    println!("  h'(2)  = {} (expected -0.25)", h.value.deriv);
    println!("  h''(2) = {} (expected 0.25)", h.deriv.deriv);
}
