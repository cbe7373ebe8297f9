//! Walkthrough of reverse-mode gradients and the numeric cross-check.
//!
//! Run with: `cargo run --example gradient_check`

use scalargrad::{gradient_backward, gradient_check, gradient_numerical, Var};

fn main() {
    println!("=== Reverse-mode gradients, verified numerically ===\n");

    // f(x, y) = x·y + x at (3, 4); ∇f = (y + 1, x)
    println!("f(x, y) = x·y + x at (3, 4)");
    let f = |v: &[Var<f64>]| v[0].clone() * v[1].clone() + v[0].clone();
    let point = [3.0, 4.0];

    let exact = gradient_backward(f, &point);
    println!("  backward: ∂f/∂x = {} (expected 5)", exact[0]);
    println!("  backward: ∂f/∂y = {} (expected 3)", exact[1]);

    let estimate = gradient_numerical(f, &point, 1e-6);
    println!("  central difference: {:?}", estimate);

    match gradient_check(f, &point, 1e-6, 1e-4) {
        None => println!("  gradient_check: all components within tolerance\n"),
        Some(i) => println!("  gradient_check: mismatch at input {i}\n"),
    }

    // A thornier composite: g(x, y) = erf(x·y) + ln(y)·√x
    println!("g(x, y) = erf(x·y) + ln(y)·√x at (0.8, 2.5)");
    let g = |v: &[Var<f64>]| {
        (v[0].clone() * v[1].clone()).erf() + v[1].clone().ln() * v[0].clone().sqrt()
    };
    let point = [0.8, 2.5];

    let exact = gradient_backward(g, &point);
    let estimate = gradient_numerical(g, &point, 1e-6);
    println!("  backward:           {:?}", exact);
    println!("  central difference: {:?}", estimate);
    match gradient_check(g, &point, 1e-6, 1e-4) {
        None => println!("  gradient_check: all components within tolerance\n"),
        Some(i) => println!("  gradient_check: mismatch at input {i}\n"),
    }

    // A deliberately wrong graph: the ∂/∂x coefficient of x·y + x with its
    // sign flipped, recorded through the raw node constructor.
    println!("same f, but with the ∂f/∂x coefficient sign-flipped");
    let bad = |v: &[Var<f64>]| {
        let (x, y) = (v[0].clone(), v[1].clone());
        Var::node(
            x.value() * y.value() + x.value(),
            vec![-(y.value() + 1.0), x.value()],
            &[x, y],
        )
    };
    match gradient_check(bad, &[3.0, 4.0], 1e-6, 1e-4) {
        None => println!("  gradient_check: all components within tolerance"),
        Some(i) => println!("  gradient_check: mismatch at input {i} (expected 0)"),
    }
}
