use approx::assert_abs_diff_eq;
use numint::core::helpers::{linspace, partition, simpson_parabola};

use crate::test_helpers::assert_float_iters_equal;

#[test]
fn linspace_edges() {
    assert!(linspace(0f64, 1f64, 0).is_empty());
    assert_eq!(linspace(0.5, 1f64, 1), vec![0.5]);
    assert_eq!(linspace(-2f64, 2f64, 2), vec![-2f64, 2f64]);
}

#[test]
fn partition_breakpoints() {
    let xv = partition(-2f64, 2f64, 10);
    assert_eq!(xv.len(), 11);
    assert_eq!(xv[10], 2f64);
    assert_float_iters_equal(
        xv.into_iter(),
        (0..11).map(|i| -2f64 + 0.4 * i as f64),
        1e-14,
    );
}

#[test]
fn partition_ends_exactly_at_upper_bound() {
    let xv = partition(0.1, 0.7, 3);
    assert_eq!(xv[0], 0.1);
    assert_eq!(xv[3], 0.7);
}

#[test]
fn parabola_interpolates() {
    let f = |x: f64| 3f64 * x * x - x + 2f64;
    let (a, b) = (-1f64, 2f64);
    let samples = [f(a), f((a + b) / 2f64), f(b)];
    for x in [-1f64, -0.3, 0.5, 1.7, 2f64] {
        assert_abs_diff_eq!(simpson_parabola(a, b, samples, x), f(x), epsilon = 1e-12);
    }
}
