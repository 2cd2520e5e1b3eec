use peroxide::prelude::linspace as peroxide_linspace;

/// `n` evenly spaced points from `a` to `b`, with the last point exactly `b`.
///
/// Returns an empty vector for `n == 0` and `[a]` for `n == 1`.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let mut v = peroxide_linspace(a, b, n);
            v[n - 1] = b;
            v
        }
    }
}

/// Breakpoints of a uniform partition of `[a, b]` into `n` subintervals.
pub fn partition(a: f64, b: f64, n: usize) -> Vec<f64> {
    linspace(a, b, n + 1)
}

/// Evaluates the parabola through `(a, fa)`, `((a + b) / 2, fm)` and `(b, fb)` at `x`.
pub fn simpson_parabola(a: f64, b: f64, [fa, fm, fb]: [f64; 3], x: f64) -> f64 {
    let m = (a + b) / 2f64;
    fa * (x - m) * (x - b) / ((a - m) * (a - b))
        + fm * (x - a) * (x - b) / ((m - a) * (m - b))
        + fb * (x - a) * (x - m) / ((b - a) * (b - m))
}
