use approx::assert_abs_diff_eq;
use numint::{
    core::integrand::{Antiderivative, Gaussian, Integrand},
    errors::IntegError,
};

use crate::test_helpers::std_normal_pdf;

#[test]
fn gaussian_density() {
    let g = Gaussian::new(0f64, 1f64).unwrap();
    for x in [-3f64, -1f64, 0f64, 0.25, 2f64] {
        assert_abs_diff_eq!(g.eval(x), std_normal_pdf(x), epsilon = 1e-14);
    }

    let shifted = Gaussian::new(1f64, 2f64).unwrap();
    assert_abs_diff_eq!(shifted.eval(3f64), std_normal_pdf(1f64) / 2f64, epsilon = 1e-14);
    assert_eq!(shifted.mu(), 1f64);
    assert_eq!(shifted.sigma(), 2f64);
}

#[test]
fn gaussian_exact_integral() {
    let g = Gaussian::new(0f64, 1f64).unwrap();
    assert_abs_diff_eq!(g.exact_integral(-2f64, 2f64), 0.9544997361036416, epsilon = 1e-10);
    assert_abs_diff_eq!(g.exact_integral(0f64, 2f64), 0.4772498680518208, epsilon = 1e-10);
    assert_abs_diff_eq!(g.cdf(0f64), 0.5, epsilon = 1e-15);

    let narrow = Gaussian::new(1f64, 0.5).unwrap();
    assert_abs_diff_eq!(narrow.exact_integral(1f64, 3f64), 0.4999683287581669, epsilon = 1e-10);
}

#[test]
fn zero_sigma() {
    assert_eq!(
        Gaussian::new(0f64, 0f64),
        Err(IntegError::InvalidScaleParameter(0f64))
    );
}

#[test]
fn negative_and_non_finite_sigma() {
    assert!(matches!(
        Gaussian::new(0f64, -1f64),
        Err(IntegError::InvalidScaleParameter(_))
    ));
    assert!(matches!(
        Gaussian::new(0f64, f64::INFINITY),
        Err(IntegError::InvalidScaleParameter(_))
    ));
}

#[test]
fn non_finite_mu() {
    assert!(matches!(
        Gaussian::new(f64::NAN, 1f64),
        Err(IntegError::InvalidLocationParameter(_))
    ));
}

#[test]
fn antiderivative_integrand() {
    let f = Antiderivative::new(|x: f64| x.cos(), |x: f64| x.sin());
    assert_eq!(f.eval(0f64), 1f64);
    assert_abs_diff_eq!(
        f.exact_integral(0f64, std::f64::consts::FRAC_PI_2),
        1f64,
        epsilon = 1e-15
    );
}
