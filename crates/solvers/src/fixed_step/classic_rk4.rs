use odestep_core::Derivative;

/// Takes one classical fourth-order Runge–Kutta step.
pub(super) fn step<F: Derivative>(f: &F, x: f64, t: f64, h: f64) -> f64 {
    let half = 0.5 * h;

    let k1 = h * f.rate(x, t);
    let k2 = h * f.rate(x + 0.5 * k1, t + half);
    let k3 = h * f.rate(x + 0.5 * k2, t + half);
    let k4 = h * f.rate(x + k3, t + h);

    x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn integrates_cubic_in_time_exactly() {
        // Simpson's rule is exact for cubics, and RK4 reduces to it when f
        // depends on t only.
        let f = |_x: f64, t: f64| 4.0 * t.powi(3);
        let next = step(&f, 0.0, 0.0, 2.0);
        assert_relative_eq!(next, 16.0);
    }

    #[test]
    fn matches_taylor_series_of_exponential() {
        // For f = x, one step gives 1 + h + h²/2 + h³/6 + h⁴/24.
        let h = 0.5_f64;
        let expected = 1.0 + h + h.powi(2) / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        let next = step(&|x: f64, _t: f64| x, 1.0, 0.0, h);
        assert_relative_eq!(next, expected, epsilon = 1e-15);
    }
}
