//! Continuous distributions used by the alternative price walk
//!
//! Beta draws are built from two Gamma draws (Marsaglia-Tsang), which in
//! turn use Box-Muller normals. Everything consumes the same xorshift
//! stream, so the draws stay reproducible.

use super::xorshift::RngManager;

impl RngManager {
    /// Standard normal draw (Box-Muller, cosine branch)
    pub fn standard_normal(&mut self) -> f64 {
        let u1 = self.next_open_f64();
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Gamma(shape, 1) draw
    ///
    /// # Panics
    /// Panics if `shape` is not strictly positive
    pub fn gamma(&mut self, shape: f64) -> f64 {
        assert!(shape > 0.0, "gamma shape must be positive");

        if shape < 1.0 {
            // Boost to shape + 1 and scale back down
            let u = self.next_open_f64();
            return self.gamma(shape + 1.0) * u.powf(1.0 / shape);
        }

        let d = shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();
        loop {
            let x = self.standard_normal();
            let v = 1.0 + c * x;
            if v <= 0.0 {
                continue;
            }
            let v = v * v * v;
            let u = self.next_open_f64();
            if u.ln() < 0.5 * x * x + d - d * v + d * v.ln() {
                return d * v;
            }
        }
    }

    /// Beta(alpha, beta) draw in [0, 1]
    pub fn beta(&mut self, alpha: f64, beta: f64) -> f64 {
        let x = self.gamma(alpha);
        let y = self.gamma(beta);
        if x + y == 0.0 {
            // Both draws underflowed
            return 0.5;
        }
        x / (x + y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta_in_unit_interval() {
        let mut rng = RngManager::new(2024);
        for _ in 0..2000 {
            let b = rng.beta(0.6, 1.4);
            assert!((0.0..=1.0).contains(&b));
        }
    }

    #[test]
    fn test_beta_mean_close_to_analytic() {
        let mut rng = RngManager::new(11);
        let (alpha, beta) = (2.0, 3.0);
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| rng.beta(alpha, beta)).sum::<f64>() / n as f64;
        assert!((mean - alpha / (alpha + beta)).abs() < 0.01, "mean = {}", mean);
    }

    #[test]
    #[should_panic(expected = "gamma shape must be positive")]
    fn test_gamma_rejects_zero_shape() {
        RngManager::new(1).gamma(0.0);
    }
}
