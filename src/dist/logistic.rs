use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// The Logistic distribution with location `mu` and scale `s`.
#[derive(Debug, Clone)]
pub struct Logistic {
    pub mu: f64,
    pub s: f64,
}

impl Distribution for Logistic {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [mu, s] = expect_params::<2>("logistic", params)?;
        if !mu.is_finite() || !(s > 0.0 && s.is_finite()) {
            return Err(Error::invalid(
                "logistic",
                format!("mu must be finite and s > 0, got mu={mu}, s={s}"),
            ));
        }
        Ok(Logistic { mu, s })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.s]
    }
}

impl DistributionMethods for Logistic {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        // Symmetric form avoids overflow in both tails
        let e = (-((x - self.mu) / self.s).abs()).exp();
        e / (self.s * (1.0 + e) * (1.0 + e))
    }

    fn cdf(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-(x - self.mu) / self.s).exp())
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, f64::NEG_INFINITY, f64::INFINITY, |p| {
            self.mu + self.s * (p / (1.0 - p)).ln()
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.mu)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.s * self.s * PI * PI / 3.0)
    }

    fn median(&self) -> Option<f64> {
        Some(self.mu)
    }
}
