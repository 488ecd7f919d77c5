use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::PI;

/// The Levy distribution with location `mu` and scale `c`.
///
/// Its mean and variance are infinite.
#[derive(Debug, Clone)]
pub struct Levy {
    pub mu: f64,
    pub c: f64,
}

impl Distribution for Levy {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [mu, c] = expect_params::<2>("levy", params)?;
        if !mu.is_finite() || !(c > 0.0 && c.is_finite()) {
            return Err(Error::invalid(
                "levy",
                format!("mu must be finite and c > 0, got mu={mu}, c={c}"),
            ));
        }
        Ok(Levy { mu, c })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.c]
    }
}

impl DistributionMethods for Levy {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= self.mu || x.is_infinite() {
            return 0.0;
        }
        let d = x - self.mu;
        (self.c / (2.0 * PI)).sqrt() * (-self.c / (2.0 * d)).exp() / d.powf(1.5)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.mu {
            return 0.0;
        }
        erfc((self.c / (2.0 * (x - self.mu))).sqrt())
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, self.mu, f64::INFINITY, |p| {
            let e = erfc_inv(p);
            self.mu + self.c / (2.0 * e * e)
        })
    }

    fn mean(&self) -> Option<f64> {
        None
    }

    fn variance(&self) -> Option<f64> {
        None
    }

    fn median(&self) -> Option<f64> {
        Some(self.ppf(0.5))
    }
}
