use crate::dist::{
    expect_params, solve_quantile, support_ppf, Category, Distribution, DistributionMethods,
};
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// The raised cosine distribution on [mu - s, mu + s].
#[derive(Debug, Clone)]
pub struct Cosine {
    pub mu: f64,
    /// Half-width of the support.
    pub s: f64,
}

impl Distribution for Cosine {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [mu, s] = expect_params::<2>("cosine", params)?;
        if !mu.is_finite() || !(s > 0.0 && s.is_finite()) {
            return Err(Error::invalid(
                "cosine",
                format!("mu must be finite and s > 0, got mu={mu}, s={s}"),
            ));
        }
        Ok(Cosine { mu, s })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.s]
    }
}

impl DistributionMethods for Cosine {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.s;
        if !(-1.0..=1.0).contains(&z) {
            return 0.0;
        }
        (1.0 + (PI * z).cos()) / (2.0 * self.s)
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.s;
        if z <= -1.0 {
            0.0
        } else if z >= 1.0 {
            1.0
        } else {
            // the two terms cancel near z = -1
            (0.5 * (1.0 + z + (PI * z).sin() / PI)).clamp(0.0, 1.0)
        }
    }

    fn ppf(&self, q: f64) -> f64 {
        let (lo, hi) = (self.mu - self.s, self.mu + self.s);
        support_ppf(q, lo, hi, |p| {
            solve_quantile(|x| self.cdf(x), |x| self.pdf(x), p, self.mu, lo, hi)
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.mu)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.s * self.s * (1.0 / 3.0 - 2.0 / (PI * PI)))
    }

    fn median(&self) -> Option<f64> {
        Some(self.mu)
    }
}
