use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF, Laplace as LaplaceDist};

/// The Laplace (double exponential) distribution.
#[derive(Debug, Clone)]
pub struct Laplace {
    /// The location parameter.
    pub mu: f64,
    /// The scale parameter.
    pub b: f64,
    inner: LaplaceDist,
}

impl Distribution for Laplace {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [mu, b] = expect_params::<2>("laplace", params)?;
        let inner = LaplaceDist::new(mu, b).map_err(|e| Error::invalid("laplace", e))?;
        Ok(Laplace { mu, b, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.b]
    }
}

impl DistributionMethods for Laplace {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, f64::NEG_INFINITY, f64::INFINITY, |p| {
            if p < 0.5 {
                self.mu + self.b * (2.0 * p).ln()
            } else {
                self.mu - self.b * (2.0 - 2.0 * p).ln()
            }
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.mu)
    }

    fn variance(&self) -> Option<f64> {
        Some(2.0 * self.b * self.b)
    }

    fn median(&self) -> Option<f64> {
        Some(self.mu)
    }
}
