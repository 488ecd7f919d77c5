use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF, Normal as NormalDist};

/// The Normal (Gaussian) distribution.
#[derive(Debug, Clone)]
pub struct Normal {
    /// The mean of the distribution (loc).
    pub mu: f64,
    /// The standard deviation of the distribution (scale).
    pub sigma: f64,
    inner: NormalDist,
}

impl Distribution for Normal {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [mu, sigma] = expect_params::<2>("normal", params)?;
        let inner = NormalDist::new(mu, sigma).map_err(|e| Error::invalid("normal", e))?;
        Ok(Normal { mu, sigma, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.sigma]
    }
}

impl DistributionMethods for Normal {
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
            self.inner.inverse_cdf(p)
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.mu)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.sigma * self.sigma)
    }

    fn std(&self) -> Option<f64> {
        Some(self.sigma)
    }

    fn median(&self) -> Option<f64> {
        // Symmetric about the mean
        Some(self.mu)
    }
}
