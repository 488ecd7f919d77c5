use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF, LogNormal as LogNormalDist};

/// The LogNormal distribution: `ln X ~ Normal(mu, sigma)`.
#[derive(Debug, Clone)]
pub struct LogNormal {
    /// Mean of the underlying normal.
    pub mu: f64,
    /// Standard deviation of the underlying normal.
    pub sigma: f64,
    inner: LogNormalDist,
}

impl Distribution for LogNormal {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [mu, sigma] = expect_params::<2>("lognormal", params)?;
        let inner = LogNormalDist::new(mu, sigma).map_err(|e| Error::invalid("lognormal", e))?;
        Ok(LogNormal { mu, sigma, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.sigma]
    }
}

impl DistributionMethods for LogNormal {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.inner.cdf(x)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| self.inner.inverse_cdf(p))
    }

    fn mean(&self) -> Option<f64> {
        Some((self.mu + 0.5 * self.sigma * self.sigma).exp())
    }

    fn variance(&self) -> Option<f64> {
        let s2 = self.sigma * self.sigma;
        Some((s2.exp() - 1.0) * (2.0 * self.mu + s2).exp())
    }

    fn median(&self) -> Option<f64> {
        Some(self.mu.exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_median_is_exp_mu() {
        let d = LogNormal::from_params(&[1.0, 0.5]).unwrap();
        assert_relative_eq!(d.ppf(0.5), 1.0_f64.exp(), epsilon = 1e-8);
        assert_relative_eq!(d.median().unwrap(), 1.0_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_outside_support() {
        let d = LogNormal::from_params(&[0.0, 1.0]).unwrap();
        assert_eq!(d.pdf(-1.0), 0.0);
        assert_eq!(d.cdf(0.0), 0.0);
        assert_eq!(d.ppf(0.0), 0.0);
    }
}
