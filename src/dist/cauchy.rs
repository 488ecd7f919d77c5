use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use statrs::distribution::{Cauchy as CauchyDist, Continuous, ContinuousCDF};
use std::f64::consts::PI;

/// The Cauchy distribution with location `x0` and scale `gamma`.
///
/// Mean and standard deviation do not exist; only the median is reported.
#[derive(Debug, Clone)]
pub struct Cauchy {
    /// The location parameter (median).
    pub x0: f64,
    /// The scale parameter (half width at half maximum).
    pub gamma: f64,
    inner: CauchyDist,
}

impl Distribution for Cauchy {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [x0, gamma] = expect_params::<2>("cauchy", params)?;
        let inner = CauchyDist::new(x0, gamma).map_err(|e| Error::invalid("cauchy", e))?;
        Ok(Cauchy { x0, gamma, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.x0, self.gamma]
    }
}

impl DistributionMethods for Cauchy {
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
            self.x0 + self.gamma * (PI * (p - 0.5)).tan()
        })
    }

    fn mean(&self) -> Option<f64> {
        None
    }

    fn variance(&self) -> Option<f64> {
        None
    }

    fn median(&self) -> Option<f64> {
        Some(self.x0)
    }
}
