use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF, Pareto as ParetoDist};

/// The type I Pareto distribution with shape `alpha` and scale (minimum) `beta`.
#[derive(Debug, Clone)]
pub struct Pareto {
    /// The tail index.
    pub alpha: f64,
    /// The lower end of the support.
    pub beta: f64,
    inner: ParetoDist,
}

impl Distribution for Pareto {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [alpha, beta] = expect_params::<2>("pareto", params)?;
        let inner = ParetoDist::new(beta, alpha).map_err(|e| Error::invalid("pareto", e))?;
        Ok(Pareto { alpha, beta, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }
}

impl DistributionMethods for Pareto {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < self.beta {
            0.0
        } else {
            self.inner.pdf(x)
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.beta {
            0.0
        } else {
            self.inner.cdf(x)
        }
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, self.beta, f64::INFINITY, |p| {
            self.beta * (1.0 - p).powf(-1.0 / self.alpha)
        })
    }

    fn mean(&self) -> Option<f64> {
        (self.alpha > 1.0).then(|| self.alpha * self.beta / (self.alpha - 1.0))
    }

    fn variance(&self) -> Option<f64> {
        (self.alpha > 2.0).then(|| {
            let am1 = self.alpha - 1.0;
            self.beta * self.beta * self.alpha / (am1 * am1 * (self.alpha - 2.0))
        })
    }

    fn median(&self) -> Option<f64> {
        Some(self.beta * 2.0_f64.powf(1.0 / self.alpha))
    }
}
