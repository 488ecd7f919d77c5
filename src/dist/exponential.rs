use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF, Exp};

/// The Exponential distribution with rate `lambda`.
#[derive(Debug, Clone)]
pub struct Exponential {
    /// The rate parameter.
    pub lambda: f64,
    inner: Exp,
}

impl Distribution for Exponential {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [lambda] = expect_params::<1>("exponential", params)?;
        let inner = Exp::new(lambda).map_err(|e| Error::invalid("exponential", e))?;
        Ok(Exponential { lambda, inner })
    }

    fn n_params(&self) -> usize {
        1
    }

    fn params(&self) -> Vec<f64> {
        vec![self.lambda]
    }
}

impl DistributionMethods for Exponential {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
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
        // -ln(1 - q) / lambda
        support_ppf(q, 0.0, f64::INFINITY, |p| -(-p).ln_1p() / self.lambda)
    }

    fn mean(&self) -> Option<f64> {
        Some(1.0 / self.lambda)
    }

    fn variance(&self) -> Option<f64> {
        Some(1.0 / (self.lambda * self.lambda))
    }

    fn median(&self) -> Option<f64> {
        Some(std::f64::consts::LN_2 / self.lambda)
    }
}
