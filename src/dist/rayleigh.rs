use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use std::f64::consts::{LN_2, PI};

/// The Rayleigh distribution with scale `sigma`.
#[derive(Debug, Clone)]
pub struct Rayleigh {
    pub sigma: f64,
}

impl Distribution for Rayleigh {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [sigma] = expect_params::<1>("rayleigh", params)?;
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(Error::invalid(
                "rayleigh",
                format!("sigma must be finite and > 0, got {sigma}"),
            ));
        }
        Ok(Rayleigh { sigma })
    }

    fn n_params(&self) -> usize {
        1
    }

    fn params(&self) -> Vec<f64> {
        vec![self.sigma]
    }
}

impl DistributionMethods for Rayleigh {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 || x.is_infinite() {
            return 0.0;
        }
        let s2 = self.sigma * self.sigma;
        x / s2 * (-x * x / (2.0 * s2)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-x * x / (2.0 * self.sigma * self.sigma)).exp_m1()
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| {
            self.sigma * (-2.0 * (-p).ln_1p()).sqrt()
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.sigma * (PI / 2.0).sqrt())
    }

    fn variance(&self) -> Option<f64> {
        Some((4.0 - PI) / 2.0 * self.sigma * self.sigma)
    }

    fn median(&self) -> Option<f64> {
        Some(self.sigma * (2.0 * LN_2).sqrt())
    }
}
