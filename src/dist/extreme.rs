//! Extreme value families: Gumbel (type I) and Frechet (type II).

use crate::dist::{
    check_positive, expect_params, support_ppf, Category, Distribution, DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::function::gamma::gamma;
use std::f64::consts::{LN_2, PI};

/// Euler-Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// The Gumbel distribution with location `mu` and scale `beta`.
#[derive(Debug, Clone)]
pub struct Gumbel {
    pub mu: f64,
    pub beta: f64,
}

impl Distribution for Gumbel {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [mu, beta] = expect_params::<2>("gumbel", params)?;
        if !mu.is_finite() {
            return Err(Error::invalid("gumbel", format!("mu must be finite, got {mu}")));
        }
        check_positive("gumbel", "beta", beta)?;
        Ok(Gumbel { mu, beta })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.beta]
    }
}

impl DistributionMethods for Gumbel {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.beta;
        let e = (-z).exp();
        if e.is_infinite() {
            return 0.0;
        }
        (-(z + e)).exp() / self.beta
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.beta;
        (-(-z).exp()).exp()
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, f64::NEG_INFINITY, f64::INFINITY, |p| {
            self.mu - self.beta * (-p.ln()).ln()
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.mu + self.beta * EULER_GAMMA)
    }

    fn variance(&self) -> Option<f64> {
        Some(PI * PI * self.beta * self.beta / 6.0)
    }

    fn median(&self) -> Option<f64> {
        Some(self.mu - self.beta * LN_2.ln())
    }
}

/// The Frechet distribution with shape `alpha`, scale `s` and location `m`.
#[derive(Debug, Clone)]
pub struct Frechet {
    pub alpha: f64,
    pub s: f64,
    pub m: f64,
}

impl Distribution for Frechet {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [alpha, s, m] = expect_params::<3>("frechet", params)?;
        check_positive("frechet", "alpha", alpha)?;
        check_positive("frechet", "s", s)?;
        if !m.is_finite() {
            return Err(Error::invalid("frechet", format!("m must be finite, got {m}")));
        }
        Ok(Frechet { alpha, s, m })
    }

    fn n_params(&self) -> usize {
        3
    }

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.s, self.m]
    }
}

impl DistributionMethods for Frechet {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= self.m || x.is_infinite() {
            return 0.0;
        }
        let z = (x - self.m) / self.s;
        let t = z.powf(-self.alpha);
        self.alpha / self.s * t / z * (-t).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.m {
            return 0.0;
        }
        let z = (x - self.m) / self.s;
        (-z.powf(-self.alpha)).exp()
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, self.m, f64::INFINITY, |p| {
            self.m + self.s * (-p.ln()).powf(-1.0 / self.alpha)
        })
    }

    fn mean(&self) -> Option<f64> {
        (self.alpha > 1.0).then(|| self.m + self.s * gamma(1.0 - 1.0 / self.alpha))
    }

    fn variance(&self) -> Option<f64> {
        (self.alpha > 2.0).then(|| {
            let g1 = gamma(1.0 - 1.0 / self.alpha);
            let g2 = gamma(1.0 - 2.0 / self.alpha);
            self.s * self.s * (g2 - g1 * g1)
        })
    }

    fn median(&self) -> Option<f64> {
        Some(self.m + self.s * LN_2.powf(-1.0 / self.alpha))
    }
}
