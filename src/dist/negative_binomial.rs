//! Counts of failures before a target number of successes.

use crate::dist::{
    expect_count, expect_params, lattice_point, search_discrete_quantile, support_ppf, Category,
    Distribution, DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::distribution::{Discrete, DiscreteCDF, NegativeBinomial as NegativeBinomialDist};

fn check_success_probability(family: &'static str, p: f64) -> Result<()> {
    if p > 0.0 && p <= 1.0 {
        Ok(())
    } else {
        Err(Error::invalid(family, format!("p must be in (0, 1], got {p}")))
    }
}

/// The Negative Binomial distribution: failures before the `r`-th success.
#[derive(Debug, Clone)]
pub struct NegativeBinomial {
    pub r: u64,
    pub p: f64,
    inner: NegativeBinomialDist,
}

impl NegativeBinomial {
    /// With `p = 1` every trial succeeds and all mass sits at zero.
    fn is_degenerate(&self) -> bool {
        self.p == 1.0
    }

    fn cdf_at(&self, k: i64) -> f64 {
        if k < 0 {
            0.0
        } else if self.is_degenerate() {
            1.0
        } else {
            self.inner.cdf(k as u64)
        }
    }
}

impl Distribution for NegativeBinomial {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [r, p] = expect_params::<2>("negative_binomial", params)?;
        let r = expect_count("negative_binomial", "r", r)?;
        if r == 0 {
            return Err(Error::invalid("negative_binomial", "r must be at least 1"));
        }
        check_success_probability("negative_binomial", p)?;
        let inner = NegativeBinomialDist::new(r as f64, p)
            .map_err(|e| Error::invalid("negative_binomial", e))?;
        Ok(NegativeBinomial { r, p, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.r as f64, self.p]
    }
}

impl DistributionMethods for NegativeBinomial {
    fn category(&self) -> Category {
        Category::Discrete
    }

    fn pdf(&self, x: f64) -> f64 {
        match lattice_point(x) {
            Some(0) if self.is_degenerate() => 1.0,
            Some(k) if k >= 0 && !self.is_degenerate() => self.inner.pmf(k as u64),
            _ => 0.0,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        self.cdf_at(x.floor().max(-1.0) as i64)
    }

    fn ppf(&self, q: f64) -> f64 {
        let upper = if self.is_degenerate() { 0.0 } else { f64::INFINITY };
        support_ppf(q, 0.0, upper, |p| {
            search_discrete_quantile(|k| self.cdf_at(k), p, 0, None)
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.r as f64 * (1.0 - self.p) / self.p)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.r as f64 * (1.0 - self.p) / (self.p * self.p))
    }
}

/// The Geometric distribution: failures before the first success.
#[derive(Debug, Clone)]
pub struct Geometric {
    pub p: f64,
}

impl Geometric {
    fn is_degenerate(&self) -> bool {
        self.p == 1.0
    }

    fn cdf_at(&self, k: i64) -> f64 {
        if k < 0 {
            0.0
        } else {
            // 1 - (1 - p)^(k + 1)
            -((k as f64 + 1.0) * (-self.p).ln_1p()).exp_m1()
        }
    }
}

impl Distribution for Geometric {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [p] = expect_params::<1>("geometric", params)?;
        check_success_probability("geometric", p)?;
        Ok(Geometric { p })
    }

    fn n_params(&self) -> usize {
        1
    }

    fn params(&self) -> Vec<f64> {
        vec![self.p]
    }
}

impl DistributionMethods for Geometric {
    fn category(&self) -> Category {
        Category::Discrete
    }

    fn pdf(&self, x: f64) -> f64 {
        match lattice_point(x) {
            Some(k) if k >= 0 => self.p * (1.0 - self.p).powf(k as f64),
            _ => 0.0,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        self.cdf_at(x.floor().max(-1.0) as i64)
    }

    fn ppf(&self, q: f64) -> f64 {
        let upper = if self.is_degenerate() { 0.0 } else { f64::INFINITY };
        support_ppf(q, 0.0, upper, |p| {
            search_discrete_quantile(|k| self.cdf_at(k), p, 0, None)
        })
    }

    fn mean(&self) -> Option<f64> {
        Some((1.0 - self.p) / self.p)
    }

    fn variance(&self) -> Option<f64> {
        Some((1.0 - self.p) / (self.p * self.p))
    }

    fn median(&self) -> Option<f64> {
        Some(((-1.0 / (1.0 - self.p).log2()).ceil() - 1.0).max(0.0))
    }
}
