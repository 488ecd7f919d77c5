//! Sampling distributions of test statistics: Student's t and Fisher's F.

use crate::dist::beta::{beta_prime_density, beta_prime_probability, beta_prime_quantile};
use crate::dist::{
    check_positive, expect_params, solve_quantile, support_ppf, Category, Distribution,
    DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::distribution::{Continuous, ContinuousCDF, StudentsT as StudentsTDist};

/// The standard Student's t distribution with `v` degrees of freedom.
#[derive(Debug, Clone)]
pub struct StudentT {
    /// The degrees of freedom.
    pub v: f64,
    inner: StudentsTDist,
}

impl Distribution for StudentT {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [v] = expect_params::<1>("t", params)?;
        if v.is_infinite() {
            return Err(Error::invalid("t", "degrees of freedom must be finite"));
        }
        let inner = StudentsTDist::new(0.0, 1.0, v).map_err(|e| Error::invalid("t", e))?;
        Ok(StudentT { v, inner })
    }

    fn n_params(&self) -> usize {
        1
    }

    fn params(&self) -> Vec<f64> {
        vec![self.v]
    }
}

impl DistributionMethods for StudentT {
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
            if p == 0.5 {
                return 0.0;
            }
            solve_quantile(
                |x| self.inner.cdf(x),
                |x| self.inner.pdf(x),
                p,
                0.0,
                f64::NEG_INFINITY,
                f64::INFINITY,
            )
        })
    }

    fn mean(&self) -> Option<f64> {
        (self.v > 1.0).then_some(0.0)
    }

    fn variance(&self) -> Option<f64> {
        (self.v > 2.0).then(|| self.v / (self.v - 2.0))
    }

    fn median(&self) -> Option<f64> {
        Some(0.0)
    }
}

/// Fisher's F distribution with `d1` and `d2` degrees of freedom.
///
/// `d1 * X / d2` is Beta prime with shapes `d1 / 2` and `d2 / 2`, which keeps
/// the density in log space for large degrees of freedom.
#[derive(Debug, Clone)]
pub struct FisherF {
    pub d1: f64,
    pub d2: f64,
}

impl FisherF {
    fn shapes(&self) -> (f64, f64) {
        (0.5 * self.d1, 0.5 * self.d2)
    }
}

impl Distribution for FisherF {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [d1, d2] = expect_params::<2>("f", params)?;
        check_positive("f", "d1", d1)?;
        check_positive("f", "d2", d2)?;
        Ok(FisherF { d1, d2 })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.d1, self.d2]
    }
}

impl DistributionMethods for FisherF {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        let (a, b) = self.shapes();
        let scale = self.d1 / self.d2;
        scale * beta_prime_density(a, b, scale * x)
    }

    fn cdf(&self, x: f64) -> f64 {
        let (a, b) = self.shapes();
        beta_prime_probability(a, b, self.d1 * x / self.d2)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| {
            let (a, b) = self.shapes();
            self.d2 / self.d1 * beta_prime_quantile(a, b, p)
        })
    }

    fn mean(&self) -> Option<f64> {
        (self.d2 > 2.0).then(|| self.d2 / (self.d2 - 2.0))
    }

    fn variance(&self) -> Option<f64> {
        let (d1, d2) = (self.d1, self.d2);
        (d2 > 4.0).then(|| {
            2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0) * (d2 - 2.0) * (d2 - 4.0))
        })
    }
}
