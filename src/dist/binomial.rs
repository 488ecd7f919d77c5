//! Counts of successes in a fixed number of Bernoulli trials.

use crate::dist::{
    expect_count, expect_params, lattice_point, search_discrete_quantile, support_ppf, Category,
    Distribution, DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::distribution::{Bernoulli as BernoulliDist, Binomial as BinomialDist, Discrete, DiscreteCDF};

/// The Bernoulli distribution with success probability `p`.
#[derive(Debug, Clone)]
pub struct Bernoulli {
    pub p: f64,
    inner: BernoulliDist,
}

impl Distribution for Bernoulli {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [p] = expect_params::<1>("bernoulli", params)?;
        let inner = BernoulliDist::new(p).map_err(|e| Error::invalid("bernoulli", e))?;
        Ok(Bernoulli { p, inner })
    }

    fn n_params(&self) -> usize {
        1
    }

    fn params(&self) -> Vec<f64> {
        vec![self.p]
    }
}

impl DistributionMethods for Bernoulli {
    fn category(&self) -> Category {
        Category::Discrete
    }

    fn pdf(&self, x: f64) -> f64 {
        match lattice_point(x) {
            Some(k @ 0..=1) => self.inner.pmf(k as u64),
            _ => 0.0,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            f64::NAN
        } else if x < 0.0 {
            0.0
        } else if x < 1.0 {
            1.0 - self.p
        } else {
            1.0
        }
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, 1.0, |p| if p <= 1.0 - self.p { 0.0 } else { 1.0 })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.p)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.p * (1.0 - self.p))
    }

    fn median(&self) -> Option<f64> {
        Some(if self.p <= 0.5 { 0.0 } else { 1.0 })
    }
}

/// The Binomial distribution with `n` trials and success probability `p`.
#[derive(Debug, Clone)]
pub struct Binomial {
    pub n: u64,
    pub p: f64,
    inner: BinomialDist,
}

impl Binomial {
    fn cdf_at(&self, k: i64) -> f64 {
        if k < 0 {
            0.0
        } else if k as u64 >= self.n {
            1.0
        } else {
            self.inner.cdf(k as u64)
        }
    }
}

impl Distribution for Binomial {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [n, p] = expect_params::<2>("binomial", params)?;
        let n = expect_count("binomial", "n", n)?;
        let inner = BinomialDist::new(p, n).map_err(|e| Error::invalid("binomial", e))?;
        Ok(Binomial { n, p, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.n as f64, self.p]
    }
}

impl DistributionMethods for Binomial {
    fn category(&self) -> Category {
        Category::Discrete
    }

    fn pdf(&self, x: f64) -> f64 {
        match lattice_point(x) {
            Some(k) if k >= 0 && k as u64 <= self.n => self.inner.pmf(k as u64),
            _ => 0.0,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 {
            return 0.0;
        }
        if x >= self.n as f64 {
            return 1.0;
        }
        self.cdf_at(x.floor() as i64)
    }

    fn ppf(&self, q: f64) -> f64 {
        let n = self.n as i64;
        support_ppf(q, 0.0, self.n as f64, |p| {
            search_discrete_quantile(|k| self.cdf_at(k), p, 0, Some(n))
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.n as f64 * self.p)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.n as f64 * self.p * (1.0 - self.p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bernoulli() {
        let d = Bernoulli::from_params(&[0.3]).unwrap();
        assert_relative_eq!(d.pdf(0.0), 0.7, epsilon = 1e-12);
        assert_relative_eq!(d.pdf(1.0), 0.3, epsilon = 1e-12);
        assert_eq!(d.pdf(2.0), 0.0);
        assert_eq!(d.ppf(0.5), 0.0);
        assert_eq!(d.ppf(0.8), 1.0);
        assert_eq!(d.median(), Some(0.0));
        assert!(Bernoulli::from_params(&[1.5]).is_err());
    }

    #[test]
    fn test_binomial_mass_and_quantile() {
        let d = Binomial::from_params(&[10.0, 0.5]).unwrap();
        assert_relative_eq!(d.pdf(5.0), 252.0 / 1024.0, epsilon = 1e-12);
        assert_eq!(d.pdf(11.0), 0.0);
        assert_eq!(d.ppf(0.5), 5.0);
        assert_eq!(d.ppf(1.0), 10.0);
        assert_relative_eq!(d.cdf(10.0), 1.0);
        assert_relative_eq!(d.variance().unwrap(), 2.5);
    }

    #[test]
    fn test_binomial_rejects_fractional_trials() {
        assert!(Binomial::from_params(&[5.5, 0.3]).is_err());
        assert!(Binomial::from_params(&[5.0, 1.5]).is_err());
    }
}
