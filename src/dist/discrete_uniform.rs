use crate::dist::{
    expect_params, lattice_point, search_discrete_quantile, support_ppf, Category, Distribution,
    DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::distribution::{Discrete, DiscreteCDF, DiscreteUniform as DiscreteUniformDist};

/// The Discrete Uniform distribution on the integers `a..=b`.
#[derive(Debug, Clone)]
pub struct DiscreteUniform {
    pub a: i64,
    pub b: i64,
    inner: DiscreteUniformDist,
}

impl DiscreteUniform {
    fn cdf_at(&self, k: i64) -> f64 {
        if k < self.a {
            0.0
        } else if k >= self.b {
            1.0
        } else {
            self.inner.cdf(k)
        }
    }
}

impl Distribution for DiscreteUniform {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [a_raw, b_raw] = expect_params::<2>("discrete_uniform", params)?;
        let (a, b) = match (lattice_point(a_raw), lattice_point(b_raw)) {
            (Some(a), Some(b)) if a < b => (a, b),
            _ => {
                return Err(Error::invalid(
                    "discrete_uniform",
                    format!("bounds must be integers with a < b, got a={a_raw}, b={b_raw}"),
                ))
            }
        };
        let inner =
            DiscreteUniformDist::new(a, b).map_err(|e| Error::invalid("discrete_uniform", e))?;
        Ok(DiscreteUniform { a, b, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.a as f64, self.b as f64]
    }
}

impl DistributionMethods for DiscreteUniform {
    fn category(&self) -> Category {
        Category::Discrete
    }

    fn pdf(&self, x: f64) -> f64 {
        match lattice_point(x) {
            Some(k) if k >= self.a && k <= self.b => self.inner.pmf(k),
            _ => 0.0,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.a as f64 {
            return 0.0;
        }
        if x >= self.b as f64 {
            return 1.0;
        }
        self.cdf_at(x.floor() as i64)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, self.a as f64, self.b as f64, |p| {
            search_discrete_quantile(|k| self.cdf_at(k), p, self.a, Some(self.b))
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(0.5 * (self.a as f64 + self.b as f64))
    }

    fn variance(&self) -> Option<f64> {
        let n = (self.b - self.a) as f64 + 1.0;
        Some((n * n - 1.0) / 12.0)
    }

    fn median(&self) -> Option<f64> {
        Some(0.5 * (self.a as f64 + self.b as f64))
    }
}
