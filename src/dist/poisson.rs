use crate::dist::{
    expect_params, lattice_point, search_discrete_quantile, support_ppf, Category, Distribution,
    DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::distribution::{Discrete, DiscreteCDF, Poisson as PoissonDist};

/// The Poisson distribution with rate `lambda`.
#[derive(Debug, Clone)]
pub struct Poisson {
    /// The rate parameter (expected count).
    pub lambda: f64,
    inner: PoissonDist,
}

impl Poisson {
    fn cdf_at(&self, k: i64) -> f64 {
        if k < 0 {
            0.0
        } else {
            self.inner.cdf(k as u64)
        }
    }
}

impl Distribution for Poisson {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [lambda] = expect_params::<1>("poisson", params)?;
        let inner = PoissonDist::new(lambda).map_err(|e| Error::invalid("poisson", e))?;
        Ok(Poisson { lambda, inner })
    }

    fn n_params(&self) -> usize {
        1
    }

    fn params(&self) -> Vec<f64> {
        vec![self.lambda]
    }
}

impl DistributionMethods for Poisson {
    fn category(&self) -> Category {
        Category::Discrete
    }

    fn pdf(&self, x: f64) -> f64 {
        match lattice_point(x) {
            Some(k) if k >= 0 => self.inner.pmf(k as u64),
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
        if x < 0.0 {
            return 0.0;
        }
        self.cdf_at(x.floor() as i64)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| {
            search_discrete_quantile(|k| self.cdf_at(k), p, 0, None)
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.lambda)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_poisson_mass() {
        let d = Poisson::from_params(&[3.0]).unwrap();
        assert_relative_eq!(d.pdf(0.0), (-3.0_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(d.pdf(2.0), 4.5 * (-3.0_f64).exp(), epsilon = 1e-12);
        assert_eq!(d.pdf(1.5), 0.0);
        assert_eq!(d.pdf(-1.0), 0.0);
    }

    #[test]
    fn test_poisson_quantile_is_smallest_k() {
        let d = Poisson::from_params(&[3.0]).unwrap();
        let k = d.ppf(0.5);
        assert_eq!(k, 3.0);
        assert!(d.cdf(k) >= 0.5);
        assert!(d.cdf(k - 1.0) < 0.5);
        assert_eq!(d.ppf(0.0), 0.0);
        assert!(d.ppf(1.0).is_infinite());
    }

    #[test]
    fn test_poisson_rejects_non_positive_rate() {
        assert!(Poisson::from_params(&[0.0]).is_err());
        assert!(Poisson::from_params(&[-1.0]).is_err());
    }
}
