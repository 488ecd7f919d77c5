//! Piecewise-linear densities on a finite interval.

use crate::dist::{expect_params, support_ppf, Category, Distribution, DistributionMethods};
use crate::error::{Error, Result};
use statrs::distribution::{
    Continuous, ContinuousCDF, Triangular as TriangularDist, Uniform as UniformDist,
};

/// The continuous Uniform distribution on [a, b].
#[derive(Debug, Clone)]
pub struct Uniform {
    pub a: f64,
    pub b: f64,
    inner: UniformDist,
}

impl Distribution for Uniform {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b] = expect_params::<2>("uniform", params)?;
        if !(a < b) {
            return Err(Error::invalid("uniform", format!("a must be less than b, got a={a}, b={b}")));
        }
        let inner = UniformDist::new(a, b).map_err(|e| Error::invalid("uniform", e))?;
        Ok(Uniform { a, b, inner })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }
}

impl DistributionMethods for Uniform {
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
        support_ppf(q, self.a, self.b, |p| self.a + p * (self.b - self.a))
    }

    fn mean(&self) -> Option<f64> {
        Some(0.5 * (self.a + self.b))
    }

    fn variance(&self) -> Option<f64> {
        let w = self.b - self.a;
        Some(w * w / 12.0)
    }

    fn median(&self) -> Option<f64> {
        Some(0.5 * (self.a + self.b))
    }
}

/// The Triangular distribution on [a, b] with mode `c`.
#[derive(Debug, Clone)]
pub struct Triangular {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    inner: TriangularDist,
}

impl Distribution for Triangular {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b, c] = expect_params::<3>("triangular", params)?;
        let inner = TriangularDist::new(a, b, c).map_err(|e| Error::invalid("triangular", e))?;
        Ok(Triangular { a, b, c, inner })
    }

    fn n_params(&self) -> usize {
        3
    }

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }
}

impl DistributionMethods for Triangular {
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
        let (a, b, c) = (self.a, self.b, self.c);
        support_ppf(q, a, b, |p| {
            let width = b - a;
            if p < (c - a) / width {
                a + (p * width * (c - a)).sqrt()
            } else {
                b - ((1.0 - p) * width * (b - c)).sqrt()
            }
        })
    }

    fn mean(&self) -> Option<f64> {
        Some((self.a + self.b + self.c) / 3.0)
    }

    fn variance(&self) -> Option<f64> {
        let (a, b, c) = (self.a, self.b, self.c);
        Some((a * a + b * b + c * c - a * b - a * c - b * c) / 18.0)
    }

    fn median(&self) -> Option<f64> {
        let (a, b, c) = (self.a, self.b, self.c);
        if c >= 0.5 * (a + b) {
            Some(a + ((b - a) * (c - a) / 2.0).sqrt())
        } else {
            Some(b - ((b - a) * (b - c) / 2.0).sqrt())
        }
    }
}
