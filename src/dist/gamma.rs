//! Gamma-type families: Gamma, Erlang, Inverse Gamma, Chi and Chi-square.
//!
//! All of them reduce to the regularized incomplete gamma function, so the
//! quantiles share one Newton solver seeded with the Wilson-Hilferty
//! approximation.

use crate::dist::{
    check_positive, expect_count, expect_params, solve_quantile, support_ppf, Category,
    Distribution, DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::function::erf::erf_inv;
use statrs::function::gamma::{gamma_lr, gamma_ur, ln_gamma};

/// Density of Gamma(shape, rate) including the boundary at zero.
fn gamma_density(shape: f64, rate: f64, x: f64) -> f64 {
    if x < 0.0 || x == f64::INFINITY {
        return 0.0;
    }
    if x == 0.0 {
        return if shape < 1.0 {
            f64::INFINITY
        } else if shape == 1.0 {
            rate
        } else {
            0.0
        };
    }
    (shape * rate.ln() - ln_gamma(shape) + (shape - 1.0) * x.ln() - rate * x).exp()
}

fn gamma_probability(shape: f64, rate: f64, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }
    gamma_lr(shape, rate * x)
}

/// Quantile of Gamma(shape, rate) for `p` in (0, 1).
fn gamma_quantile(shape: f64, rate: f64, p: f64) -> f64 {
    let mean = shape / rate;
    // Wilson-Hilferty initial guess
    let z = std::f64::consts::SQRT_2 * erf_inv(2.0 * p - 1.0);
    let v = 1.0 - 1.0 / (9.0 * shape) + z / (9.0 * shape).sqrt();
    let wh = mean * v * v * v;
    let x0 = if shape >= 1.0 && wh.is_finite() && wh > 0.0 {
        wh
    } else {
        mean
    };
    solve_quantile(
        |x| gamma_probability(shape, rate, x),
        |x| gamma_density(shape, rate, x),
        p,
        x0,
        0.0,
        f64::INFINITY,
    )
}

// ============================================================================
// Gamma
// ============================================================================

/// The Gamma distribution with shape `alpha` and rate `beta`.
#[derive(Debug, Clone)]
pub struct Gamma {
    /// The shape parameter.
    pub alpha: f64,
    /// The rate parameter (inverse scale).
    pub beta: f64,
}

impl Distribution for Gamma {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [alpha, beta] = expect_params::<2>("gamma", params)?;
        check_positive("gamma", "alpha", alpha)?;
        check_positive("gamma", "beta", beta)?;
        Ok(Gamma { alpha, beta })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }
}

impl DistributionMethods for Gamma {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        gamma_density(self.alpha, self.beta, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        gamma_probability(self.alpha, self.beta, x)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| {
            gamma_quantile(self.alpha, self.beta, p)
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.alpha / self.beta)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.alpha / (self.beta * self.beta))
    }
}

// ============================================================================
// Erlang
// ============================================================================

/// The Erlang distribution: a Gamma with integer shape `k` and rate `lambda`.
#[derive(Debug, Clone)]
pub struct Erlang {
    /// The integer shape parameter.
    pub k: u64,
    /// The rate parameter.
    pub lambda: f64,
}

impl Distribution for Erlang {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [k, lambda] = expect_params::<2>("erlang", params)?;
        let k = expect_count("erlang", "k", k)?;
        if k == 0 {
            return Err(Error::invalid("erlang", "k must be at least 1"));
        }
        check_positive("erlang", "lambda", lambda)?;
        Ok(Erlang { k, lambda })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.k as f64, self.lambda]
    }
}

impl DistributionMethods for Erlang {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        gamma_density(self.k as f64, self.lambda, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        gamma_probability(self.k as f64, self.lambda, x)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| {
            gamma_quantile(self.k as f64, self.lambda, p)
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.k as f64 / self.lambda)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.k as f64 / (self.lambda * self.lambda))
    }
}

// ============================================================================
// Inverse Gamma
// ============================================================================

/// The Inverse Gamma distribution with shape `alpha` and scale `beta`.
///
/// If `Y ~ Gamma(alpha, 1)` then `beta / Y ~ InvGamma(alpha, beta)`.
#[derive(Debug, Clone)]
pub struct InvGamma {
    /// The shape parameter.
    pub alpha: f64,
    /// The scale parameter.
    pub beta: f64,
}

impl Distribution for InvGamma {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [alpha, beta] = expect_params::<2>("invgamma", params)?;
        check_positive("invgamma", "alpha", alpha)?;
        check_positive("invgamma", "beta", beta)?;
        Ok(InvGamma { alpha, beta })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }
}

impl DistributionMethods for InvGamma {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 || x.is_infinite() {
            return 0.0;
        }
        let (a, b) = (self.alpha, self.beta);
        (a * b.ln() - ln_gamma(a) - (a + 1.0) * x.ln() - b / x).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        let z = self.beta / x;
        if z == 0.0 {
            return 1.0;
        }
        gamma_ur(self.alpha, z)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| {
            self.beta / gamma_quantile(self.alpha, 1.0, 1.0 - p)
        })
    }

    fn mean(&self) -> Option<f64> {
        (self.alpha > 1.0).then(|| self.beta / (self.alpha - 1.0))
    }

    fn variance(&self) -> Option<f64> {
        (self.alpha > 2.0).then(|| {
            let am1 = self.alpha - 1.0;
            self.beta * self.beta / (am1 * am1 * (self.alpha - 2.0))
        })
    }
}

// ============================================================================
// Chi-square
// ============================================================================

/// The Chi-square distribution with `k` degrees of freedom.
#[derive(Debug, Clone)]
pub struct ChiSquare {
    /// Degrees of freedom.
    pub k: f64,
}

impl Distribution for ChiSquare {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [k] = expect_params::<1>("chisquare", params)?;
        check_positive("chisquare", "k", k)?;
        Ok(ChiSquare { k })
    }

    fn n_params(&self) -> usize {
        1
    }

    fn params(&self) -> Vec<f64> {
        vec![self.k]
    }
}

impl DistributionMethods for ChiSquare {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        gamma_density(0.5 * self.k, 0.5, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        gamma_probability(0.5 * self.k, 0.5, x)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| gamma_quantile(0.5 * self.k, 0.5, p))
    }

    fn mean(&self) -> Option<f64> {
        Some(self.k)
    }

    fn variance(&self) -> Option<f64> {
        Some(2.0 * self.k)
    }
}

// ============================================================================
// Chi
// ============================================================================

/// The Chi distribution: the square root of a Chi-square with `k` degrees of freedom.
#[derive(Debug, Clone)]
pub struct Chi {
    /// Degrees of freedom.
    pub k: f64,
}

impl Distribution for Chi {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [k] = expect_params::<1>("chi", params)?;
        check_positive("chi", "k", k)?;
        Ok(Chi { k })
    }

    fn n_params(&self) -> usize {
        1
    }

    fn params(&self) -> Vec<f64> {
        vec![self.k]
    }
}

impl DistributionMethods for Chi {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 || x == f64::INFINITY {
            return 0.0;
        }
        if x == 0.0 {
            // x^(k-1) at the origin
            return if self.k < 1.0 {
                f64::INFINITY
            } else if self.k == 1.0 {
                (2.0 / std::f64::consts::PI).sqrt()
            } else {
                0.0
            };
        }
        // change of variables from the Chi-square density at x^2
        2.0 * x * gamma_density(0.5 * self.k, 0.5, x * x)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        gamma_probability(0.5 * self.k, 0.5, x * x)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| {
            gamma_quantile(0.5 * self.k, 0.5, p).sqrt()
        })
    }

    fn mean(&self) -> Option<f64> {
        let ln_ratio = ln_gamma(0.5 * (self.k + 1.0)) - ln_gamma(0.5 * self.k);
        Some(std::f64::consts::SQRT_2 * ln_ratio.exp())
    }

    fn variance(&self) -> Option<f64> {
        self.mean().map(|m| (self.k - m * m).max(0.0))
    }
}
