//! Families on a bounded interval built around the Beta function:
//! Beta, Beta prime, Kumaraswamy and Arcsine.

use crate::dist::{
    check_positive, expect_params, solve_quantile, support_ppf, Category, Distribution,
    DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::function::beta::{beta as beta_fn, beta_reg, ln_beta};
use std::f64::consts::{FRAC_2_PI, PI};

/// Beta(a, b) density on [0, 1], including the endpoint limits.
fn beta_density(a: f64, b: f64, x: f64) -> f64 {
    if !(0.0..=1.0).contains(&x) {
        return 0.0;
    }
    if x == 0.0 {
        return endpoint_density(a, || 1.0 / beta_fn(1.0, b));
    }
    if x == 1.0 {
        return endpoint_density(b, || 1.0 / beta_fn(a, 1.0));
    }
    ((a - 1.0) * x.ln() + (b - 1.0) * (-x).ln_1p() - ln_beta(a, b)).exp()
}

/// Limit of `x^(shape - 1) * c` as `x -> 0`.
fn endpoint_density(shape: f64, at_one: impl FnOnce() -> f64) -> f64 {
    if shape < 1.0 {
        f64::INFINITY
    } else if shape == 1.0 {
        at_one()
    } else {
        0.0
    }
}

fn beta_probability(a: f64, b: f64, x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        beta_reg(a, b, x)
    }
}

/// Quantile of Beta(a, b) for `p` in (0, 1).
pub(crate) fn beta_quantile(a: f64, b: f64, p: f64) -> f64 {
    solve_quantile(
        |x| beta_probability(a, b, x),
        |x| beta_density(a, b, x),
        p,
        a / (a + b),
        0.0,
        1.0,
    )
}

/// Beta prime density with shapes `a` and `b`, evaluated in log space.
pub(crate) fn beta_prime_density(a: f64, b: f64, u: f64) -> f64 {
    if u < 0.0 || u.is_infinite() {
        return 0.0;
    }
    if u == 0.0 {
        return endpoint_density(a, || 1.0 / beta_fn(1.0, b));
    }
    ((a - 1.0) * u.ln() - (a + b) * u.ln_1p() - ln_beta(a, b)).exp()
}

/// Beta prime distribution function.
///
/// Above `u = 1` the upper tail is taken from the mirrored Beta so that
/// `1 / (1 + u)` never rounds into one.
pub(crate) fn beta_prime_probability(a: f64, b: f64, u: f64) -> f64 {
    if u.is_nan() {
        f64::NAN
    } else if u <= 0.0 {
        0.0
    } else if u.is_infinite() {
        1.0
    } else if u <= 1.0 {
        beta_reg(a, b, u / (1.0 + u))
    } else {
        (1.0 - beta_reg(b, a, 1.0 / (1.0 + u))).clamp(0.0, 1.0)
    }
}

/// Beta prime quantile for `p` in (0, 1).
pub(crate) fn beta_prime_quantile(a: f64, b: f64, p: f64) -> f64 {
    if p <= beta_reg(a, b, 0.5) {
        let y = beta_quantile(a, b, p);
        y / (1.0 - y)
    } else {
        // solve for 1 / (1 + u) so the ratio keeps its precision in the tail
        let z = beta_quantile(b, a, 1.0 - p);
        (1.0 - z) / z
    }
}

// ============================================================================
// Beta
// ============================================================================

/// The Beta distribution with shapes `alpha` and `beta`.
#[derive(Debug, Clone)]
pub struct Beta {
    pub alpha: f64,
    pub beta: f64,
}

impl Distribution for Beta {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [alpha, beta] = expect_params::<2>("beta", params)?;
        check_positive("beta", "alpha", alpha)?;
        check_positive("beta", "beta", beta)?;
        Ok(Beta { alpha, beta })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }
}

impl DistributionMethods for Beta {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        beta_density(self.alpha, self.beta, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        beta_probability(self.alpha, self.beta, x)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, 1.0, |p| beta_quantile(self.alpha, self.beta, p))
    }

    fn mean(&self) -> Option<f64> {
        Some(self.alpha / (self.alpha + self.beta))
    }

    fn variance(&self) -> Option<f64> {
        let s = self.alpha + self.beta;
        Some(self.alpha * self.beta / (s * s * (s + 1.0)))
    }
}

// ============================================================================
// Beta prime
// ============================================================================

/// The Beta prime distribution: `X / (1 - X)` for `X ~ Beta(alpha, beta)`.
#[derive(Debug, Clone)]
pub struct BetaPrime {
    pub alpha: f64,
    pub beta: f64,
}

impl Distribution for BetaPrime {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [alpha, beta] = expect_params::<2>("betaprime", params)?;
        check_positive("betaprime", "alpha", alpha)?;
        check_positive("betaprime", "beta", beta)?;
        Ok(BetaPrime { alpha, beta })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }
}

impl DistributionMethods for BetaPrime {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        beta_prime_density(self.alpha, self.beta, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        beta_prime_probability(self.alpha, self.beta, x)
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, f64::INFINITY, |p| {
            beta_prime_quantile(self.alpha, self.beta, p)
        })
    }

    fn mean(&self) -> Option<f64> {
        (self.beta > 1.0).then(|| self.alpha / (self.beta - 1.0))
    }

    fn variance(&self) -> Option<f64> {
        (self.beta > 2.0).then(|| {
            let bm1 = self.beta - 1.0;
            self.alpha * (self.alpha + bm1) / ((self.beta - 2.0) * bm1 * bm1)
        })
    }
}

// ============================================================================
// Kumaraswamy
// ============================================================================

/// The Kumaraswamy distribution on [0, 1] with shapes `a` and `b`.
#[derive(Debug, Clone)]
pub struct Kumaraswamy {
    pub a: f64,
    pub b: f64,
}

impl Kumaraswamy {
    /// Raw moment `E[X^n] = b * B(1 + n/a, b)`.
    fn raw_moment(&self, n: f64) -> f64 {
        self.b * beta_fn(1.0 + n / self.a, self.b)
    }
}

impl Distribution for Kumaraswamy {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b] = expect_params::<2>("kumaraswamy", params)?;
        if !(a > 0.0 && a.is_finite()) || !(b > 0.0 && b.is_finite()) {
            return Err(Error::invalid(
                "kumaraswamy",
                format!("shapes must be finite and > 0, got a={a}, b={b}"),
            ));
        }
        Ok(Kumaraswamy { a, b })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }
}

impl DistributionMethods for Kumaraswamy {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        self.a * self.b * x.powf(self.a - 1.0) * (1.0 - x.powf(self.a)).powf(self.b - 1.0)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            1.0 - (1.0 - x.powf(self.a)).powf(self.b)
        }
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, 0.0, 1.0, |p| {
            (1.0 - (1.0 - p).powf(1.0 / self.b)).powf(1.0 / self.a)
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(self.raw_moment(1.0))
    }

    fn variance(&self) -> Option<f64> {
        let m1 = self.raw_moment(1.0);
        Some((self.raw_moment(2.0) - m1 * m1).max(0.0))
    }

    fn median(&self) -> Option<f64> {
        Some((1.0 - 2.0_f64.powf(-1.0 / self.b)).powf(1.0 / self.a))
    }
}

// ============================================================================
// Arcsine
// ============================================================================

/// The Arcsine distribution on [a, b].
#[derive(Debug, Clone)]
pub struct Arcsine {
    pub a: f64,
    pub b: f64,
}

impl Distribution for Arcsine {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [a, b] = expect_params::<2>("arcsine", params)?;
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(Error::invalid(
                "arcsine",
                format!("bounds must be finite with a < b, got a={a}, b={b}"),
            ));
        }
        Ok(Arcsine { a, b })
    }

    fn n_params(&self) -> usize {
        2
    }

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }
}

impl DistributionMethods for Arcsine {
    fn category(&self) -> Category {
        Category::Continuous
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            return 0.0;
        }
        // Infinite at both endpoints
        1.0 / (PI * ((x - self.a) * (self.b - x)).sqrt())
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            FRAC_2_PI * ((x - self.a) / (self.b - self.a)).sqrt().asin()
        }
    }

    fn ppf(&self, q: f64) -> f64 {
        support_ppf(q, self.a, self.b, |p| {
            let s = (0.5 * PI * p).sin();
            self.a + (self.b - self.a) * s * s
        })
    }

    fn mean(&self) -> Option<f64> {
        Some(0.5 * (self.a + self.b))
    }

    fn variance(&self) -> Option<f64> {
        let w = self.b - self.a;
        Some(w * w / 8.0)
    }

    fn median(&self) -> Option<f64> {
        Some(0.5 * (self.a + self.b))
    }
}
