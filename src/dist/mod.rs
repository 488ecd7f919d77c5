pub mod beta;
pub mod binomial;
pub mod cauchy;
pub mod cosine;
pub mod discrete_uniform;
pub mod exponential;
pub mod extreme;
pub mod gamma;
pub mod hypergeometric;
pub mod laplace;
pub mod levy;
pub mod logistic;
pub mod lognormal;
pub mod negative_binomial;
pub mod normal;
pub mod pareto;
pub mod poisson;
pub mod rayleigh;
pub mod studentt;
pub mod uniform;

// Re-export all distributions for convenience
pub use beta::{Arcsine, Beta, BetaPrime, Kumaraswamy};
pub use binomial::{Bernoulli, Binomial};
pub use cauchy::Cauchy;
pub use cosine::Cosine;
pub use discrete_uniform::DiscreteUniform;
pub use exponential::Exponential;
pub use extreme::{Frechet, Gumbel};
pub use gamma::{Chi, ChiSquare, Erlang, Gamma, InvGamma};
pub use hypergeometric::Hypergeometric;
pub use laplace::Laplace;
pub use levy::Levy;
pub use logistic::Logistic;
pub use lognormal::LogNormal;
pub use negative_binomial::{Geometric, NegativeBinomial};
pub use normal::Normal;
pub use pareto::Pareto;
pub use poisson::Poisson;
pub use rayleigh::Rayleigh;
pub use studentt::{FisherF, StudentT};
pub use uniform::{Triangular, Uniform};

use crate::error::{Error, Result};
use crate::registry::Family;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Whether a family has a density over the reals or a mass over the integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Continuous,
    Discrete,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Continuous => "continuous",
            Category::Discrete => "discrete",
        }
    }
}

/// A trait for parametric distribution families.
pub trait Distribution: Sized + Clone + Debug {
    /// Creates a distribution from its positional parameters.
    ///
    /// The order is the family's registry parameter order.
    fn from_params(params: &[f64]) -> Result<Self>;

    /// Returns the number of parameters for this distribution.
    fn n_params(&self) -> usize;

    /// Returns the positional parameters of the distribution.
    fn params(&self) -> Vec<f64>;
}

/// A trait providing the evaluation functions of a distribution.
///
/// This trait provides scipy-like methods:
/// - `pdf()` - density (continuous) or mass (discrete)
/// - `cdf()` - cumulative distribution function
/// - `ppf()` - percent point function (inverse CDF / quantile function)
/// - `mean()`, `median()`, `std()`, `variance()` - summary values
///
/// Summary values are `None` where the distribution has no closed form
/// (or no finite value) for them.
pub trait DistributionMethods {
    /// Continuous or discrete.
    fn category(&self) -> Category;

    /// Evaluates the density or mass function at `x`.
    ///
    /// Discrete families return 0 for non-integer `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Evaluates the cumulative distribution function at `x`.
    fn cdf(&self, x: f64) -> f64;

    /// Evaluates the percent point function (inverse CDF / quantile function).
    /// Returns the value x such that P(X <= x) = q.
    ///
    /// `ppf(0)` and `ppf(1)` are the ends of the support, which may be infinite.
    /// Discrete families return the smallest support integer with `cdf >= q`.
    fn ppf(&self, q: f64) -> f64;

    /// Returns the mean of the distribution.
    fn mean(&self) -> Option<f64>;

    /// Returns the variance of the distribution.
    fn variance(&self) -> Option<f64>;

    /// Returns the standard deviation of the distribution.
    fn std(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Returns the median of the distribution when it has a closed form.
    fn median(&self) -> Option<f64> {
        None
    }

    /// Evaluates the density or mass function at every point of `x`.
    fn pdf_array(&self, x: &Array1<f64>) -> Array1<f64> {
        x.mapv(|v| self.pdf(v))
    }

    /// Evaluates the cumulative distribution function at every point of `x`.
    fn cdf_array(&self, x: &Array1<f64>) -> Array1<f64> {
        x.mapv(|v| self.cdf(v))
    }

    /// Evaluates the percent point function at every probability of `q`.
    fn ppf_array(&self, q: &Array1<f64>) -> Array1<f64> {
        q.mapv(|p| self.ppf(p))
    }
}

/// A distribution bound to one registry family.
#[derive(Debug, Clone)]
pub enum AnyDistribution {
    Arcsine(Arcsine),
    Beta(Beta),
    BetaPrime(BetaPrime),
    Cauchy(Cauchy),
    Chi(Chi),
    ChiSquare(ChiSquare),
    Cosine(Cosine),
    Erlang(Erlang),
    Exponential(Exponential),
    F(FisherF),
    Frechet(Frechet),
    Gamma(Gamma),
    Gumbel(Gumbel),
    InvGamma(InvGamma),
    Kumaraswamy(Kumaraswamy),
    Laplace(Laplace),
    Levy(Levy),
    Logistic(Logistic),
    LogNormal(LogNormal),
    Normal(Normal),
    Pareto(Pareto),
    Rayleigh(Rayleigh),
    T(StudentT),
    Triangular(Triangular),
    Uniform(Uniform),
    Bernoulli(Bernoulli),
    Binomial(Binomial),
    DiscreteUniform(DiscreteUniform),
    Geometric(Geometric),
    Hypergeometric(Hypergeometric),
    NegativeBinomial(NegativeBinomial),
    Poisson(Poisson),
}

macro_rules! dispatch {
    ($value:expr, $d:ident => $body:expr) => {
        match $value {
            AnyDistribution::Arcsine($d) => $body,
            AnyDistribution::Beta($d) => $body,
            AnyDistribution::BetaPrime($d) => $body,
            AnyDistribution::Cauchy($d) => $body,
            AnyDistribution::Chi($d) => $body,
            AnyDistribution::ChiSquare($d) => $body,
            AnyDistribution::Cosine($d) => $body,
            AnyDistribution::Erlang($d) => $body,
            AnyDistribution::Exponential($d) => $body,
            AnyDistribution::F($d) => $body,
            AnyDistribution::Frechet($d) => $body,
            AnyDistribution::Gamma($d) => $body,
            AnyDistribution::Gumbel($d) => $body,
            AnyDistribution::InvGamma($d) => $body,
            AnyDistribution::Kumaraswamy($d) => $body,
            AnyDistribution::Laplace($d) => $body,
            AnyDistribution::Levy($d) => $body,
            AnyDistribution::Logistic($d) => $body,
            AnyDistribution::LogNormal($d) => $body,
            AnyDistribution::Normal($d) => $body,
            AnyDistribution::Pareto($d) => $body,
            AnyDistribution::Rayleigh($d) => $body,
            AnyDistribution::T($d) => $body,
            AnyDistribution::Triangular($d) => $body,
            AnyDistribution::Uniform($d) => $body,
            AnyDistribution::Bernoulli($d) => $body,
            AnyDistribution::Binomial($d) => $body,
            AnyDistribution::DiscreteUniform($d) => $body,
            AnyDistribution::Geometric($d) => $body,
            AnyDistribution::Hypergeometric($d) => $body,
            AnyDistribution::NegativeBinomial($d) => $body,
            AnyDistribution::Poisson($d) => $body,
        }
    };
}

impl AnyDistribution {
    /// Binds `family` to positional `params`.
    pub fn new(family: Family, params: &[f64]) -> Result<Self> {
        let dist = match family {
            Family::Arcsine => AnyDistribution::Arcsine(Arcsine::from_params(params)?),
            Family::Beta => AnyDistribution::Beta(Beta::from_params(params)?),
            Family::BetaPrime => AnyDistribution::BetaPrime(BetaPrime::from_params(params)?),
            Family::Cauchy => AnyDistribution::Cauchy(Cauchy::from_params(params)?),
            Family::Chi => AnyDistribution::Chi(Chi::from_params(params)?),
            Family::ChiSquare => AnyDistribution::ChiSquare(ChiSquare::from_params(params)?),
            Family::Cosine => AnyDistribution::Cosine(Cosine::from_params(params)?),
            Family::Erlang => AnyDistribution::Erlang(Erlang::from_params(params)?),
            Family::Exponential => {
                AnyDistribution::Exponential(Exponential::from_params(params)?)
            }
            Family::F => AnyDistribution::F(FisherF::from_params(params)?),
            Family::Frechet => AnyDistribution::Frechet(Frechet::from_params(params)?),
            Family::Gamma => AnyDistribution::Gamma(Gamma::from_params(params)?),
            Family::Gumbel => AnyDistribution::Gumbel(Gumbel::from_params(params)?),
            Family::InvGamma => AnyDistribution::InvGamma(InvGamma::from_params(params)?),
            Family::Kumaraswamy => {
                AnyDistribution::Kumaraswamy(Kumaraswamy::from_params(params)?)
            }
            Family::Laplace => AnyDistribution::Laplace(Laplace::from_params(params)?),
            Family::Levy => AnyDistribution::Levy(Levy::from_params(params)?),
            Family::Logistic => AnyDistribution::Logistic(Logistic::from_params(params)?),
            Family::LogNormal => AnyDistribution::LogNormal(LogNormal::from_params(params)?),
            Family::Normal => AnyDistribution::Normal(Normal::from_params(params)?),
            Family::Pareto => AnyDistribution::Pareto(Pareto::from_params(params)?),
            Family::Rayleigh => AnyDistribution::Rayleigh(Rayleigh::from_params(params)?),
            Family::T => AnyDistribution::T(StudentT::from_params(params)?),
            Family::Triangular => AnyDistribution::Triangular(Triangular::from_params(params)?),
            Family::Uniform => AnyDistribution::Uniform(Uniform::from_params(params)?),
            Family::Bernoulli => AnyDistribution::Bernoulli(Bernoulli::from_params(params)?),
            Family::Binomial => AnyDistribution::Binomial(Binomial::from_params(params)?),
            Family::DiscreteUniform => {
                AnyDistribution::DiscreteUniform(DiscreteUniform::from_params(params)?)
            }
            Family::Geometric => AnyDistribution::Geometric(Geometric::from_params(params)?),
            Family::Hypergeometric => {
                AnyDistribution::Hypergeometric(Hypergeometric::from_params(params)?)
            }
            Family::NegativeBinomial => {
                AnyDistribution::NegativeBinomial(NegativeBinomial::from_params(params)?)
            }
            Family::Poisson => AnyDistribution::Poisson(Poisson::from_params(params)?),
        };
        Ok(dist)
    }

    /// The registry family this distribution was built for.
    pub fn family(&self) -> Family {
        match self {
            AnyDistribution::Arcsine(_) => Family::Arcsine,
            AnyDistribution::Beta(_) => Family::Beta,
            AnyDistribution::BetaPrime(_) => Family::BetaPrime,
            AnyDistribution::Cauchy(_) => Family::Cauchy,
            AnyDistribution::Chi(_) => Family::Chi,
            AnyDistribution::ChiSquare(_) => Family::ChiSquare,
            AnyDistribution::Cosine(_) => Family::Cosine,
            AnyDistribution::Erlang(_) => Family::Erlang,
            AnyDistribution::Exponential(_) => Family::Exponential,
            AnyDistribution::F(_) => Family::F,
            AnyDistribution::Frechet(_) => Family::Frechet,
            AnyDistribution::Gamma(_) => Family::Gamma,
            AnyDistribution::Gumbel(_) => Family::Gumbel,
            AnyDistribution::InvGamma(_) => Family::InvGamma,
            AnyDistribution::Kumaraswamy(_) => Family::Kumaraswamy,
            AnyDistribution::Laplace(_) => Family::Laplace,
            AnyDistribution::Levy(_) => Family::Levy,
            AnyDistribution::Logistic(_) => Family::Logistic,
            AnyDistribution::LogNormal(_) => Family::LogNormal,
            AnyDistribution::Normal(_) => Family::Normal,
            AnyDistribution::Pareto(_) => Family::Pareto,
            AnyDistribution::Rayleigh(_) => Family::Rayleigh,
            AnyDistribution::T(_) => Family::T,
            AnyDistribution::Triangular(_) => Family::Triangular,
            AnyDistribution::Uniform(_) => Family::Uniform,
            AnyDistribution::Bernoulli(_) => Family::Bernoulli,
            AnyDistribution::Binomial(_) => Family::Binomial,
            AnyDistribution::DiscreteUniform(_) => Family::DiscreteUniform,
            AnyDistribution::Geometric(_) => Family::Geometric,
            AnyDistribution::Hypergeometric(_) => Family::Hypergeometric,
            AnyDistribution::NegativeBinomial(_) => Family::NegativeBinomial,
            AnyDistribution::Poisson(_) => Family::Poisson,
        }
    }

    /// Returns the positional parameters of the wrapped distribution.
    pub fn params(&self) -> Vec<f64> {
        dispatch!(self, d => d.params())
    }
}

impl DistributionMethods for AnyDistribution {
    fn category(&self) -> Category {
        dispatch!(self, d => d.category())
    }

    fn pdf(&self, x: f64) -> f64 {
        dispatch!(self, d => d.pdf(x))
    }

    fn cdf(&self, x: f64) -> f64 {
        dispatch!(self, d => d.cdf(x))
    }

    fn ppf(&self, q: f64) -> f64 {
        dispatch!(self, d => d.ppf(q))
    }

    fn mean(&self) -> Option<f64> {
        dispatch!(self, d => d.mean())
    }

    fn variance(&self) -> Option<f64> {
        dispatch!(self, d => d.variance())
    }

    fn std(&self) -> Option<f64> {
        dispatch!(self, d => d.std())
    }

    fn median(&self) -> Option<f64> {
        dispatch!(self, d => d.median())
    }
}

// ============================================================================
// Helpers shared by the family implementations
// ============================================================================

/// Checks the parameter count and returns the parameters as a fixed array.
pub(crate) fn expect_params<const N: usize>(
    family: &'static str,
    params: &[f64],
) -> Result<[f64; N]> {
    <[f64; N]>::try_from(params).map_err(|_| {
        Error::invalid(
            family,
            format!("expected {} parameters, got {}", N, params.len()),
        )
    })
}

/// Rejects a parameter unless it is finite and strictly positive.
pub(crate) fn check_positive(family: &'static str, name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(
            family,
            format!("{name} must be finite and > 0, got {value}"),
        ))
    }
}

/// Converts a parameter that must hold a non-negative integer.
pub(crate) fn expect_count(family: &'static str, name: &str, value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_EXACT_INT {
        Ok(value as u64)
    } else {
        Err(Error::invalid(
            family,
            format!("{name} must be a non-negative integer, got {value}"),
        ))
    }
}

/// Largest integer every f64 in the range represents exactly.
pub(crate) const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Returns `x` as an integer support point, or `None` for fractional input.
pub(crate) fn lattice_point(x: f64) -> Option<i64> {
    if x.is_finite() && x.fract() == 0.0 && x.abs() <= MAX_EXACT_INT {
        Some(x as i64)
    } else {
        None
    }
}

/// Handles the probability edge cases of a quantile function.
///
/// `q <= 0` maps to `lower`, `q >= 1` to `upper`, NaN stays NaN and every
/// interior probability is passed to `inner`.
pub(crate) fn support_ppf(q: f64, lower: f64, upper: f64, inner: impl FnOnce(f64) -> f64) -> f64 {
    if q.is_nan() {
        f64::NAN
    } else if q <= 0.0 {
        lower
    } else if q >= 1.0 {
        upper
    } else {
        inner(q)
    }
}

/// Newton-Raphson with bisection fallback for quantiles without a closed form.
///
/// `x0` is the starting guess; the bracket starts at the support bounds and
/// grows geometrically when a bound is infinite. `p` must lie in (0, 1).
pub(crate) fn solve_quantile(
    cdf: impl Fn(f64) -> f64,
    pdf: impl Fn(f64) -> f64,
    p: f64,
    x0: f64,
    support_lo: f64,
    support_hi: f64,
) -> f64 {
    let start = if x0.is_finite() {
        x0
    } else if support_lo.is_finite() && support_hi.is_finite() {
        0.5 * (support_lo + support_hi)
    } else if support_lo.is_finite() {
        support_lo + 1.0
    } else if support_hi.is_finite() {
        support_hi - 1.0
    } else {
        0.0
    };

    let mut lo = support_lo;
    if !lo.is_finite() {
        let mut step = 1.0_f64.max(start.abs());
        lo = start - step;
        while cdf(lo) > p && lo.is_finite() {
            step *= 2.0;
            lo = start - step;
        }
    }
    let mut hi = support_hi;
    if !hi.is_finite() {
        let mut step = 1.0_f64.max(start.abs());
        hi = start + step;
        while cdf(hi) < p && hi.is_finite() {
            step *= 2.0;
            hi = start + step;
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return f64::NAN;
    }

    let tol = 1e-14;
    let mut x = start.clamp(lo, hi);
    for _ in 0..200 {
        let f = cdf(x) - p;
        if f.abs() < tol {
            return x;
        }
        if f < 0.0 {
            lo = x;
        } else {
            hi = x;
        }
        if hi - lo <= f64::EPSILON * hi.abs().max(lo.abs()).max(f64::MIN_POSITIVE) {
            break;
        }
        let fprime = pdf(x);
        let newton = x - f / fprime;
        x = if fprime.is_finite() && fprime > f64::EPSILON && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };
    }
    x
}

/// Smallest support integer `k >= lower` with `cdf(k) >= p`.
///
/// `p` must lie in (0, 1); `upper` caps the search for bounded supports.
pub(crate) fn search_discrete_quantile(
    cdf: impl Fn(i64) -> f64,
    p: f64,
    lower: i64,
    upper: Option<i64>,
) -> f64 {
    if cdf(lower) >= p {
        return lower as f64;
    }
    let cap = upper.unwrap_or(MAX_EXACT_INT as i64);
    let mut below = lower;
    let mut step: i64 = 1;
    let mut above = lower.saturating_add(step).min(cap);
    while cdf(above) < p {
        if above >= cap {
            return upper.map_or(f64::INFINITY, |u| u as f64);
        }
        below = above;
        step = step.saturating_mul(2);
        above = lower.saturating_add(step).min(cap);
    }
    // invariant: cdf(below) < p <= cdf(above)
    while above - below > 1 {
        let mid = below + (above - below) / 2;
        if cdf(mid) >= p {
            above = mid;
        } else {
            below = mid;
        }
    }
    above as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_support_ppf_edges() {
        let inner = |q: f64| q * 10.0;
        assert_eq!(support_ppf(0.0, -1.0, 2.0, inner), -1.0);
        assert_eq!(support_ppf(1.0, -1.0, 2.0, inner), 2.0);
        assert_eq!(support_ppf(0.5, -1.0, 2.0, inner), 5.0);
        assert!(support_ppf(f64::NAN, -1.0, 2.0, inner).is_nan());
    }

    #[test]
    fn test_solve_quantile_unbounded_logistic() {
        let cdf = |x: f64| 1.0 / (1.0 + (-x).exp());
        let pdf = |x: f64| {
            let e = (-x.abs()).exp();
            e / ((1.0 + e) * (1.0 + e))
        };
        let x = solve_quantile(cdf, pdf, 0.9, 0.0, f64::NEG_INFINITY, f64::INFINITY);
        assert_relative_eq!(x, (0.9_f64 / 0.1).ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_solve_quantile_bounded_support() {
        // cdf x^2 on [0, 1]
        let x = solve_quantile(|x| x * x, |x| 2.0 * x, 0.25, 0.9, 0.0, 1.0);
        assert_relative_eq!(x, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_search_discrete_quantile() {
        // uniform mass on 0..=9
        let cdf = |k: i64| ((k + 1).clamp(0, 10) as f64) / 10.0;
        assert_eq!(search_discrete_quantile(cdf, 0.05, 0, Some(9)), 0.0);
        assert_eq!(search_discrete_quantile(cdf, 0.5, 0, Some(9)), 4.0);
        assert_eq!(search_discrete_quantile(cdf, 0.51, 0, Some(9)), 5.0);
        assert_eq!(search_discrete_quantile(cdf, 0.999, 0, Some(9)), 9.0);
    }

    #[test]
    fn test_lattice_point() {
        assert_eq!(lattice_point(3.0), Some(3));
        assert_eq!(lattice_point(-2.0), Some(-2));
        assert_eq!(lattice_point(2.5), None);
        assert_eq!(lattice_point(f64::INFINITY), None);
    }

    #[test]
    fn test_expect_params_arity() {
        assert_eq!(expect_params::<2>("normal", &[0.0, 1.0]).unwrap(), [0.0, 1.0]);
        assert!(expect_params::<2>("normal", &[0.0]).is_err());
    }
}
