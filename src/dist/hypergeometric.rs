use crate::dist::{
    expect_count, expect_params, lattice_point, search_discrete_quantile, support_ppf, Category,
    Distribution, DistributionMethods,
};
use crate::error::{Error, Result};
use statrs::function::factorial::ln_binomial;

/// Relative size below which a tail term no longer changes the sum.
const TAIL_CUTOFF: f64 = 1e-17;

/// The Hypergeometric distribution: successes in `n` draws without
/// replacement from a population of `big_n` containing `big_k` successes.
///
/// Masses are evaluated through log binomial coefficients so that large
/// populations stay finite.
#[derive(Debug, Clone)]
pub struct Hypergeometric {
    pub big_n: u64,
    pub big_k: u64,
    pub n: u64,
}

impl Hypergeometric {
    /// Smallest attainable count.
    fn lower(&self) -> u64 {
        (self.n + self.big_k).saturating_sub(self.big_n)
    }

    /// Largest attainable count.
    fn upper(&self) -> u64 {
        self.big_k.min(self.n)
    }

    /// Most likely count, clamped into the support.
    fn mode(&self) -> u64 {
        let (pop, k, n) = (self.big_n as f64, self.big_k as f64, self.n as f64);
        let mode = ((n + 1.0) * (k + 1.0) / (pop + 2.0)).floor() as u64;
        mode.clamp(self.lower(), self.upper())
    }

    /// `N - K - n` as a float; negative when the lower bound is forced above zero.
    fn offset(&self) -> f64 {
        self.big_n as f64 - self.big_k as f64 - self.n as f64
    }

    /// Mass at a count inside `[lower, upper]`.
    fn mass(&self, k: u64) -> f64 {
        if self.lower() == self.upper() {
            return 1.0;
        }
        (ln_binomial(self.big_k, k) + ln_binomial(self.big_n - self.big_k, self.n - k)
            - ln_binomial(self.big_n, self.n))
        .exp()
    }

    fn cdf_at(&self, k: i64) -> f64 {
        if k < self.lower() as i64 {
            return 0.0;
        }
        if k >= self.upper() as i64 {
            return 1.0;
        }
        let k = k as u64;
        let (lower, upper) = (self.lower(), self.upper());
        let (big_k, n, offset) = (self.big_k as f64, self.n as f64, self.offset());

        // sum whichever tail lies away from the mode; its terms only shrink
        if k < self.mode() {
            let mut term = self.mass(k);
            let mut sum = term;
            let mut j = k;
            while j > lower {
                let jf = j as f64;
                term *= jf * (offset + jf) / ((big_k - jf + 1.0) * (n - jf + 1.0));
                sum += term;
                j -= 1;
                if term < sum * TAIL_CUTOFF {
                    break;
                }
            }
            sum.clamp(0.0, 1.0)
        } else {
            let mut j = k + 1;
            let mut term = self.mass(j);
            let mut sum = term;
            while j < upper {
                let jf = j as f64;
                term *= (big_k - jf) * (n - jf) / ((jf + 1.0) * (offset + jf + 1.0));
                sum += term;
                j += 1;
                if term < sum * TAIL_CUTOFF {
                    break;
                }
            }
            (1.0 - sum).clamp(0.0, 1.0)
        }
    }
}

impl Distribution for Hypergeometric {
    fn from_params(params: &[f64]) -> Result<Self> {
        let [big_n, big_k, n] = expect_params::<3>("hypergeometric", params)?;
        let big_n = expect_count("hypergeometric", "N", big_n)?;
        let big_k = expect_count("hypergeometric", "K", big_k)?;
        let n = expect_count("hypergeometric", "n", n)?;
        if big_k > big_n {
            return Err(Error::invalid(
                "hypergeometric",
                format!("K must not exceed N, got K = {big_k} and N = {big_n}"),
            ));
        }
        if n > big_n {
            return Err(Error::invalid(
                "hypergeometric",
                format!("n must not exceed N, got n = {n} and N = {big_n}"),
            ));
        }
        Ok(Hypergeometric { big_n, big_k, n })
    }

    fn n_params(&self) -> usize {
        3
    }

    fn params(&self) -> Vec<f64> {
        vec![self.big_n as f64, self.big_k as f64, self.n as f64]
    }
}

impl DistributionMethods for Hypergeometric {
    fn category(&self) -> Category {
        Category::Discrete
    }

    fn pdf(&self, x: f64) -> f64 {
        let (lower, upper) = (self.lower(), self.upper());
        match lattice_point(x) {
            Some(k) if k >= lower as i64 && k <= upper as i64 => self.mass(k as u64),
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
        if x >= self.upper() as f64 {
            return 1.0;
        }
        self.cdf_at(x.floor() as i64)
    }

    fn ppf(&self, q: f64) -> f64 {
        let (lower, upper) = (self.lower() as i64, self.upper() as i64);
        support_ppf(q, lower as f64, upper as f64, |p| {
            search_discrete_quantile(|k| self.cdf_at(k), p, lower, Some(upper))
        })
    }

    fn mean(&self) -> Option<f64> {
        if self.big_n == 0 {
            return Some(0.0);
        }
        Some(self.n as f64 * self.big_k as f64 / self.big_n as f64)
    }

    fn variance(&self) -> Option<f64> {
        if self.big_n <= 1 {
            return Some(0.0);
        }
        let (pop, k, n) = (self.big_n as f64, self.big_k as f64, self.n as f64);
        Some(n * k * (pop - k) * (pop - n) / (pop * pop * (pop - 1.0)))
    }
}
