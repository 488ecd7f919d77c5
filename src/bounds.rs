//! Choice of the x range to evaluate.
//!
//! The range comes from the distribution's own quantile function, so a
//! window like `[0.005, 0.995]` shows the same share of probability mass for
//! a narrow normal as for a heavy-tailed pareto.

use crate::dist::{AnyDistribution, Category, DistributionMethods};
use crate::window::QuantileWindow;
use serde::Serialize;

/// The x range of one curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Bounds {
    /// A closed real interval with `lo < hi`.
    Continuous { lo: f64, hi: f64 },
    /// Strictly increasing integer support points.
    Discrete { points: Vec<i64> },
}

impl Bounds {
    /// Smallest and largest x covered.
    pub fn span(&self) -> (f64, f64) {
        match self {
            Bounds::Continuous { lo, hi } => (*lo, *hi),
            Bounds::Discrete { points } => (
                points.first().map_or(f64::NAN, |&k| k as f64),
                points.last().map_or(f64::NAN, |&k| k as f64),
            ),
        }
    }
}

/// Resolves the evaluation range of `dist` for a probability window.
///
/// # Arguments
/// * `dist` - A distribution built from validated parameters.
/// * `window` - The probability mass to cover.
/// * `point_cap` - Largest discrete support enumerated point by point;
///   wider supports are strided down to `point_cap + 1` points.
///
/// # Returns
/// `None` ("no data") when a quantile is not finite or the continuous range
/// is empty.
pub fn resolve(
    dist: &AnyDistribution,
    window: &QuantileWindow,
    point_cap: usize,
) -> Option<Bounds> {
    let lo = dist.ppf(window.low());
    let hi = dist.ppf(window.high());
    if !lo.is_finite() || !hi.is_finite() {
        log::warn!(
            "{}: quantile window [{}, {}] maps to non-finite range [{}, {}]",
            dist.family(),
            window.low(),
            window.high(),
            lo,
            hi
        );
        return None;
    }

    match dist.category() {
        Category::Continuous => {
            if lo >= hi {
                log::warn!("{}: empty range [{}, {}]", dist.family(), lo, hi);
                return None;
            }
            Some(Bounds::Continuous { lo, hi })
        }
        Category::Discrete => {
            let lo = lo.floor() as i64;
            let hi = hi.floor() as i64;
            Some(Bounds::Discrete {
                points: support_points(lo, hi, point_cap),
            })
        }
    }
}

/// Integers `lo..=hi`, strided to `cap + 1` points when there are more than `cap`.
///
/// Both endpoints are always included.
pub fn support_points(lo: i64, hi: i64, cap: usize) -> Vec<i64> {
    if hi < lo {
        return Vec::new();
    }
    let width = hi as i128 - lo as i128;
    let cap = cap.max(1) as i128;
    if width + 1 <= cap {
        return (lo..=hi).collect();
    }
    (0..=cap)
        .map(|i| (lo as i128 + i * width / cap) as i64)
        .collect()
}
