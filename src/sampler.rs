//! Turning resolved bounds into chart points.

use crate::bounds::Bounds;
use crate::dist::{AnyDistribution, DistributionMethods};
use crate::error::Error;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One sampled `(x, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Which function a curve plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FunctionKind {
    /// Density for continuous families, mass for discrete ones.
    #[default]
    #[serde(rename = "pdf_pmf")]
    DensityOrMass,
    #[serde(rename = "cdf")]
    Cumulative,
}

impl FromStr for FunctionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "pdf_pmf" | "pdf" | "pmf" => Ok(FunctionKind::DensityOrMass),
            "cdf" => Ok(FunctionKind::Cumulative),
            other => Err(Error::UnknownFunctionKind(other.to_string())),
        }
    }
}

/// Rounds to `digits` significant decimal digits.
///
/// Zero and non-finite values are returned unchanged.
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let precision = digits.clamp(1, 17) as usize - 1;
    format!("{:.*e}", precision, value)
        .parse()
        .unwrap_or(value)
}

/// A lazily evaluated, restartable sequence of points.
///
/// Iterating twice yields identical points: every value is a pure function
/// of the distribution, the bounds and the sampling settings.
#[derive(Debug, Clone)]
pub struct Curve {
    dist: AnyDistribution,
    kind: FunctionKind,
    bounds: Bounds,
    intervals: usize,
    digits: u32,
}

impl Curve {
    /// # Arguments
    /// * `intervals` - Equal sub-intervals of a continuous range.
    /// * `digits` - Significant digits kept on x and y.
    pub fn new(
        dist: AnyDistribution,
        kind: FunctionKind,
        bounds: Bounds,
        intervals: usize,
        digits: u32,
    ) -> Self {
        Curve {
            dist,
            kind,
            bounds,
            intervals: intervals.max(1),
            digits,
        }
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn distribution(&self) -> &AnyDistribution {
        &self.dist
    }

    /// Number of x positions evaluated before filtering.
    pub fn candidate_count(&self) -> usize {
        match &self.bounds {
            Bounds::Continuous { .. } => self.intervals + 1,
            Bounds::Discrete { points } => points.len(),
        }
    }

    fn x_at(&self, i: usize) -> f64 {
        match &self.bounds {
            Bounds::Continuous { lo, hi } => {
                if i >= self.intervals {
                    *hi
                } else {
                    lo + (hi - lo) * (i as f64 / self.intervals as f64)
                }
            }
            Bounds::Discrete { points } => points[i] as f64,
        }
    }

    fn eval(&self, x: f64) -> f64 {
        match self.kind {
            FunctionKind::DensityOrMass => self.dist.pdf(x),
            FunctionKind::Cumulative => self.dist.cdf(x),
        }
    }

    /// Unrounded x positions.
    pub fn grid(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.candidate_count(), |i| self.x_at(i))
    }

    /// Unrounded, unfiltered function values at [`Curve::grid`].
    pub fn raw_values(&self) -> Array1<f64> {
        let grid = self.grid();
        match self.kind {
            FunctionKind::DensityOrMass => self.dist.pdf_array(&grid),
            FunctionKind::Cumulative => self.dist.cdf_array(&grid),
        }
    }

    pub fn iter(&self) -> CurveIter<'_> {
        CurveIter {
            curve: self,
            index: 0,
            last_x: None,
            non_finite: 0,
            merged: 0,
        }
    }

    /// Collects the curve, logging any points that had to be dropped.
    pub fn points(&self) -> Vec<Point> {
        let mut iter = self.iter();
        let points: Vec<Point> = iter.by_ref().collect();
        if iter.non_finite() > 0 {
            log::warn!(
                "{}: dropped {} of {} points with non-finite values",
                self.dist.family(),
                iter.non_finite(),
                self.candidate_count()
            );
        }
        if iter.merged() > 0 {
            log::warn!(
                "{}: dropped {} of {} points merged by rounding x to {} digits",
                self.dist.family(),
                iter.merged(),
                self.candidate_count(),
                self.digits
            );
        }
        points
    }

    /// Column form of [`Curve::points`].
    pub fn to_arrays(&self) -> (Array1<f64>, Array1<f64>) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = self.iter().map(|p| (p.x, p.y)).unzip();
        (Array1::from(xs), Array1::from(ys))
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = Point;
    type IntoIter = CurveIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`Curve`].
#[derive(Debug, Clone)]
pub struct CurveIter<'a> {
    curve: &'a Curve,
    index: usize,
    last_x: Option<f64>,
    non_finite: usize,
    merged: usize,
}

impl CurveIter<'_> {
    /// Positions skipped so far because the function value was not finite.
    pub fn non_finite(&self) -> usize {
        self.non_finite
    }

    /// Positions skipped so far because rounding merged x with the previous point.
    pub fn merged(&self) -> usize {
        self.merged
    }
}

impl Iterator for CurveIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let n = self.curve.candidate_count();
        while self.index < n {
            let raw_x = self.curve.x_at(self.index);
            self.index += 1;

            let y = self.curve.eval(raw_x);
            if !y.is_finite() {
                self.non_finite += 1;
                continue;
            }
            let x = round_significant(raw_x, self.curve.digits);
            // rounding can merge neighbours on very narrow ranges
            if self.last_x.is_some_and(|last| x <= last) {
                self.merged += 1;
                continue;
            }
            self.last_x = Some(x);
            return Some(Point {
                x,
                y: round_significant(y, self.curve.digits),
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.curve.candidate_count() - self.index))
    }
}
