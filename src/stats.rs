//! Summary statistics with an explicit "undefined" marker.

use crate::dist::{AnyDistribution, DistributionMethods};
use serde::{Serialize, Serializer};
use std::fmt;

/// A finite summary value, or `Undefined` where the family has no finite
/// closed form (never reported as zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Value(f64),
    Undefined,
}

impl StatValue {
    /// `Undefined` for `None` and for non-finite values.
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => StatValue::Value(v),
            _ => StatValue::Undefined,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            StatValue::Value(v) => Some(v),
            StatValue::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, StatValue::Undefined)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Value(v) => write!(f, "{v}"),
            StatValue::Undefined => f.write_str("undefined"),
        }
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Value(v) => serializer.serialize_f64(*v),
            StatValue::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

/// Mean, median and standard deviation of one distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: StatValue,
    pub median: StatValue,
    pub std: StatValue,
}

/// Summary statistics of a distribution built from validated parameters.
pub fn statistics(dist: &AnyDistribution) -> Summary {
    Summary {
        mean: StatValue::from_option(dist.mean()),
        median: StatValue::from_option(dist.median()),
        std: StatValue::from_option(dist.std()),
    }
}
