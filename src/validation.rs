//! Parameter validation.
//!
//! Each family declares its domain constraints as a list of [`Constraint`]s in
//! the registry; [`validate`] checks selection and presence first and then
//! runs the family's constraints in order. Messages are user facing.

use crate::dist::lattice_point;
use crate::instance::DistributionInstance;
use crate::registry::DistributionSpec;
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Key used when no distribution is selected.
pub const SELECTION_KEY: &str = "selection";

pub const SELECT_DISTRIBUTION: &str = "Select a distribution!";
pub const MISSING_VALUE: &str = "Parameter must have a value!";
pub const NOT_FINITE: &str = "Parameter must be a finite number!";

/// Parameter name (or [`SELECTION_KEY`]) to error message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True when no distribution was selected.
    pub fn is_selection_error(&self) -> bool {
        self.contains(SELECTION_KEY)
    }

    /// Records `message` for `key` unless an earlier message is already there.
    pub fn insert(&mut self, key: &str, message: &str) {
        self.0
            .entry(key.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A domain condition over named parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `x > 0`
    Positive(&'static str),
    /// `x` is an integer and `x > 0`
    PositiveInteger(&'static str),
    /// `x` is an integer and `x >= 0`
    NonNegativeInteger(&'static str),
    /// `x` is an integer
    Integer(&'static str),
    /// `0 <= x <= 1`
    UnitInterval(&'static str),
    /// `0 < x <= 1`
    OpenLowUnitInterval(&'static str),
    /// `a < b`, flags both
    Less(&'static str, &'static str),
    /// `a <= c <= b`, flags all three
    Ordered(&'static str, &'static str, &'static str),
    /// `x <= bound`, flags only `x`
    AtMost(&'static str, &'static str),
}

impl Rule {
    /// Parameters flagged when the rule fails.
    pub fn implicated(&self) -> Vec<&'static str> {
        match *self {
            Rule::Positive(x)
            | Rule::PositiveInteger(x)
            | Rule::NonNegativeInteger(x)
            | Rule::Integer(x)
            | Rule::UnitInterval(x)
            | Rule::OpenLowUnitInterval(x)
            | Rule::AtMost(x, _) => vec![x],
            Rule::Less(a, b) => vec![a, b],
            Rule::Ordered(a, c, b) => vec![a, c, b],
        }
    }

    /// Every parameter the rule reads.
    pub fn parameters(&self) -> Vec<&'static str> {
        match *self {
            Rule::AtMost(x, bound) => vec![x, bound],
            _ => self.implicated(),
        }
    }

    /// Whether the rule holds; `value` resolves a parameter name.
    fn holds(&self, value: impl Fn(&str) -> f64) -> bool {
        let is_int = |v: f64| lattice_point(v).is_some();
        match *self {
            Rule::Positive(x) => value(x) > 0.0,
            Rule::PositiveInteger(x) => {
                let v = value(x);
                is_int(v) && v > 0.0
            }
            Rule::NonNegativeInteger(x) => {
                let v = value(x);
                is_int(v) && v >= 0.0
            }
            Rule::Integer(x) => is_int(value(x)),
            Rule::UnitInterval(x) => (0.0..=1.0).contains(&value(x)),
            Rule::OpenLowUnitInterval(x) => {
                let v = value(x);
                v > 0.0 && v <= 1.0
            }
            Rule::Less(a, b) => value(a) < value(b),
            Rule::Ordered(a, c, b) => {
                let (a, c, b) = (value(a), value(c), value(b));
                a <= c && c <= b
            }
            Rule::AtMost(x, bound) => value(x) <= value(bound),
        }
    }
}

/// A rule with the message shown on every parameter it implicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub rule: Rule,
    pub message: &'static str,
}

/// Validates an instance against its family's constraints.
pub fn validate(instance: &DistributionInstance) -> ValidationErrors {
    match instance.spec() {
        Some(spec) => validate_params(spec, instance.params()),
        None => {
            let mut errors = ValidationErrors::new();
            errors.insert(SELECTION_KEY, SELECT_DISTRIBUTION);
            errors
        }
    }
}

/// Validates positional parameter slots against `spec`.
///
/// Unset slots each get a missing-value message and stop validation there;
/// family rules only run on a complete, finite parameter set.
pub fn validate_params(spec: &DistributionSpec, params: &[Option<f64>]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for (i, def) in spec.params.iter().enumerate() {
        if params.get(i).copied().flatten().is_none() {
            errors.insert(def.name, MISSING_VALUE);
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    for (def, value) in spec.params.iter().zip(params) {
        if value.is_some_and(|v| !v.is_finite()) {
            errors.insert(def.name, NOT_FINITE);
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    let value = |name: &str| {
        spec.param_index(name)
            .and_then(|i| params.get(i).copied().flatten())
            .unwrap_or(f64::NAN)
    };
    for constraint in spec.constraints {
        if !constraint.rule.holds(&value) {
            for name in constraint.rule.implicated() {
                errors.insert(name, constraint.message);
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Family;

    fn check(family: Family, values: &[f64]) -> ValidationErrors {
        let params: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        validate_params(family.spec(), &params)
    }

    #[test]
    fn test_unselected() {
        let errors = validate(&DistributionInstance::unselected());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(SELECTION_KEY), Some(SELECT_DISTRIBUTION));
    }

    #[test]
    fn test_missing_params_stop_before_rules() {
        let errors = validate_params(Family::Uniform.spec(), &[Some(5.0), None]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("b"), Some(MISSING_VALUE));
    }

    #[test]
    fn test_non_finite_rejected() {
        let errors = check(Family::Normal, &[f64::NAN, 1.0]);
        assert_eq!(errors.get("mu"), Some(NOT_FINITE));
        let errors = check(Family::Normal, &[0.0, f64::INFINITY]);
        assert_eq!(errors.get("sigma"), Some(NOT_FINITE));
    }

    #[test]
    fn test_symmetric_constraint_flags_both() {
        let errors = check(Family::Uniform, &[5.0, 2.0]);
        assert!(errors.contains("a") && errors.contains("b"));
        assert!(check(Family::Uniform, &[0.0, 1.0]).is_empty());
    }

    #[test]
    fn test_triangular_mode_outside_range() {
        let errors = check(Family::Triangular, &[0.0, 1.0, 2.0]);
        assert_eq!(errors.len(), 3);
        assert!(check(Family::Triangular, &[0.0, 1.0, 1.0]).is_empty());
        // a == b passes the ordering rule but not a < b
        let errors = check(Family::Triangular, &[1.0, 1.0, 1.0]);
        assert_eq!(errors.get("a"), Some("Parameter a must be less than b!"));
        assert!(!errors.contains("c"));
    }

    #[test]
    fn test_first_message_wins() {
        let errors = check(Family::DiscreteUniform, &[2.5, 1.0]);
        assert_eq!(errors.get("a"), Some("Parameter a must be an integer!"));
        assert_eq!(errors.get("b"), Some("Parameter a must be less than b!"));
    }

    #[test]
    fn test_hypergeometric_bounds() {
        let errors = check(Family::Hypergeometric, &[10.0, 11.0, 3.0]);
        assert!(errors.contains("K"));
        assert!(!errors.contains("N"));
        assert!(!errors.contains("n"));
        assert!(check(Family::Hypergeometric, &[10.0, 10.0, 10.0]).is_empty());
        assert!(check(Family::Hypergeometric, &[0.0, 0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_probability_ranges() {
        assert!(check(Family::Bernoulli, &[0.0]).is_empty());
        assert!(check(Family::Bernoulli, &[1.0]).is_empty());
        assert!(check(Family::Geometric, &[0.0]).contains("p"));
        assert!(check(Family::Geometric, &[1.0]).is_empty());
        assert!(check(Family::NegativeBinomial, &[0.0, 0.5]).contains("r"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let errors = check(Family::Normal, &[0.0, 0.0]);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "sigma": "Standard deviation must be greater than 0!" })
        );
    }
}
