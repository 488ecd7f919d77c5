//! A user's working copy of one distribution selection.

use crate::dist::{AnyDistribution, Category};
use crate::error::{Error, Result};
use crate::registry::{DistributionSpec, Family};
use serde::{Deserialize, Serialize};

/// A selected family and its parameter slots, each present or unset.
///
/// Zero is an ordinary value; an unset slot is `None`. The slot count always
/// matches the family's arity, including after deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct DistributionInstance {
    family: Option<Family>,
    params: Vec<Option<f64>>,
}

/// Wire form of an instance before the arity check.
#[derive(Deserialize)]
struct RawInstance {
    #[serde(default)]
    family: Option<Family>,
    #[serde(default)]
    params: Vec<Option<f64>>,
}

impl TryFrom<RawInstance> for DistributionInstance {
    type Error = Error;

    fn try_from(raw: RawInstance) -> Result<Self> {
        let Some(family) = raw.family else {
            if raw.params.is_empty() {
                return Ok(Self::unselected());
            }
            return Err(Error::NoSelection);
        };
        let arity = family.spec().arity();
        if raw.params.len() != arity {
            return Err(Error::invalid(
                family.name(),
                format!("expected {} parameter slots, got {}", arity, raw.params.len()),
            ));
        }
        Ok(DistributionInstance {
            family: Some(family),
            params: raw.params,
        })
    }
}

impl DistributionInstance {
    /// No distribution selected yet.
    pub fn unselected() -> Self {
        Self::default()
    }

    /// `family` with every parameter unset.
    pub fn new(family: Family) -> Self {
        DistributionInstance {
            family: Some(family),
            params: vec![None; family.spec().arity()],
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(Family::from_name(name)?))
    }

    /// `family` with every parameter set positionally.
    pub fn with_values(family: Family, values: &[f64]) -> Result<Self> {
        let arity = family.spec().arity();
        if values.len() != arity {
            return Err(Error::invalid(
                family.name(),
                format!("expected {} parameters, got {}", arity, values.len()),
            ));
        }
        Ok(DistributionInstance {
            family: Some(family),
            params: values.iter().copied().map(Some).collect(),
        })
    }

    pub fn family(&self) -> Option<Family> {
        self.family
    }

    pub fn spec(&self) -> Option<&'static DistributionSpec> {
        self.family.map(Family::spec)
    }

    pub fn category(&self) -> Option<Category> {
        self.family.map(Family::category)
    }

    /// Parameter slots in binding order.
    pub fn params(&self) -> &[Option<f64>] {
        &self.params
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        let spec = self.spec().ok_or(Error::NoSelection)?;
        spec.param_index(name)
            .ok_or_else(|| unknown_parameter(self.family, name))
    }

    /// Current value of a named parameter.
    pub fn param(&self, name: &str) -> Result<Option<f64>> {
        let i = self.index_of(name)?;
        self.params
            .get(i)
            .copied()
            .ok_or_else(|| unknown_parameter(self.family, name))
    }

    /// Sets or clears a named parameter.
    pub fn set_param(&mut self, name: &str, value: Option<f64>) -> Result<()> {
        let i = self.index_of(name)?;
        let family = self.family;
        let slot = self
            .params
            .get_mut(i)
            .ok_or_else(|| unknown_parameter(family, name))?;
        *slot = value;
        Ok(())
    }

    /// Switches to `family`, carrying values over by position.
    ///
    /// Slots beyond the old arity start unset; extra old values are dropped.
    /// Selecting the current family is a no-op.
    pub fn select(&mut self, family: Family) {
        if self.family == Some(family) {
            return;
        }
        let arity = family.spec().arity();
        let mut params: Vec<Option<f64>> = self.params.iter().copied().take(arity).collect();
        params.resize(arity, None);
        self.family = Some(family);
        self.params = params;
    }

    /// Drops the selection and all parameter values.
    pub fn clear(&mut self) {
        *self = Self::unselected();
    }

    /// All parameter values, if every slot is set.
    pub fn values(&self) -> Option<Vec<f64>> {
        self.family?;
        self.params.iter().copied().collect()
    }

    /// Binds the instance to its family's math functions.
    pub fn distribution(&self) -> Result<AnyDistribution> {
        let family = self.family.ok_or(Error::NoSelection)?;
        let values = self.values().ok_or_else(|| {
            Error::invalid(family.name(), "every parameter must have a value")
        })?;
        family.instantiate(&values)
    }

    /// Legend text such as `normal(0, 1)`; unset slots render as `?`.
    pub fn series_label(&self) -> String {
        let Some(family) = self.family else {
            return String::new();
        };
        let values: Vec<String> = self
            .params
            .iter()
            .map(|v| v.map_or_else(|| "?".to_string(), |v| v.to_string()))
            .collect();
        format!("{}({})", family.name(), values.join(", "))
    }
}

fn unknown_parameter(family: Option<Family>, name: &str) -> Error {
    Error::UnknownParameter {
        family: family.map_or("", Family::name),
        parameter: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instance_is_unset() {
        let inst = DistributionInstance::new(Family::Triangular);
        assert_eq!(inst.params().len(), 3);
        assert!(inst.params().iter().all(Option::is_none));
        assert_eq!(inst.values(), None);
        assert_eq!(inst.category(), Some(Category::Continuous));
    }

    #[test]
    fn test_set_and_read_params() {
        let mut inst = DistributionInstance::from_name("normal").unwrap();
        inst.set_param("mu", Some(0.0)).unwrap();
        inst.set_param("sigma", Some(2.0)).unwrap();
        assert_eq!(inst.param("mu").unwrap(), Some(0.0));
        assert_eq!(inst.values(), Some(vec![0.0, 2.0]));
        assert!(matches!(
            inst.set_param("lambda", Some(1.0)),
            Err(Error::UnknownParameter { family: "normal", .. })
        ));
    }

    #[test]
    fn test_unselected_rejects_param_edits() {
        let mut inst = DistributionInstance::unselected();
        assert!(matches!(inst.set_param("mu", Some(1.0)), Err(Error::NoSelection)));
        assert_eq!(inst.series_label(), "");
    }

    #[test]
    fn test_select_carries_values_positionally() {
        let mut inst = DistributionInstance::with_values(Family::Normal, &[1.0, 2.0]).unwrap();
        inst.select(Family::Triangular);
        assert_eq!(inst.params(), &[Some(1.0), Some(2.0), None]);
        inst.select(Family::Exponential);
        assert_eq!(inst.params(), &[Some(1.0)]);
        assert_eq!(inst.family(), Some(Family::Exponential));
    }

    #[test]
    fn test_series_label() {
        let inst = DistributionInstance::with_values(Family::Normal, &[0.0, 1.5]).unwrap();
        assert_eq!(inst.series_label(), "normal(0, 1.5)");
        let inst = DistributionInstance::new(Family::Poisson);
        assert_eq!(inst.series_label(), "poisson(?)");
    }

    #[test]
    fn test_deserialize_checks_slot_count() {
        let inst: DistributionInstance =
            serde_json::from_str(r#"{"family":"normal","params":[0.0,null]}"#).unwrap();
        assert_eq!(inst.params(), &[Some(0.0), None]);

        for bad in [
            r#"{"family":"normal","params":[]}"#,
            r#"{"family":"normal","params":[0.0,1.0,2.0]}"#,
            r#"{"family":"normal"}"#,
            r#"{"family":null,"params":[1.0]}"#,
        ] {
            assert!(serde_json::from_str::<DistributionInstance>(bad).is_err(), "{bad}");
        }

        let inst: DistributionInstance =
            serde_json::from_str(r#"{"family":null,"params":[]}"#).unwrap();
        assert_eq!(inst, DistributionInstance::unselected());
    }

    #[test]
    fn test_clear() {
        let mut inst = DistributionInstance::with_values(Family::Poisson, &[3.0]).unwrap();
        inst.clear();
        assert_eq!(inst, DistributionInstance::unselected());
    }
}
