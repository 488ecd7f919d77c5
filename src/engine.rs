//! The evaluation pipeline: validate, resolve bounds, sample.

use crate::bounds;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::instance::DistributionInstance;
use crate::registry::{self, CategoryFilter, DistributionInfo, SliderHint};
use crate::sampler::{Curve, FunctionKind, Point};
use crate::stats::{self, Summary};
use crate::validation::{self, ValidationErrors};
use crate::window::QuantileWindow;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One independent curve request for [`Engine::compute_points_batch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsRequest {
    pub instance: DistributionInstance,
    #[serde(default)]
    pub kind: FunctionKind,
    #[serde(default)]
    pub window: QuantileWindow,
}

/// Stateless front door to the registry, validator, bounds resolver and sampler.
///
/// The engine holds only its configuration, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            config: EngineConfig::default(),
        }
    }

    /// An engine with custom sampling limits.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Engine { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Families in `filter`, sorted by label.
    pub fn list_distributions(&self, filter: CategoryFilter) -> Vec<DistributionInfo> {
        registry::list_distributions(filter)
    }

    pub fn parameter_names(&self, name: &str) -> Result<Vec<&'static str>> {
        Ok(registry::lookup(name)?.parameter_names())
    }

    pub fn default_quantile_window(&self, name: &str) -> Result<QuantileWindow> {
        let spec = registry::lookup(name)?;
        Ok(QuantileWindow::default_for(spec.family))
    }

    /// Coerces typed window bounds using the configured fallback.
    pub fn quantile_window_from_input(&self, low_text: &str, high_text: &str) -> QuantileWindow {
        QuantileWindow::from_input_with(low_text, high_text, self.config.fallback_window)
    }

    pub fn validate(&self, instance: &DistributionInstance) -> ValidationErrors {
        let errors = validation::validate(instance);
        if !errors.is_empty() {
            log::debug!(
                "validation of {} found {} problem(s)",
                instance.series_label(),
                errors.len()
            );
        }
        errors
    }

    /// Static slider ranges for each parameter of the selected family.
    pub fn slider_hints(&self, instance: &DistributionInstance) -> BTreeMap<&'static str, SliderHint> {
        instance
            .spec()
            .map(|spec| {
                spec.params
                    .iter()
                    .map(|p| (p.name, p.kind.slider_hint()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Builds the lazy point sequence for an instance the caller has validated.
    ///
    /// Returns `None` when the instance cannot be bound to its family or the
    /// window resolves to no data.
    pub fn curve(
        &self,
        instance: &DistributionInstance,
        kind: FunctionKind,
        window: &QuantileWindow,
    ) -> Option<Curve> {
        let dist = match instance.distribution() {
            Ok(dist) => dist,
            Err(err) => {
                log::debug!("no curve for {}: {}", instance.series_label(), err);
                return None;
            }
        };
        let bounds = bounds::resolve(&dist, window, self.config.discrete_point_cap)?;
        log::debug!(
            "{}: {:?} over {:?}",
            instance.series_label(),
            kind,
            bounds.span()
        );
        Some(Curve::new(
            dist,
            kind,
            bounds,
            self.config.continuous_intervals,
            self.config.precision_digits,
        ))
    }

    /// Samples the chosen function of a validated instance.
    ///
    /// The instance is not validated again here; anything that cannot be
    /// evaluated produces an empty sequence.
    pub fn compute_points(
        &self,
        instance: &DistributionInstance,
        kind: FunctionKind,
        window: &QuantileWindow,
    ) -> Vec<Point> {
        self.curve(instance, kind, window)
            .map(|curve| curve.points())
            .unwrap_or_default()
    }

    /// Evaluates independent requests in parallel, preserving their order.
    pub fn compute_points_batch(&self, requests: &[PointsRequest]) -> Vec<Vec<Point>> {
        log::debug!("evaluating {} curve requests", requests.len());
        requests
            .par_iter()
            .map(|r| self.compute_points(&r.instance, r.kind, &r.window))
            .collect()
    }

    /// Mean, median and standard deviation of a validated instance.
    pub fn compute_statistics(&self, instance: &DistributionInstance) -> Result<Summary> {
        let dist = instance.distribution()?;
        Ok(stats::statistics(&dist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::registry::Family;

    #[test]
    fn test_statistics_require_complete_parameters() {
        let engine = Engine::new();
        assert!(engine
            .compute_statistics(&DistributionInstance::new(Family::Normal))
            .is_err());
        assert!(matches!(
            engine.compute_statistics(&DistributionInstance::unselected()),
            Err(Error::NoSelection)
        ));
    }

    #[test]
    fn test_with_config_validates() {
        let config = EngineConfig {
            continuous_intervals: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(Engine::with_config(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_custom_interval_count() {
        let config = EngineConfig {
            continuous_intervals: 10,
            ..EngineConfig::default()
        };
        let engine = Engine::with_config(config).unwrap();
        let inst = DistributionInstance::with_values(Family::Uniform, &[0.0, 1.0]).unwrap();
        let points = engine.compute_points(&inst, FunctionKind::Cumulative, &QuantileWindow::full());
        assert_eq!(points.len(), 11);
        assert_eq!(points[5].y, 0.5);
    }

    #[test]
    fn test_unvalidated_instance_gives_no_points() {
        let engine = Engine::new();
        let inst = DistributionInstance::with_values(Family::Normal, &[0.0, -1.0]).unwrap();
        let w = QuantileWindow::default_for(Family::Normal);
        assert!(engine
            .compute_points(&inst, FunctionKind::DensityOrMass, &w)
            .is_empty());
        assert!(engine
            .compute_points(&DistributionInstance::new(Family::Normal), FunctionKind::Cumulative, &w)
            .is_empty());
    }

    #[test]
    fn test_slider_hints_cover_parameters() {
        let engine = Engine::new();
        let hints = engine.slider_hints(&DistributionInstance::new(Family::Hypergeometric));
        assert_eq!(hints.len(), 3);
        assert!(hints.contains_key("N"));
        assert!(engine.slider_hints(&DistributionInstance::unselected()).is_empty());
    }
}
