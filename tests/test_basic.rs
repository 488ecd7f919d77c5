//! End-to-end checks of the engine's public operations.

use approx::assert_relative_eq;
use distview_rs::{
    CategoryFilter, DistributionInstance, Engine, Error, Family, FunctionKind, QuantileWindow,
    StatValue,
};

fn instance(name: &str, values: &[(&str, f64)]) -> DistributionInstance {
    let mut inst = DistributionInstance::from_name(name).unwrap();
    for (param, value) in values {
        inst.set_param(param, Some(*value)).unwrap();
    }
    inst
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_selection_error_iff_unselected() {
    let engine = Engine::new();
    let errors = engine.validate(&DistributionInstance::unselected());
    assert_eq!(errors.len(), 1);
    assert!(errors.is_selection_error());

    for family in Family::ALL {
        let errors = engine.validate(&DistributionInstance::new(family));
        assert!(!errors.is_selection_error(), "{}", family);
    }
}

#[test]
fn test_missing_parameters_reported_individually() {
    let engine = Engine::new();
    for family in Family::ALL {
        let errors = engine.validate(&DistributionInstance::new(family));
        let names = family.spec().parameter_names();
        assert_eq!(errors.len(), names.len(), "{}", family);
        for name in names {
            assert_eq!(
                errors.get(name),
                Some(distview_rs::validation::MISSING_VALUE),
                "{}.{}",
                family,
                name
            );
        }
    }
}

#[test]
fn test_normal_scale_constraint() {
    let engine = Engine::new();
    let errors = engine.validate(&instance("normal", &[("mu", 0.0), ("sigma", 0.0)]));
    assert!(errors.contains("sigma"));
    assert!(!errors.contains("mu"));

    let errors = engine.validate(&instance("normal", &[("mu", 0.0), ("sigma", -1.0)]));
    assert!(errors.contains("sigma"));

    let errors = engine.validate(&instance("normal", &[("mu", 0.0), ("sigma", 2.0)]));
    assert!(errors.is_empty());
}

#[test]
fn test_uniform_order_constraint() {
    let engine = Engine::new();
    let errors = engine.validate(&instance("uniform", &[("a", 5.0), ("b", 2.0)]));
    assert!(errors.contains("a"));
    assert!(errors.contains("b"));

    let errors = engine.validate(&instance("uniform", &[("a", 0.0), ("b", 1.0)]));
    assert!(errors.is_empty());
}

#[test]
fn test_binomial_constraints() {
    let engine = Engine::new();
    let errors = engine.validate(&instance("binomial", &[("n", 5.5), ("p", 0.3)]));
    assert!(errors.contains("n"));
    assert!(!errors.contains("p"));

    let errors = engine.validate(&instance("binomial", &[("n", 5.0), ("p", 1.5)]));
    assert!(errors.contains("p"));
    assert!(!errors.contains("n"));

    let errors = engine.validate(&instance("binomial", &[("n", 5.0), ("p", 0.5)]));
    assert!(errors.is_empty());
}

#[test]
fn test_zero_is_a_value_not_absence() {
    let engine = Engine::new();
    let errors = engine.validate(&instance("normal", &[("mu", 0.0), ("sigma", 1.0)]));
    assert!(errors.is_empty());
}

// ============================================================================
// Registry surface
// ============================================================================

#[test]
fn test_list_distributions_by_category() {
    let engine = Engine::new();
    assert_eq!(engine.list_distributions(CategoryFilter::All).len(), 32);
    assert_eq!(engine.list_distributions(CategoryFilter::Continuous).len(), 25);
    let discrete = engine.list_distributions(CategoryFilter::Discrete);
    assert_eq!(discrete.len(), 7);
    let labels: Vec<String> = discrete.iter().map(|d| d.label.to_lowercase()).collect();
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);
}

#[test]
fn test_parameter_names_and_windows() {
    let engine = Engine::new();
    assert_eq!(engine.parameter_names("normal").unwrap(), vec!["mu", "sigma"]);
    assert_eq!(
        engine.parameter_names("hypergeometric").unwrap(),
        vec!["N", "K", "n"]
    );
    assert!(matches!(
        engine.parameter_names("gaussian"),
        Err(Error::UnknownDistribution(_))
    ));

    let window = engine.default_quantile_window("beta").unwrap();
    assert_eq!((window.low(), window.high()), (0.0, 1.0));
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn test_continuous_sampling_spans_window() {
    let engine = Engine::new();
    let inst = instance("normal", &[("mu", 0.0), ("sigma", 1.0)]);
    let window = QuantileWindow::new(0.001, 0.999).unwrap();
    let points = engine.compute_points(&inst, FunctionKind::DensityOrMass, &window);

    assert_eq!(points.len(), 1001);
    assert_relative_eq!(points[0].x, -3.090232306167813, epsilon = 1e-8);
    assert_relative_eq!(points[1000].x, 3.090232306167813, epsilon = 1e-8);
    assert!(points.windows(2).all(|w| w[0].x < w[1].x));

    let again = engine.compute_points(&inst, FunctionKind::DensityOrMass, &window);
    assert_eq!(points, again);
}

#[test]
fn test_binomial_sampling_full_support() {
    let engine = Engine::new();
    let inst = instance("binomial", &[("n", 10.0), ("p", 0.5)]);
    let points = engine.compute_points(&inst, FunctionKind::DensityOrMass, &QuantileWindow::full());

    assert_eq!(points.len(), 11);
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    assert_eq!(xs, (0..=10).map(|k| k as f64).collect::<Vec<_>>());
    assert_relative_eq!(points[5].y, 252.0 / 1024.0, epsilon = 1e-11);
    let total: f64 = points.iter().map(|p| p.y).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-9);

    let cumulative = engine.compute_points(&inst, FunctionKind::Cumulative, &QuantileWindow::full());
    assert_relative_eq!(cumulative[10].y, 1.0, epsilon = 1e-11);
}

#[test]
fn test_invalid_instance_gives_empty_sequence() {
    let engine = Engine::new();
    let inst = instance("uniform", &[("a", 5.0), ("b", 2.0)]);
    assert!(engine
        .compute_points(&inst, FunctionKind::DensityOrMass, &QuantileWindow::full())
        .is_empty());
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_statistics() {
    let engine = Engine::new();
    let normal = engine
        .compute_statistics(&instance("normal", &[("mu", 2.0), ("sigma", 3.0)]))
        .unwrap();
    assert_eq!(normal.mean, StatValue::Value(2.0));
    assert_eq!(normal.median, StatValue::Value(2.0));
    assert_eq!(normal.std, StatValue::Value(3.0));

    let cauchy = engine
        .compute_statistics(&instance("cauchy", &[("x0", 0.0), ("gamma", 1.0)]))
        .unwrap();
    assert_eq!(cauchy.mean, StatValue::Undefined);
    assert_eq!(cauchy.std, StatValue::Undefined);
    assert_eq!(cauchy.median, StatValue::Value(0.0));
}

#[test]
fn test_window_reset_reproduces_default() {
    let engine = Engine::new();
    for family in Family::ALL {
        let default = engine.default_quantile_window(family.name()).unwrap();
        let edited = engine.quantile_window_from_input("0.2", "0.4");
        assert_ne!(edited, default);
        assert_eq!(QuantileWindow::default_for(family), default);
        assert_eq!(
            (default.low(), default.high()),
            family.spec().default_window
        );
    }
}
