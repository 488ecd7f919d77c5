// Serialization tests for configuration files and engine outputs.

use distview_rs::{
    Bounds, DistributionInstance, Engine, EngineConfig, Error, Family, FunctionKind, Point,
    PointsRequest, QuantileWindow, Session,
};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("engine.json");
    fs::write(
        &path,
        r#"{ "continuous_intervals": 200, "fallback_window": [0.01, 0.99] }"#,
    )
    .unwrap();

    let config = EngineConfig::from_path(&path).expect("Load should succeed");
    assert_eq!(config.continuous_intervals, 200);
    assert_eq!(config.fallback_window, (0.01, 0.99));
    // unspecified fields keep their defaults
    assert_eq!(config.discrete_point_cap, 1000);
    assert_eq!(config.precision_digits, 12);

    let engine = Engine::with_config(config).unwrap();
    let inst = DistributionInstance::with_values(Family::Normal, &[0.0, 1.0]).unwrap();
    let points = engine.compute_points(
        &inst,
        FunctionKind::Cumulative,
        &QuantileWindow::default_for(Family::Normal),
    );
    assert_eq!(points.len(), 201);
    let window = engine.quantile_window_from_input("", "");
    assert_eq!((window.low(), window.high()), (0.01, 0.99));
}

#[test]
fn test_config_rejects_bad_files() {
    let dir = tempdir().expect("Failed to create temp dir");

    let missing = dir.path().join("missing.json");
    assert!(matches!(EngineConfig::from_path(&missing), Err(Error::Io(_))));

    let malformed = dir.path().join("malformed.json");
    fs::write(&malformed, "{ continuous_intervals: 10 ").unwrap();
    assert!(matches!(EngineConfig::from_path(&malformed), Err(Error::Json(_))));

    let unknown = dir.path().join("unknown.json");
    fs::write(&unknown, r#"{ "intervals": 10 }"#).unwrap();
    assert!(matches!(EngineConfig::from_path(&unknown), Err(Error::Json(_))));

    let zero = dir.path().join("zero.json");
    fs::write(&zero, r#"{ "discrete_point_cap": 0 }"#).unwrap();
    assert!(matches!(EngineConfig::from_path(&zero), Err(Error::Config(_))));
}

#[test]
fn test_config_save_load_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("engine.json");
    let config = EngineConfig {
        precision_digits: 8,
        max_session_slots: 5,
        ..EngineConfig::default()
    };
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    let loaded = EngineConfig::from_path(&path).unwrap();
    assert_eq!(loaded, config);
    let engine = Engine::with_config(loaded).unwrap();
    assert_eq!(Session::for_engine(&engine).max_slots(), 5);
}

// ============================================================================
// Engine inputs and outputs
// ============================================================================

#[test]
fn test_instance_json_shape() {
    let mut inst = DistributionInstance::new(Family::Binomial);
    inst.set_param("n", Some(10.0)).unwrap();
    let value = serde_json::to_value(&inst).unwrap();
    assert_eq!(value, json!({ "family": "binomial", "params": [10.0, null] }));

    let back: DistributionInstance = serde_json::from_value(value).unwrap();
    assert_eq!(back, inst);
}

#[test]
fn test_points_request_defaults() {
    let request: PointsRequest = serde_json::from_value(json!({
        "instance": { "family": "poisson", "params": [3.0] }
    }))
    .unwrap();
    assert_eq!(request.kind, FunctionKind::DensityOrMass);
    assert_eq!(request.window, QuantileWindow::full());

    let request: PointsRequest = serde_json::from_value(json!({
        "instance": { "family": "normal", "params": [0.0, 1.0] },
        "kind": "cdf",
        "window": [0.1, 0.9]
    }))
    .unwrap();
    assert_eq!(request.kind, FunctionKind::Cumulative);
    assert_eq!(request.window.low(), 0.1);

    // an inverted window is rejected at the boundary
    let bad = serde_json::from_value::<PointsRequest>(json!({
        "instance": { "family": "normal", "params": [0.0, 1.0] },
        "window": [0.9, 0.1]
    }));
    assert!(bad.is_err());
}

#[test]
fn test_outputs_serialize() {
    let engine = Engine::new();
    let mut inst = DistributionInstance::new(Family::Uniform);
    inst.set_param("a", Some(5.0)).unwrap();
    inst.set_param("b", Some(2.0)).unwrap();
    let errors = serde_json::to_value(engine.validate(&inst)).unwrap();
    assert!(errors.get("a").is_some());
    assert!(errors.get("b").is_some());

    let unselected = serde_json::to_value(engine.validate(&DistributionInstance::unselected()))
        .unwrap();
    assert_eq!(unselected, json!({ "selection": "Select a distribution!" }));

    let point = Point { x: 1.5, y: 0.25 };
    assert_eq!(serde_json::to_value(point).unwrap(), json!({ "x": 1.5, "y": 0.25 }));

    let bounds = Bounds::Discrete { points: vec![0, 1, 2] };
    assert_eq!(
        serde_json::to_value(&bounds).unwrap(),
        json!({ "kind": "discrete", "points": [0, 1, 2] })
    );

    let cauchy = DistributionInstance::with_values(Family::Cauchy, &[0.0, 1.0]).unwrap();
    let stats = serde_json::to_value(engine.compute_statistics(&cauchy).unwrap()).unwrap();
    assert_eq!(
        stats,
        json!({ "mean": "undefined", "median": 0.0, "std": "undefined" })
    );
}
