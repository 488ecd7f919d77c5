//! Bounds resolution, sampling and multi-slot plotting.

use approx::assert_relative_eq;
use distview_rs::bounds::{self, support_points};
use distview_rs::{
    Bounds, DistributionInstance, Engine, EngineConfig, Family, FunctionKind, PlotOutcome,
    PointsRequest, QuantileWindow, Session,
};

fn with_values(family: Family, values: &[f64]) -> DistributionInstance {
    DistributionInstance::with_values(family, values).unwrap()
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_default_windows_resolve_for_every_family() {
    let engine = Engine::new();
    let cases: Vec<(Family, Vec<f64>)> = vec![
        (Family::Arcsine, vec![0.0, 1.0]),
        (Family::Beta, vec![2.0, 2.0]),
        (Family::BetaPrime, vec![2.0, 3.0]),
        (Family::Cauchy, vec![0.0, 1.0]),
        (Family::Chi, vec![2.0]),
        (Family::ChiSquare, vec![3.0]),
        (Family::Cosine, vec![0.0, 1.0]),
        (Family::Erlang, vec![2.0, 1.0]),
        (Family::Exponential, vec![1.0]),
        (Family::F, vec![4.0, 6.0]),
        (Family::Frechet, vec![2.0, 1.0, 0.0]),
        (Family::Gamma, vec![2.0, 2.0]),
        (Family::Gumbel, vec![0.0, 1.0]),
        (Family::InvGamma, vec![2.0, 1.0]),
        (Family::Kumaraswamy, vec![2.0, 2.0]),
        (Family::Laplace, vec![0.0, 1.0]),
        (Family::Levy, vec![0.0, 1.0]),
        (Family::Logistic, vec![0.0, 1.0]),
        (Family::LogNormal, vec![0.0, 1.0]),
        (Family::Normal, vec![0.0, 1.0]),
        (Family::Pareto, vec![2.0, 1.0]),
        (Family::Rayleigh, vec![1.0]),
        (Family::T, vec![3.0]),
        (Family::Triangular, vec![0.0, 1.0, 0.5]),
        (Family::Uniform, vec![0.0, 1.0]),
        (Family::Bernoulli, vec![0.5]),
        (Family::Binomial, vec![20.0, 0.3]),
        (Family::DiscreteUniform, vec![0.0, 9.0]),
        (Family::Geometric, vec![0.2]),
        (Family::Hypergeometric, vec![30.0, 10.0, 8.0]),
        (Family::NegativeBinomial, vec![4.0, 0.5]),
        (Family::Poisson, vec![6.0]),
    ];
    assert_eq!(cases.len(), Family::ALL.len());

    for (family, values) in cases {
        let inst = with_values(family, &values);
        assert!(engine.validate(&inst).is_empty(), "{}", family);
        let window = QuantileWindow::default_for(family);
        for kind in [FunctionKind::DensityOrMass, FunctionKind::Cumulative] {
            let curve = engine
                .curve(&inst, kind, &window)
                .unwrap_or_else(|| panic!("{} has no data", family));
            let points = curve.points();
            assert!(!points.is_empty(), "{}", family);
            assert!(points.windows(2).all(|w| w[0].x < w[1].x), "{}", family);
            assert!(points.iter().all(|p| p.y.is_finite() && p.y >= 0.0));
            if kind == FunctionKind::Cumulative {
                assert!(points.iter().all(|p| p.y <= 1.0), "{}", family);
            }
        }
    }
}

/// Values tried for every parameter slot in the sweep below.
const SWEEP_GRID: [f64; 6] = [0.0, 0.3, 1.0, 5.0, 30.0, 200.0];

fn parameter_grid(arity: usize) -> Vec<Vec<f64>> {
    (0..arity).fold(vec![Vec::new()], |sets, _| {
        sets.iter()
            .flat_map(|set| {
                SWEEP_GRID.iter().map(move |&v| {
                    let mut next = set.clone();
                    next.push(v);
                    next
                })
            })
            .collect()
    })
}

#[test]
fn test_parameter_sweep_produces_points() {
    let engine = Engine::new();
    let mut checked = 0;
    for family in Family::ALL {
        let window = QuantileWindow::default_for(family);
        for values in parameter_grid(family.spec().arity()) {
            let inst = with_values(family, &values);
            if !engine.validate(&inst).is_empty() {
                continue;
            }
            // exp(mu + 2.58 sigma) is past f64::MAX, so the window has no finite upper end
            let overflows =
                family == Family::LogNormal && values[0] + 2.6 * values[1] > f64::MAX.ln();
            for kind in [FunctionKind::DensityOrMass, FunctionKind::Cumulative] {
                let points = engine.compute_points(&inst, kind, &window);
                if overflows {
                    assert!(points.is_empty(), "{} {:?}", family, values);
                    continue;
                }
                assert!(!points.is_empty(), "{} {:?} {:?}", family, values, kind);
                assert!(
                    points.iter().all(|p| p.y.is_finite() && p.y >= 0.0),
                    "{} {:?} {:?}",
                    family,
                    values,
                    kind
                );
            }
            checked += 1;
        }
    }
    assert!(checked > 300, "only {checked} parameter sets validated");
}

#[test]
fn test_discrete_bounds_floor_quantiles() {
    let dist = Family::Poisson.instantiate(&[10.0]).unwrap();
    let window = QuantileWindow::new(0.1, 0.9).unwrap();
    match bounds::resolve(&dist, &window, 1000).unwrap() {
        Bounds::Discrete { points } => {
            assert_eq!(points.first(), Some(&6));
            assert_eq!(points.last(), Some(&14));
            assert_eq!(points.len(), 9);
        }
        other => panic!("unexpected bounds {other:?}"),
    }
}

#[test]
fn test_wide_discrete_support_is_strided() {
    let engine = Engine::new();
    let inst = with_values(Family::DiscreteUniform, &[0.0, 5000.0]);
    let points = engine.compute_points(&inst, FunctionKind::Cumulative, &QuantileWindow::full());
    assert_eq!(points.len(), 1001);
    assert_eq!(points[0].x, 0.0);
    assert_eq!(points[1].x, 5.0);
    assert_eq!(points[1000].x, 5000.0);
    assert_relative_eq!(points[1000].y, 1.0);

    assert_eq!(support_points(10, 20, 1000), (10..=20).collect::<Vec<_>>());
}

#[test]
fn test_heavy_tail_full_window_has_no_data() {
    let engine = Engine::new();
    let inst = with_values(Family::Cauchy, &[0.0, 1.0]);
    assert!(engine
        .curve(&inst, FunctionKind::DensityOrMass, &QuantileWindow::full())
        .is_none());
    // a window that stays off the tails is fine
    let window = QuantileWindow::default_for(Family::Cauchy);
    let points = engine.compute_points(&inst, FunctionKind::DensityOrMass, &window);
    assert_eq!(points.len(), 1001);
}

#[test]
fn test_inverted_window_falls_back() {
    assert!(QuantileWindow::new(0.5, 0.5).is_err());
    let engine = Engine::new();
    let window = engine.quantile_window_from_input("0.9", "0.1");
    assert_eq!((window.low(), window.high()), (0.005, 0.995));
}

// ============================================================================
// Sampling settings
// ============================================================================

#[test]
fn test_precision_digits_round_coordinates() {
    let config = EngineConfig {
        precision_digits: 3,
        ..EngineConfig::default()
    };
    let engine = Engine::with_config(config).unwrap();
    let inst = with_values(Family::Normal, &[0.0, 1.0]);
    let window = QuantileWindow::new(0.1, 0.9).unwrap();
    let points = engine.compute_points(&inst, FunctionKind::DensityOrMass, &window);
    // 3 significant digits collapse neighbouring grid positions
    assert!(points.len() < 1001);
    assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    assert_eq!(points[0].x, -1.28);
}

#[test]
fn test_batch_matches_single_requests() {
    let engine = Engine::new();
    let requests = vec![
        PointsRequest {
            instance: with_values(Family::Gamma, &[3.0, 1.0]),
            kind: FunctionKind::DensityOrMass,
            window: QuantileWindow::default_for(Family::Gamma),
        },
        PointsRequest {
            instance: with_values(Family::Geometric, &[0.4]),
            kind: FunctionKind::Cumulative,
            window: QuantileWindow::default_for(Family::Geometric),
        },
        PointsRequest {
            instance: DistributionInstance::new(Family::Normal),
            kind: FunctionKind::Cumulative,
            window: QuantileWindow::full(),
        },
    ];
    let batch = engine.compute_points_batch(&requests);
    assert_eq!(batch.len(), 3);
    for (request, points) in requests.iter().zip(&batch) {
        assert_eq!(
            points,
            &engine.compute_points(&request.instance, request.kind, &request.window)
        );
    }
    assert!(batch[2].is_empty());
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn test_session_compares_distributions() {
    let engine = Engine::new();
    let mut session = Session::for_engine(&engine);
    assert_eq!(session.max_slots(), 3);

    session.select(0, Family::Normal).unwrap();
    session.set_param(0, "mu", Some(0.0)).unwrap();
    session.set_param(0, "sigma", Some(1.0)).unwrap();

    let second = session.add().unwrap();
    session.select(second, Family::T).unwrap();
    session.set_param(second, "v", Some(-2.0)).unwrap();

    match session.plot(&engine, FunctionKind::Cumulative) {
        PlotOutcome::Invalid(errors) => {
            assert!(errors[0].is_empty());
            assert!(errors[1].contains("v"));
        }
        PlotOutcome::Plotted(_) => panic!("an invalid slot must block plotting"),
    }

    session.set_param(second, "v", Some(2.0)).unwrap();
    session
        .set_window_text(&engine, second, "0.05", "abc")
        .unwrap();
    let window = session.slot(second).unwrap().window;
    assert_eq!((window.low(), window.high()), (0.05, 0.995));

    match session.plot(&engine, FunctionKind::Cumulative) {
        PlotOutcome::Plotted(series) => {
            assert_eq!(series.len(), 2);
            assert_eq!(series[1].label, "t(2)");
            assert!(series.iter().all(|s| !s.points.is_empty()));
        }
        PlotOutcome::Invalid(errors) => panic!("unexpected errors {errors:?}"),
    }

    session.reset_window(second).unwrap();
    assert_eq!(
        session.slot(second).unwrap().window,
        QuantileWindow::default_for(Family::T)
    );
}

#[test]
fn test_switching_family_keeps_positional_values() {
    let mut session = Session::new();
    session.select(0, Family::Normal).unwrap();
    session.set_param(0, "mu", Some(1.0)).unwrap();
    session.set_param(0, "sigma", Some(2.0)).unwrap();
    session.select(0, Family::Logistic).unwrap();
    let inst = &session.slot(0).unwrap().instance;
    assert_eq!(inst.param("mu").unwrap(), Some(1.0));
    assert_eq!(inst.param("s").unwrap(), Some(2.0));
}
