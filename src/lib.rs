//! Evaluation engine behind an interactive probability distribution viewer.
//!
//! A [`DistributionInstance`] names a family and carries possibly-incomplete
//! parameter values. The [`Engine`] validates it, maps a probability window
//! to an x range through the quantile function, and samples the density,
//! mass or cumulative function into chart-ready [`Point`]s.

pub mod bounds;
pub mod config;
pub mod dist;
pub mod engine;
pub mod error;
pub mod instance;
pub mod registry;
pub mod sampler;
pub mod session;
pub mod stats;
pub mod validation;
pub mod window;

// Re-export commonly used types at crate root
pub use bounds::Bounds;
pub use config::EngineConfig;
pub use dist::{AnyDistribution, Category, Distribution, DistributionMethods};
pub use engine::{Engine, PointsRequest};
pub use error::{Error, Result};
pub use instance::DistributionInstance;
pub use registry::{
    list_distributions, lookup, CategoryFilter, DistributionInfo, DistributionSpec, Family,
    SliderHint, SliderSetting,
};
pub use sampler::{Curve, FunctionKind, Point};
pub use session::{PlotOutcome, Series, Session, Slot};
pub use stats::{StatValue, Summary};
pub use validation::ValidationErrors;
pub use window::QuantileWindow;
