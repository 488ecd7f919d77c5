//! Static catalog of the supported distribution families.
//!
//! Every family has exactly one [`DistributionSpec`] entry holding its
//! symbolic name, display label, category, ordered parameters, default
//! quantile window and the declarative constraint list consumed by
//! [`crate::validation`]. The table is built at compile time and never
//! mutated.

use crate::dist::{AnyDistribution, Category};
use crate::error::{Error, Result};
use crate::validation::{Constraint, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One variant per supported distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Arcsine,
    Beta,
    BetaPrime,
    Cauchy,
    Chi,
    ChiSquare,
    Cosine,
    Erlang,
    Exponential,
    F,
    Frechet,
    Gamma,
    Gumbel,
    InvGamma,
    Kumaraswamy,
    Laplace,
    Levy,
    Logistic,
    LogNormal,
    Normal,
    Pareto,
    Rayleigh,
    T,
    Triangular,
    Uniform,
    Bernoulli,
    Binomial,
    #[serde(rename = "discrete_uniform")]
    DiscreteUniform,
    Geometric,
    Hypergeometric,
    #[serde(rename = "negative_binomial")]
    NegativeBinomial,
    Poisson,
}

impl Family {
    /// Every family, in registry order.
    pub const ALL: [Family; 32] = [
        Family::Arcsine,
        Family::Beta,
        Family::BetaPrime,
        Family::Cauchy,
        Family::Chi,
        Family::ChiSquare,
        Family::Cosine,
        Family::Erlang,
        Family::Exponential,
        Family::F,
        Family::Frechet,
        Family::Gamma,
        Family::Gumbel,
        Family::InvGamma,
        Family::Kumaraswamy,
        Family::Laplace,
        Family::Levy,
        Family::Logistic,
        Family::LogNormal,
        Family::Normal,
        Family::Pareto,
        Family::Rayleigh,
        Family::T,
        Family::Triangular,
        Family::Uniform,
        Family::Bernoulli,
        Family::Binomial,
        Family::DiscreteUniform,
        Family::Geometric,
        Family::Hypergeometric,
        Family::NegativeBinomial,
        Family::Poisson,
    ];

    /// The registry entry of this family.
    pub fn spec(self) -> &'static DistributionSpec {
        &REGISTRY[self as usize]
    }

    /// Symbolic name, e.g. `"negative_binomial"`.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn category(self) -> Category {
        self.spec().category
    }

    /// Resolves a symbolic name.
    pub fn from_name(name: &str) -> Result<Family> {
        Family::ALL
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .ok_or_else(|| Error::UnknownDistribution(name.to_string()))
    }

    /// Binds positional parameters to this family's math functions.
    pub fn instantiate(self, params: &[f64]) -> Result<AnyDistribution> {
        AnyDistribution::new(self, params)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Family::from_name(s)
    }
}

/// What a parameter means, which fixes its slider range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Location,
    Scale,
    Shape,
    Probability,
    Count,
    Bound,
    IntegerBound,
}

impl ParamKind {
    /// Slider range for parameters of this kind.
    ///
    /// Ranges deliberately reach past the valid domain so that a user can
    /// drag into an invalid value and see the validation message.
    pub fn slider_hint(self) -> SliderHint {
        match self {
            ParamKind::Location => SliderHint::new(-10.0, 10.0, 0.1),
            ParamKind::Scale | ParamKind::Shape => SliderHint::new(-1.0, 10.0, 0.1),
            ParamKind::Probability => SliderHint::new(-0.5, 1.5, 0.01),
            ParamKind::Count => SliderHint::new(-1.0, 50.0, 1.0),
            ParamKind::Bound => SliderHint::new(-10.0, 10.0, 0.5),
            ParamKind::IntegerBound => SliderHint::new(-20.0, 20.0, 1.0),
        }
    }
}

/// A named positional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamDef {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// Bounds of the editable slider control for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderHint {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Field of a [`SliderHint`] edited by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderSetting {
    Min,
    Max,
    Step,
}

impl SliderHint {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        SliderHint { min, max, step }
    }

    /// Parses typed slider text, keeping `fallback` when it is not a number.
    pub fn coerce(text: &str, fallback: f64) -> f64 {
        crate::window::parse_numeric_input(text).unwrap_or(fallback)
    }

    /// Applies a typed edit to one field; unparseable text leaves it unchanged.
    pub fn set(&mut self, setting: SliderSetting, text: &str) {
        let field = match setting {
            SliderSetting::Min => &mut self.min,
            SliderSetting::Max => &mut self.max,
            SliderSetting::Step => &mut self.step,
        };
        *field = SliderHint::coerce(text, *field);
    }
}

/// Immutable description of one distribution family.
#[derive(Debug)]
pub struct DistributionSpec {
    pub family: Family,
    /// Unique symbolic key.
    pub name: &'static str,
    pub label: &'static str,
    pub category: Category,
    /// Ordered parameters; the order is the binding order to the math functions.
    pub params: &'static [ParamDef],
    /// Default `(low, high)` probability window.
    pub default_window: (f64, f64),
    pub constraints: &'static [Constraint],
}

impl DistributionSpec {
    /// Parameter names in binding order.
    pub fn parameter_names(&self) -> Vec<&'static str> {
        self.params.iter().map(|p| p.name).collect()
    }

    /// Position of a parameter, if the family has it.
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Finds the registry entry for a symbolic name.
pub fn lookup(name: &str) -> Result<&'static DistributionSpec> {
    Family::from_name(name).map(Family::spec)
}

/// Which families a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Continuous,
    Discrete,
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Continuous => category == Category::Continuous,
            CategoryFilter::Discrete => category == Category::Discrete,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(CategoryFilter::All),
            "continuous" => Ok(CategoryFilter::Continuous),
            "discrete" => Ok(CategoryFilter::Discrete),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// Entry of a distribution listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub category: Category,
}

/// Families matching `filter`, sorted by display label.
pub fn list_distributions(filter: CategoryFilter) -> Vec<DistributionInfo> {
    let mut out: Vec<DistributionInfo> = REGISTRY
        .iter()
        .filter(|spec| filter.matches(spec.category))
        .map(|spec| DistributionInfo {
            name: spec.name,
            label: spec.label,
            category: spec.category,
        })
        .collect();
    out.sort_by_key(|info| info.label.to_lowercase());
    out
}

// ============================================================================
// Table
// ============================================================================

const fn p(name: &'static str, kind: ParamKind) -> ParamDef {
    ParamDef { name, kind }
}

const fn c(rule: Rule, message: &'static str) -> Constraint {
    Constraint { rule, message }
}

use ParamKind::{Bound, Count, IntegerBound, Location, Probability, Scale, Shape};
use Rule::{
    AtMost, Integer, Less, NonNegativeInteger, OpenLowUnitInterval, Ordered, Positive,
    PositiveInteger, UnitInterval,
};

const COMPACT: (f64, f64) = (0.0, 1.0);
const LOWER_BOUNDED: (f64, f64) = (0.0, 0.995);
const TWO_SIDED: (f64, f64) = (0.005, 0.995);
const HEAVY_TAILED: (f64, f64) = (0.01, 0.99);

const A_LESS_B: &str = "Parameter a must be less than b!";
const ALPHA_POSITIVE: &str = "Alpha must be greater than 0!";
const BETA_POSITIVE: &str = "Beta must be greater than 0!";
const SCALE_POSITIVE: &str = "Scale parameter must be greater than 0!";
const SHAPE_POSITIVE: &str = "Shape parameter must be greater than 0!";
const RATE_POSITIVE: &str = "Rate parameter must be greater than 0!";
const DOF_POSITIVE: &str = "Degrees of freedom must be greater than 0!";
const PROBABILITY: &str = "Probability must be between 0 and 1!";
const SUCCESS_PROBABILITY: &str =
    "Probability must be greater than 0 and less than or equal to 1!";

static REGISTRY: [DistributionSpec; 32] = [
    DistributionSpec {
        family: Family::Arcsine,
        name: "arcsine",
        label: "Arcsine",
        category: Category::Continuous,
        params: &[p("a", Bound), p("b", Bound)],
        default_window: COMPACT,
        constraints: &[c(Less("a", "b"), A_LESS_B)],
    },
    DistributionSpec {
        family: Family::Beta,
        name: "beta",
        label: "Beta",
        category: Category::Continuous,
        params: &[p("alpha", Shape), p("beta", Shape)],
        default_window: COMPACT,
        constraints: &[
            c(Positive("alpha"), ALPHA_POSITIVE),
            c(Positive("beta"), BETA_POSITIVE),
        ],
    },
    DistributionSpec {
        family: Family::BetaPrime,
        name: "betaprime",
        label: "Beta Prime",
        category: Category::Continuous,
        params: &[p("alpha", Shape), p("beta", Shape)],
        default_window: LOWER_BOUNDED,
        constraints: &[
            c(Positive("alpha"), ALPHA_POSITIVE),
            c(Positive("beta"), BETA_POSITIVE),
        ],
    },
    DistributionSpec {
        family: Family::Cauchy,
        name: "cauchy",
        label: "Cauchy",
        category: Category::Continuous,
        params: &[p("x0", Location), p("gamma", Scale)],
        default_window: HEAVY_TAILED,
        constraints: &[c(Positive("gamma"), SCALE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::Chi,
        name: "chi",
        label: "Chi",
        category: Category::Continuous,
        params: &[p("k", Shape)],
        default_window: LOWER_BOUNDED,
        constraints: &[c(Positive("k"), DOF_POSITIVE)],
    },
    DistributionSpec {
        family: Family::ChiSquare,
        name: "chisquare",
        label: "Chi-Square",
        category: Category::Continuous,
        params: &[p("k", Shape)],
        default_window: LOWER_BOUNDED,
        constraints: &[c(Positive("k"), DOF_POSITIVE)],
    },
    DistributionSpec {
        family: Family::Cosine,
        name: "cosine",
        label: "Cosine",
        category: Category::Continuous,
        params: &[p("mu", Location), p("s", Scale)],
        default_window: COMPACT,
        constraints: &[c(Positive("s"), SCALE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::Erlang,
        name: "erlang",
        label: "Erlang",
        category: Category::Continuous,
        params: &[p("k", Count), p("lambda", Scale)],
        default_window: LOWER_BOUNDED,
        constraints: &[
            c(
                PositiveInteger("k"),
                "Shape parameter must be an integer greater than 0!",
            ),
            c(Positive("lambda"), RATE_POSITIVE),
        ],
    },
    DistributionSpec {
        family: Family::Exponential,
        name: "exponential",
        label: "Exponential",
        category: Category::Continuous,
        params: &[p("lambda", Scale)],
        default_window: LOWER_BOUNDED,
        constraints: &[c(Positive("lambda"), RATE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::F,
        name: "f",
        label: "F",
        category: Category::Continuous,
        params: &[p("d1", Shape), p("d2", Shape)],
        default_window: LOWER_BOUNDED,
        constraints: &[
            c(Positive("d1"), DOF_POSITIVE),
            c(Positive("d2"), DOF_POSITIVE),
        ],
    },
    DistributionSpec {
        family: Family::Frechet,
        name: "frechet",
        label: "Frechet",
        category: Category::Continuous,
        params: &[p("alpha", Shape), p("s", Scale), p("m", Location)],
        default_window: LOWER_BOUNDED,
        constraints: &[
            c(Positive("alpha"), SHAPE_POSITIVE),
            c(Positive("s"), SCALE_POSITIVE),
        ],
    },
    DistributionSpec {
        family: Family::Gamma,
        name: "gamma",
        label: "Gamma",
        category: Category::Continuous,
        params: &[p("alpha", Shape), p("beta", Scale)],
        default_window: LOWER_BOUNDED,
        constraints: &[
            c(Positive("alpha"), ALPHA_POSITIVE),
            c(Positive("beta"), BETA_POSITIVE),
        ],
    },
    DistributionSpec {
        family: Family::Gumbel,
        name: "gumbel",
        label: "Gumbel",
        category: Category::Continuous,
        params: &[p("mu", Location), p("beta", Scale)],
        default_window: TWO_SIDED,
        constraints: &[c(Positive("beta"), SCALE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::InvGamma,
        name: "invgamma",
        label: "Inverse Gamma",
        category: Category::Continuous,
        params: &[p("alpha", Shape), p("beta", Scale)],
        default_window: LOWER_BOUNDED,
        constraints: &[
            c(Positive("alpha"), ALPHA_POSITIVE),
            c(Positive("beta"), BETA_POSITIVE),
        ],
    },
    DistributionSpec {
        family: Family::Kumaraswamy,
        name: "kumaraswamy",
        label: "Kumaraswamy",
        category: Category::Continuous,
        params: &[p("a", Shape), p("b", Shape)],
        default_window: COMPACT,
        constraints: &[
            c(Positive("a"), "Shape parameter a must be greater than 0!"),
            c(Positive("b"), "Shape parameter b must be greater than 0!"),
        ],
    },
    DistributionSpec {
        family: Family::Laplace,
        name: "laplace",
        label: "Laplace",
        category: Category::Continuous,
        params: &[p("mu", Location), p("b", Scale)],
        default_window: TWO_SIDED,
        constraints: &[c(Positive("b"), SCALE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::Levy,
        name: "levy",
        label: "Levy",
        category: Category::Continuous,
        params: &[p("mu", Location), p("c", Scale)],
        default_window: HEAVY_TAILED,
        constraints: &[c(Positive("c"), SCALE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::Logistic,
        name: "logistic",
        label: "Logistic",
        category: Category::Continuous,
        params: &[p("mu", Location), p("s", Scale)],
        default_window: TWO_SIDED,
        constraints: &[c(Positive("s"), SCALE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::LogNormal,
        name: "lognormal",
        label: "Log-Normal",
        category: Category::Continuous,
        params: &[p("mu", Location), p("sigma", Scale)],
        default_window: LOWER_BOUNDED,
        constraints: &[c(Positive("sigma"), SCALE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::Normal,
        name: "normal",
        label: "Normal",
        category: Category::Continuous,
        params: &[p("mu", Location), p("sigma", Scale)],
        default_window: TWO_SIDED,
        constraints: &[c(
            Positive("sigma"),
            "Standard deviation must be greater than 0!",
        )],
    },
    DistributionSpec {
        family: Family::Pareto,
        name: "pareto",
        label: "Pareto",
        category: Category::Continuous,
        params: &[p("alpha", Shape), p("beta", Scale)],
        default_window: LOWER_BOUNDED,
        constraints: &[
            c(Positive("alpha"), SHAPE_POSITIVE),
            c(Positive("beta"), SCALE_POSITIVE),
        ],
    },
    DistributionSpec {
        family: Family::Rayleigh,
        name: "rayleigh",
        label: "Rayleigh",
        category: Category::Continuous,
        params: &[p("sigma", Scale)],
        default_window: LOWER_BOUNDED,
        constraints: &[c(Positive("sigma"), SCALE_POSITIVE)],
    },
    DistributionSpec {
        family: Family::T,
        name: "t",
        label: "Student's t",
        category: Category::Continuous,
        params: &[p("v", Shape)],
        default_window: TWO_SIDED,
        constraints: &[c(Positive("v"), DOF_POSITIVE)],
    },
    DistributionSpec {
        family: Family::Triangular,
        name: "triangular",
        label: "Triangular",
        category: Category::Continuous,
        params: &[p("a", Bound), p("b", Bound), p("c", Bound)],
        default_window: COMPACT,
        constraints: &[
            c(Ordered("a", "c", "b"), "Parameters must satisfy a <= c <= b!"),
            c(Less("a", "b"), A_LESS_B),
        ],
    },
    DistributionSpec {
        family: Family::Uniform,
        name: "uniform",
        label: "Uniform",
        category: Category::Continuous,
        params: &[p("a", Bound), p("b", Bound)],
        default_window: COMPACT,
        constraints: &[c(Less("a", "b"), A_LESS_B)],
    },
    DistributionSpec {
        family: Family::Bernoulli,
        name: "bernoulli",
        label: "Bernoulli",
        category: Category::Discrete,
        params: &[p("p", Probability)],
        default_window: COMPACT,
        constraints: &[c(UnitInterval("p"), PROBABILITY)],
    },
    DistributionSpec {
        family: Family::Binomial,
        name: "binomial",
        label: "Binomial",
        category: Category::Discrete,
        params: &[p("n", Count), p("p", Probability)],
        default_window: COMPACT,
        constraints: &[
            c(
                NonNegativeInteger("n"),
                "Number of trials must be a non-negative integer!",
            ),
            c(UnitInterval("p"), PROBABILITY),
        ],
    },
    DistributionSpec {
        family: Family::DiscreteUniform,
        name: "discrete_uniform",
        label: "Discrete Uniform",
        category: Category::Discrete,
        params: &[p("a", IntegerBound), p("b", IntegerBound)],
        default_window: COMPACT,
        constraints: &[
            c(Integer("a"), "Parameter a must be an integer!"),
            c(Integer("b"), "Parameter b must be an integer!"),
            c(Less("a", "b"), A_LESS_B),
        ],
    },
    DistributionSpec {
        family: Family::Geometric,
        name: "geometric",
        label: "Geometric",
        category: Category::Discrete,
        params: &[p("p", Probability)],
        default_window: LOWER_BOUNDED,
        constraints: &[c(OpenLowUnitInterval("p"), SUCCESS_PROBABILITY)],
    },
    DistributionSpec {
        family: Family::Hypergeometric,
        name: "hypergeometric",
        label: "Hypergeometric",
        category: Category::Discrete,
        params: &[p("N", Count), p("K", Count), p("n", Count)],
        default_window: COMPACT,
        constraints: &[
            c(
                NonNegativeInteger("N"),
                "Population size must be a non-negative integer!",
            ),
            c(
                NonNegativeInteger("K"),
                "Number of successes must be a non-negative integer no greater than the population size!",
            ),
            c(
                AtMost("K", "N"),
                "Number of successes must be a non-negative integer no greater than the population size!",
            ),
            c(
                NonNegativeInteger("n"),
                "Number of draws must be a non-negative integer no greater than the population size!",
            ),
            c(
                AtMost("n", "N"),
                "Number of draws must be a non-negative integer no greater than the population size!",
            ),
        ],
    },
    DistributionSpec {
        family: Family::NegativeBinomial,
        name: "negative_binomial",
        label: "Negative Binomial",
        category: Category::Discrete,
        params: &[p("r", Count), p("p", Probability)],
        default_window: LOWER_BOUNDED,
        constraints: &[
            c(
                PositiveInteger("r"),
                "Number of successes must be a positive integer!",
            ),
            c(OpenLowUnitInterval("p"), SUCCESS_PROBABILITY),
        ],
    },
    DistributionSpec {
        family: Family::Poisson,
        name: "poisson",
        label: "Poisson",
        category: Category::Discrete,
        params: &[p("lambda", Scale)],
        default_window: LOWER_BOUNDED,
        constraints: &[c(Positive("lambda"), RATE_POSITIVE)],
    },
];
