//! Probability windows and coercion of typed numeric input.

use crate::config::DEFAULT_FALLBACK_WINDOW;
use crate::error::{Error, Result};
use crate::registry::Family;
use serde::{Deserialize, Serialize};

/// A `(low, high)` pair of probabilities with `0 <= low < high <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct QuantileWindow {
    low: f64,
    high: f64,
}

impl QuantileWindow {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&low) && (0.0..=1.0).contains(&high) && low < high {
            Ok(QuantileWindow { low, high })
        } else {
            Err(Error::InvalidQuantileWindow { low, high })
        }
    }

    /// The whole probability range.
    pub fn full() -> Self {
        QuantileWindow {
            low: 0.0,
            high: 1.0,
        }
    }

    /// The window recorded in the registry for `family`.
    pub fn default_for(family: Family) -> Self {
        let (low, high) = family.spec().default_window;
        QuantileWindow { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Builds a window from typed text with the default fallback bounds.
    pub fn from_input(low_text: &str, high_text: &str) -> Self {
        Self::from_input_with(low_text, high_text, DEFAULT_FALLBACK_WINDOW)
    }

    /// Builds a window from typed text.
    ///
    /// Each bound that does not parse is replaced by its fallback; a pair
    /// that is still not a valid window becomes the fallback window.
    pub fn from_input_with(low_text: &str, high_text: &str, fallback: (f64, f64)) -> Self {
        let low = parse_numeric_input(low_text).unwrap_or(fallback.0);
        let high = parse_numeric_input(high_text).unwrap_or(fallback.1);
        QuantileWindow::new(low, high)
            .or_else(|_| QuantileWindow::new(fallback.0, fallback.1))
            .unwrap_or_else(|_| QuantileWindow::full())
    }
}

impl Default for QuantileWindow {
    fn default() -> Self {
        QuantileWindow::full()
    }
}

impl TryFrom<(f64, f64)> for QuantileWindow {
    type Error = Error;

    fn try_from((low, high): (f64, f64)) -> Result<Self> {
        QuantileWindow::new(low, high)
    }
}

impl From<QuantileWindow> for (f64, f64) {
    fn from(w: QuantileWindow) -> Self {
        (w.low, w.high)
    }
}

/// Parses typed numeric text.
///
/// Surrounding whitespace and redundant leading zeros are ignored, so `"007"`
/// is 7 and `"0"` is 0. Text that is not a finite number gives `None`.
pub fn parse_numeric_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let stripped = trimmed.trim_start_matches('0');
    let candidate = if stripped.is_empty() && !trimmed.is_empty() {
        "0"
    } else {
        stripped
    };
    candidate.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enforces_order_and_range() {
        assert!(QuantileWindow::new(0.0, 1.0).is_ok());
        assert!(QuantileWindow::new(0.5, 0.5).is_err());
        assert!(QuantileWindow::new(0.9, 0.1).is_err());
        assert!(QuantileWindow::new(-0.1, 0.5).is_err());
        assert!(QuantileWindow::new(0.1, 1.5).is_err());
        assert!(QuantileWindow::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_parse_numeric_input() {
        assert_eq!(parse_numeric_input("0.25"), Some(0.25));
        assert_eq!(parse_numeric_input(" 007 "), Some(7.0));
        assert_eq!(parse_numeric_input("0"), Some(0.0));
        assert_eq!(parse_numeric_input("000"), Some(0.0));
        assert_eq!(parse_numeric_input(".5"), Some(0.5));
        assert_eq!(parse_numeric_input(""), None);
        assert_eq!(parse_numeric_input("abc"), None);
        assert_eq!(parse_numeric_input("inf"), None);
        assert_eq!(parse_numeric_input("NaN"), None);
    }

    #[test]
    fn test_from_input_fallbacks() {
        let w = QuantileWindow::from_input("", "0.9");
        assert_eq!((w.low(), w.high()), (0.005, 0.9));
        let w = QuantileWindow::from_input("0.1", "x");
        assert_eq!((w.low(), w.high()), (0.1, 0.995));
        let w = QuantileWindow::from_input("0.9", "0.1");
        assert_eq!((w.low(), w.high()), (0.005, 0.995));
        let w = QuantileWindow::from_input("0", "1");
        assert_eq!((w.low(), w.high()), (0.0, 1.0));
    }

    #[test]
    fn test_default_for_matches_registry() {
        for family in Family::ALL {
            let w = QuantileWindow::default_for(family);
            assert_eq!((w.low(), w.high()), family.spec().default_window);
        }
    }

    #[test]
    fn test_serde_validates() {
        let w: QuantileWindow = serde_json::from_str("[0.01, 0.99]").unwrap();
        assert_eq!(w.low(), 0.01);
        assert!(serde_json::from_str::<QuantileWindow>("[0.9, 0.1]").is_err());
        assert_eq!(serde_json::to_string(&w).unwrap(), "[0.01,0.99]");
    }
}
