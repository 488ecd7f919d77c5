//! Side-by-side comparison of a few distributions on one chart.

use crate::config::DEFAULT_MAX_SESSION_SLOTS;
use crate::dist::Category;
use crate::engine::{Engine, PointsRequest};
use crate::error::{Error, Result};
use crate::instance::DistributionInstance;
use crate::registry::Family;
use crate::sampler::{FunctionKind, Point};
use crate::validation::ValidationErrors;
use crate::window::QuantileWindow;
use serde::Serialize;

/// One distribution and its probability window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot {
    pub instance: DistributionInstance,
    pub window: QuantileWindow,
}

/// A plotted curve with its legend label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub category: Category,
    pub points: Vec<Point>,
}

/// Result of plotting every slot.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutcome {
    /// One series per slot, in slot order.
    Plotted(Vec<Series>),
    /// Per-slot validation errors; nothing was plotted.
    Invalid(Vec<ValidationErrors>),
}

/// Up to `max_slots` distributions edited and plotted together.
///
/// A session always keeps at least one slot.
#[derive(Debug, Clone)]
pub struct Session {
    slots: Vec<Slot>,
    max_slots: usize,
}

impl Default for Session {
    fn default() -> Self {
        Session::with_capacity(DEFAULT_MAX_SESSION_SLOTS)
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session sized by the engine's configuration.
    pub fn for_engine(engine: &Engine) -> Self {
        Session::with_capacity(engine.config().max_session_slots)
    }

    pub fn with_capacity(max_slots: usize) -> Self {
        Session {
            slots: vec![Slot::default()],
            max_slots: max_slots.max(1),
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    pub fn slot(&self, index: usize) -> Result<&Slot> {
        self.slots.get(index).ok_or(Error::SlotIndex(index))
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Slot> {
        self.slots.get_mut(index).ok_or(Error::SlotIndex(index))
    }

    /// Appends an empty slot and returns its index.
    pub fn add(&mut self) -> Result<usize> {
        if self.slots.len() >= self.max_slots {
            return Err(Error::SlotLimit(self.max_slots));
        }
        self.slots.push(Slot::default());
        Ok(self.slots.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<Slot> {
        self.slot(index)?;
        if self.slots.len() == 1 {
            return Err(Error::LastSlot);
        }
        Ok(self.slots.remove(index))
    }

    /// Selects a family for a slot and resets its window to the family default.
    ///
    /// Re-selecting the current family changes nothing.
    pub fn select(&mut self, index: usize, family: Family) -> Result<()> {
        let slot = self.slot_mut(index)?;
        if slot.instance.family() == Some(family) {
            return Ok(());
        }
        slot.instance.select(family);
        slot.window = QuantileWindow::default_for(family);
        Ok(())
    }

    pub fn set_param(&mut self, index: usize, name: &str, value: Option<f64>) -> Result<()> {
        self.slot_mut(index)?.instance.set_param(name, value)
    }

    pub fn set_window(&mut self, index: usize, window: QuantileWindow) -> Result<()> {
        self.slot_mut(index)?.window = window;
        Ok(())
    }

    /// Applies typed window bounds, coerced with the engine's fallback.
    pub fn set_window_text(
        &mut self,
        engine: &Engine,
        index: usize,
        low_text: &str,
        high_text: &str,
    ) -> Result<()> {
        let window = engine.quantile_window_from_input(low_text, high_text);
        self.set_window(index, window)
    }

    /// Restores the registry default window; a slot without a family is left alone.
    pub fn reset_window(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        if let Some(family) = slot.instance.family() {
            slot.window = QuantileWindow::default_for(family);
        }
        Ok(())
    }

    /// Validates every slot and, only if all pass, samples all of them.
    pub fn plot(&self, engine: &Engine, kind: FunctionKind) -> PlotOutcome {
        let errors: Vec<ValidationErrors> =
            self.slots.iter().map(|s| engine.validate(&s.instance)).collect();
        if errors.iter().any(|e| !e.is_empty()) {
            return PlotOutcome::Invalid(errors);
        }

        let requests: Vec<PointsRequest> = self
            .slots
            .iter()
            .map(|s| PointsRequest {
                instance: s.instance.clone(),
                kind,
                window: s.window,
            })
            .collect();
        let series = engine
            .compute_points_batch(&requests)
            .into_iter()
            .zip(&self.slots)
            .filter_map(|(points, slot)| {
                Some(Series {
                    label: slot.instance.series_label(),
                    category: slot.instance.category()?,
                    points,
                })
            })
            .collect();
        PlotOutcome::Plotted(series)
    }
}
