//! Recompute use case
//!
//! Read the form, price it, compose the panel and write it to the view.

use serde::Serialize;

use crate::domain::entities::PriceQuote;
use crate::domain::ports::{FormSource, PriceView};
use crate::domain::services::{PanelLabels, PanelState, PricingEngine};
use crate::error::TallyResult;

/// What one recompute produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recomputed {
    pub quote: PriceQuote,
    pub panel: PanelState,
}

#[derive(Debug, Clone, Default)]
pub struct RecomputeUseCase {
    engine: PricingEngine,
    labels: PanelLabels,
}

impl RecomputeUseCase {
    pub fn new(engine: PricingEngine, labels: PanelLabels) -> Self {
        Self { engine, labels }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn labels(&self) -> &PanelLabels {
        &self.labels
    }

    /// Quote and compose without touching a view.
    pub fn evaluate<S: FormSource + ?Sized>(&self, source: &S) -> TallyResult<Recomputed> {
        let snapshot = source.read()?;
        let quote = self.engine.quote(&snapshot);
        let panel = PanelState::compose(&quote, &self.labels);
        Ok(Recomputed { quote, panel })
    }

    /// Full recompute: every call re-reads the form and re-renders the view.
    pub fn run<S, V>(&self, source: &S, view: &mut V) -> TallyResult<Recomputed>
    where
        S: FormSource + ?Sized,
        V: PriceView + ?Sized,
    {
        let recomputed = self.evaluate(source)?;
        view.render(&recomputed.panel);
        Ok(recomputed)
    }
}
