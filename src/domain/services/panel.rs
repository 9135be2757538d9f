//! Price panel composition
//!
//! Turns a quote into what the four panel nodes should show. A quote without
//! new selections hides the panel; locked-only forms show no preview.

use serde::Serialize;

use crate::domain::entities::{DiscountKind, PriceQuote};

/// Texts used by the price panel and the exit prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLabels {
    pub currency: String,
    pub double_bonus: String,
    pub series_bonus: String,
    pub regular: String,
    pub discount: String,
    pub already_booked: String,
    pub items_selected: String,
    pub discard_prompt: String,
    pub leave_prompt: String,
}

impl PanelLabels {
    pub fn english() -> Self {
        Self {
            currency: "€".to_string(),
            double_bonus: "double bonus: two free seats".to_string(),
            series_bonus: "series bonus: one free seat".to_string(),
            regular: "Regular".to_string(),
            discount: "Discount".to_string(),
            already_booked: "already booked".to_string(),
            items_selected: "items selected".to_string(),
            discard_prompt: "Discard unsaved changes?".to_string(),
            leave_prompt: "Leave with unsaved changes?".to_string(),
        }
    }

    pub fn german() -> Self {
        Self {
            currency: "€".to_string(),
            double_bonus: "Doppel-Bonus: 2 Plätze gratis!".to_string(),
            series_bonus: "Serien-Bonus: 1x gratis!".to_string(),
            regular: "Regulär".to_string(),
            discount: "Rabatt".to_string(),
            already_booked: "bereits gebucht".to_string(),
            items_selected: "Positionen gewählt".to_string(),
            discard_prompt: "Ungespeicherte Änderungen verwerfen?".to_string(),
            leave_prompt: "Seite mit ungespeicherten Änderungen verlassen?".to_string(),
        }
    }

    pub fn badge_for(&self, kind: DiscountKind) -> &str {
        match kind {
            DiscountKind::DoubleBonus => &self.double_bonus,
            DiscountKind::SeriesBonus => &self.series_bonus,
        }
    }
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self::english()
    }
}

/// Content of the price panel after a recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum PanelState {
    /// No new selections: the panel is not shown
    Hidden,
    Visible {
        /// Final price text (the currency sign is part of the surrounding markup)
        price: String,
        /// Discount badge text, `None` hides the badge
        badge: Option<String>,
        details: String,
    },
}

impl PanelState {
    pub fn compose(quote: &PriceQuote, labels: &PanelLabels) -> Self {
        if !quote.has_selection() {
            return PanelState::Hidden;
        }

        let price = quote.final_price.to_string();
        let active_kind = quote.discount.kind.filter(|_| quote.discount.is_active());

        match active_kind {
            Some(kind) => {
                let mut details = format!(
                    "{}: {} {} - {}: {} {}",
                    labels.regular,
                    quote.total,
                    labels.currency,
                    labels.discount,
                    quote.discount.amount,
                    labels.currency
                );
                if quote.locked_count > 0 {
                    details.push_str(&format!(
                        " (+{} {})",
                        quote.locked_count, labels.already_booked
                    ));
                }
                PanelState::Visible {
                    price,
                    badge: Some(labels.badge_for(kind).to_string()),
                    details,
                }
            }
            None => PanelState::Visible {
                price,
                badge: None,
                details: format!("{} {}", quote.selection_count(), labels.items_selected),
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, PanelState::Visible { .. })
    }
}
