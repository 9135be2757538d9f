//! Price View Port
//!
//! The four nodes the engine writes to: the panel container, the price text,
//! the discount badge and the details line. Implementations only need the
//! element operations; [`PriceView::render`] drives them from a
//! [`PanelState`].

use serde::Serialize;

use crate::domain::services::PanelState;

pub trait PriceView {
    fn set_panel_visible(&mut self, visible: bool);

    fn set_price_text(&mut self, text: &str);

    /// Show the badge with `text`, or hide it when `None`.
    fn set_badge(&mut self, text: Option<&str>);

    fn set_details_text(&mut self, text: &str);

    /// Apply a composed panel state. A hidden panel only hides the
    /// container; the other nodes keep whatever they showed last.
    fn render(&mut self, state: &PanelState) {
        match state {
            PanelState::Hidden => self.set_panel_visible(false),
            PanelState::Visible {
                price,
                badge,
                details,
            } => {
                self.set_panel_visible(true);
                self.set_price_text(price);
                self.set_badge(badge.as_deref());
                self.set_details_text(details);
            }
        }
    }
}

/// View that just remembers what its nodes show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelNodes {
    pub panel_visible: bool,
    pub price_text: String,
    pub badge_visible: bool,
    pub badge_text: String,
    pub details_text: String,
    /// Number of writes received, for telling renders apart
    #[serde(skip)]
    pub writes: usize,
}

impl PriceView for PanelNodes {
    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
        self.writes += 1;
    }

    fn set_price_text(&mut self, text: &str) {
        self.price_text = text.to_string();
        self.writes += 1;
    }

    fn set_badge(&mut self, text: Option<&str>) {
        match text {
            Some(text) => {
                self.badge_visible = true;
                self.badge_text = text.to_string();
            }
            None => self.badge_visible = false,
        }
        self.writes += 1;
    }

    fn set_details_text(&mut self, text: &str) {
        self.details_text = text.to_string();
        self.writes += 1;
    }
}
