use tally::domain::ports::PanelNodes;
use tally::domain::services::PanelState;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::frame::{Frame, FrameStyle};

/// Read a panel back out of the nodes a view wrote.
pub fn state_of(nodes: &PanelNodes) -> PanelState {
    if !nodes.panel_visible {
        return PanelState::Hidden;
    }
    PanelState::Visible {
        price: nodes.price_text.clone(),
        badge: nodes.badge_visible.then(|| nodes.badge_text.clone()),
        details: nodes.details_text.clone(),
    }
}

pub fn render_panel(
    state: &PanelState,
    currency: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match state {
        PanelState::Hidden => format!(
            "{} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim("No new selections").render(supports_color)
        ),
        PanelState::Visible {
            price,
            badge,
            details,
        } => {
            let price = format!("{price} {currency}");
            let mut frame = Frame::default();
            match badge {
                Some(badge) => {
                    frame = frame.style(FrameStyle::Success);
                    frame.add_line(ColoredText::success(price).bold().render(supports_color));
                    frame.add_line(format!(
                        "{} {}",
                        Icon::Success.colored(supports_color, supports_unicode),
                        ColoredText::success(badge.as_str()).render(supports_color)
                    ));
                }
                None => {
                    frame.add_line(ColoredText::info(price).bold().render(supports_color));
                }
            }
            frame.add_line(ColoredText::dim(details.as_str()).render(supports_color));
            frame.render(supports_color, supports_unicode)
        }
    }
}

/// One line summary used in streaming output.
pub fn panel_summary(state: &PanelState, currency: &str) -> String {
    match state {
        PanelState::Hidden => "panel hidden".to_string(),
        PanelState::Visible {
            price,
            badge: Some(badge),
            ..
        } => format!("{price} {currency} ({badge})"),
        PanelState::Visible { price, details, .. } => format!("{price} {currency} ({details})"),
    }
}
