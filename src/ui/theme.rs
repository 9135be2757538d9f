use crossterm::style::Color;

/// Design tokens for the Tally CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Checkbox states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    // Command identifiers (used in headers).
    pub const QUOTE: &str = "€";
    pub const WATCH: &str = "⟳";
    pub const REPLAY: &str = "▶";
    pub const SESSION: &str = "✎";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    pub const QUOTE: &str = "[QUOTE]";
    pub const WATCH: &str = "[~]";
    pub const REPLAY: &str = "[REPLAY]";
    pub const SESSION: &str = "[FORM]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Prompt theme for `dialoguer`: colorful when color is on, plain otherwise.
pub fn prompt_theme(supports_color: bool) -> Box<dyn dialoguer::theme::Theme> {
    if supports_color {
        Box::new(dialoguer::theme::ColorfulTheme::default())
    } else {
        Box::new(dialoguer::theme::SimpleTheme)
    }
}
