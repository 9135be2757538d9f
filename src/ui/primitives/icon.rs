use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Selected,
    Unselected,
    Quote,
    Watch,
    Replay,
    Session,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Selected) => theme::icons::SELECTED,
            (true, Icon::Unselected) => theme::icons::UNSELECTED,
            (true, Icon::Quote) => theme::icons::QUOTE,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Replay) => theme::icons::REPLAY,
            (true, Icon::Session) => theme::icons::SESSION,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Selected) => theme::icons_ascii::SELECTED,
            (false, Icon::Unselected) => theme::icons_ascii::UNSELECTED,
            (false, Icon::Quote) => theme::icons_ascii::QUOTE,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Replay) => theme::icons_ascii::REPLAY,
            (false, Icon::Session) => theme::icons_ascii::SESSION,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Selected => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Unselected => theme::colors::DIM,
            Icon::Quote | Icon::Watch | Icon::Replay | Icon::Session => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
