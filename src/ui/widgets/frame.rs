use std::borrow::Cow;

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameStyle {
    #[default]
    Info,
    Success,
    Warning,
}

impl FrameStyle {
    fn color(self) -> Color {
        match self {
            FrameStyle::Info => theme::colors::INFO,
            FrameStyle::Success => theme::colors::SUCCESS,
            FrameStyle::Warning => theme::colors::WARNING,
        }
    }
}

struct Borders {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Borders {
    fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }
}

/// A bordered block of lines, sized to its widest line.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    title: Option<String>,
    lines: Vec<String>,
    style: FrameStyle,
}

impl Frame {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: FrameStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.lines.extend(line.lines().map(str::to_string));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let rows: Vec<&str> = self
            .title
            .iter()
            .chain(self.lines.iter())
            .map(String::as_str)
            .collect();
        let inner = rows.iter().map(|r| visible_width(r)).max().unwrap_or(0) + 2;

        let b = Borders::for_terminal(supports_unicode);
        let paint = |s: &str| -> String {
            if supports_color {
                format!("{}", s.with(self.style.color()))
            } else {
                s.to_string()
            }
        };

        let mut out = String::new();
        out.push_str(&paint(&format!(
            "{}{}{}",
            b.top_left,
            b.horizontal.repeat(inner),
            b.top_right
        )));
        out.push('\n');

        for row in rows {
            let pad = inner - 1 - visible_width(row);
            out.push_str(&paint(b.vertical));
            out.push(' ');
            out.push_str(row);
            out.push_str(&" ".repeat(pad));
            out.push_str(&paint(b.vertical));
            out.push('\n');
        }

        out.push_str(&paint(&format!(
            "{}{}{}",
            b.bottom_left,
            b.horizontal.repeat(inner),
            b.bottom_right
        )));
        out.push('\n');
        out
    }
}

pub(crate) fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}
