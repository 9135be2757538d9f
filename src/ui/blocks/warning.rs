use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::frame::{Frame, FrameStyle};

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut frame = Frame::with_title(format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        ))
        .style(FrameStyle::Warning);
        for line in &self.lines {
            frame.add_line(line.as_str());
        }
        frame.render(supports_color, supports_unicode)
    }
}
