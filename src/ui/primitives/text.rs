use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// Text tagged with a theme color, rendered plain when color is off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<Color>,
    bold: bool,
}

impl ColoredText {
    fn with_color(text: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::with_color(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(theme::colors::SUCCESS))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(theme::colors::WARNING))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(theme::colors::INFO))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(theme::colors::DIM))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }
        match (self.color, self.bold) {
            (Some(color), true) => format!("{}", self.text.as_str().with(color).bold()),
            (Some(color), false) => format!("{}", self.text.as_str().with(color)),
            (None, true) => format!("{}", self.text.as_str().bold()),
            (None, false) => self.text.clone(),
        }
    }
}

/// A full-width horizontal rule
pub fn rule(supports_unicode: bool) -> String {
    let unit = if supports_unicode {
        theme::RULE_UNICODE
    } else {
        theme::RULE_ASCII
    };
    unit.repeat(theme::RULE_WIDTH)
}
