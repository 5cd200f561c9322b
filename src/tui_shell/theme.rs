use std::str::FromStr;

use ratatui::style::{Color, Style};

use crate::controller::Chrome;

const DEFAULT_LOGO: &str = "Plugin Help";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Theme {
    pub(super) logo: String,
    pub(super) background: Option<Color>,
    pub(super) header: Color,
}

impl Theme {
    pub(super) fn from_chrome(chrome: &Chrome) -> Self {
        Self {
            logo: chrome
                .logo
                .clone()
                .unwrap_or_else(|| DEFAULT_LOGO.to_string()),
            background: chrome.background_color.as_deref().and_then(parse_color),
            header: chrome
                .header_color
                .as_deref()
                .and_then(parse_color)
                .unwrap_or(Color::White),
        }
    }

    pub(super) fn base(&self) -> Style {
        match self.background {
            Some(bg) => Style::default().bg(bg),
            None => Style::default(),
        }
    }
}

fn parse_color(raw: &str) -> Option<Color> {
    match Color::from_str(raw.trim()) {
        Ok(c) => Some(c),
        Err(_) => {
            tracing::debug!(color = raw, "ignoring unparsable branding color");
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/theme_tests.rs"]
mod tests;
