use owo_colors::{OwoColorize, Style};

/// Terminal colors for the helper. Disabled palettes return text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    pub fn plain() -> Self {
        Palette::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, Style::new().cyan())
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, Style::new().yellow())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, Style::new().red())
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}
