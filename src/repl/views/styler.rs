//! Presentation strategies: ANSI colors via crossterm, or plain text.

use crossterm::style::Stylize;

/// Decorates text fragments for display
pub trait Styler {
    fn heading(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn hint(&self, text: &str) -> String;
    fn label(&self, text: &str) -> String;
    fn accent(&self, text: &str) -> String;
}

pub struct ColoredStyler;

impl Styler for ColoredStyler {
    fn heading(&self, text: &str) -> String {
        text.cyan().bold().to_string()
    }

    fn success(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn error(&self, text: &str) -> String {
        text.red().to_string()
    }

    fn hint(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn label(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.blue().to_string()
    }
}

pub struct PlainStyler;

impl Styler for PlainStyler {
    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn hint(&self, text: &str) -> String {
        text.to_string()
    }

    fn label(&self, text: &str) -> String {
        text.to_string()
    }

    fn accent(&self, text: &str) -> String {
        text.to_string()
    }
}

pub fn styler_for(color: bool) -> Box<dyn Styler> {
    if color {
        Box::new(ColoredStyler)
    } else {
        Box::new(PlainStyler)
    }
}
