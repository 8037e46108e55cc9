//! Console UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, Theme, UserInterface};

/// Console UI implementation.
///
/// Status output goes to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a console UI, colored when the terminal supports it.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self::with_theme(theme)
    }

    /// Create a console UI with an explicit theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.out, "{}", self.theme.format_header(title)).ok();
    }
}

/// Create the UI for this process.
///
/// `no_color` forces plain output regardless of the terminal.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_theme(Theme::plain()))
    } else {
        Box::new(TerminalUI::new())
    }
}
