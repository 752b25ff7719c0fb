//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use terminal_size::{terminal_size, Width};

use super::mode::{OutputFormat, OutputMode};

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// # Arguments
    /// * `json_flag` - Whether `--json` was passed
    /// * `format` - Layout from `--format`, if the command takes one
    /// * `no_color_flag` - Whether `--no-color` was passed
    pub fn from_env(json_flag: bool, format: Option<OutputFormat>, no_color_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Resolve color: disabled if NO_COLOR env, --no-color flag, or TERM=dumb
        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;

        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::select(json_flag, format, is_tty, term_is_dumb);

        Self { color, width, mode }
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

/// Get terminal width from COLUMNS or the terminal itself.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    terminal_size().map(|(Width(w), _)| usize::from(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(false, None, true);
        assert!(!ctx.color);
    }

    #[test]
    fn test_explicit_plain_format() {
        let ctx = UiContext::from_env(false, Some(OutputFormat::Plain), false);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(false, None, false);
        assert!(ctx.width > 0);
    }
}
