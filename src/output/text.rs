use std::io::Write as IoWrite;

use crate::checker::CheckResult;
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders one `Checking <path>...` line plus one status line per file.
///
/// The status strings are part of the tool's contract; scripts grep for them.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn status_line(&self, result: &CheckResult) -> String {
        match result {
            CheckResult::Balanced { .. } => self.colorize("Structure OK. Balanced.", ansi::GREEN),
            CheckResult::ExtraneousClose { line, .. } => self.colorize(
                &format!("!! Extraneous closing brace '}}' found at Line {line}"),
                ansi::RED,
            ),
            CheckResult::UnclosedOpen { missing, .. } => self.colorize(
                &format!("!! Missing {missing} closing brace(s). File ends with clear open scope."),
                ansi::RED,
            ),
            CheckResult::Missing { .. } => self.colorize("File not found.", ansi::YELLOW),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let mut output = Vec::new();

        for result in results {
            writeln!(output, "Checking {}...", result.path().display()).ok();
            writeln!(output, "{}", self.status_line(result)).ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
