//! Terminal presentation layer
//!
//! All console output goes through a `Printer` so verification and report
//! logic never emits escape codes itself. Plain mode is selected with
//! `--no-color` or the NO_COLOR environment variable.

use colored::Colorize;

const RULE_WIDTH: usize = 70;

/// Output capability for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Plain,
    Colorized,
}

#[derive(Debug, Clone, Copy)]
pub struct Printer {
    mode: ColorMode,
}

impl Printer {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    fn colorized(&self) -> bool {
        self.mode == ColorMode::Colorized
    }

    pub fn header(&self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        println!();
        println!("{}", self.fmt_header_line(&rule));
        println!("{}", self.fmt_header_line(title));
        println!("{}", self.fmt_header_line(&rule));
        println!();
    }

    pub fn step(&self, index: usize, total: usize, title: &str) {
        println!();
        println!("{}", self.fmt_step(index, total, title));
    }

    pub fn success_banner(&self, message: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("{}", self.fmt_success(&rule));
        println!("{}", self.fmt_success(&format!("✅ {}", message)));
        println!("{}", self.fmt_success(&rule));
        println!();
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.fmt_error(&format!("❌ {}", message)));
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.fmt_info(message));
    }

    pub fn check_pass(&self, message: &str) {
        println!("  {} {}", self.fmt_success("✓"), message);
    }

    pub fn check_fail(&self, message: &str) {
        println!("  {} {}", self.fmt_error("✗"), message);
    }

    pub fn check_warn(&self, message: &str) {
        println!("  {} {}", self.fmt_warning("⚠"), message);
    }

    pub fn plain(&self, message: &str) {
        println!("{}", message);
    }

    // Formatting helpers, split out so tests can assert on the strings
    // without capturing stdout.

    fn fmt_header_line(&self, text: &str) -> String {
        if self.colorized() {
            text.bright_cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn fmt_step(&self, index: usize, total: usize, title: &str) -> String {
        let text = format!("[{}/{}] {}", index, total, title);
        if self.colorized() {
            text.bright_blue().to_string()
        } else {
            text
        }
    }

    fn fmt_success(&self, text: &str) -> String {
        if self.colorized() {
            text.bright_green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn fmt_error(&self, text: &str) -> String {
        if self.colorized() {
            text.bright_red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn fmt_warning(&self, text: &str) -> String {
        if self.colorized() {
            text.bright_yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn fmt_info(&self, text: &str) -> String {
        if self.colorized() {
            text.bright_cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_mode_emits_no_escape_codes() {
        let printer = Printer::new(ColorMode::Plain);
        for text in [
            printer.fmt_header_line("Preflight"),
            printer.fmt_step(1, 4, "Verifying Environment"),
            printer.fmt_success("ok"),
            printer.fmt_error("bad"),
            printer.fmt_warning("careful"),
            printer.fmt_info("note"),
        ] {
            assert!(!text.contains('\x1b'), "unexpected escape in {:?}", text);
        }
    }

    #[test]
    fn test_step_formatting() {
        let printer = Printer::new(ColorMode::Plain);
        assert_eq!(
            printer.fmt_step(2, 4, "Migration Summary"),
            "[2/4] Migration Summary"
        );
    }
}
