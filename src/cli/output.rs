//! Output formatting for the CLI
//!
//! Handlers never print directly; they go through [`OutputFormatter`] so the
//! `--json` and `--no-color` flags behave consistently across commands.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formatter shared by all command handlers
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json, no_color }
    }

    /// Whether JSON output mode is active
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Prints a success line
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Prints an informational line
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Prints a warning line
    pub fn warn(&self, message: &str) {
        if self.no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.yellow());
        }
    }

    /// Prints an error line to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {}", "Error:".red().bold(), message);
        }
    }

    /// Serializes a value as pretty JSON to stdout
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        println!("{rendered}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_flag() {
        let formatter = OutputFormatter::new(true, true);
        assert!(formatter.is_json());
        let formatter = OutputFormatter::new(false, false);
        assert!(!formatter.is_json());
    }

    #[test]
    fn test_print_json_accepts_serializable_values() {
        let formatter = OutputFormatter::new(true, true);
        formatter
            .print_json(&serde_json::json!({"status": "ok"}))
            .unwrap();
    }
}
