//! Shared output settings for all commands.

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::OutputFormat;

/// Resolved output settings (config file merged with command-line flags)
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat, color: Option<bool>) -> Self {
        if let Some(enabled) = color {
            console::set_colors_enabled(enabled);
        }
        Output { format }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a line marked as passing or failing
    pub fn print_verdict(&self, ok: bool, text: &str) {
        if ok {
            println!("{} {}", style("✓").green().bold(), text);
        } else {
            println!("{} {}", style("✗").red().bold(), text);
        }
    }
}
