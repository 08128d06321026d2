//
//  reporte-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Formatting for everything the `reporte` binary prints.
//!
//! - **Table format**: human-readable tables for interactive use
//! - **JSON format**: the server's envelope, pretty-printed, for scripting
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the selected format
//! - [`OutputWriter`]: writes API values and status messages
//!
//! ## Example
//!
//! ```rust,ignore
//! use reporte_client::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_value(&envelope)?;
//! writer.write_success("Report created");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde_json::Value;

/// Output formats supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// Tables where the value has a tabular shape, JSON otherwise.
    #[default]
    Table,
    /// Pretty-printed JSON exactly as returned by the server.
    Json,
}

/// Writes API responses and status messages.
///
/// Data goes to stdout; success, warning and error messages go to stderr
/// so that piped output stays clean.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Picks JSON when `json` is set, tables otherwise.
    pub fn from_flag(json: bool) -> Self {
        Self::new(if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a decoded envelope.
    ///
    /// `Value::Null` (a `204 No Content` answer) prints nothing in table
    /// mode and `null` in JSON mode.
    pub fn write_value(&self, value: &Value) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                match value {
                    Value::Null => {}
                    Value::String(s) => println!("{}", s),
                    Value::Bool(_) | Value::Number(_) => println!("{}", value),
                    _ => match value_table(value, self.color) {
                        Some(table) => println!("{}", table),
                        None => write_json(value)?,
                    },
                }
                Ok(())
            }
        }
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("✓").green().bold(), msg);
        } else {
            eprintln!("{}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }
}

/// Prints a `label: value` line, skipping empty values.
pub fn print_field(label: &str, value: &str, color: bool) {
    if value.is_empty() {
        return;
    }
    if color {
        println!("{}: {}", console::style(label).bold(), value);
    } else {
        println!("{}: {}", label, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(OutputWriter::from_flag(true).format(), OutputFormat::Json);
        assert_eq!(OutputWriter::from_flag(false).format(), OutputFormat::Table);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
