//
//  reporte-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Renders API envelopes as terminal tables using `comfy_table`.
//!
//! The Reporte backend answers with loosely shaped JSON, so tables are
//! derived from the value itself:
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | array of objects | one row per element, columns are the union of keys |
//! | object | two columns, `Field` and `Value` |
//! | anything else | no table |
//!
//! ## Example
//!
//! ```rust,ignore
//! use reporte_client::output::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .headers(["ID", "Title", "Status"])
//!     .row(["1", "Pothole on 5th", "pending"])
//!     .build();
//! println!("{table}");
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

/// Longest cell rendered before truncation.
const MAX_CELL_WIDTH: usize = 60;

/// Creates a new table with the standard preset.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for tables with optional colored headers.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a table for `value`, or `None` when it has no tabular shape.
///
/// Empty arrays and empty objects also yield `None`.
pub fn value_table(value: &Value, color: bool) -> Option<Table> {
    match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let columns = collect_columns(items);
            let mut builder = TableBuilder::new().color(color).headers(columns.clone());
            for item in items {
                builder = builder.row(
                    columns
                        .iter()
                        .map(|c| cell_text(item.get(c).unwrap_or(&Value::Null))),
                );
            }
            Some(builder.build())
        }
        Value::Object(map) if !map.is_empty() => {
            let mut builder = TableBuilder::new().color(color).headers(["Field", "Value"]);
            for (key, field) in map {
                builder = builder.row([key.clone(), cell_text(field)]);
            }
            Some(builder.build())
        }
        _ => None,
    }
}

/// Keys of every object in first-seen order.
fn collect_columns(items: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

/// Plain-text form of a JSON value for a single cell.
///
/// Strings are unquoted, `null` is blank, nested values are compact JSON.
pub fn cell_text(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => format_bool(*b),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    };
    truncate(&text, MAX_CELL_WIDTH)
}

pub fn format_bool(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Truncates on character boundaries, appending `...` when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}
