//
//  reporte-client
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Helpers shared by the command implementations.
//!
//! - **Field parsing**: [`parse_field`], [`fields_to_body`] turn
//!   `-F key=value` arguments into a JSON body
//! - **Body input**: [`read_body`] loads a JSON body from a file or stdin
//! - **Time**: [`format_relative_time`] for login timestamps

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Parses `key=value`, typing the value the way a JSON literal would be.
///
/// `true`, `false`, `null`, integers, floats, and `[`/`{` literals become
/// their JSON counterparts. Anything else stays a string.
///
/// # Example
///
/// ```rust
/// use reporte_client::util::parse_field;
/// use serde_json::json;
///
/// assert_eq!(parse_field("rating=4").unwrap(), ("rating".into(), json!(4)));
/// assert_eq!(parse_field("status=resolved").unwrap(), ("status".into(), json!("resolved")));
/// ```
pub fn parse_field(field: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = field.split_once('=') else {
        bail!("Invalid field format: {}. Expected key=value", field);
    };
    if key.is_empty() {
        bail!("Invalid field format: {}. Key is empty", field);
    }

    let value = match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::Number(n.into())
            } else if let Some(n) = raw
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
            {
                Value::Number(n)
            } else if raw.starts_with('[') || raw.starts_with('{') {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    };

    Ok((key.to_string(), value))
}

/// Builds an object from `key=value` fields. Dotted keys nest.
///
/// Returns `None` when `fields` is empty.
pub fn fields_to_body(fields: &[String]) -> Result<Option<Value>> {
    if fields.is_empty() {
        return Ok(None);
    }
    let mut body = Map::new();
    for field in fields {
        let (key, value) = parse_field(field)?;
        set_nested_value(&mut body, &key, value);
    }
    Ok(Some(Value::Object(body)))
}

fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

/// Reads a JSON body from `path`, or from stdin when `path` is `-`.
pub fn read_body(path: &str) -> Result<Value> {
    let content = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };
    serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", path))
}

/// Resolves a body from `--input` or `-F` fields; `--input` wins.
pub fn body_from_args(input: Option<&str>, fields: &[String]) -> Result<Option<Value>> {
    match input {
        Some(path) => read_body(path).map(Some),
        None => fields_to_body(fields),
    }
}

/// Describes `time` relative to `now`, e.g. "3 hours ago".
pub fn format_relative_time(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - time).num_seconds();
    if diff < 0 {
        return "in the future".to_string();
    }

    let diff = diff as u64;
    let (amount, unit) = match diff {
        0..=59 => return "just now".to_string(),
        60..=3599 => (diff / 60, "minute"),
        3600..=86_399 => (diff / 3600, "hour"),
        86_400..=2_591_999 => (diff / 86_400, "day"),
        2_592_000..=31_535_999 => (diff / 2_592_000, "month"),
        _ => (diff / 31_536_000, "year"),
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}
