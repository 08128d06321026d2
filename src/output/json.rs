//
//  reporte-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Machine-readable output for `--json` and for values that have no
//! tabular shape. Key order follows the server's response.

use serde::Serialize;
use std::io::{self, Write};

/// Writes `value` to stdout as pretty-printed JSON.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json_to(&mut io::stdout().lock(), value)
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_keeps_key_order() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"title": "a", "description": "b"})).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "{\n  \"title\": \"a\",\n  \"description\": \"b\"\n}\n");
    }

    #[test]
    fn test_write_json_to_null() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &serde_json::Value::Null).unwrap();
        assert_eq!(buffer, b"null\n");
    }
}
