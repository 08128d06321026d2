//
//  reporte-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination and Query String Building
//!
//! Every list endpoint of the Reporte API accepts optional `page` and
//! `limit` query parameters. They are only sent when the caller provides
//! them; an omitted value never turns into `page=` or `page=0`.
//!
//! # Example
//!
//! ```rust
//! use reporte_client::api::common::{Page, Query};
//!
//! let path = Query::new()
//!     .push("q", "pothole")
//!     .page(Page::new(2, 10))
//!     .apply("/reports/search");
//!
//! assert_eq!(path, "/reports/search?q=pothole&page=2&limit=10");
//! ```

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Optional page/limit pair for list endpoints.
///
/// A value of `0` is treated the same as an absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-indexed page number.
    #[serde(default)]
    pub page: Option<u32>,

    /// Maximum number of items per page.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl Page {
    /// Both page and limit set.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// No pagination parameters at all; the server picks its defaults.
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a page from optional CLI-style values.
    pub fn from_parts(page: Option<u32>, limit: Option<u32>) -> Self {
        Self { page, limit }
    }
}

/// Ordered list of query parameters for a single request.
///
/// Keys keep insertion order so the rendered query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required parameter.
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a parameter only when a value is present.
    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Adds a numeric parameter only when present and non-zero.
    pub fn push_nonzero(self, key: &str, value: Option<u32>) -> Self {
        self.push_opt(key, value.filter(|v| *v > 0))
    }

    /// Adds a string parameter only when present and non-empty.
    pub fn push_nonempty(self, key: &str, value: Option<&str>) -> Self {
        self.push_opt(key, value.filter(|v| !v.is_empty()))
    }

    /// Adds the `page` and `limit` keys of `page`, when set.
    pub fn page(self, page: Page) -> Self {
        self.push_nonzero("page", page.page)
            .push_nonzero("limit", page.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders the query string without the leading `?`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Appends the query string to `path`, leaving `path` untouched when
    /// there are no parameters.
    pub fn apply(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

/// Percent-encodes a free-text path segment such as a department name.
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
