//
//  reporte-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Reporte Ciudadano client
//!
//! This module provides the error taxonomy shared by the request dispatcher
//! and every endpoint façade, plus the query/pagination helpers.
//!
//! # Example
//!
//! ```rust
//! use reporte_client::api::common::ApiError;
//!
//! fn describe<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthenticationFailed(reason)) => println!("Log in again: {}", reason),
//!         Err(ApiError::NotFound) => println!("No such resource"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Result alias used by the library layer.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Unified error type for all Reporte API operations.
///
/// | Variant | Cause |
/// |---------|-------|
/// | `AuthenticationFailed` | HTTP 401, or no stored credential |
/// | `AccessForbidden` | HTTP 403 |
/// | `NotFound` | HTTP 404 |
/// | `ServerError` | HTTP 5xx |
/// | `Api` | any other non-2xx status |
/// | `ConnectionUnreachable` | the server could not be reached at all |
/// | `OwnershipMismatch` | supplied user id differs from the stored one |
/// | `DomainValidation` | server rejected the request inside a 2xx body |
///
/// # Notes
///
/// - `ConnectionUnreachable` means the request never got an HTTP answer,
///   every status-based variant means the server answered and refused.
/// - The ownership check is a client-side fail-fast; the server remains the
///   authority on who may touch what.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered 401, or no credential record is stored locally.
    ///
    /// # Parameters
    ///
    /// - `0` - Why authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The server answered 403.
    #[error("Access forbidden")]
    AccessForbidden,

    /// The server answered 404.
    #[error("Resource not found")]
    NotFound,

    /// The server answered with a 5xx status.
    #[error("Server error ({status})")]
    ServerError {
        /// The HTTP status code returned
        status: u16,
    },

    /// Any other non-success status.
    #[error("API error: {status} {status_text}")]
    Api {
        /// The HTTP status code returned
        status: u16,
        /// The canonical reason phrase for `status`
        status_text: String,
    },

    /// The transport could not reach the server (refused, DNS, offline).
    #[error("Cannot connect to server at {url}. Please check if the backend is running.")]
    ConnectionUnreachable {
        /// The fully resolved request URL
        url: String,
    },

    /// A caller-supplied user id does not match the stored credential.
    #[error("User ID mismatch: requested {supplied}, authenticated as {authenticated}")]
    OwnershipMismatch {
        /// The id passed by the caller
        supplied: i64,
        /// The id from the credential record
        authenticated: i64,
    },

    /// The server reported a business-rule failure in a successful response.
    #[error("{0}")]
    DomainValidation(String),

    /// A 2xx body was not valid JSON.
    #[error("Invalid JSON in response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Could not serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The base URL and endpoint do not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The credential store could not be read.
    #[error("Credential store error: {0}")]
    CredentialStore(String),

    /// Any other transport failure, passed through unchanged.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Classifies a non-success HTTP status.
    ///
    /// Returns `None` for 2xx statuses, which are not errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reqwest::StatusCode;
    /// use reporte_client::api::common::ApiError;
    ///
    /// assert!(matches!(ApiError::from_status(StatusCode::FORBIDDEN), Some(ApiError::AccessForbidden)));
    /// assert!(ApiError::from_status(StatusCode::OK).is_none());
    /// ```
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }

        let error = match status {
            StatusCode::UNAUTHORIZED => {
                Self::AuthenticationFailed("please log in again".to_string())
            }
            StatusCode::FORBIDDEN => Self::AccessForbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            s if s.as_u16() >= 500 => Self::ServerError { status: s.as_u16() },
            s => Self::Api {
                status: s.as_u16(),
                status_text: s.canonical_reason().unwrap_or_default().to_string(),
            },
        };

        Some(error)
    }

    /// Error for calls that need a credential record when none is stored.
    pub fn not_authenticated() -> Self {
        Self::AuthenticationFailed("user not authenticated".to_string())
    }
}

/// Pulls a human-readable message out of a server envelope.
///
/// The Reporte backend reports failures as `{"error_msg": "..."}`; a plain
/// `{"message": "..."}` or `{"error": "..."}` is accepted too.
pub fn envelope_message(value: &serde_json::Value) -> Option<&str> {
    ["error_msg", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|m| m.as_str()))
}

/// Whether an envelope field counts as set, using JavaScript truthiness.
///
/// `null`, `false`, `0`, `0.0` and `""` are falsy. Every other value,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
