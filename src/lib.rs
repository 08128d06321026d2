//
//  reporte-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Reporte Ciudadano Client Library
//!
//! A typed client for the Reporte Ciudadano civic-reporting REST API, plus
//! the `reporte` command-line tool built on top of it.
//!
//! ## Overview
//!
//! Every endpoint goes through a single request dispatcher that resolves the
//! endpoint against a configurable base URL, sends JSON, and classifies the
//! outcome into [`api::ApiError`]. Endpoint methods are thin façades over it.
//!
//! ## Features
//!
//! - **Uniform error taxonomy**: 401/403/404/5xx/other map to distinct kinds,
//!   connection failures are reported with the URL that was tried
//! - **Ownership checks**: per-user endpoints refuse to act for anyone but the
//!   logged-in user before touching the network
//! - **Pluggable collaborators**: credential store and request observer are
//!   injected, with keyring and `tracing` implementations provided
//! - **Environment targeting**: development (per platform) and production
//!   base URLs, overridable from config or the command line
//!
//! ## Module Structure
//!
//! - [`api`]: dispatcher, error taxonomy and endpoint methods
//! - [`auth`]: credential record and stores (keyring, memory)
//! - [`config`]: configuration file and base URL resolution
//! - [`context`]: per-invocation target resolution for the CLI
//! - [`cli`]: command-line interface definitions using clap
//! - [`output`]: table and JSON rendering
//! - [`interactive`]: terminal prompts
//! - [`util`]: field parsing and time formatting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use reporte_client::api::{Page, ReporteClient};
//!
//! # async fn run() -> Result<(), reporte_client::api::ApiError> {
//! let client = ReporteClient::new("http://localhost:5000")?;
//! let reports = client.list_reports(Page::new(1, 20)).await?;
//! println!("{reports}");
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Request dispatcher and endpoint methods.
///
/// The client handles URL resolution, JSON bodies, status classification and
/// client-side ownership checks.
pub mod api;

/// Credential record and stores.
///
/// - System keyring storage, keyed by API base URL
/// - In-memory storage for tests and embedding
pub mod auth;

/// Configuration file management.
///
/// Manages the configuration stored in platform-specific locations:
/// - Linux: `~/.config/reporte/config.toml`
/// - macOS: `~/Library/Application Support/reporte/config.toml`
/// - Windows: `%APPDATA%\reporte\config.toml`
pub mod config;

/// Target resolution for CLI invocations.
pub mod context;

/// Output formatting for tables and JSON.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Utility functions and helpers.
pub mod util;

pub use api::{ApiError, ReporteClient};

pub use cli::Cli;

pub use config::Config;

/// Application name, used for the binary and the config directory.
pub const APP_NAME: &str = "reporte";

/// Crate version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes.
///
/// Values are distinct bits so scripts can test them individually.
pub mod exit_codes {
    /// Command completed successfully.
    pub const SUCCESS: i32 = 0;

    /// Generic failure.
    pub const ERROR: i32 = 1;

    /// Invalid command-line usage.
    pub const USAGE: i32 = 2;

    /// Not logged in, or the server rejected the session (401/403).
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (404).
    pub const NOT_FOUND: i32 = 8;

    /// A user id other than the logged-in user's was supplied.
    pub const OWNERSHIP: i32 = 16;

    /// Server error (5xx) or server unreachable.
    pub const SERVER: i32 = 32;

    use crate::api::ApiError;

    /// Picks the exit code for an error returned by a command.
    ///
    /// The first [`ApiError`] in the error chain decides; anything else is
    /// [`ERROR`].
    pub fn for_error(error: &anyhow::Error) -> i32 {
        match error.chain().find_map(|e| e.downcast_ref::<ApiError>()) {
            Some(ApiError::AuthenticationFailed(_)) | Some(ApiError::AccessForbidden) => {
                AUTH_ERROR
            }
            Some(ApiError::NotFound) => NOT_FOUND,
            Some(ApiError::OwnershipMismatch { .. }) => OWNERSHIP,
            Some(ApiError::ServerError { .. }) | Some(ApiError::ConnectionUnreachable { .. }) => {
                SERVER
            }
            _ => ERROR,
        }
    }

}
