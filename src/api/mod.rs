//
//  reporte-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP client for the Reporte Ciudadano REST API.
//!
//! ## Architecture
//!
//! - [`client`]: the request dispatcher ([`ReporteClient`])
//! - [`common`]: error taxonomy, pagination and query building
//! - [`observer`]: request lifecycle hooks
//! - resource modules, each adding methods to [`ReporteClient`]:
//!   [`session`], [`users`], [`reports`], [`locations`],
//!   [`administrators`], [`departments`], [`pinned_reports`], [`stats`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reporte_client::api::{Page, ReporteClient};
//!
//! # async fn example() -> Result<(), reporte_client::api::ApiError> {
//! let client = ReporteClient::new("http://localhost:5000")?;
//! let reports = client.list_reports(Page::new(1, 20)).await?;
//! println!("{reports}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`ApiError`] on failure:
//!
//! - `AuthenticationFailed`: 401, or no stored login
//! - `AccessForbidden`: 403
//! - `NotFound`: 404
//! - `ServerError`: 5xx
//! - `Api`: any other non-2xx status
//! - `ConnectionUnreachable`: the server did not answer at all

pub mod client;

pub mod common;

pub mod observer;

/// Login, logout and health endpoints.
pub mod session;

pub mod users;

pub mod reports;

pub mod locations;

pub mod administrators;

pub mod departments;

pub mod pinned_reports;

/// Statistics and admin dashboard endpoints.
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ReporteClient;

pub use common::{ApiError, ApiResult, Page, Query};

pub use observer::{NoopObserver, RequestObserver, TracingObserver};

pub use administrators::NewAdministrator;
pub use departments::NewDepartment;
pub use locations::{LocationSearch, NearbyQuery, NewLocation};
pub use pinned_reports::PinRequest;
pub use reports::{AdminAction, RatingRequest, ReportFilter, ReportFormData};
pub use session::{login_user_id, LoginRequest};
pub use users::{NewUser, UserAction};
