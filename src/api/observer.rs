//
//  reporte-client
//  api/observer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request lifecycle hooks.
//!
//! The dispatcher reports three events for every call: the request is about
//! to go out, a status came back, or the call failed. [`TracingObserver`]
//! forwards them to `tracing`; tests plug in their own observer to assert on
//! the call sequence.

use reqwest::Method;

use super::common::ApiError;

/// Receives lifecycle events from [`ReporteClient`](super::ReporteClient).
///
/// Implementations must be cheap; they run inline on the request path.
pub trait RequestObserver: Send + Sync {
    /// Called right before the request is sent.
    fn request_start(&self, method: &Method, url: &str, body: Option<&str>);

    /// Called once the server has answered, before the body is read.
    fn response_status(&self, method: &Method, url: &str, status: u16);

    /// Called when the call fails for any reason.
    fn error(&self, method: &Method, url: &str, error: &ApiError);
}

/// Default observer that logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn request_start(&self, method: &Method, url: &str, body: Option<&str>) {
        tracing::debug!(%method, url, "API request");
        if let Some(body) = body {
            tracing::trace!(%method, url, body, "request body");
        }
    }

    fn response_status(&self, method: &Method, url: &str, status: u16) {
        tracing::debug!(%method, url, status, "API response");
    }

    fn error(&self, method: &Method, url: &str, error: &ApiError) {
        tracing::warn!(%method, url, error = %error, "API error");
    }
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn request_start(&self, _method: &Method, _url: &str, _body: Option<&str>) {}

    fn response_status(&self, _method: &Method, _url: &str, _status: u16) {}

    fn error(&self, _method: &Method, _url: &str, _error: &ApiError) {}
}
