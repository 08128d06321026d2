//
//  reporte-client
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared fixtures for the API tests.

use std::sync::{Arc, Mutex};

use reqwest::Method;

use super::common::ApiError;
use super::observer::RequestObserver;
use super::ReporteClient;
use crate::auth::{Credentials, MemoryCredentialStore};

/// Port 1 is never served locally, so connects are refused.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(String, String),
    Status(String, String, u16),
    Error(String, String),
}

/// Observer that records every event in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// URLs of every request that was started.
    pub fn started_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Start(_, url) => Some(url),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl RequestObserver for RecordingObserver {
    fn request_start(&self, method: &Method, url: &str, _body: Option<&str>) {
        self.push(Event::Start(method.to_string(), url.to_string()));
    }

    fn response_status(&self, method: &Method, url: &str, status: u16) {
        self.push(Event::Status(method.to_string(), url.to_string(), status));
    }

    fn error(&self, method: &Method, url: &str, _error: &ApiError) {
        self.push(Event::Error(method.to_string(), url.to_string()));
    }
}

/// Client pointed at a mock server, optionally logged in as `user_id`.
pub fn client_for(
    server: &mockito::ServerGuard,
    user_id: Option<i64>,
) -> (ReporteClient, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    let store = match user_id {
        Some(id) => MemoryCredentialStore::with(Credentials::new(id)),
        None => MemoryCredentialStore::new(),
    };
    let client = ReporteClient::new(&server.url())
        .unwrap()
        .with_credentials(Arc::new(store))
        .with_observer(observer.clone());
    (client, observer)
}
