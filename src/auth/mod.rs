//
//  reporte-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Holds the locally stored credential record (the logged-in user's id) and
//! the stores that persist it.
//!
//! ## Module Structure
//!
//! - [`CredentialStore`]: read access used by the API client
//! - [`KeyringCredentialStore`]: system keyring persistence
//! - [`MemoryCredentialStore`]: in-process store for tests and embedding
//!
//! ## Example
//!
//! ```rust
//! use reporte_client::auth::{CredentialStore, Credentials, MemoryCredentialStore};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = MemoryCredentialStore::with(Credentials::new(42));
//! let creds = store.load().await?.expect("stored above");
//! assert_eq!(creds.user_id, 42);
//! # Ok(())
//! # }
//! ```

mod keyring;

pub use keyring::*;

use std::sync::{PoisonError, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user's identity as persisted after login.
///
/// # Example
///
/// ```rust
/// use reporte_client::auth::Credentials;
///
/// let creds = Credentials::new(7).with_email("ana@example.com");
/// assert_eq!(creds.email.as_deref(), Some("ana@example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Server-side id of the logged-in user.
    pub user_id: i64,

    /// Email used to log in, if known.
    #[serde(default)]
    pub email: Option<String>,

    /// When the record was written.
    #[serde(default)]
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl Credentials {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            email: None,
            logged_in_at: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Stamps the record with the current time.
    pub fn stamped(mut self) -> Self {
        self.logged_in_at = Some(Utc::now());
        self
    }
}

/// Read access to the stored credential record.
///
/// The API client only ever reads through this trait; writing happens in the
/// login/logout flow against the concrete store.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the stored record, or `None` when nobody is logged in.
    async fn load(&self) -> Result<Option<Credentials>>;
}

/// Credential store kept in memory.
///
/// Useful for tests and for embedding the client in a process that manages
/// its own session.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<Option<Credentials>>,
}

impl MemoryCredentialStore {
    /// An empty store (logged out).
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `credentials`.
    pub fn with(credentials: Credentials) -> Self {
        Self {
            inner: RwLock::new(Some(credentials)),
        }
    }

    /// Replaces the stored credentials, recovering a poisoned lock.
    pub fn set(&self, credentials: Option<Credentials>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = credentials;
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<Credentials>> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }
}
