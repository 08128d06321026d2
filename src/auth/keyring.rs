//
//  reporte-client
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure Credential Storage Module
//!
//! Persists the credential record in the system's native keyring:
//!
//! - **macOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! ## Storage Model
//!
//! - **Service**: `reporte-client`
//! - **Username/Key**: the API base URL, so development and production
//!   sessions stay apart
//! - **Password/Value**: the [`Credentials`] record serialized as JSON

use anyhow::{Context, Result};
use async_trait::async_trait;
use keyring::Entry;

use super::{CredentialStore, Credentials};

/// The service name used to identify this application in the system keyring.
const SERVICE_NAME: &str = "reporte-client";

/// Credential record storage backed by the system keyring.
///
/// # Example
///
/// ```rust,no_run
/// use reporte_client::auth::{Credentials, KeyringCredentialStore};
///
/// fn remember() -> anyhow::Result<()> {
///     let store = KeyringCredentialStore::new("http://localhost:5000");
///     store.save(&Credentials::new(12).stamped())?;
///     Ok(())
/// }
/// ```
///
/// # Notes
///
/// - The keyring may require user interaction on first access.
/// - On Linux, a secret service daemon must be running.
#[derive(Debug, Clone)]
pub struct KeyringCredentialStore {
    service: String,
    account: String,
}

impl KeyringCredentialStore {
    /// Creates a store whose entry is keyed by `account` (the API base URL).
    ///
    /// No keyring access occurs during construction.
    pub fn new(account: &str) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            account: account.to_string(),
        }
    }

    /// The keyring account this store reads and writes.
    pub fn account(&self) -> &str {
        &self.account
    }

    fn entry(&self) -> Result<Entry> {
        Ok(Entry::new(&self.service, &self.account)?)
    }

    /// Writes `credentials`, replacing any existing record.
    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        let json = serde_json::to_string(credentials)?;
        self.entry()?
            .set_password(&json)
            .with_context(|| format!("Failed to store credentials for {}", self.account))?;
        Ok(())
    }

    /// Reads the stored record. Missing entries are `Ok(None)`.
    pub fn get(&self) -> Result<Option<Credentials>> {
        match self.entry()?.get_password() {
            Ok(json) => {
                let credentials = serde_json::from_str(&json).with_context(|| {
                    format!("Stored credentials for {} are corrupted", self.account)
                })?;
                Ok(Some(credentials))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the stored record. Deleting a missing entry succeeds.
    pub fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn load(&self) -> Result<Option<Credentials>> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.get()).await?
    }
}
