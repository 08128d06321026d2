//
//  reporte-client
//  context/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Context Module
//!
//! Resolves, once per invocation, which Reporte server a command talks to
//! and where the signed-in user's credential record lives.
//!
//! Inputs, highest precedence first:
//!
//! 1. `--api-url` / `REPORTE_API_URL`
//! 2. `api.base_url` from the config file
//! 3. the environment/platform table, where `--env` and `--platform`
//!    override the config file's values
//!
//! ## Example
//!
//! ```rust,no_run
//! use reporte_client::cli::GlobalOptions;
//! use reporte_client::config::Config;
//! use reporte_client::context::ContextResolver;
//!
//! let ctx = ContextResolver::new(Config::default()).resolve(&GlobalOptions::default());
//! println!("Talking to {}", ctx.base_url);
//! ```

mod resolver;

pub use resolver::*;

use std::sync::Arc;

use anyhow::Result;

use crate::api::ReporteClient;
use crate::auth::KeyringCredentialStore;
use crate::config::Config;

/// The resolved target of a command.
#[derive(Debug, Clone)]
pub struct ApiContext {
    /// Normalized base URL without a trailing slash.
    pub base_url: String,

    /// Effective configuration after command-line overrides.
    pub config: Config,

    /// Keyring entry for `base_url`.
    pub credentials: Arc<KeyringCredentialStore>,
}

impl ApiContext {
    /// Builds a client for this context, wired to the keyring store.
    pub fn client(&self) -> Result<ReporteClient> {
        let client = ReporteClient::from_config(&self.config.api, Some(&self.base_url))?
            .with_credentials(self.credentials.clone());
        Ok(client)
    }
}
