//
//  reporte-client
//  context/resolver.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Context resolution from configuration and global options.

use std::sync::Arc;

use tracing::debug;

use crate::auth::KeyringCredentialStore;
use crate::cli::GlobalOptions;
use crate::config::Config;

use super::ApiContext;

/// Combines the loaded [`Config`] with command-line options.
pub struct ContextResolver {
    config: Config,
}

impl ContextResolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the config file and resolves against `options`.
    pub fn load(options: &GlobalOptions) -> anyhow::Result<ApiContext> {
        Ok(Self::new(Config::load()?).resolve(options))
    }

    /// Applies `options` on top of the config and picks the base URL.
    ///
    /// No keyring or network access happens here.
    pub fn resolve(&self, options: &GlobalOptions) -> ApiContext {
        let mut config = self.config.clone();
        if let Some(environment) = options.env {
            config.api.environment = environment;
        }
        if let Some(platform) = options.platform {
            config.api.platform = platform;
        }

        let base_url = config.api.resolve_base_url(options.api_url.as_deref());
        debug!(%base_url, environment = %config.api.environment, "resolved API context");

        ApiContext {
            credentials: Arc::new(KeyringCredentialStore::new(&base_url)),
            base_url,
            config,
        }
    }
}
