//
//  reporte-client
//  cli/ping.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connectivity check

use anyhow::Result;
use clap::Args;

use crate::api::ApiError;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct PingCommand {}

impl PingCommand {
    /// Succeeds when the server answers at all, whatever the status.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();
        let url = client.base_url().to_string();

        let reachable = client.test_connection().await;

        if global.json {
            out.write_value(&serde_json::json!({
                "base_url": url,
                "reachable": reachable,
            }))?;
        } else if reachable {
            out.write_success(&format!("{} is reachable", url));
        }

        if reachable {
            Ok(())
        } else {
            Err(ApiError::ConnectionUnreachable { url }.into())
        }
    }
}
