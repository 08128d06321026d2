//
//  reporte-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends one request through the same dispatcher the typed commands use,
//! so status classification and connection errors behave identically.
//! Useful for endpoints without a dedicated command and for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Fetch the second page of reports
//! reporte api '/reports?page=2&limit=10'
//!
//! # Rate a report
//! reporte api -X POST /reports/12/rate -F rating=5
//!
//! # Send a body from a file
//! reporte api -X PUT /users/3 --input user.json
//! ```

use anyhow::{bail, Result};
use clap::Args;
use reqwest::Method;

use crate::api::client::to_json_body;
use crate::util::body_from_args;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Endpoint path, e.g. /reports/12
    pub endpoint: String,

    /// HTTP method
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Body field as key=value; dotted keys nest
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Read the JSON body from a file, or '-' for stdin
    #[arg(long, conflicts_with = "field")]
    pub input: Option<String>,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let method = parse_method(&self.method)?;

        let body = body_from_args(self.input.as_deref(), &self.field)?
            .map(|value| to_json_body(&value))
            .transpose()?;

        let result = client.request(method, &self.endpoint, body).await?;
        global.output().write_value(&result)
    }
}

fn parse_method(method: &str) -> Result<Method> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        _ => bail!("Unsupported HTTP method: {}", method),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("get").unwrap(), Method::GET);
        assert_eq!(parse_method("Delete").unwrap(), Method::DELETE);
        assert!(parse_method("TRACE").is_err());
    }
}
