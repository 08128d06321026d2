//
//  reporte-client
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! The backend keeps its own session; locally only the credential record
//! (user id, email, login time) is stored in the system keyring, keyed by
//! the API base URL. Ownership-checked commands read that record.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Args, Subcommand};

use crate::api::{login_user_id, ApiError, LoginRequest};
use crate::auth::Credentials;
use crate::interactive::{can_prompt, prompt_input, prompt_password};
use crate::output::print_field;
use crate::util::format_relative_time;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in with email and password
    Login(LoginArgs),

    /// Log out and forget the stored credential
    Logout,

    /// Show who is logged in
    Status,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email; prompted for when omitted
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Read the password from the first line of stdin
    #[arg(long)]
    pub password_stdin: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global).await,
            AuthSubcommand::Status => status(global).await,
        }
    }
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let ctx = global.context()?;
    let client = ctx.client()?;
    let out = global.output();

    let email = match &args.email {
        Some(email) => email.clone(),
        None if can_prompt() => prompt_input("Email")?,
        None => bail!("--email is required when not running interactively"),
    };

    let password = if args.password_stdin {
        read_password_from_stdin()?
    } else if can_prompt() {
        prompt_password("Password")?
    } else {
        bail!("Use --password-stdin when not running interactively");
    };

    let envelope = client
        .login(&LoginRequest::new(email.clone(), password))
        .await?;

    let user_id = login_user_id(&envelope)
        .ok_or_else(|| ApiError::DomainValidation("Login response did not include a user id".into()))?;

    ctx.credentials
        .save(&Credentials::new(user_id).with_email(email.clone()).stamped())?;

    if global.json {
        out.write_value(&envelope)?;
    } else {
        out.write_success(&format!(
            "Logged in to {} as {} (user {})",
            ctx.base_url, email, user_id
        ));
    }
    Ok(())
}

fn read_password_from_stdin() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("No password given on stdin");
    }
    Ok(password)
}

async fn logout(global: &GlobalOptions) -> Result<()> {
    let ctx = global.context()?;
    let client = ctx.client()?;
    let out = global.output();

    // The local record goes even when the server cannot be told.
    let remote = client.logout().await;
    ctx.credentials.clear()?;

    match remote {
        Ok(envelope) if global.json => out.write_value(&envelope)?,
        Ok(_) => out.write_success(&format!("Logged out of {}", ctx.base_url)),
        Err(e) => out.write_warning(&format!(
            "Removed local credentials, but the server logout failed: {}",
            e
        )),
    }
    Ok(())
}

async fn status(global: &GlobalOptions) -> Result<()> {
    let ctx = global.context()?;
    let out = global.output();

    let Some(credentials) = ctx.credentials.get()? else {
        return Err(ApiError::not_authenticated())
            .with_context(|| format!("Not logged in to {}. Run 'reporte auth login' first.", ctx.base_url));
    };

    if global.json {
        out.write_value(&serde_json::json!({
            "base_url": ctx.base_url,
            "user_id": credentials.user_id,
            "email": credentials.email,
            "logged_in_at": credentials.logged_in_at,
        }))?;
        return Ok(());
    }

    let color = console::colors_enabled();
    print_field("Server", &ctx.base_url, color);
    print_field("User ID", &credentials.user_id.to_string(), color);
    print_field("Email", credentials.email.as_deref().unwrap_or_default(), color);
    if let Some(at) = credentials.logged_in_at {
        print_field(
            "Logged in",
            &format!("{} ({})", at.to_rfc3339(), format_relative_time(at, Utc::now())),
            color,
        );
    }
    Ok(())
}
