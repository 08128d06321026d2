//
//  reporte-client
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Interactive Prompts
//!
//! Thin wrappers over `dialoguer` for the few places where the CLI asks
//! for input: login credentials and destructive confirmations.
//!
//! All functions block until the user answers and return `Err` when the
//! terminal interaction fails (for example when stdin is not a TTY).

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};

/// Prompts for a non-empty line of text.
///
/// # Example
///
/// ```no_run
/// use reporte_client::interactive::prompt_input;
///
/// let email = prompt_input("Email:").unwrap();
/// ```
pub fn prompt_input(message: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(message).interact_text()?;
    Ok(input)
}

/// Prompts for a password without echoing it.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

/// Prompts for a new password twice, re-asking until both entries match.
pub fn prompt_password_confirm(message: &str) -> Result<String> {
    let password = Password::new()
        .with_prompt(message)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;
    Ok(password)
}

/// Yes/no question; Enter picks `default`.
pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}
