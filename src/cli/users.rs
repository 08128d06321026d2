//
//  reporte-client
//  cli/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User account commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};

use crate::api::{NewUser, UserAction};
use crate::interactive::{can_prompt, prompt_password_confirm};

use super::{confirm_delete, BodyArgs, GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// List users
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Show one user
    View { id: i64 },

    /// Create a user account
    Create(CreateArgs),

    /// Update fields of a user
    Update {
        id: i64,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// Delete a user
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Suspend, unsuspend, pin or unpin a user
    Action { id: i64, action: ActionArg },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, short = 'e')]
    pub email: String,

    /// Password; prompted for when omitted
    #[arg(long)]
    pub password: Option<String>,

    /// Create the account with administrator rights
    #[arg(long)]
    pub admin: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ActionArg {
    Suspend,
    Unsuspend,
    Pin,
    Unpin,
}

impl From<ActionArg> for UserAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Suspend => UserAction::Suspend,
            ActionArg::Unsuspend => UserAction::Unsuspend,
            ActionArg::Pin => UserAction::Pin,
            ActionArg::Unpin => UserAction::Unpin,
        }
    }
}

impl UsersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();

        let result = match &self.command {
            UsersSubcommand::List(page) => client.list_users((*page).into()).await?,
            UsersSubcommand::View { id } => client.get_user(*id).await?,
            UsersSubcommand::Create(args) => {
                let password = match &args.password {
                    Some(p) => p.clone(),
                    None if can_prompt() => prompt_password_confirm("Password")?,
                    None => bail!("--password is required when not running interactively"),
                };
                let user = NewUser {
                    email: args.email.clone(),
                    password,
                    admin: args.admin,
                };
                client.create_user(&user).await?
            }
            UsersSubcommand::Update { id, body } => client.update_user(*id, &body.require()?).await?,
            UsersSubcommand::Delete { id, yes } => {
                if !confirm_delete(&format!("user {}", id), *yes)? {
                    return Ok(());
                }
                client.delete_user(*id).await?
            }
            UsersSubcommand::Action { id, action } => {
                client.user_action(*id, (*action).into()).await?
            }
        };

        out.write_value(&result)
    }
}
