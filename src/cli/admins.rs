//
//  reporte-client
//  cli/admins.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Administrator commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::NewAdministrator;

use super::{confirm_delete, BodyArgs, GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct AdminsCommand {
    #[command(subcommand)]
    pub command: AdminsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AdminsSubcommand {
    /// List administrators
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Show one administrator
    View {
        id: i64,

        /// Include user and department details
        #[arg(long)]
        details: bool,
    },

    /// Make a user administrator of a department
    Create {
        #[arg(long)]
        user_id: i64,

        #[arg(long, short = 'd')]
        department: String,
    },

    /// Update fields of an administrator
    Update {
        id: i64,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// Remove an administrator
    Delete {
        id: i64,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Administrators of a department
    Department { name: String },

    /// Administrators without a department
    Available,

    /// Whether a user is an administrator
    Check { user_id: i64 },

    /// Performance figures over the last N days
    Performance {
        #[arg(long)]
        days: Option<u32>,
    },
}

impl AdminsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();

        let result = match &self.command {
            AdminsSubcommand::List(page) => client.list_administrators((*page).into()).await?,
            AdminsSubcommand::View { id, details: true } => {
                client.administrator_with_details(*id).await?
            }
            AdminsSubcommand::View { id, details: false } => client.get_administrator(*id).await?,
            AdminsSubcommand::Create {
                user_id,
                department,
            } => {
                let admin = NewAdministrator {
                    user_id: *user_id,
                    department: department.clone(),
                };
                client.create_administrator(&admin).await?
            }
            AdminsSubcommand::Update { id, body } => {
                client.update_administrator(*id, &body.require()?).await?
            }
            AdminsSubcommand::Delete { id, yes } => {
                if !confirm_delete(&format!("administrator {}", id), *yes)? {
                    return Ok(());
                }
                client.delete_administrator(*id).await?
            }
            AdminsSubcommand::Department { name } => {
                client.administrators_by_department(name).await?
            }
            AdminsSubcommand::Available => client.available_administrators().await?,
            AdminsSubcommand::Check { user_id } => client.check_is_administrator(*user_id).await?,
            AdminsSubcommand::Performance { days } => {
                client.administrator_performance(*days).await?
            }
        };

        out.write_value(&result)
    }
}
