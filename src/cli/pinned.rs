//
//  reporte-client
//  cli/pinned.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pinned report commands.
//!
//! Every command acts for the logged-in user. `--user-id` may be given
//! explicitly but must match the stored credential.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::{PinRequest, ReporteClient};

use super::{GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct PinnedCommand {
    #[command(subcommand)]
    pub command: PinnedSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PinnedSubcommand {
    /// List pinned reports
    #[command(visible_alias = "ls")]
    List {
        #[arg(long)]
        user_id: Option<i64>,

        /// Use the per-user listing endpoint
        #[arg(long)]
        by_user: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Pin a report
    Add(PinArgs),

    /// Unpin a report
    Remove(PinArgs),

    /// Whether a report is pinned
    Status(PinArgs),

    /// Show a pinned report with its details
    View(PinArgs),
}

#[derive(Args, Debug)]
pub struct PinArgs {
    pub report_id: i64,

    #[arg(long)]
    pub user_id: Option<i64>,
}

impl PinArgs {
    async fn user_id(&self, client: &ReporteClient) -> Result<i64> {
        resolve_user(client, self.user_id).await
    }
}

/// The given id, or the logged-in user's when omitted.
async fn resolve_user(client: &ReporteClient, user_id: Option<i64>) -> Result<i64> {
    Ok(match user_id {
        Some(id) => id,
        None => client.current_user().await?.user_id,
    })
}

impl PinnedCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();

        let result = match &self.command {
            PinnedSubcommand::List {
                user_id,
                by_user: true,
                page,
            } => {
                let user_id = resolve_user(&client, *user_id).await?;
                client.user_pinned_reports(user_id, (*page).into()).await?
            }
            PinnedSubcommand::List { user_id, page, .. } => {
                client.pinned_reports(*user_id, (*page).into()).await?
            }
            PinnedSubcommand::Add(args) => {
                let request = PinRequest {
                    user_id: args.user_id(&client).await?,
                    report_id: args.report_id,
                };
                client.pin_report(&request).await?
            }
            PinnedSubcommand::Remove(args) => {
                client
                    .unpin_report(args.user_id(&client).await?, args.report_id)
                    .await?
            }
            PinnedSubcommand::Status(args) => {
                client
                    .pinned_status(args.user_id(&client).await?, args.report_id)
                    .await?
            }
            PinnedSubcommand::View(args) => {
                client
                    .pinned_report_detail(args.user_id(&client).await?, args.report_id)
                    .await?
            }
        };

        out.write_value(&result)
    }
}
