//
//  reporte-client
//  cli/stats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Statistics commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct StatsCommand {
    #[command(subcommand)]
    pub command: StatsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StatsSubcommand {
    /// System-wide overview, optionally for one department
    Overview {
        #[arg(long, short = 'd')]
        department: Option<String>,
    },

    /// Statistics for a user (default: the logged-in user)
    User { user_id: Option<i64> },

    /// Statistics for one administrator, or all when omitted
    Admin { admin_id: Option<i64> },
}

impl StatsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();

        let result = match &self.command {
            StatsSubcommand::Overview { department: None } => client.overview_stats().await?,
            StatsSubcommand::Overview {
                department: Some(department),
            } => client.department_overview_stats(department).await?,
            StatsSubcommand::User { user_id } => {
                let user_id = match user_id {
                    Some(id) => *id,
                    None => client.current_user().await?.user_id,
                };
                client.user_stats(user_id).await?
            }
            StatsSubcommand::Admin { admin_id: Some(id) } => client.admin_stats(*id).await?,
            StatsSubcommand::Admin { admin_id: None } => client.all_admin_stats().await?,
        };

        out.write_value(&result)
    }
}
