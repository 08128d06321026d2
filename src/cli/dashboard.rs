//
//  reporte-client
//  cli/dashboard.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Administrator dashboard commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct DashboardCommand {
    #[command(subcommand)]
    pub command: Option<DashboardSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum DashboardSubcommand {
    /// Dashboard summary (the default)
    Summary,

    /// Reports waiting for validation
    Pending(PageArgs),

    /// Reports assigned to an administrator
    Assigned {
        admin_id: i64,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Service health as reported by the server
    Health,
}

impl DashboardCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();

        let result = match &self.command {
            None | Some(DashboardSubcommand::Summary) => client.admin_dashboard().await?,
            Some(DashboardSubcommand::Pending(page)) => {
                client.pending_reports((*page).into()).await?
            }
            Some(DashboardSubcommand::Assigned { admin_id, page }) => {
                client.assigned_reports(*admin_id, (*page).into()).await?
            }
            Some(DashboardSubcommand::Health) => client.system_health().await?,
        };

        out.write_value(&result)
    }
}
