//
//  reporte-client
//  cli/reports.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Citizen report commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::{Map, Value};

use crate::api::{ReportFilter, ReportFormData};
use crate::util::fields_to_body;

use super::{confirm_delete, BodyArgs, GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct ReportsCommand {
    #[command(subcommand)]
    pub command: ReportsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReportsSubcommand {
    /// List reports
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Show one report
    View { id: i64 },

    /// File a report as the logged-in user
    Create(CreateArgs),

    /// Update fields of a report
    Update {
        id: i64,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// Delete a report
    Delete {
        id: i64,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Mark a report as validated by an administrator
    Validate(AdminArgs),

    /// Mark a report as resolved by an administrator
    Resolve(AdminArgs),

    /// Rate a report
    Rate {
        id: i64,

        #[arg(value_parser = clap::value_parser!(i64).range(1..=5))]
        rating: i64,
    },

    /// Full-text search
    Search {
        query: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Filter by status and/or category
    Filter {
        #[arg(long, short = 's')]
        status: Option<String>,

        #[arg(long, short = 'c')]
        category: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Reports filed by a user (default: the logged-in user)
    User {
        user_id: Option<i64>,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, short = 't')]
    pub title: String,

    #[arg(long, short = 'd')]
    pub description: String,

    #[arg(long, short = 'c')]
    pub category: String,

    #[arg(long)]
    pub location_id: Option<i64>,

    #[arg(long)]
    pub image_url: Option<String>,

    /// Extra field as key=value, sent alongside the form
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,
}

impl CreateArgs {
    fn form(&self) -> Result<ReportFormData> {
        let extra = match fields_to_body(&self.field)? {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Ok(ReportFormData {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            location_id: self.location_id,
            image_url: self.image_url.clone(),
            extra,
        })
    }
}

#[derive(Args, Debug)]
pub struct AdminArgs {
    pub id: i64,

    /// Administrator performing the action
    #[arg(long)]
    pub admin_id: i64,
}

impl ReportsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();

        let result = match &self.command {
            ReportsSubcommand::List(page) => client.list_reports((*page).into()).await?,
            ReportsSubcommand::View { id } => client.get_report(*id).await?,
            ReportsSubcommand::Create(args) => client.create_report(&args.form()?).await?,
            ReportsSubcommand::Update { id, body } => {
                client.update_report(*id, &body.require()?).await?
            }
            ReportsSubcommand::Delete { id, yes } => {
                if !confirm_delete(&format!("report {}", id), *yes)? {
                    return Ok(());
                }
                client.delete_report(*id).await?
            }
            ReportsSubcommand::Validate(args) => {
                client.validate_report(args.id, args.admin_id).await?
            }
            ReportsSubcommand::Resolve(args) => client.resolve_report(args.id, args.admin_id).await?,
            ReportsSubcommand::Rate { id, rating } => client.rate_report(*id, *rating).await?,
            ReportsSubcommand::Search { query, page } => {
                client.search_reports(query, (*page).into()).await?
            }
            ReportsSubcommand::Filter {
                status,
                category,
                page,
            } => {
                let filter = ReportFilter {
                    status: status.clone(),
                    category: category.clone(),
                };
                client.filter_reports(&filter, (*page).into()).await?
            }
            ReportsSubcommand::User { user_id, page } => {
                let user_id = match user_id {
                    Some(id) => *id,
                    None => client.current_user().await?.user_id,
                };
                client.user_reports(user_id, (*page).into()).await?
            }
        };

        out.write_value(&result)
    }
}
