//
//  reporte-client
//  cli/departments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Department commands. Departments are addressed by name.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::NewDepartment;

use super::{confirm_delete, BodyArgs, GlobalOptions};

#[derive(Args, Debug)]
pub struct DepartmentsCommand {
    #[command(subcommand)]
    pub command: DepartmentsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DepartmentsSubcommand {
    /// List departments
    #[command(visible_alias = "ls")]
    List {
        /// Include the assigned administrator of each department
        #[arg(long)]
        with_admins: bool,
    },

    /// Show one department
    View { name: String },

    /// Create a department
    Create {
        name: String,

        #[arg(long)]
        admin_id: Option<i64>,
    },

    /// Update fields of a department
    Update {
        name: String,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// Delete a department
    Delete {
        name: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show, assign or remove the department administrator
    Admin {
        name: String,

        /// Assign this administrator
        #[arg(long, conflicts_with = "remove")]
        assign: Option<i64>,

        /// Remove the current administrator
        #[arg(long)]
        remove: bool,
    },

    /// Departments managed by an administrator
    #[command(name = "by-admin")]
    ByAdmin { admin_id: i64 },

    /// Departments without an administrator
    Available,

    /// Detailed statistics for one department, or all when omitted
    Stats { name: Option<String> },

    /// Whether an administrator is assigned to a department
    Check {
        name: String,

        #[arg(long)]
        admin_id: i64,
    },
}

impl DepartmentsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();

        let result = match &self.command {
            DepartmentsSubcommand::List { with_admins: true } => {
                client.departments_with_admin_info().await?
            }
            DepartmentsSubcommand::List { with_admins: false } => client.list_departments().await?,
            DepartmentsSubcommand::View { name } => client.get_department(name).await?,
            DepartmentsSubcommand::Create { name, admin_id } => {
                let department = NewDepartment {
                    department: name.clone(),
                    admin_id: *admin_id,
                };
                client.create_department(&department).await?
            }
            DepartmentsSubcommand::Update { name, body } => {
                client.update_department(name, &body.require()?).await?
            }
            DepartmentsSubcommand::Delete { name, yes } => {
                if !confirm_delete(&format!("department {}", name), *yes)? {
                    return Ok(());
                }
                client.delete_department(name).await?
            }
            DepartmentsSubcommand::Admin {
                name,
                assign: Some(admin_id),
                ..
            } => client.assign_department_admin(name, *admin_id).await?,
            DepartmentsSubcommand::Admin {
                name, remove: true, ..
            } => client.remove_department_admin(name).await?,
            DepartmentsSubcommand::Admin { name, .. } => client.department_admin(name).await?,
            DepartmentsSubcommand::ByAdmin { admin_id } => {
                client.departments_by_admin(*admin_id).await?
            }
            DepartmentsSubcommand::Available => client.available_departments().await?,
            DepartmentsSubcommand::Stats { name: Some(name) } => {
                client.department_detailed_stats(name).await?
            }
            DepartmentsSubcommand::Stats { name: None } => client.all_department_stats().await?,
            DepartmentsSubcommand::Check { name, admin_id } => {
                client.check_admin_assignment(*admin_id, name).await?
            }
        };

        out.write_value(&result)
    }
}
