//
//  reporte-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod admins;
mod api;
mod auth;
mod completion;
mod config;
mod dashboard;
mod departments;
mod locations;
mod pinned;
mod ping;
mod reports;
mod stats;
mod users;

pub use admins::AdminsCommand;
pub use api::ApiCommand;
pub use auth::AuthCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use dashboard::DashboardCommand;
pub use departments::DepartmentsCommand;
pub use locations::LocationsCommand;
pub use pinned::PinnedCommand;
pub use ping::PingCommand;
pub use reports::ReportsCommand;
pub use stats::StatsCommand;
pub use users::UsersCommand;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::api::{Page, ReporteClient};
use crate::config::{Environment, Platform};
use crate::context::{ApiContext, ContextResolver};
use crate::interactive::{can_prompt, prompt_confirm_with_default};
use crate::output::OutputWriter;

#[derive(Parser, Debug)]
#[command(
    name = "reporte",
    version,
    about = "Work with the Reporte Ciudadano API from the command line",
    long_about = "reporte is a client for the Reporte Ciudadano civic-reporting service.\n\n\
                  It manages users, reports, locations, departments and administrators, \
                  and exposes the dashboard statistics.",
    propagate_version = true,
    after_help = "Use 'reporte <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Base URL of the API; wins over the config file
    #[arg(long, global = true, env = "REPORTE_API_URL")]
    pub api_url: Option<String>,

    /// Deployment environment used to pick the base URL
    #[arg(long, global = true, value_enum)]
    pub env: Option<Environment>,

    /// Client platform used to pick the development base URL
    #[arg(long, global = true, value_enum)]
    pub platform: Option<Platform>,

    /// Print the raw JSON envelope instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Loads the config and resolves the target server.
    pub fn context(&self) -> Result<ApiContext> {
        ContextResolver::load(self)
    }

    /// Shorthand for a client on the resolved context.
    pub fn client(&self) -> Result<ReporteClient> {
        self.context()?.client()
    }

    pub fn output(&self) -> OutputWriter {
        OutputWriter::from_flag(self.json)
    }
}

/// `--page` / `--limit` flags shared by list commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub limit: Option<u32>,
}

impl From<PageArgs> for Page {
    fn from(args: PageArgs) -> Self {
        Page::from_parts(args.page, args.limit)
    }
}

/// Body input shared by create/update commands.
///
/// `--input` takes a JSON file (or `-` for stdin); `-F key=value` builds an
/// object field by field.
#[derive(Args, Debug, Clone, Default)]
pub struct BodyArgs {
    /// Body field as key=value; dotted keys nest
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Read the JSON body from a file, or '-' for stdin
    #[arg(long, conflicts_with = "field")]
    pub input: Option<String>,
}

impl BodyArgs {
    /// The body as JSON, failing when neither source is given.
    pub fn require(&self) -> Result<serde_json::Value> {
        crate::util::body_from_args(self.input.as_deref(), &self.field)?
            .ok_or_else(|| anyhow::anyhow!("No body given. Use -F key=value or --input <file>"))
    }
}

/// Asks before deleting unless `yes` is set; non-interactive runs need `--yes`.
fn confirm_delete(what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !can_prompt() {
        anyhow::bail!(
            "Refusing to delete {} without --yes when not running interactively",
            what
        );
    }
    prompt_confirm_with_default(&format!("Delete {}?", what), false)
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in, log out and show the stored session
    Auth(AuthCommand),

    /// Manage user accounts
    #[command(visible_alias = "u")]
    Users(UsersCommand),

    /// Create, browse and act on citizen reports
    #[command(visible_alias = "r")]
    Reports(ReportsCommand),

    /// Manage report locations
    #[command(visible_alias = "loc")]
    Locations(LocationsCommand),

    /// Manage department administrators
    Admins(AdminsCommand),

    /// Manage departments and their administrators
    #[command(visible_alias = "dept")]
    Departments(DepartmentsCommand),

    /// Pin and unpin reports for the signed-in user
    Pinned(PinnedCommand),

    /// Overview, user and administrator statistics
    Stats(StatsCommand),

    /// Administrator dashboard and report queues
    Dashboard(DashboardCommand),

    /// Send a request to any endpoint
    Api(ApiCommand),

    /// Check that the server is reachable
    Ping(PingCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Generate shell completions
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "reporte",
            "users",
            "list",
            "--env",
            "dev",
            "--platform",
            "ios",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.global.env, Some(Environment::Development));
        assert_eq!(cli.global.platform, Some(Platform::Ios));
        assert!(cli.global.json);
    }

    #[test]
    fn test_login_only_under_auth() {
        let cli = Cli::try_parse_from(["reporte", "auth", "login", "-e", "ana@upr.edu"]).unwrap();
        assert!(matches!(cli.command, Commands::Auth(_)));

        assert!(Cli::try_parse_from(["reporte", "login"]).is_err());
        assert!(Cli::try_parse_from(["reporte", "login", "login"]).is_err());
    }

    #[test]
    fn test_page_args_into_page() {
        let page: Page = PageArgs {
            page: Some(2),
            limit: None,
        }
        .into();
        assert_eq!(page, Page::from_parts(Some(2), None));
    }

    #[test]
    fn test_body_args_require() {
        let args = BodyArgs {
            field: vec!["status=resolved".into()],
            input: None,
        };
        assert_eq!(args.require().unwrap(), serde_json::json!({"status": "resolved"}));
        assert!(BodyArgs::default().require().is_err());
    }
}
