//
//  reporte-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reporte_client::cli::{Cli, Commands};
use reporte_client::exit_codes;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments; clap exits with USAGE on bad input
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("REPORTE_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Users(cmd) => cmd.run(&cli.global).await,
        Commands::Reports(cmd) => cmd.run(&cli.global).await,
        Commands::Locations(cmd) => cmd.run(&cli.global).await,
        Commands::Admins(cmd) => cmd.run(&cli.global).await,
        Commands::Departments(cmd) => cmd.run(&cli.global).await,
        Commands::Pinned(cmd) => cmd.run(&cli.global).await,
        Commands::Stats(cmd) => cmd.run(&cli.global).await,
        Commands::Dashboard(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Ping(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("reporte version {}", reporte_client::VERSION);
            Ok(())
        }
    }
}
