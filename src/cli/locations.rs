//
//  reporte-client
//  cli/locations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Location commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::{LocationSearch, NearbyQuery, NewLocation};

use super::{confirm_delete, BodyArgs, GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct LocationsCommand {
    #[command(subcommand)]
    pub command: LocationsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LocationsSubcommand {
    /// List locations
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Show one location
    View { id: i64 },

    /// Register a location
    Create(Coordinates),

    /// Update fields of a location
    Update {
        id: i64,

        #[command(flatten)]
        body: BodyArgs,
    },

    /// Delete a location
    Delete {
        id: i64,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Locations around a point
    Nearby {
        #[command(flatten)]
        at: Coordinates,

        /// Search radius
        #[arg(long)]
        radius: Option<f64>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Locations that have reports attached
    #[command(name = "with-reports")]
    WithReports(PageArgs),

    /// Aggregate location statistics
    Stats,

    /// Search locations, optionally around a point
    Search {
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<f64>,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct Coordinates {
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub longitude: f64,
}

impl LocationsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let out = global.output();

        let result = match &self.command {
            LocationsSubcommand::List(page) => client.list_locations((*page).into()).await?,
            LocationsSubcommand::View { id } => client.get_location(*id).await?,
            LocationsSubcommand::Create(at) => {
                let location = NewLocation {
                    latitude: at.latitude,
                    longitude: at.longitude,
                };
                client.create_location(&location).await?
            }
            LocationsSubcommand::Update { id, body } => {
                client.update_location(*id, &body.require()?).await?
            }
            LocationsSubcommand::Delete { id, yes } => {
                if !confirm_delete(&format!("location {}", id), *yes)? {
                    return Ok(());
                }
                client.delete_location(*id).await?
            }
            LocationsSubcommand::Nearby { at, radius, limit } => {
                let query = NearbyQuery {
                    latitude: at.latitude,
                    longitude: at.longitude,
                    radius: *radius,
                    limit: *limit,
                };
                client.nearby_locations(query).await?
            }
            LocationsSubcommand::WithReports(page) => {
                client.locations_with_reports((*page).into()).await?
            }
            LocationsSubcommand::Stats => client.location_stats().await?,
            LocationsSubcommand::Search {
                latitude,
                longitude,
                page,
            } => {
                let search = LocationSearch {
                    latitude: *latitude,
                    longitude: *longitude,
                    page: (*page).into(),
                };
                client.search_locations(search).await?
            }
        };

        out.write_value(&result)
    }
}
