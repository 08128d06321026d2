//
//  reporte-client
//  api/locations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Geographic locations that reports are attached to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ApiResult, Page, Query};
use super::ReporteClient;

/// Body of `POST /locations`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Parameters of `GET /locations/nearby`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius; server default when absent.
    pub radius: Option<f64>,
    pub limit: Option<u32>,
}

/// Parameters of `GET /locations/search`. Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocationSearch {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub page: Page,
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

impl NearbyQuery {
    fn to_query(self) -> Query {
        Query::new()
            .push("latitude", self.latitude)
            .push("longitude", self.longitude)
            .push_opt("radius", nonzero(self.radius))
            .push_nonzero("limit", self.limit)
    }
}

impl LocationSearch {
    fn to_query(self) -> Query {
        Query::new()
            .push_opt("latitude", nonzero(self.latitude))
            .push_opt("longitude", nonzero(self.longitude))
            .page(self.page)
    }
}

impl ReporteClient {
    pub async fn list_locations(&self, page: Page) -> ApiResult<Value> {
        self.get(&Query::new().page(page).apply("/locations")).await
    }

    pub async fn get_location(&self, id: i64) -> ApiResult<Value> {
        self.get(&format!("/locations/{id}")).await
    }

    pub async fn create_location(&self, location: &NewLocation) -> ApiResult<Value> {
        self.post("/locations", location).await
    }

    pub async fn update_location(&self, id: i64, data: &Value) -> ApiResult<Value> {
        self.put(&format!("/locations/{id}"), data).await
    }

    pub async fn delete_location(&self, id: i64) -> ApiResult<Value> {
        self.delete(&format!("/locations/{id}")).await
    }

    pub async fn nearby_locations(&self, query: NearbyQuery) -> ApiResult<Value> {
        self.get(&query.to_query().apply("/locations/nearby")).await
    }

    pub async fn locations_with_reports(&self, page: Page) -> ApiResult<Value> {
        self.get(&Query::new().page(page).apply("/locations/with-reports"))
            .await
    }

    pub async fn location_stats(&self) -> ApiResult<Value> {
        self.get("/locations/stats").await
    }

    pub async fn search_locations(&self, search: LocationSearch) -> ApiResult<Value> {
        self.get(&search.to_query().apply("/locations/search")).await
    }
}
