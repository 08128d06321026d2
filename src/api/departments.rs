//
//  reporte-client
//  api/departments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Government departments that handle reports, keyed by name.
//!
//! Department names are free text and are percent-encoded in paths.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{encode_segment, ApiResult};
use super::reports::AdminAction;
use super::ReporteClient;

/// Body of `POST /departments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepartment {
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<i64>,
}

fn department_path(name: &str) -> String {
    format!("/departments/{}", encode_segment(name))
}

impl ReporteClient {
    pub async fn list_departments(&self) -> ApiResult<Value> {
        self.get("/departments").await
    }

    pub async fn get_department(&self, name: &str) -> ApiResult<Value> {
        self.get(&department_path(name)).await
    }

    pub async fn create_department(&self, department: &NewDepartment) -> ApiResult<Value> {
        self.post("/departments", department).await
    }

    pub async fn update_department(&self, name: &str, data: &Value) -> ApiResult<Value> {
        self.put(&department_path(name), data).await
    }

    pub async fn delete_department(&self, name: &str) -> ApiResult<Value> {
        self.delete(&department_path(name)).await
    }

    pub async fn department_admin(&self, name: &str) -> ApiResult<Value> {
        self.get(&format!("{}/admin", department_path(name))).await
    }

    pub async fn assign_department_admin(&self, name: &str, admin_id: i64) -> ApiResult<Value> {
        self.post(
            &format!("{}/admin", department_path(name)),
            &AdminAction { admin_id },
        )
        .await
    }

    pub async fn remove_department_admin(&self, name: &str) -> ApiResult<Value> {
        self.delete(&format!("{}/admin", department_path(name)))
            .await
    }

    pub async fn departments_with_admin_info(&self) -> ApiResult<Value> {
        self.get("/departments/with-admin-info").await
    }

    pub async fn departments_by_admin(&self, admin_id: i64) -> ApiResult<Value> {
        self.get(&format!("/departments/admin/{admin_id}")).await
    }

    /// Departments that have no administrator yet.
    pub async fn available_departments(&self) -> ApiResult<Value> {
        self.get("/departments/available").await
    }

    pub async fn department_detailed_stats(&self, name: &str) -> ApiResult<Value> {
        self.get(&format!("{}/department-stats", department_path(name)))
            .await
    }

    pub async fn all_department_stats(&self) -> ApiResult<Value> {
        self.get("/departments/stats/all").await
    }

    pub async fn check_admin_assignment(&self, admin_id: i64, name: &str) -> ApiResult<Value> {
        self.get(&format!(
            "/departments/check-assignment/{admin_id}/{}",
            encode_segment(name)
        ))
        .await
    }
}
