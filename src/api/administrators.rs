//
//  reporte-client
//  api/administrators.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Administrator accounts and their department assignment.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{encode_segment, ApiResult, Page, Query};
use super::ReporteClient;

/// Body of `POST /administrators`: promotes an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdministrator {
    pub user_id: i64,
    pub department: String,
}

impl ReporteClient {
    pub async fn list_administrators(&self, page: Page) -> ApiResult<Value> {
        self.get(&Query::new().page(page).apply("/administrators"))
            .await
    }

    pub async fn get_administrator(&self, id: i64) -> ApiResult<Value> {
        self.get(&format!("/administrators/{id}")).await
    }

    pub async fn create_administrator(&self, admin: &NewAdministrator) -> ApiResult<Value> {
        self.post("/administrators", admin).await
    }

    pub async fn update_administrator(&self, id: i64, data: &Value) -> ApiResult<Value> {
        self.put(&format!("/administrators/{id}"), data).await
    }

    pub async fn delete_administrator(&self, id: i64) -> ApiResult<Value> {
        self.delete(&format!("/administrators/{id}")).await
    }

    pub async fn administrators_by_department(&self, department: &str) -> ApiResult<Value> {
        self.get(&format!(
            "/administrators/department/{}",
            encode_segment(department)
        ))
        .await
    }

    pub async fn administrator_with_details(&self, id: i64) -> ApiResult<Value> {
        self.get(&format!("/administrators/{id}/details")).await
    }

    /// Administrators without a department.
    pub async fn available_administrators(&self) -> ApiResult<Value> {
        self.get("/administrators/available").await
    }

    pub async fn check_is_administrator(&self, user_id: i64) -> ApiResult<Value> {
        self.get(&format!("/administrators/check/{user_id}")).await
    }

    /// Performance over the last `days` days; server default when `None`.
    pub async fn administrator_performance(&self, days: Option<u32>) -> ApiResult<Value> {
        let path = Query::new()
            .push_nonzero("days", days)
            .apply("/administrators/performance");
        self.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_for;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_administrator() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/administrators")
            .match_body(Matcher::Exact(r#"{"user_id":6,"department":"DTOP"}"#.into()))
            .with_status(201)
            .with_body(r#"{"admin_id": 6, "department": "DTOP"}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        let admin = NewAdministrator {
            user_id: 6,
            department: "DTOP".into(),
        };
        assert_eq!(
            client.create_administrator(&admin).await.unwrap(),
            json!({"admin_id": 6, "department": "DTOP"})
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_by_department_encodes_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/administrators/department/Public%20Works")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        client
            .administrators_by_department("Public Works")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_performance_days_optional() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/administrators/performance")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .expect(2)
            .create_async()
            .await;

        let (client, observer) = client_for(&server, None);
        client.administrator_performance(None).await.unwrap();
        client.administrator_performance(Some(30)).await.unwrap();

        let base = format!("{}/administrators/performance", server.url());
        assert_eq!(
            observer.started_urls(),
            vec![base.clone(), format!("{base}?days=30")]
        );
    }

    #[tokio::test]
    async fn test_check_is_administrator() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/administrators/check/6")
            .with_status(200)
            .with_body(r#"{"is_admin": true}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        let answer = client.check_is_administrator(6).await.unwrap();
        assert_eq!(answer["is_admin"], true);
    }
}
