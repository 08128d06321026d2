//
//  reporte-client
//  api/stats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Statistics and the administrator dashboard.

use serde_json::Value;

use super::common::{encode_segment, ApiResult, Page, Query};
use super::ReporteClient;

impl ReporteClient {
    pub async fn overview_stats(&self) -> ApiResult<Value> {
        self.get("/stats/overview").await
    }

    pub async fn department_overview_stats(&self, department: &str) -> ApiResult<Value> {
        self.get(&format!("/stats/department/{}", encode_segment(department)))
            .await
    }

    /// Statistics for the logged-in user. `user_id` must match the stored
    /// credential.
    pub async fn user_stats(&self, user_id: i64) -> ApiResult<Value> {
        self.ensure_owner(user_id).await?;
        self.get(&format!("/stats/user/{user_id}")).await
    }

    pub async fn admin_stats(&self, admin_id: i64) -> ApiResult<Value> {
        self.get(&format!("/stats/admin/{admin_id}")).await
    }

    pub async fn all_admin_stats(&self) -> ApiResult<Value> {
        self.get("/administrators/stats/all").await
    }

    pub async fn admin_dashboard(&self) -> ApiResult<Value> {
        self.get("/admin/dashboard").await
    }

    pub async fn pending_reports(&self, page: Page) -> ApiResult<Value> {
        self.get(&Query::new().page(page).apply("/admin/reports/pending"))
            .await
    }

    pub async fn assigned_reports(&self, admin_id: i64, page: Page) -> ApiResult<Value> {
        let path = Query::new()
            .push("admin_id", admin_id)
            .page(page)
            .apply("/admin/reports/assigned");
        self.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_for;
    use crate::api::ApiError;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_user_stats_checks_owner() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/stats/user/5")
            .with_status(200)
            .with_body(r#"{"reports": 3}"#)
            .expect(1)
            .create_async()
            .await;

        let (client, _) = client_for(&server, Some(5));
        assert_eq!(client.user_stats(5).await.unwrap()["reports"], 3);
        assert!(matches!(
            client.user_stats(9).await,
            Err(ApiError::OwnershipMismatch { .. })
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_assigned_reports_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/reports/assigned")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("admin_id".into(), "2".into()),
                Matcher::UrlEncoded("page".into(), "3".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        client.assigned_reports(2, Page::new(3, 10)).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_dashboard_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/admin/dashboard")
            .with_status(502)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        assert!(matches!(
            client.admin_dashboard().await,
            Err(ApiError::ServerError { status: 502 })
        ));
    }

    #[tokio::test]
    async fn test_overview_and_admin_stats() {
        let mut server = mockito::Server::new_async().await;
        let overview = server
            .mock("GET", "/stats/overview")
            .with_status(200)
            .with_body(r#"{"open": 4}"#)
            .create_async()
            .await;
        let all = server
            .mock("GET", "/administrators/stats/all")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        client.overview_stats().await.unwrap();
        client.all_admin_stats().await.unwrap();

        overview.assert_async().await;
        all.assert_async().await;
    }
}
