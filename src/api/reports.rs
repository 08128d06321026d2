//
//  reporte-client
//  api/reports.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Citizen reports: CRUD, admin actions, rating, search and filtering.
//!
//! Creating a report needs a logged-in user; the stored user id is added to
//! the body as `user_id` so the server can fill `created_by`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{ApiError, ApiResult, Page, Query};
use super::ReporteClient;

/// Form data for a new report.
///
/// Fields the client does not model are carried in `extra` and sent as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportFormData {
    pub title: String,
    pub description: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of the validate and resolve actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdminAction {
    pub admin_id: i64,
}

/// Body of `POST /reports/{id}/rate`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: i64,
}

/// Optional status/category filters for `GET /reports/filter`.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub status: Option<String>,
    pub category: Option<String>,
}

impl ReporteClient {
    pub async fn list_reports(&self, page: Page) -> ApiResult<Value> {
        self.get(&Query::new().page(page).apply("/reports")).await
    }

    pub async fn get_report(&self, id: i64) -> ApiResult<Value> {
        self.get(&format!("/reports/{id}")).await
    }

    /// Files a new report as the logged-in user.
    ///
    /// # Errors
    ///
    /// [`ApiError::AuthenticationFailed`] without sending anything when no
    /// credential is stored.
    pub async fn create_report(&self, form: &ReportFormData) -> ApiResult<Value> {
        let credentials = self.current_user().await?;

        let mut body = serde_json::to_value(form).map_err(ApiError::Serialize)?;
        if let Value::Object(fields) = &mut body {
            fields.insert("user_id".to_string(), Value::from(credentials.user_id));
        }

        self.post("/reports", &body).await
    }

    pub async fn update_report(&self, id: i64, data: &Value) -> ApiResult<Value> {
        self.put(&format!("/reports/{id}"), data).await
    }

    pub async fn delete_report(&self, id: i64) -> ApiResult<Value> {
        self.delete(&format!("/reports/{id}")).await
    }

    pub async fn validate_report(&self, report_id: i64, admin_id: i64) -> ApiResult<Value> {
        self.post(
            &format!("/reports/{report_id}/validate"),
            &AdminAction { admin_id },
        )
        .await
    }

    pub async fn resolve_report(&self, report_id: i64, admin_id: i64) -> ApiResult<Value> {
        self.post(
            &format!("/reports/{report_id}/resolve"),
            &AdminAction { admin_id },
        )
        .await
    }

    pub async fn rate_report(&self, report_id: i64, rating: i64) -> ApiResult<Value> {
        self.post(
            &format!("/reports/{report_id}/rate"),
            &RatingRequest { rating },
        )
        .await
    }

    pub async fn search_reports(&self, query: &str, page: Page) -> ApiResult<Value> {
        let path = Query::new().push("q", query).page(page).apply("/reports/search");
        self.get(&path).await
    }

    pub async fn filter_reports(&self, filter: &ReportFilter, page: Page) -> ApiResult<Value> {
        let path = Query::new()
            .push_nonempty("status", filter.status.as_deref())
            .push_nonempty("category", filter.category.as_deref())
            .page(page)
            .apply("/reports/filter");
        self.get(&path).await
    }

    /// Reports filed by `user_id`.
    pub async fn user_reports(&self, user_id: i64, page: Page) -> ApiResult<Value> {
        let path = Query::new()
            .page(page)
            .apply(&format!("/reports/user/{user_id}"));
        self.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_for;
    use mockito::Matcher;
    use serde_json::json;

    fn pothole() -> ReportFormData {
        ReportFormData {
            title: "Pothole on PR-2".into(),
            description: "Deep hole near exit 5".into(),
            category: "roads".into(),
            location_id: Some(12),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_report_adds_user_id_and_returns_echo_unmodified() {
        let mut server = mockito::Server::new_async().await;
        let echoed = r#"{"id":77,"title":"Pothole on PR-2","status":"open","created_by":5,"meta":{"z":1,"a":2}}"#;
        let mock = server
            .mock("POST", "/reports")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Exact(
                r#"{"title":"Pothole on PR-2","description":"Deep hole near exit 5","category":"roads","location_id":12,"user_id":5}"#.into(),
            ))
            .with_status(201)
            .with_body(echoed)
            .create_async()
            .await;

        let (client, _) = client_for(&server, Some(5));
        let created = client.create_report(&pothole()).await.unwrap();

        assert_eq!(serde_json::to_string(&created).unwrap(), echoed);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_report_requires_login() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/reports")
            .expect(0)
            .create_async()
            .await;

        let (client, observer) = client_for(&server, None);
        let result = client.create_report(&pothole()).await;

        assert!(matches!(result, Err(ApiError::AuthenticationFailed(_))));
        assert!(observer.events().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_report_extra_whole_numbers_sent_as_integers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/reports")
            .match_body(Matcher::Exact(
                r#"{"title":"Pothole on PR-2","description":"Deep hole near exit 5","category":"roads","location_id":12,"depth_cm":30,"width_m":1.5,"user_id":5}"#.into(),
            ))
            .with_status(201)
            .with_body(r#"{"id":78}"#)
            .create_async()
            .await;

        let mut form = pothole();
        form.extra.insert("depth_cm".into(), json!(30.0));
        form.extra.insert("width_m".into(), json!(1.5));

        let (client, _) = client_for(&server, Some(5));
        client.create_report(&form).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_extra_fields_pass_through() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/reports")
            .match_body(Matcher::PartialJson(json!({"priority": "high", "user_id": 5})))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let mut form = pothole();
        form.extra.insert("priority".into(), json!("high"));

        let (client, _) = client_for(&server, Some(5));
        client.create_report(&form).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_admin_actions_send_admin_id() {
        let mut server = mockito::Server::new_async().await;
        let validate = server
            .mock("POST", "/reports/3/validate")
            .match_body(Matcher::Json(json!({"admin_id": 9})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let resolve = server
            .mock("POST", "/reports/3/resolve")
            .match_body(Matcher::Json(json!({"admin_id": 9})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let rate = server
            .mock("POST", "/reports/3/rate")
            .match_body(Matcher::Json(json!({"rating": 4})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        client.validate_report(3, 9).await.unwrap();
        client.resolve_report(3, 9).await.unwrap();
        client.rate_report(3, 4).await.unwrap();

        validate.assert_async().await;
        resolve.assert_async().await;
        rate.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_sends_query_and_pagination() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/reports/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "street light".into()),
                Matcher::UrlEncoded("limit".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, observer) = client_for(&server, None);
        client
            .search_reports("street light", Page::from_parts(None, Some(5)))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(!observer.started_urls()[0].contains("page="));
    }

    #[tokio::test]
    async fn test_filter_skips_missing_values() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/reports/filter")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, observer) = client_for(&server, None);
        let filter = ReportFilter {
            status: Some("resolved".into()),
            category: None,
        };
        client.filter_reports(&filter, Page::all()).await.unwrap();

        assert_eq!(
            observer.started_urls(),
            vec![format!("{}/reports/filter?status=resolved", server.url())]
        );
    }

    #[tokio::test]
    async fn test_user_reports_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/reports/user/5")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        client
            .user_reports(5, Page::from_parts(Some(1), None))
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
