//
//  reporte-client
//  api/pinned_reports.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Reports a user has pinned to follow.
//!
//! Every call here acts on the logged-in user's own pins. Calls that take a
//! `user_id` check it against the stored credential first and fail with
//! [`ApiError::OwnershipMismatch`](super::ApiError::OwnershipMismatch)
//! without contacting the server. The server still enforces the real rule.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ApiResult, Page, Query};
use super::ReporteClient;

/// Body of `POST /pinned-reports`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRequest {
    pub user_id: i64,
    pub report_id: i64,
}

impl ReporteClient {
    /// Lists pinned reports for `user_id`, or for the logged-in user when
    /// `user_id` is `None`.
    pub async fn pinned_reports(&self, user_id: Option<i64>, page: Page) -> ApiResult<Value> {
        let user_id = match user_id.filter(|id| *id != 0) {
            Some(id) => id,
            None => self.current_user().await?.user_id,
        };

        let path = Query::new()
            .push("user_id", user_id)
            .page(page)
            .apply("/pinned-reports");
        self.get(&path).await
    }

    pub async fn pin_report(&self, request: &PinRequest) -> ApiResult<Value> {
        self.ensure_owner(request.user_id).await?;
        self.post("/pinned-reports", request).await
    }

    pub async fn unpin_report(&self, user_id: i64, report_id: i64) -> ApiResult<Value> {
        self.ensure_owner(user_id).await?;
        let path = Query::new()
            .push("user_id", user_id)
            .apply(&format!("/pinned-reports/{report_id}"));
        self.delete(&path).await
    }

    pub async fn user_pinned_reports(&self, user_id: i64, page: Page) -> ApiResult<Value> {
        self.ensure_owner(user_id).await?;
        let path = Query::new()
            .page(page)
            .apply(&format!("/users/{user_id}/pinned-reports"));
        self.get(&path).await
    }

    pub async fn pinned_status(&self, user_id: i64, report_id: i64) -> ApiResult<Value> {
        self.ensure_owner(user_id).await?;
        self.get(&format!("/pinned-reports/check/{user_id}/{report_id}"))
            .await
    }

    pub async fn pinned_report_detail(&self, user_id: i64, report_id: i64) -> ApiResult<Value> {
        self.ensure_owner(user_id).await?;
        self.get(&format!("/pinned-reports/{user_id}/{report_id}/details"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_for;
    use crate::api::ApiError;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_defaults_to_logged_in_user() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/pinned-reports")
            .match_query(Matcher::UrlEncoded("user_id".into(), "5".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let (client, _) = client_for(&server, Some(5));
        client.pinned_reports(None, Page::all()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_without_login_fails_before_request() {
        let server = mockito::Server::new_async().await;
        let (client, observer) = client_for(&server, None);

        let result = client.pinned_reports(None, Page::all()).await;
        assert!(matches!(result, Err(ApiError::AuthenticationFailed(_))));
        assert!(observer.events().is_empty());
    }

    #[tokio::test]
    async fn test_ownership_checked_calls_never_reach_server() {
        let server = mockito::Server::new_async().await;
        let (client, observer) = client_for(&server, Some(5));
        let pin = PinRequest {
            user_id: 6,
            report_id: 1,
        };

        assert!(matches!(
            client.pin_report(&pin).await,
            Err(ApiError::OwnershipMismatch { supplied: 6, authenticated: 5 })
        ));
        assert!(matches!(
            client.unpin_report(6, 1).await,
            Err(ApiError::OwnershipMismatch { .. })
        ));
        assert!(matches!(
            client.user_pinned_reports(6, Page::all()).await,
            Err(ApiError::OwnershipMismatch { .. })
        ));
        assert!(matches!(
            client.pinned_status(6, 1).await,
            Err(ApiError::OwnershipMismatch { .. })
        ));
        assert!(matches!(
            client.pinned_report_detail(6, 1).await,
            Err(ApiError::OwnershipMismatch { .. })
        ));

        let (anonymous, _) = client_for(&server, None);
        assert!(matches!(
            anonymous.pinned_status(6, 1).await,
            Err(ApiError::AuthenticationFailed(_))
        ));

        assert!(observer.events().is_empty());
    }

    #[tokio::test]
    async fn test_pin_and_unpin_as_owner() {
        let mut server = mockito::Server::new_async().await;
        let pin = server
            .mock("POST", "/pinned-reports")
            .match_body(Matcher::Exact(r#"{"user_id":5,"report_id":40}"#.into()))
            .with_status(201)
            .with_body(r#"{"user_id": 5, "report_id": 40}"#)
            .create_async()
            .await;
        let unpin = server
            .mock("DELETE", "/pinned-reports/40")
            .match_query(Matcher::UrlEncoded("user_id".into(), "5".into()))
            .with_status(204)
            .create_async()
            .await;

        let (client, _) = client_for(&server, Some(5));
        let pinned = client
            .pin_report(&PinRequest {
                user_id: 5,
                report_id: 40,
            })
            .await
            .unwrap();
        assert_eq!(pinned, json!({"user_id": 5, "report_id": 40}));
        assert_eq!(client.unpin_report(5, 40).await.unwrap(), Value::Null);

        pin.assert_async().await;
        unpin.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_and_detail_paths() {
        let mut server = mockito::Server::new_async().await;
        let status = server
            .mock("GET", "/pinned-reports/check/5/40")
            .with_status(200)
            .with_body(r#"{"pinned": true}"#)
            .create_async()
            .await;
        let detail = server
            .mock("GET", "/pinned-reports/5/40/details")
            .with_status(200)
            .with_body(r#"{"report_id": 40}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, Some(5));
        assert_eq!(client.pinned_status(5, 40).await.unwrap()["pinned"], true);
        client.pinned_report_detail(5, 40).await.unwrap();

        status.assert_async().await;
        detail.assert_async().await;
    }
}
