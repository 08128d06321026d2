//
//  reporte-client
//  api/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Login, logout and service health.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{envelope_message, is_truthy, ApiError, ApiResult};
use super::ReporteClient;

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl ReporteClient {
    /// Logs in with email and password.
    ///
    /// The backend answers 200 even for bad credentials and signals the
    /// outcome with a `success` flag, so a missing or falsy flag becomes
    /// [`ApiError::DomainValidation`] carrying the server's `error_msg`.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<Value> {
        let result: Value = self.post("/login", request).await?;

        if result.get("success").is_some_and(is_truthy) {
            Ok(result)
        } else {
            Err(ApiError::DomainValidation(
                envelope_message(&result).unwrap_or("Login failed").to_string(),
            ))
        }
    }

    pub async fn logout(&self) -> ApiResult<Value> {
        self.post_empty("/logout").await
    }

    pub async fn system_health(&self) -> ApiResult<Value> {
        self.get("/system/health").await
    }
}

/// Finds the logged-in user's id in a successful login envelope.
///
/// Accepts `{"user": {"id": ..}}`, `{"user_id": ..}` and `{"id": ..}`.
pub fn login_user_id(envelope: &Value) -> Option<i64> {
    envelope
        .get("user")
        .and_then(|u| u.get("id").or_else(|| u.get("user_id")))
        .or_else(|| envelope.get("user_id"))
        .or_else(|| envelope.get("id"))
        .and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_for;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_success_returns_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/login")
            .match_body(Matcher::Json(json!({"email": "ana@upr.edu", "password": "pw"})))
            .with_status(200)
            .with_body(r#"{"success": true, "user": {"id": 14, "admin": false}}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        let envelope = client
            .login(&LoginRequest::new("ana@upr.edu", "pw"))
            .await
            .unwrap();

        assert_eq!(login_user_id(&envelope), Some(14));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_failure_in_success_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"success": false, "error_msg": "Invalid email or password"}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        match client.login(&LoginRequest::new("ana@upr.edu", "bad")).await {
            Err(ApiError::DomainValidation(msg)) => assert_eq!(msg, "Invalid email or password"),
            other => panic!("expected DomainValidation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_accepts_numeric_success_flag() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"success": 1, "user": {"id": 9}}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        let envelope = client.login(&LoginRequest::new("ana@upr.edu", "pw")).await.unwrap();

        assert_eq!(login_user_id(&envelope), Some(9));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_rejects_zero_success_flag() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"success": 0, "user": {"id": 9}}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        assert!(matches!(
            client.login(&LoginRequest::new("ana@upr.edu", "pw")).await,
            Err(ApiError::DomainValidation(_))
        ));
    }

    #[tokio::test]
    async fn test_login_without_message_uses_default() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(204)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        match client.login(&LoginRequest::new("a", "b")).await {
            Err(ApiError::DomainValidation(msg)) => assert_eq!(msg, "Login failed"),
            other => panic!("expected DomainValidation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_logout_posts_without_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/logout")
            .match_body(Matcher::Exact(String::new()))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, None);
        client.logout().await.unwrap();
        mock.assert_async().await;
    }

    #[test]
    fn test_login_user_id_shapes() {
        assert_eq!(login_user_id(&json!({"user": {"id": 1}})), Some(1));
        assert_eq!(login_user_id(&json!({"user_id": 2})), Some(2));
        assert_eq!(login_user_id(&json!({"id": 3})), Some(3));
        assert_eq!(login_user_id(&json!({"success": true})), None);
    }
}
