//
//  reporte-client
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User accounts and user management actions.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list | `GET /users` |
//! | get | `GET /users/{id}` |
//! | create | `POST /users` |
//! | update | `PUT /users/{id}` |
//! | delete | `DELETE /users/{id}` |
//! | suspend / unsuspend / pin / unpin | `POST /users/{id}/{action}` |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{envelope_message, is_truthy, ApiError, ApiResult, Page, Query};
use super::ReporteClient;

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub admin: bool,
}

/// Management actions on a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Suspend,
    Unsuspend,
    Pin,
    Unpin,
}

impl UserAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suspend => "suspend",
            Self::Unsuspend => "unsuspend",
            Self::Pin => "pin",
            Self::Unpin => "unpin",
        }
    }
}

impl ReporteClient {
    pub async fn list_users(&self, page: Page) -> ApiResult<Value> {
        self.get(&Query::new().page(page).apply("/users")).await
    }

    pub async fn get_user(&self, id: i64) -> ApiResult<Value> {
        self.get(&format!("/users/{id}")).await
    }

    /// Creates a user. A response whose `id` is missing or falsy (`0`, `""`,
    /// `false`, `null`) is a rejected creation, reported with the server's
    /// `error_msg`.
    pub async fn create_user(&self, user: &NewUser) -> ApiResult<Value> {
        let result: Value = self.post("/users", user).await?;

        if result.get("id").is_some_and(is_truthy) {
            Ok(result)
        } else {
            Err(ApiError::DomainValidation(
                envelope_message(&result)
                    .unwrap_or("User creation failed")
                    .to_string(),
            ))
        }
    }

    pub async fn update_user(&self, id: i64, data: &Value) -> ApiResult<Value> {
        self.put(&format!("/users/{id}"), data).await
    }

    pub async fn delete_user(&self, id: i64) -> ApiResult<Value> {
        self.delete(&format!("/users/{id}")).await
    }

    pub async fn user_action(&self, id: i64, action: UserAction) -> ApiResult<Value> {
        self.post_empty(&format!("/users/{id}/{}", action.as_str()))
            .await
    }

    pub async fn suspend_user(&self, id: i64) -> ApiResult<Value> {
        self.user_action(id, UserAction::Suspend).await
    }

    pub async fn unsuspend_user(&self, id: i64) -> ApiResult<Value> {
        self.user_action(id, UserAction::Unsuspend).await
    }

    pub async fn pin_user(&self, id: i64) -> ApiResult<Value> {
        self.user_action(id, UserAction::Pin).await
    }

    pub async fn unpin_user(&self, id: i64) -> ApiResult<Value> {
        self.user_action(id, UserAction::Unpin).await
    }
}
