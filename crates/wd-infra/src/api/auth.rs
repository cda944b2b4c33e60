//! HTTP gateway for the authentication endpoints.
//!
//! Session identity travels in an HTTP-only cookie, so the shared client
//! keeps a cookie store; this gateway only handles the JSON bodies.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use wd_core::account::{AuthSession, User};
use wd_core::ports::{AuthGatewayPort, GatewayError};
use wd_core::security::SecretString;

use crate::api::client::{decode_json, require_success, ApiClient};

pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    user: Option<User>,
    expires_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl AuthGatewayPort for HttpAuthGateway {
    async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<AuthSession, GatewayError> {
        let payload = serde_json::json!({
            "username": username,
            "password": password.expose(),
        });
        let response = self.client.post_json("/auth/login", &payload).await?;
        let response = require_success(response).await?;
        let body: LoginResponse = decode_json(response).await?;

        if !body.success {
            let message = body
                .message
                .unwrap_or_else(|| "Login failed".to_string());
            return Err(GatewayError::Rejected { message });
        }

        let user = body
            .user
            .ok_or_else(|| GatewayError::Decode("login response carries no user".to_string()))?;
        let expires_at = body.expires_at.ok_or_else(|| {
            GatewayError::Decode("login response carries no expiry".to_string())
        })?;

        debug!(user_id = user.id, "login accepted");
        Ok(AuthSession { user, expires_at })
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        let response = self.client.post_empty("/auth/logout").await?;
        require_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::time::Duration;

    fn gateway(base_url: String) -> HttpAuthGateway {
        HttpAuthGateway::new(ApiClient::from_parts(base_url, Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn login_decodes_session() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "username": "root",
                "password": "Sup3rSafe",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "success": true,
                    "user": {"id": 1, "username": "root", "email": "ops@example.com", "isSystemRoot": true},
                    "expiresAt": "2025-03-02T12:00:00Z"
                }"#,
            )
            .create_async()
            .await;

        let session = gateway(server.url())
            .login("root", &SecretString::new("Sup3rSafe".to_string()))
            .await
            .unwrap();

        assert_eq!(session.user.username, "root");
        assert!(session.user.is_system_root);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_rejection_carries_backend_message() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Invalid username or password"}"#)
            .create_async()
            .await;

        let err = gateway(server.url())
            .login("root", &SecretString::new("wrong".to_string()))
            .await
            .unwrap_err();

        match err {
            GatewayError::Status { code, message } => {
                assert_eq!(code, 401);
                assert_eq!(message, "Invalid username or password");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_with_unsuccessful_body_is_rejected() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "message": "Account is locked"}"#)
            .create_async()
            .await;

        let err = gateway(server.url())
            .login("root", &SecretString::new("Sup3rSafe".to_string()))
            .await
            .unwrap_err();

        match err {
            GatewayError::Rejected { message } => assert_eq!(message, "Account is locked"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn logout_posts_to_backend() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/logout")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        gateway(server.url()).logout().await.unwrap();
        mock.assert_async().await;
    }
}
