use tracing::debug;

use crate::modules::auth::types::{LoginPayload, LoginRequest, LoginResponse};
use crate::modules::auth::Session;

pub(crate) async fn login(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> anyhow::Result<Session> {
    let url = format!("{}/api/v1/auth/login", base_url.trim_end_matches('/'));
    let payload = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    debug!(url = %url, user = %username, "login request");
    let response = client.post(url).json(&payload).send().await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Login failed: {status} {body}");
    }
    let body: LoginResponse = response.json().await?;
    if let Some(message) = body.message.as_deref() {
        debug!(message = %message, "login response");
    }
    let LoginPayload {
        access_token,
        refresh_token,
    } = body
        .payload
        .ok_or_else(|| anyhow::anyhow!("login response is missing its payload"))?;
    if refresh_token.is_some() {
        debug!("login response included a refresh token; it is not stored");
    }
    let access_token =
        access_token.ok_or_else(|| anyhow::anyhow!("login response is missing access_token"))?;
    Session::new(access_token)
}
