use anyhow::Context;
use tracing::{debug, info};

use crate::modules::auth::Session;
use crate::modules::shared::{auth_headers, ensure_success};

pub(crate) async fn delete_expired_jwt(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
) -> anyhow::Result<serde_json::Value> {
    let url = format!(
        "{}/api/v1/maintenance/delete-expired-jwt",
        base_url.trim_end_matches('/')
    );
    let headers = auth_headers(session.access_token())?;
    debug!(url = %url, "http request");
    let start = std::time::Instant::now();
    let response = client
        .get(&url)
        .headers(headers)
        .send()
        .await
        .context("failed to delete expired jwt")?;
    debug!(
        url = %url,
        status = %response.status(),
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );
    let response = ensure_success(response, "failed to delete expired jwt").await?;
    let payload: serde_json::Value = response.json().await?;
    if let Some(count) = payload
        .pointer("/payload/deleted_count")
        .and_then(serde_json::Value::as_u64)
    {
        info!(deleted_count = count, "expired refresh tokens deleted");
    }
    Ok(payload)
}
