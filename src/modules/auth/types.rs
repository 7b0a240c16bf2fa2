use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

/// The server wraps every response in an envelope; only `payload` matters
/// here, `message` is surfaced at debug level.
#[derive(Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) payload: Option<LoginPayload>,
}

#[derive(Deserialize)]
pub(crate) struct LoginPayload {
    #[serde(default)]
    pub(crate) access_token: Option<String>,
    #[serde(default)]
    pub(crate) refresh_token: Option<String>,
}

/// Proof that login succeeded; cannot hold an empty token.
#[derive(Debug)]
pub(crate) struct Session {
    access_token: String,
}

impl Session {
    pub(crate) fn new(access_token: String) -> anyhow::Result<Self> {
        if access_token.trim().is_empty() {
            anyhow::bail!("login response contained an empty access_token");
        }
        Ok(Self { access_token })
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }
}
