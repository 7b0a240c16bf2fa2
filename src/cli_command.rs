use anyhow::Context;

use crate::cli_args::Cli;
use crate::modules::auth::login;
use crate::modules::maintenance::{delete_expired_jwt, PurgeOutcome};

pub(crate) async fn run(cli: &Cli, client: &reqwest::Client) -> anyhow::Result<()> {
    let base_url = cli.base_url.trim_end_matches('/');

    println!("Logging in as {}", cli.username);
    let session = login(client, base_url, &cli.username, &cli.password)
        .await
        .context("failed to obtain access token")?;

    println!("Authenticated. Deleting expired tokens...");
    let payload = delete_expired_jwt(client, base_url, &session).await?;

    match PurgeOutcome::classify(payload) {
        PurgeOutcome::Purged(payload) => {
            println!("response={payload}");
            Ok(())
        }
        PurgeOutcome::Empty => anyhow::bail!("maintenance call returned an empty response"),
    }
}
