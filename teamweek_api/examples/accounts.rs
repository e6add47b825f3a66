//! Prints the current profile, its accounts and the tasks of the first one.
//!
//! Reads `TEAMWEEK_TOKEN` (and optionally `TEAMWEEK_BASE_URL`) from the
//! environment or a `.env` file:
//!
//! ```sh
//! TEAMWEEK_TOKEN=... RUST_LOG=teamweek_api=debug cargo run --example accounts
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use teamweek_api::Client;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let token = std::env::var("TEAMWEEK_TOKEN").context("TEAMWEEK_TOKEN is not set")?;
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))?;
    auth.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);

    let transport = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(30))
        .build()?;

    let mut client = Client::new(Some(transport));
    if let Ok(base_url) = std::env::var("TEAMWEEK_BASE_URL") {
        client.base_url = base_url.parse().context("invalid TEAMWEEK_BASE_URL")?;
    }

    let profile = client.profile().await?;
    println!("{} <{}>", profile.name, profile.email);

    let accounts = client.list_accounts().await?;
    for account in &accounts {
        let marker = if account.is_demo { " (demo)" } else { "" };
        println!("  [{}] {}{}", account.id, account.name, marker);
    }

    let Some(first) = accounts.first() else {
        return Ok(());
    };
    for task in client.list_account_tasks(first.id).await? {
        let project = task.project.as_ref().map_or("-", |p| p.name.as_str());
        let start = task
            .starts_on()
            .map(|d| d.to_string())
            .unwrap_or_default();
        println!("  {:>10}  {:<30} {}", start, task.name, project);
    }

    Ok(())
}
