use dioxus::prelude::*;
use github_search::config::Config;
use github_search::github::GitHubClient;
use github_search::ui::{make_config, App, SharedUserSource};
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();

    let client = match GitHubClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create GitHub client: {}", e);
            std::process::exit(1);
        }
    };
    let source: SharedUserSource = Arc::new(client);

    info!("Starting GitHub user search");

    LaunchBuilder::new()
        .with_cfg(make_config())
        .with_context(config)
        .with_context(source)
        .launch(App);
}
