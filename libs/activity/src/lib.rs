use std::time::Duration;

mod client;
mod events;
mod render;

use anyhow::Context as _;
use toml::{map::Map, Value};

pub use client::Client;
pub use events::{
    fetch,
    response::{
        Commit, Event, Issue, IssuesPayload, Payload, PullRequest,
        PullRequestPayload, PushPayload, Repo,
    },
};
pub use render::{capitalize, render};

static EMBEDDED_CONFIG: &str = include_str!("../Config.toml");

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Config {
    pub fn embedded() -> anyhow::Result<Self> {
        let config = util::parse_config(EMBEDDED_CONFIG)
            .context("failed to parse embedded Config.toml")?;

        init_config(&config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("error creating request: {}", source)]
    BuildClient { source: reqwest::Error },

    #[error("user '{}' not found", username)]
    UserNotFound { username: String },

    #[error("API request failed with status code: {}", status_code)]
    FailedStatusCode { status_code: u16 },

    #[error("error fetching data: {}", source)]
    Fetch { source: reqwest::Error },

    #[error("error reading response: {}", source)]
    ReadBody { source: reqwest::Error },

    #[error("error parsing JSON: {}", source)]
    Parse { source: serde_json::Error },
}

pub fn init_config(config: &Map<String, Value>) -> anyhow::Result<Config> {
    let github = config
        .get("github")
        .context("failed to get github config")?;

    let base_url = github
        .get("base_url")
        .context("failed to load base_url config")?
        .as_str()
        .context("failed to parse base_url config")?
        .trim_end_matches('/')
        .to_string();

    let user_agent = github
        .get("user_agent")
        .context("failed to load user_agent config")?
        .as_str()
        .context("failed to parse user_agent config")?
        .to_string();

    let timeout_secs = github
        .get("timeout_secs")
        .context("failed to load timeout_secs config")?
        .as_integer()
        .context("failed to parse timeout_secs config")?;

    let timeout_secs = u64::try_from(timeout_secs)
        .context("timeout_secs must not be negative")?;

    Ok(Config {
        base_url,
        user_agent,
        timeout: Duration::from_secs(timeout_secs),
    })
}
