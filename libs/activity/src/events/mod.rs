use tracing::debug;

use self::response::Event;
use crate::{ActivityError, Client};

pub mod response;

/// Fetches the first page of `username`'s public events, newest first.
#[tracing::instrument(skip(client))]
pub async fn fetch(
    client: &Client,
    username: &str,
) -> Result<Vec<Event>, ActivityError> {
    let text = client
        .get(&format!("users/{}/events", username))
        .await
        .map_err(|e| match e {
            ActivityError::FailedStatusCode { status_code: 404 } => {
                ActivityError::UserNotFound {
                    username: username.to_string(),
                }
            }
            e => e,
        })?;

    let events = serde_json::from_str::<Vec<Event>>(&text)
        .map_err(|source| ActivityError::Parse { source })?;

    debug!(task = "load events", count = events.len());

    Ok(events)
}
