use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize, Debug, PartialEq, Clone)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    pub repo: Repo,
    pub payload: Payload,
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn kind(&self) -> &str {
        match &self.payload {
            Payload::Push(_) => "PushEvent",
            Payload::Create => "CreateEvent",
            Payload::Issues(_) => "IssuesEvent",
            Payload::PullRequest(_) => "PullRequestEvent",
            Payload::Watch => "WatchEvent",
            Payload::Other(kind) => kind,
        }
    }
}

/// Type-specific part of an [`Event`], keyed by its `type` tag.
#[derive(Debug, PartialEq, Clone)]
pub enum Payload {
    Push(PushPayload),
    Create,
    Issues(IssuesPayload),
    PullRequest(PullRequestPayload),
    Watch,
    Other(String),
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Repo {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct PushPayload {
    #[serde(default, deserialize_with = "nullable")]
    pub push_id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub size: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub commits: Vec<Commit>,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Commit {
    #[serde(default, deserialize_with = "nullable")]
    pub sha: String,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct IssuesPayload {
    #[serde(default, deserialize_with = "nullable")]
    pub action: String,
    #[serde(default, deserialize_with = "nullable")]
    pub issue: Issue,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Issue {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct PullRequestPayload {
    #[serde(default, deserialize_with = "nullable")]
    pub action: String,
    #[serde(default, deserialize_with = "nullable")]
    pub pull_request: PullRequest,
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct PullRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    kind: String,
    #[serde(default, deserialize_with = "nullable")]
    repo: Repo,
    #[serde(default)]
    payload: Option<Value>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawEvent> for Event {
    type Error = serde_json::Error;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let payload = match raw.kind.as_str() {
            "PushEvent" => Payload::Push(payload(raw.payload)?),
            "CreateEvent" => Payload::Create,
            "IssuesEvent" => Payload::Issues(payload(raw.payload)?),
            "PullRequestEvent" => Payload::PullRequest(payload(raw.payload)?),
            "WatchEvent" => Payload::Watch,
            _ => Payload::Other(raw.kind),
        };

        Ok(Event {
            repo: raw.repo,
            payload,
            created_at: raw.created_at,
        })
    }
}

fn payload<T: DeserializeOwned + Default>(
    value: Option<Value>,
) -> Result<T, serde_json::Error> {
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value),
    }
}

// null reads as the default value, the same as an absent field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
