use std::{
    fmt,
    io::{self, Write},
};

use crate::{Event, Payload};

pub fn render<W: Write>(events: &[Event], out: &mut W) -> io::Result<()> {
    if events.is_empty() {
        return writeln!(out, "No recent activity found.");
    }

    for event in events {
        writeln!(out, "{}", event)?;
    }

    Ok(())
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repo = &self.repo.name;

        match &self.payload {
            Payload::Push(push) => {
                write!(f, "- Pushed {} commits to {}", push.size, repo)
            }
            Payload::Create => write!(f, "- Created repository {}", repo),
            Payload::Issues(issues) => write!(
                f,
                "- {} issue in {}: {}",
                capitalize(&issues.action),
                repo,
                issues.issue.title
            ),
            Payload::PullRequest(pr) => write!(
                f,
                "- {} pull request in {}: {}",
                capitalize(&pr.action),
                repo,
                pr.pull_request.title
            ),
            Payload::Watch => write!(f, "- Starred {}", repo),
            Payload::Other(kind) => write!(f, "- {} event in {}", kind, repo),
        }
    }
}
