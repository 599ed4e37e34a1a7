//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Invalid repository format: {0}. Expected owner/repo")]
    InvalidRepo(String),

    #[error("GitHub request failed: {}", describe_reqwest_error(.0))]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Name the failure stage so "connection refused" and "bad JSON" read differently.
fn describe_reqwest_error(err: &reqwest::Error) -> String {
    if err.is_decode() {
        format!("invalid response body ({err})")
    } else if err.is_connect() {
        format!("could not connect ({err})")
    } else {
        err.to_string()
    }
}
