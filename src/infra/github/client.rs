//! GitHub REST client for issue comment threads.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, LINK};
use tracing::debug;

use super::error::{GitHubError, Result};
use super::repo::RepoRef;
use crate::shared::config::GitHubConfig;
use crate::thread::models::{CommentsPage, IssueSummary};

/// GitHub rejects API requests that carry no User-Agent.
const USER_AGENT: &str = concat!("gh-comments/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    client: reqwest::Client,
    api_root: String,
    repo: RepoRef,
    accept: String,
}

impl GitHubClient {
    pub fn new(api_root: &str, repo: RepoRef, accept: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_root: api_root.trim_end_matches('/').to_string(),
            repo,
            accept: accept.to_string(),
        })
    }

    pub fn from_config(config: &GitHubConfig, repo: RepoRef) -> Result<Self> {
        Self::new(&config.api_root, repo, &config.accept)
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    fn issue_url(&self, thread_id: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_root,
            self.repo.owner,
            self.repo.name,
            utf8_percent_encode(thread_id, NON_ALPHANUMERIC)
        )
    }

    /// GET /repos/{owner}/{repo}/issues/{id}
    ///
    /// Any non-2xx status is an error here; the caller decides whether that
    /// matters.
    pub async fn get_issue_summary(&self, thread_id: &str) -> Result<IssueSummary> {
        let url = self.issue_url(thread_id);
        debug!(%url, "requesting thread metadata");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, self.accept.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }

    /// GET /repos/{owner}/{repo}/issues/{id}/comments?page={page}
    ///
    /// A non-2xx status is returned as `CommentsPage::NotOk` rather than an
    /// error because it is rendered to the reader.
    pub async fn get_comments_page(&self, thread_id: &str, page: u32) -> Result<CommentsPage> {
        let url = format!("{}/comments", self.issue_url(thread_id));
        debug!(%url, page, "requesting comments page");

        let response = self
            .client
            .get(&url)
            .query(&[("page", page)])
            .header(ACCEPT, self.accept.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(CommentsPage::NotOk {
                status: status.as_u16(),
            });
        }

        let link = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let comments = response.json().await?;

        Ok(CommentsPage::Ok { comments, link })
    }
}
