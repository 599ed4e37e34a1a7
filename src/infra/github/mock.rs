//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of the issue and
//! issue-comments endpoints, scoped to the `owner/blog` repository.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! let thread = mock.thread("42");
//!
//! thread.summary(2).await;
//! thread.summary_status(404).await;
//!
//! thread
//!     .comments_page(1)
//!     .comment("alice", "2021-01-01T00:00:00Z", "<p>Hi</p>")
//!     .link(&mock.next_link("42", 2))
//!     .mount()
//!     .await;
//! thread.comments_page(1).status(404).mount().await;
//! thread.comments_page(2).expect(0).mount().await;
//! ```

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;

pub const MOCK_OWNER: &str = "owner";
pub const MOCK_REPO: &str = "blog";
pub const HTML_MEDIA_TYPE: &str = "application/vnd.github.v3.html+json";

/// Create a mock comment JSON object in the shape of the REST API response.
fn mock_comment(login: &str, created_at: &str, body_html: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "body": body_html,
        "body_html": body_html,
        "author_association": "NONE",
        "created_at": created_at,
        "updated_at": created_at,
        "user": {
            "login": login,
            "id": 1,
            "avatar_url": format!("https://avatars.githubusercontent.com/{login}"),
            "html_url": format!("https://github.com/{login}"),
            "type": "User",
            "site_admin": false
        }
    })
}

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// A client pointed at this server for `owner/blog`.
    pub fn client(&self) -> GitHubClient {
        let repo = format!("{MOCK_OWNER}/{MOCK_REPO}").parse().unwrap();
        GitHubClient::new(&self.server.uri(), repo, HTML_MEDIA_TYPE).unwrap()
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// A `Link` header value advertising `next_page` (and a `last` relation).
    pub fn next_link(&self, thread_id: &str, next_page: u32) -> String {
        let base = format!(
            "{}/repos/{MOCK_OWNER}/{MOCK_REPO}/issues/{thread_id}/comments",
            self.server.uri()
        );
        format!(
            "<{base}?page={next_page}>; rel=\"next\", <{base}?page={last}>; rel=\"last\"",
            last = next_page + 1
        )
    }

    pub fn thread<'a>(&'a self, thread_id: &'a str) -> MockThreadContext<'a> {
        MockThreadContext {
            server: &self.server,
            thread_id,
        }
    }
}

/// Mocks scoped to one thread (issue).
pub struct MockThreadContext<'a> {
    server: &'a MockServer,
    thread_id: &'a str,
}

impl<'a> MockThreadContext<'a> {
    fn issue_path(&self) -> String {
        format!("/repos/{MOCK_OWNER}/{MOCK_REPO}/issues/{}", self.thread_id)
    }

    /// Mount GET /repos/owner/blog/issues/{id} reporting `comments` comments.
    pub async fn summary(&self, comments: u64) {
        Mock::given(method("GET"))
            .and(path(self.issue_path()))
            .and(header("accept", HTML_MEDIA_TYPE))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "number": 42,
                "title": "Comments for a post",
                "state": "open",
                "comments": comments,
                "body_html": "<p>Thread for a post</p>"
            })))
            .mount(self.server)
            .await;
    }

    /// Mount GET /repos/owner/blog/issues/{id} failing with `status`.
    pub async fn summary_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(self.issue_path()))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(self.server)
            .await;
    }

    /// Start building GET /repos/owner/blog/issues/{id}/comments?page={page}.
    pub fn comments_page(&self, page: u32) -> MockCommentsPageBuilder<'a> {
        MockCommentsPageBuilder {
            server: self.server,
            path: format!("{}/comments", self.issue_path()),
            page,
            status: 200,
            comments: Vec::new(),
            link: None,
            raw_body: None,
            expected_calls: None,
        }
    }
}

/// Builder for one page of the comments endpoint.
pub struct MockCommentsPageBuilder<'a> {
    server: &'a MockServer,
    path: String,
    page: u32,
    status: u16,
    comments: Vec<serde_json::Value>,
    link: Option<String>,
    raw_body: Option<&'a str>,
    expected_calls: Option<u64>,
}

impl<'a> MockCommentsPageBuilder<'a> {
    pub fn comment(mut self, login: &str, created_at: &str, body_html: &str) -> Self {
        let comment = mock_comment(login, created_at, body_html);
        self.comments.push(comment);
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Respond with a body that is not a JSON comment list.
    pub fn raw_body(mut self, body: &'a str) -> Self {
        self.raw_body = Some(body);
        self
    }

    /// Verify (when the server drops) that this page is requested exactly `calls` times.
    pub fn expect(mut self, calls: u64) -> Self {
        self.expected_calls = Some(calls);
        self
    }

    pub async fn mount(self) {
        let mut response = ResponseTemplate::new(self.status);
        response = match self.raw_body {
            Some(body) => response.set_body_string(body),
            None if self.status < 300 => response.set_body_json(json!(self.comments)),
            None => response.set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })),
        };
        if let Some(link) = &self.link {
            response = response.insert_header("link", link.as_str());
        }

        let mut mock = Mock::given(method("GET"))
            .and(path(self.path))
            .and(query_param("page", self.page.to_string()))
            .and(header("accept", HTML_MEDIA_TYPE))
            .respond_with(response);
        if let Some(calls) = self.expected_calls {
            mock = mock.expect(calls);
        }
        mock.mount(self.server).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::github::parse_link_header;

    #[tokio::test]
    async fn next_link_parses_to_next_and_last() {
        let mock = GitHubMockServer::start().await;
        let relations = parse_link_header(&mock.next_link("42", 3)).unwrap();

        assert_eq!(relations["next"].page_number, 3);
        assert_eq!(relations["last"].page_number, 4);
        assert!(relations["next"].target_url.starts_with(&mock.uri()));
    }
}
