use serde::Deserialize;

/// A comment as returned by the issue comments endpoint with the HTML media type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    /// ISO 8601 creation timestamp, kept as received.
    pub created_at: String,
    pub user: User,
    /// Server-rendered body markup. Absent unless the HTML media type was requested.
    #[serde(default)]
    pub body_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
}
