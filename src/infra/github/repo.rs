//! Repository coordinates ("owner/repo").

use std::fmt;
use std::str::FromStr;

use super::error::GitHubError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = GitHubError;

    /// Splits at the first slash; both halves must be non-empty.
    fn from_str(repo: &str) -> Result<Self, Self::Err> {
        repo.trim()
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
            .map(|(owner, name)| Self {
                owner: owner.to_string(),
                name: name.to_string(),
            })
            .ok_or_else(|| GitHubError::InvalidRepo(repo.to_string()))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
