//! GitHub REST access for issue comment threads.
//!
//! `GitHubClient` reads an issue's comment count and pages of its comments;
//! `parse_link_header` decodes the pagination header those pages carry.

mod client;
pub(crate) mod error;
mod link;
#[cfg(test)]
mod mock;
mod repo;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use link::parse_link_header;
#[cfg(test)]
pub use mock::GitHubMockServer;
pub use repo::RepoRef;
