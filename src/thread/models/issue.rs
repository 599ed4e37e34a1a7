use serde::Deserialize;

/// The part of an issue this crate reads: how many comments it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IssueSummary {
    pub comments: u64,
}
