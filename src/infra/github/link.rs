//! Parser for the HTTP `Link` header GitHub uses for pagination.
//!
//! A header value looks like:
//!
//! ```text
//! <https://api.github.com/repositories/1/issues/42/comments?page=2>; rel="next",
//! <https://api.github.com/repositories/1/issues/42/comments?page=5>; rel="last"
//! ```

use std::collections::BTreeMap;

use lazy_regex::regex_captures;
use serde::Serialize;
use thiserror::Error;

/// One pagination entry of a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRelation {
    pub relation_name: String,
    pub target_url: String,
    pub page_number: u32,
}

/// Relations keyed by their `rel` value.
pub type LinkRelations = BTreeMap<String, LinkRelation>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkHeaderError {
    #[error("Link entry has no <url>: {0:?}")]
    MissingUrl(String),

    #[error("Link entry has no rel value: {0:?}")]
    MissingRel(String),

    #[error("Link entry has no page parameter: {0:?}")]
    MissingPage(String),
}

/// Parse a raw `Link` header value into its relations.
///
/// An empty value yields no relations. Any entry without a `<url>`, a
/// non-empty `rel` or a positive `page` query parameter makes the whole
/// header malformed.
pub fn parse_link_header(header: &str) -> Result<LinkRelations, LinkHeaderError> {
    let mut relations = LinkRelations::new();
    if header.trim().is_empty() {
        return Ok(relations);
    }

    for entry in header.split(',') {
        let relation = parse_entry(entry.trim())?;
        relations.insert(relation.relation_name.clone(), relation);
    }

    Ok(relations)
}

fn parse_entry(entry: &str) -> Result<LinkRelation, LinkHeaderError> {
    let (_, url) = regex_captures!(r"<([^>]*)>", entry)
        .filter(|(_, url)| !url.is_empty())
        .ok_or_else(|| LinkHeaderError::MissingUrl(entry.to_string()))?;

    let (_, rel) = regex_captures!(r#"rel\s*=\s*"([^"]*)""#, entry)
        .filter(|(_, rel)| !rel.is_empty())
        .ok_or_else(|| LinkHeaderError::MissingRel(entry.to_string()))?;

    // `[?&]` keeps `per_page=100` from being read as the page number.
    let page_number = regex_captures!(r"[?&]page=(\d+)", url)
        .and_then(|(_, page)| page.parse::<u32>().ok())
        .filter(|page| *page > 0)
        .ok_or_else(|| LinkHeaderError::MissingPage(entry.to_string()))?;

    Ok(LinkRelation {
        relation_name: rel.to_string(),
        target_url: url.to_string(),
        page_number,
    })
}
