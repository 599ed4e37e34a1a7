//! Reads the thread id the site template embeds in a page.
//!
//! The template emits `<div id="gh-comments" data-ghcommentid="42">`.

use lazy_regex::{regex, regex_captures};

pub const THREAD_ELEMENT_ID: &str = "gh-comments";

/// Thread id of the `gh-comments` element, if the page has one with a non-empty id.
pub fn find_thread_id(html: &str) -> Option<String> {
    regex!(r"<[A-Za-z][^>]*>")
        .find_iter(html)
        .map(|tag| tag.as_str())
        .find(|tag| is_thread_element(tag))
        .and_then(|tag| {
            regex_captures!(r#"\sdata-ghcommentid\s*=\s*["']([^"']*)["']"#, tag)
                .map(|(_, id)| id.trim().to_string())
        })
        .filter(|id| !id.is_empty())
}

fn is_thread_element(tag: &str) -> bool {
    regex_captures!(r#"\sid\s*=\s*["']([^"']*)["']"#, tag)
        .is_some_and(|(_, id)| id == THREAD_ELEMENT_ID)
}
