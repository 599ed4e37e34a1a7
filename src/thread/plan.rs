//! Decides what one page of a thread looks like once rendered.
//!
//! Everything here is a pure function of the page response; writing the
//! result somewhere is `surface::apply_plan`'s job.

use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::warn;

use super::models::{Comment, CommentsPage, ThreadRef};
use super::time::format_utc_timestamp;
use crate::infra::github::{RepoRef, parse_link_header};
use crate::shared::config::Config;

/// Where the call-to-action link points and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub site_root: String,
    pub cta_text: String,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_root: config.github.site_root.trim_end_matches('/').to_string(),
            cta_text: config.render.cta_text.clone(),
        }
    }

    /// Web page of the issue backing `thread_id`.
    pub fn issue_page_url(&self, repo: &RepoRef, thread_id: &str) -> String {
        format!(
            "{}/{}/{}/issues/{}",
            self.site_root, repo.owner, repo.name, thread_id
        )
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// What to do with the "load more" control after a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlPlan {
    /// Leave the control exactly as it is.
    Keep,
    Arm(ThreadRef),
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Fragments to append, in order.
    pub blocks: Vec<String>,
    pub control: ControlPlan,
}

/// Plan the rendering of `page`, the response for `thread`.
pub fn plan_page(
    thread: &ThreadRef,
    page: &CommentsPage,
    repo: &RepoRef,
    options: &RenderOptions,
) -> RenderPlan {
    match page {
        CommentsPage::NotOk { status } => RenderPlan {
            blocks: vec![not_open_block(*status)],
            control: ControlPlan::Keep,
        },
        CommentsPage::Ok { comments, link } => {
            let mut blocks = Vec::with_capacity(comments.len() + 1);
            if thread.is_first_page() {
                let url = options.issue_page_url(repo, &thread.id);
                blocks.push(call_to_action_block(&url, &options.cta_text));
            }
            blocks.extend(comments.iter().map(comment_block));

            RenderPlan {
                blocks,
                control: next_page_control(thread, link.as_deref()),
            }
        }
    }
}

/// Arm the control for the following page only when a `next` relation is advertised.
fn next_page_control(thread: &ThreadRef, link: Option<&str>) -> ControlPlan {
    let Some(link) = link else {
        return ControlPlan::Hide;
    };

    match parse_link_header(link) {
        Ok(relations) if relations.contains_key("next") => ControlPlan::Arm(thread.next()),
        Ok(_) => ControlPlan::Hide,
        Err(err) => {
            warn!(thread = %thread, error = %err, "ignoring malformed Link header");
            ControlPlan::Hide
        }
    }
}

pub fn not_open_block(status: u16) -> String {
    format!(
        "<div class=\"gh-comment-status\">Comments are not open for this post yet. Status: {status}</div>"
    )
}

pub fn call_to_action_block(issue_page_url: &str, text: &str) -> String {
    format!(
        "<div class=\"gh-comment-link\"><a href=\"{url}#new_comment_field\" rel=\"nofollow\" class=\"gh-comment-link-add\">{text}</a> <span style=\"font-size: x-small;\">(it will appear below automatically)</span></div>",
        url = encode_double_quoted_attribute(issue_page_url),
        text = encode_text(text),
    )
}

/// Render one comment. `body_html` is server-rendered markup and is inserted as-is.
pub fn comment_block(comment: &Comment) -> String {
    let user = &comment.user;
    format!(
        "<div class=\"gh-comment\"><div class=\"gh-comment-head\"><img src=\"{avatar}\" class=\"github-comment-img-avatar\"><b><a href=\"{profile}\">{login}</a></b> posted at <em>{date}</em></div><div class=\"gh-comment-body\">{body}</div></div>",
        avatar = encode_double_quoted_attribute(&user.avatar_url),
        profile = encode_double_quoted_attribute(&user.html_url),
        login = encode_text(&user.login),
        date = format_utc_timestamp(&comment.created_at),
        body = comment.body_html,
    )
}
