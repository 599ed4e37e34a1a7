//! One fetch-and-render cycle per page of a comment thread.

use tracing::{debug, info};

use super::models::{CommentsPage, ThreadRef};
use super::plan::{ControlPlan, RenderOptions, plan_page};
use super::surface::{CommentSurface, apply_plan};
use crate::infra::github::{GitHubClient, GitHubError};

/// How a cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The thread has no comments (or its metadata is unavailable); nothing was rendered.
    NoComments,
    /// The comments request was refused; a status message was rendered.
    NotOpen { status: u16 },
    Rendered {
        comments: usize,
        /// Page the control was armed for, if any.
        next: Option<ThreadRef>,
    },
}

pub struct ThreadCommentLoader {
    client: GitHubClient,
    options: RenderOptions,
}

impl ThreadCommentLoader {
    pub fn new(client: GitHubClient, options: RenderOptions) -> Self {
        Self { client, options }
    }

    /// Load and render `thread.page` into `surface`.
    ///
    /// The first page is only fetched once the thread's metadata reports at
    /// least one comment. Transport failures on the comments request are
    /// returned as errors and leave the surface untouched.
    pub async fn load_page<S: CommentSurface + ?Sized>(
        &self,
        thread: &ThreadRef,
        surface: &mut S,
    ) -> Result<PageOutcome, GitHubError> {
        if thread.is_first_page() {
            match self.client.get_issue_summary(&thread.id).await {
                Ok(summary) if summary.comments > 0 => {
                    debug!(%thread, comments = summary.comments, "thread has comments");
                }
                Ok(_) => {
                    debug!(%thread, "thread has no comments");
                    return Ok(PageOutcome::NoComments);
                }
                Err(err) => {
                    debug!(%thread, error = %err, "thread metadata unavailable");
                    return Ok(PageOutcome::NoComments);
                }
            }
        }

        let page = self
            .client
            .get_comments_page(&thread.id, thread.page)
            .await?;
        let plan = plan_page(thread, &page, self.client.repo(), &self.options);

        let outcome = match (&page, &plan.control) {
            (CommentsPage::NotOk { status }, _) => PageOutcome::NotOpen { status: *status },
            (CommentsPage::Ok { comments, .. }, ControlPlan::Arm(next)) => PageOutcome::Rendered {
                comments: comments.len(),
                next: Some(next.clone()),
            },
            (CommentsPage::Ok { comments, .. }, _) => PageOutcome::Rendered {
                comments: comments.len(),
                next: None,
            },
        };

        apply_plan(plan, surface);
        info!(%thread, ?outcome, "page rendered");
        Ok(outcome)
    }

    /// Activate the surface's "load more" control and run the cycle it was armed for.
    ///
    /// Returns `None` when the control is hidden or already pending. A cycle
    /// that fails or is refused re-arms the control for the same page.
    pub async fn load_more<S: CommentSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<Option<PageOutcome>, GitHubError> {
        let Some(next) = surface.activate_load_more() else {
            return Ok(None);
        };

        let result = self.load_page(&next, surface).await;
        if !matches!(result, Ok(PageOutcome::Rendered { .. })) {
            debug!(thread = %next, "re-arming load more");
            surface.arm_load_more(next);
        }
        result.map(Some)
    }

    /// Load `thread`, then keep activating "load more" until the control hides,
    /// a page is refused, or `max_pages` pages have been loaded.
    pub async fn load_all<S: CommentSurface + ?Sized>(
        &self,
        thread: &ThreadRef,
        surface: &mut S,
        max_pages: Option<u32>,
    ) -> Result<Vec<PageOutcome>, GitHubError> {
        let limit = max_pages.unwrap_or(u32::MAX).max(1);
        let mut outcomes = vec![self.load_page(thread, surface).await?];

        while outcomes.len() < limit as usize {
            match self.load_more(surface).await? {
                Some(outcome @ PageOutcome::Rendered { .. }) => outcomes.push(outcome),
                Some(outcome) => {
                    outcomes.push(outcome);
                    break;
                }
                None => break,
            }
        }

        Ok(outcomes)
    }
}
