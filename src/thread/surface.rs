//! The page region the loader renders into.
//!
//! A surface owns the only state a thread has between cycles: the blocks
//! rendered so far and the "load more" control.

use super::models::ThreadRef;
use super::plan::{ControlPlan, RenderPlan};

pub const LIST_ELEMENT_ID: &str = "gh-comments-list";
pub const LOAD_MORE_ELEMENT_ID: &str = "gh-load-comments";

/// State of the "load more" control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadMore {
    #[default]
    Hidden,
    /// Visible; activating it loads this page.
    Armed(ThreadRef),
    /// Activated; the page it points at is being loaded.
    Pending(ThreadRef),
}

pub trait CommentSurface {
    /// Append a fragment after everything rendered so far.
    fn append_block(&mut self, html: &str);

    fn arm_load_more(&mut self, next: ThreadRef);

    fn hide_load_more(&mut self);

    /// Activate the control. Yields the page to load only when the control is
    /// armed, and leaves it pending until it is re-armed or hidden.
    fn activate_load_more(&mut self) -> Option<ThreadRef>;
}

pub fn apply_plan<S: CommentSurface + ?Sized>(plan: RenderPlan, surface: &mut S) {
    for block in &plan.blocks {
        surface.append_block(block);
    }
    match plan.control {
        ControlPlan::Keep => {}
        ControlPlan::Arm(next) => surface.arm_load_more(next),
        ControlPlan::Hide => surface.hide_load_more(),
    }
}

/// In-memory surface that serialises to the comments section markup.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    blocks: Vec<String>,
    load_more: LoadMore,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    #[cfg(test)]
    pub fn load_more(&self) -> &LoadMore {
        &self.load_more
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The comment list container followed by the load-more button.
    pub fn to_html(&self) -> String {
        let mut html = format!("<div id=\"{LIST_ELEMENT_ID}\">\n");
        for block in &self.blocks {
            html.push_str(block);
            html.push('\n');
        }
        html.push_str("</div>\n");

        let attrs = match &self.load_more {
            LoadMore::Hidden => " style=\"display: none\"".to_string(),
            LoadMore::Armed(next) => format!(
                " data-thread-id=\"{}\" data-next-page=\"{}\"",
                html_escape::encode_double_quoted_attribute(&next.id),
                next.page
            ),
            LoadMore::Pending(next) => format!(
                " disabled data-thread-id=\"{}\" data-next-page=\"{}\"",
                html_escape::encode_double_quoted_attribute(&next.id),
                next.page
            ),
        };
        html.push_str(&format!(
            "<button id=\"{LOAD_MORE_ELEMENT_ID}\"{attrs}>Load more comments</button>\n"
        ));
        html
    }
}

impl CommentSurface for HtmlSurface {
    fn append_block(&mut self, html: &str) {
        self.blocks.push(html.to_string());
    }

    fn arm_load_more(&mut self, next: ThreadRef) {
        self.load_more = LoadMore::Armed(next);
    }

    fn hide_load_more(&mut self) {
        self.load_more = LoadMore::Hidden;
    }

    fn activate_load_more(&mut self) -> Option<ThreadRef> {
        match std::mem::take(&mut self.load_more) {
            LoadMore::Armed(next) => {
                self.load_more = LoadMore::Pending(next.clone());
                Some(next)
            }
            other => {
                self.load_more = other;
                None
            }
        }
    }
}
