use super::Comment;

/// Result of requesting one page of comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentsPage {
    /// The API answered with a non-2xx status; the body is not read.
    NotOk { status: u16 },
    /// A decoded page together with its raw `Link` header, if any.
    Ok {
        comments: Vec<Comment>,
        link: Option<String>,
    },
}
