mod comment;
mod issue;
mod page;
mod thread_ref;

pub use comment::Comment;
pub use issue::IssueSummary;
pub use page::CommentsPage;
pub use thread_ref::ThreadRef;
