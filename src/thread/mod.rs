//! Comment thread loading and rendering.
//!
//! A thread is the comment list of the GitHub issue a page points at. Each
//! call to `ThreadCommentLoader::load_page` fetches one page of it, renders
//! that page onto a `CommentSurface`, and arms or hides the surface's
//! "load more" control depending on the response's `Link` header.

pub mod host;
pub mod loader;
pub mod models;
pub mod plan;
pub mod surface;
mod time;

pub use host::find_thread_id;
pub use loader::{PageOutcome, ThreadCommentLoader};
pub use models::ThreadRef;
pub use plan::RenderOptions;
pub use surface::HtmlSurface;
