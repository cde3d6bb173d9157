//! Content module - normalized posts, pages and rich text bodies

mod markdown;
mod page;
mod post;
mod rich_text;

pub use markdown::MarkdownRenderer;
pub use page::{collect_pages, Pages, SplitPage};
pub use post::{Author, Image, Post};
pub use rich_text::{Mark, Node, RichText};
