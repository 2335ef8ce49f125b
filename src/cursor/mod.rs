//! Cursor module
//!
//! Drives a paginated source one page at a time.
//!
//! # Overview
//!
//! A [`Cursor`] owns the iteration state of a single traversal: the token to
//! use for the next fetch, the last page it fetched, and whether more pages
//! are expected. What a token or a page looks like, how a page is fetched and
//! how the next token is derived from it are supplied by a [`PageSource`].
//!
//! Two consumption modes share the same advancement step:
//!
//! - **Manual**: poll [`Cursor::has_more`] and pull with [`Cursor::next_page`]
//! - **Driven**: [`Cursor::iterate`] hands every page to a callback until the
//!   source is exhausted, the callback returns
//!   [`CursorError::Stop`](crate::CursorError::Stop), or an error occurs
//!
//! ```rust,ignore
//! let mut cursor = Cursor::new(source);
//! let cancel = CancellationToken::new();
//!
//! while cursor.has_more() {
//!     let page = cursor.next_page(&cancel).await?;
//!     println!("{} records", page.len());
//! }
//! ```

mod source;
mod stream;
mod types;

pub use source::{cursor_fn, FnSource, PageSource};
pub use types::Cursor;
