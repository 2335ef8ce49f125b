// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]

//! # page-cursor
//!
//! A generic cursor over paginated data sources.
//!
//! ## Features
//!
//! - **Generic Cursor**: One traversal state machine for any token and page type
//! - **Manual or Driven**: Pull pages with `next_page` or hand a callback to `iterate`
//! - **One Stop Sentinel**: `CursorError::Stop` for exhaustion and for early exit
//! - **Cancellation**: Every fetch observes a `CancellationToken`
//! - **Streams**: Turn a cursor into a `futures` stream of owned pages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use page_cursor::{cursor_fn, Cursor};
//! use tokio_util::sync::CancellationToken;
//!
//! let source = cursor_fn(
//!     || 0_i64,
//!     |last_seen, cancel| async move { api.list_after(last_seen, &cancel).await },
//!     |page: &Vec<Item>| match page.last() {
//!         Some(item) => (item.id, true),
//!         None => (0, false),
//!     },
//! );
//!
//! let mut cursor = Cursor::new(source);
//! cursor
//!     .iterate(&CancellationToken::new(), |page| {
//!         println!("{} items", page.len());
//!         Ok(())
//!     })
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Cursor<S>                           │
//! │  next_page(cancel)   iterate(cancel, f)   reset()   has_more │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ PageSource
//!              ┌─────────────────┴─────────────────┐
//!              │                                   │
//!      ┌───────┴───────┐                 ┌─────────┴─────────┐
//!      │   FnSource    │                 │   your own impl   │
//!      │  (closures)   │                 │ (HTTP, database)  │
//!      └───────────────┘                 └───────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Generic paginated cursor
pub mod cursor;

// ============================================================================
// Re-exports
// ============================================================================

pub use cursor::{cursor_fn, Cursor, FnSource, PageSource};
pub use error::{CursorError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
