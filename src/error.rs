//! Error types for page-cursor
//!
//! The cursor is generic over the error type of its source and adds exactly
//! one value of its own, the stop sentinel. Both live in [`CursorError`].

use thiserror::Error;

/// Error returned by cursor operations
///
/// [`CursorError::Stop`] is the single sentinel of this crate. It is raised
/// at two sites:
///
/// - by the cursor, when a page is requested after the source reported its
///   last page
/// - by an [`iterate`](crate::Cursor::iterate) callback, to end iteration
///   early
///
/// Both sites produce the same value, so one `is_stop()` check covers both.
/// Everything else is [`CursorError::Failed`], carrying the source's or the
/// callback's error untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError<E> {
    /// No more pages, or the callback asked to stop
    #[error("iterator stopped")]
    Stop,

    /// A fetch or callback failure
    #[error("{0}")]
    Failed(E),
}

impl<E> CursorError<E> {
    /// Check if this is the stop sentinel
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }

    /// Check if this carries a real failure
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Borrow the underlying failure, if any
    pub fn as_failed(&self) -> Option<&E> {
        match self {
            Self::Stop => None,
            Self::Failed(e) => Some(e),
        }
    }

    /// Take the underlying failure, if any
    pub fn into_failed(self) -> Option<E> {
        match self {
            Self::Stop => None,
            Self::Failed(e) => Some(e),
        }
    }

    /// Map the failure type, keeping the sentinel as is
    pub fn map<F, T>(self, f: F) -> CursorError<T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Stop => CursorError::Stop,
            Self::Failed(e) => CursorError::Failed(f(e)),
        }
    }
}

impl<E> From<E> for CursorError<E> {
    fn from(e: E) -> Self {
        Self::Failed(e)
    }
}

/// Result type alias for cursor operations
pub type Result<T, E> = std::result::Result<T, CursorError<E>>;
