//! Cursor state machine

use super::source::PageSource;
use crate::error::{CursorError, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Stateful walker over a paginated [`PageSource`]
///
/// A new cursor always believes a first page exists and uses the zero value
/// of the token type for it; call [`Cursor::reset`] to seed the token from
/// [`PageSource::first_input`] instead.
///
/// A cursor is driven through `&mut self` and is meant for one consumer at a
/// time.
pub struct Cursor<S: PageSource> {
    /// The three operations
    source: S,
    /// Token for the next fetch
    input: S::Input,
    /// Last page fetched successfully
    last: Option<S::Page>,
    /// False once the source reported its last page
    more: bool,
}

impl<S: PageSource> Cursor<S> {
    /// Create a cursor over `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            input: S::Input::default(),
            last: None,
            more: true,
        }
    }

    /// Check if another page can be requested
    pub fn has_more(&self) -> bool {
        self.more
    }

    /// Fetch the next page and advance
    ///
    /// Once the source is exhausted this returns [`CursorError::Stop`] on
    /// every call until [`Cursor::reset`]. No page comes back with `Stop`:
    /// there is no zero-value page, and [`Cursor::last_page`] still holds the
    /// terminal page rather than a zero value.
    ///
    /// A fetch error is returned as [`CursorError::Failed`] and leaves the
    /// cursor untouched, so calling again repeats the same request.
    ///
    /// The terminal page itself is returned before exhaustion is reported.
    pub async fn next_page(&mut self, cancel: &CancellationToken) -> Result<&S::Page, S::Error> {
        if !self.more {
            trace!("Page requested from exhausted cursor");
            return Err(CursorError::Stop);
        }

        let page = match self.source.fetch(&self.input, cancel).await {
            Ok(page) => page,
            Err(e) => {
                debug!("Fetch failed, cursor not advanced");
                return Err(CursorError::Failed(e));
            }
        };

        let (input, more) = self.source.has_next(&page);
        self.input = input;
        self.more = more;
        if !more {
            debug!("Source reported its last page");
        }

        Ok(&*self.last.insert(page))
    }

    /// Hand every remaining page to `callback`
    ///
    /// Ends with `Ok(())` when the source is exhausted or the callback returns
    /// [`CursorError::Stop`]. A fetch error, or a
    /// [`CursorError::Failed`] from the callback, ends iteration and is
    /// returned unchanged.
    pub async fn iterate<F>(
        &mut self,
        cancel: &CancellationToken,
        mut callback: F,
    ) -> std::result::Result<(), S::Error>
    where
        F: FnMut(&S::Page) -> Result<(), S::Error>,
    {
        let mut pages = 0usize;

        while self.has_more() {
            let page = match self.next_page(cancel).await {
                Ok(page) => page,
                Err(CursorError::Stop) => break,
                Err(CursorError::Failed(e)) => return Err(e),
            };
            pages += 1;

            match callback(page) {
                Ok(()) => {}
                Err(CursorError::Stop) => {
                    debug!(pages, "Iteration stopped by callback");
                    return Ok(());
                }
                Err(CursorError::Failed(e)) => return Err(e),
            }
        }

        debug!(pages, "Iteration complete");
        Ok(())
    }

    /// Re-seed the token from [`PageSource::first_input`] and mark more pages
    /// available
    ///
    /// Never fetches. The last page is kept until the next successful fetch.
    pub fn reset(&mut self) {
        self.input = self.source.first_input();
        self.more = true;
        trace!("Cursor reset");
    }

    /// Token the next fetch will use
    pub fn input(&self) -> &S::Input {
        &self.input
    }

    /// Last page fetched successfully
    pub fn last_page(&self) -> Option<&S::Page> {
        self.last.as_ref()
    }

    /// Borrow the source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the cursor, returning its source
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: PageSource> std::fmt::Debug for Cursor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("more", &self.more)
            .field("has_last_page", &self.last.is_some())
            .finish_non_exhaustive()
    }
}
