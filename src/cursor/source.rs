//! Page sources
//!
//! The three operations a cursor is built from.

use async_trait::async_trait;
use std::future::Future;
use std::marker::PhantomData;
use tokio_util::sync::CancellationToken;

/// Capability driving a [`Cursor`](super::Cursor)
///
/// - `first_input` seeds a fresh traversal
/// - `fetch` performs one page fetch for a token
/// - `has_next` inspects a fetched page and returns the token for the next
///   fetch together with whether another page exists
///
/// `fetch` must respect the cancellation token. Whatever it returns as an
/// error reaches the caller unchanged.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Continuation token (offset, page token, URL, ...)
    type Input: Default + Send + Sync;
    /// Page payload
    type Page: Send + Sync;
    /// Fetch error
    type Error: Send;

    /// Token for the first page of a traversal
    fn first_input(&self) -> Self::Input;

    /// Fetch the page described by `input`
    async fn fetch(
        &self,
        input: &Self::Input,
        cancel: &CancellationToken,
    ) -> Result<Self::Page, Self::Error>;

    /// Next token, and `false` once `page` is the last one
    ///
    /// When the flag is `false` the returned token is never used for a fetch.
    fn has_next(&self, page: &Self::Page) -> (Self::Input, bool);
}

/// A [`PageSource`] assembled from three closures
///
/// `fetch` receives an owned copy of the token and of the cancellation
/// token, so the future it returns can be `'static`.
pub struct FnSource<I, P, E, First, Fetch, Next> {
    first: First,
    fetch: Fetch,
    has_next: Next,
    _types: PhantomData<fn() -> (I, P, E)>,
}

impl<I, P, E, First, Fetch, Next> FnSource<I, P, E, First, Fetch, Next> {
    /// Create a source from its three operations
    pub fn new<Fut>(first: First, fetch: Fetch, has_next: Next) -> Self
    where
        First: Fn() -> I,
        Fetch: Fn(I, CancellationToken) -> Fut,
        Fut: Future<Output = Result<P, E>>,
        Next: Fn(&P) -> (I, bool),
    {
        Self {
            first,
            fetch,
            has_next,
            _types: PhantomData,
        }
    }
}

impl<I, P, E, First, Fetch, Next> std::fmt::Debug for FnSource<I, P, E, First, Fetch, Next> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

#[async_trait]
impl<I, P, E, First, Fetch, Fut, Next> PageSource for FnSource<I, P, E, First, Fetch, Next>
where
    I: Default + Clone + Send + Sync + 'static,
    P: Send + Sync + 'static,
    E: Send + 'static,
    First: Fn() -> I + Send + Sync,
    Fetch: Fn(I, CancellationToken) -> Fut + Send + Sync,
    Fut: Future<Output = Result<P, E>> + Send + 'static,
    Next: Fn(&P) -> (I, bool) + Send + Sync,
{
    type Input = I;
    type Page = P;
    type Error = E;

    fn first_input(&self) -> I {
        (self.first)()
    }

    async fn fetch(&self, input: &I, cancel: &CancellationToken) -> Result<P, E> {
        (self.fetch)(input.clone(), cancel.clone()).await
    }

    fn has_next(&self, page: &P) -> (I, bool) {
        (self.has_next)(page)
    }
}

/// Shorthand for [`FnSource::new`]
///
/// ```rust,ignore
/// let source = cursor_fn(
///     || 0u32,
///     |offset, _cancel| async move { api.list(offset, 50).await },
///     |page: &Vec<Item>| (page.len() as u32, !page.is_empty()),
/// );
/// ```
pub fn cursor_fn<I, P, E, First, Fetch, Fut, Next>(
    first: First,
    fetch: Fetch,
    has_next: Next,
) -> FnSource<I, P, E, First, Fetch, Next>
where
    First: Fn() -> I,
    Fetch: Fn(I, CancellationToken) -> Fut,
    Fut: Future<Output = Result<P, E>>,
    Next: Fn(&P) -> (I, bool),
{
    FnSource::new(first, fetch, has_next)
}
