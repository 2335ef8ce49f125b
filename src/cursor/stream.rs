//! Owned-page adapters on top of the manual primitives

use super::source::PageSource;
use super::types::Cursor;
use crate::error::CursorError;
use futures::stream::{self, Stream};
use tokio_util::sync::CancellationToken;

impl<S> Cursor<S>
where
    S: PageSource,
    S::Page: Clone,
{
    /// Turn the cursor into a stream of owned pages
    ///
    /// The stream ends when the source is exhausted. A fetch error is yielded
    /// once and ends the stream.
    pub fn into_stream(
        self,
        cancel: CancellationToken,
    ) -> impl Stream<Item = Result<S::Page, S::Error>> {
        stream::unfold(Some((self, cancel)), |state| async move {
            let Some((mut cursor, cancel)) = state else {
                return None;
            };

            let step = cursor.next_page(&cancel).await.cloned();
            match step {
                Ok(page) => Some((Ok(page), Some((cursor, cancel)))),
                Err(CursorError::Stop) => None,
                Err(CursorError::Failed(e)) => Some((Err(e), None)),
            }
        })
    }

    /// Collect every remaining page
    pub async fn collect_pages(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<Vec<S::Page>, S::Error> {
        let mut pages = Vec::new();
        self.iterate(cancel, |page| {
            pages.push(page.clone());
            Ok(())
        })
        .await?;
        Ok(pages)
    }
}
