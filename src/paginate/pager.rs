//! The auto-pagination loop

use super::types::{PageFetcher, PageOutput, PageRequest, Paged, PagedResponse, PagerConfig};
use crate::error::Result;
use crate::types::OptionStringExt;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

/// Drives a paged operation to completion
///
/// Issues strictly sequential fetches (each continuation token depends
/// on the prior response). Consumers of the streams may stop early;
/// dropping a stream issues no further fetches.
pub struct Pager<F: PageFetcher> {
    fetcher: F,
    config: PagerConfig,
}

struct DriveState<F: PageFetcher> {
    fetcher: F,
    config: PagerConfig,
    token: Option<String>,
    remaining: Option<usize>,
    items_fetched: usize,
    finished: bool,
}

impl<F: PageFetcher> DriveState<F> {
    /// Page size hint for the next call: `min(server max, remaining
    /// budget)` when a budget is set, the caller's hint otherwise.
    fn page_size_hint(&self) -> Option<u32> {
        match self.remaining {
            Some(remaining) => {
                let cap = self
                    .config
                    .page_size
                    .map_or(self.config.server_page_max, |size| {
                        size.min(self.config.server_page_max)
                    });
                Some(cap.min(u32::try_from(remaining).unwrap_or(u32::MAX)))
            }
            None => self.config.page_size,
        }
    }
}

impl<F: PageFetcher> Pager<F> {
    /// Create a pager over the given fetcher
    pub fn new(fetcher: F, config: PagerConfig) -> Self {
        Self { fetcher, config }
    }

    /// Lazy stream of pages
    ///
    /// Each poll fetches at most one page. The stream ends when the
    /// service returns no continuation token, the item budget is
    /// exhausted, or (in manual mode) after the first page. A fetch
    /// error on a later page of a budgeted run ends the stream instead
    /// of surfacing; everything already emitted stands.
    pub fn pages(self) -> impl Stream<Item = Result<PageOutput<F::Response>>> {
        // A zero budget means no fetches at all; manual mode still
        // issues its single fetch.
        let finished = !self.config.manual && self.config.max_items == Some(0);
        let state = DriveState {
            token: self.config.starting_token.clone(),
            remaining: self.config.max_items,
            items_fetched: 0,
            finished,
            fetcher: self.fetcher,
            config: self.config,
        };

        stream::try_unfold(state, |mut st| async move {
            if st.finished {
                return Ok(None);
            }

            let request = PageRequest {
                token: st.token.clone(),
                page_size: st.page_size_hint(),
            };

            let response = match st.fetcher.fetch_page(request).await {
                Ok(response) => response,
                Err(e) => {
                    // Nothing retrieved yet, or an unbudgeted run:
                    // surface the error. A budgeted run that already
                    // produced items keeps its partial result.
                    if st.items_fetched == 0 || st.remaining.is_none() {
                        return Err(e);
                    }
                    debug!("page fetch failed after {} items, keeping partial result", st.items_fetched);
                    return Ok(None);
                }
            };

            let received = response.items().len();
            let next_token = response.next_token().map(str::to_owned).none_if_empty();
            let allowed = st.remaining.map_or(received, |remaining| remaining.min(received));
            let items = response.items()[..allowed].to_vec();

            st.items_fetched += received;
            if let Some(remaining) = st.remaining.as_mut() {
                *remaining = remaining.saturating_sub(received);
            }
            st.token = next_token.clone();
            st.finished = st.config.manual || st.token.is_none() || st.remaining == Some(0);

            let output = PageOutput {
                items,
                next_token,
                response,
            };
            Ok(Some((output, st)))
        })
    }

    /// Lazy stream of items across all pages
    pub fn into_items(self) -> impl Stream<Item = Result<<F::Response as PagedResponse>::Item>> {
        self.pages()
            .map_ok(|page| stream::iter(page.items.into_iter().map(Ok::<_, crate::error::Error>)))
            .try_flatten()
    }

    /// Run the loop to completion and collect the result
    pub async fn run(self) -> Result<Paged<F::Response>> {
        let mut next_token = self.config.starting_token.clone();
        let mut items = Vec::new();
        let mut responses = Vec::new();

        let mut pages = Box::pin(self.pages());
        while let Some(page) = pages.try_next().await? {
            let PageOutput {
                items: page_items,
                next_token: token,
                response,
            } = page;
            items.extend(page_items);
            responses.push(response);
            next_token = token;
        }

        Ok(Paged {
            items,
            responses,
            next_token,
        })
    }
}
