//! Paginated character feed.
//!
//! `Feed` is a sans-IO state machine around the [`Accumulator`]. Callers ask
//! it for a [`PageRequest`] ticket, perform the fetch however they like, and
//! hand the outcome back through [`Feed::complete`]. Only one ticket is ever
//! outstanding, so pages always merge in the order they were requested.
//!
//! ```ignore
//! let mut feed = Feed::new();
//! if let Some(request) = feed.begin_initial() {
//!     feed.load(&client, request).await;
//! }
//! while let Some(request) = feed.request_next() {
//!     feed.load(&client, request).await;
//! }
//! ```

use crate::accumulator::Accumulator;
use crate::client::PageSource;
use crate::error::{FeedError, GalleryResult};
use crate::pipeline::{derive, FilterState};
use crate::query::QueryKey;
use crate::types::{Character, CharacterPage};

/// Ticket for the single in-flight page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    seq: u64,
}

impl PageRequest {
    /// Page number to fetch
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Observable state of the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus<'a> {
    /// No data yet
    Loading,
    /// The first page failed and nothing was ever obtained
    Failed(&'a FeedError),
    /// At least one page arrived
    Ready,
}

#[derive(Debug, Clone)]
pub struct Feed {
    key: QueryKey,
    accumulator: Accumulator,
    in_flight: Option<PageRequest>,
    ready: bool,
    initial_error: Option<FeedError>,
    fetch_more_error: Option<FeedError>,
    pages_loaded: u32,
    last_appended: usize,
    next_seq: u64,
}

impl Feed {
    pub fn new() -> Self {
        let key = QueryKey::characters();
        Self {
            accumulator: Accumulator::new(key.clone()),
            key,
            in_flight: None,
            ready: false,
            initial_error: None,
            fetch_more_error: None,
            pages_loaded: 0,
            last_appended: 0,
            next_seq: 0,
        }
    }

    /// Ticket for page 1.
    ///
    /// Refused while a fetch is in flight or once data has arrived; may be
    /// re-issued after an initial failure.
    pub fn begin_initial(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || self.ready {
            return None;
        }
        self.initial_error = None;
        Some(self.issue(1))
    }

    /// Ticket for the next page, if one should be fetched now.
    ///
    /// Returns `None` before the first page arrives, when the server reported
    /// no next page, or while another fetch is in flight. Issuing a ticket
    /// clears the previous load-more error.
    pub fn request_next(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !self.ready {
            return None;
        }
        let page = self.accumulator.list().next_page()?;
        self.fetch_more_error = None;
        Some(self.issue(page))
    }

    fn issue(&mut self, page: u32) -> PageRequest {
        let request = PageRequest {
            page,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.in_flight = Some(request);
        tracing::debug!(page, seq = request.seq, "Issued page request");
        request
    }

    /// Record the outcome of a fetch.
    ///
    /// Returns `false` (and changes nothing) when `request` is not the
    /// outstanding ticket.
    pub fn complete(&mut self, request: PageRequest, outcome: GalleryResult<CharacterPage>) -> bool {
        if self.in_flight != Some(request) {
            tracing::warn!(page = request.page, seq = request.seq, "Discarding result for stale page request");
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(page) => {
                let appended = self.accumulator.accumulate(&self.key, page);
                self.ready = true;
                self.initial_error = None;
                self.pages_loaded += 1;
                self.last_appended = appended;
                tracing::info!(
                    page = request.page,
                    appended,
                    total = self.accumulator.list().len(),
                    has_more = self.has_more(),
                    "Merged characters page"
                );
            }
            Err(e) => {
                tracing::error!(page = request.page, error = %e, "Error fetching characters");
                let message = e.to_string();
                if self.ready {
                    self.fetch_more_error = Some(FeedError::SubsequentFetch {
                        page: request.page,
                        message,
                    });
                } else {
                    self.initial_error = Some(FeedError::InitialFetch { message });
                }
            }
        }
        true
    }

    /// Fetch `request` from `source` and complete it.
    pub async fn load<S: PageSource>(&mut self, source: &S, request: PageRequest) -> bool {
        let outcome = source.fetch_page(request.page).await;
        self.complete(request, outcome)
    }

    pub fn status(&self) -> FeedStatus<'_> {
        if self.ready {
            FeedStatus::Ready
        } else if let Some(ref err) = self.initial_error {
            FeedStatus::Failed(err)
        } else {
            FeedStatus::Loading
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// A fetch is outstanding
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// A fetch for a page after the first is outstanding
    pub fn is_loading_more(&self) -> bool {
        self.ready && self.in_flight.is_some()
    }

    /// The server advertised a next page
    pub fn has_more(&self) -> bool {
        self.accumulator.list().has_more()
    }

    /// Error from the most recent load-more attempt, if it failed
    pub fn fetch_more_error(&self) -> Option<&FeedError> {
        self.fetch_more_error.as_ref()
    }

    /// Everything received so far, in arrival order
    pub fn characters(&self) -> &[Character] {
        &self.accumulator.list().results
    }

    /// Entries the most recent successful fetch added
    pub fn last_appended(&self) -> usize {
        self.last_appended
    }

    /// Whether the list may load the next page on its own, without a scroll.
    ///
    /// False once a fetch came back without entries or failed, so an empty
    /// page is not refetched in a loop.
    pub fn can_auto_fill(&self) -> bool {
        self.ready
            && self.in_flight.is_none()
            && self.fetch_more_error.is_none()
            && self.last_appended > 0
            && self.has_more()
    }

    /// Number of successfully completed fetches
    pub fn pages_loaded(&self) -> u32 {
        self.pages_loaded
    }

    /// The list to display for `filter`
    pub fn derive(&self, filter: &FilterState) -> Vec<Character> {
        derive(self.characters(), filter)
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}
