//! Pagination state machine for the signal view.
//!
//! Every public operation is split in two transitions: `begin_*` validates the
//! request, updates state and hands out a [`FetchTicket`]; [`PageController::complete`]
//! applies the response or discards it. Tickets are tagged with the filter
//! epoch they were issued under and a request sequence number, so responses
//! that arrive after the user moved on never overwrite newer state.

use serde::Serialize;
use wifi_dash_client::ClientError;
use wifi_dash_core::{Cursor, ListingQuery, SignalPage, SignalRecord};

use crate::aggregate::{ChartPoint, PageStats, chart_series};
use crate::cursor_cache::CursorCache;
use crate::error::DashboardError;

/// What triggered a fetch. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Filter,
    Navigate,
    Refresh,
}

/// A fetch issued by the controller, to be handed back to [`PageController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
    seq: u64,
    page: usize,
    kind: FetchKind,
    query: ListingQuery,
}

impl FetchTicket {
    #[must_use]
    pub const fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// 1-indexed page this ticket fetches.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub const fn kind(&self) -> FetchKind {
        self.kind
    }
}

/// Result of handing a response back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response became the displayed page.
    Applied,
    /// Same filter, but a later request was issued meanwhile. Cursor learned, page not shown.
    Superseded,
    /// Issued under a previous filter. Dropped entirely.
    Stale,
}

/// State of the signal view as rendered by views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    /// House filter, `None` for all houses.
    pub filter: Option<String>,
    /// 1-indexed number of the displayed page.
    pub page: usize,
    pub records: Vec<SignalRecord>,
    pub has_next: bool,
    pub loading: bool,
    /// Whether any page of the current filter has been shown yet.
    pub initialized: bool,
    /// Last transport failure of the current filter, cleared on success.
    pub last_error: Option<String>,
}

impl PageState {
    fn new(filter: Option<String>) -> Self {
        Self {
            filter,
            page: 1,
            records: Vec::new(),
            has_next: false,
            loading: false,
            initialized: false,
            last_error: None,
        }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub state: PageState,
    pub stats: PageStats,
    /// Displayed page in chronological order, for the trend charts.
    pub chart: Vec<ChartPoint>,
    /// Pages whose cursor is cached, i.e. pages that can be requested.
    pub known_pages: usize,
}

#[derive(Debug)]
pub struct PageController {
    cursors: CursorCache,
    state: PageState,
    epoch: u64,
    next_seq: u64,
    latest_seq: Option<u64>,
    in_flight: usize,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}

impl PageController {
    /// Controller for "all houses" with nothing loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursors: CursorCache::new(),
            state: PageState::new(None),
            epoch: 0,
            next_seq: 0,
            latest_seq: None,
            in_flight: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub const fn cursors(&self) -> &CursorCache {
        &self.cursors
    }

    #[must_use]
    pub fn stats(&self) -> PageStats {
        PageStats::from_records(&self.state.records)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            stats: self.stats(),
            chart: chart_series(&self.state.records),
            known_pages: self.cursors.len(),
        }
    }

    /// Switches the house filter and issues the fetch of its first page.
    ///
    /// Starts a new epoch even when the filter value is unchanged; everything
    /// still in flight becomes stale.
    pub fn begin_set_filter(&mut self, filter: Option<String>) -> FetchTicket {
        let filter = filter.map(|f| f.trim().to_owned()).filter(|f| !f.is_empty());
        self.epoch = self.epoch.wrapping_add(1);
        self.cursors.reset();
        self.state = PageState::new(filter);
        self.in_flight = 0;
        tracing::info!(filter = ?self.state.filter, epoch = self.epoch, "filter changed");
        self.issue(1, None, FetchKind::Filter)
    }

    /// Issues the fetch of page `n`.
    ///
    /// Allowed for `1 <= n <= page + 1` when the cursor for `n` is cached.
    pub fn begin_go_to_page(&mut self, n: usize) -> Result<FetchTicket, DashboardError> {
        let current = self.state.page;
        let reject = |reason| DashboardError::InvalidPageRequest { requested: n, current, reason };
        if n == 0 {
            return Err(reject("pages start at 1"));
        }
        if n > current.saturating_add(1) {
            return Err(reject("cannot skip pages that have not been fetched"));
        }
        if n > self.cursors.len() {
            return Err(reject("no continuation cursor for the next page"));
        }
        let cursor = self.cursors.get(n - 1)?.cloned();
        Ok(self.issue(n, cursor, FetchKind::Navigate))
    }

    pub fn begin_next_page(&mut self) -> Result<FetchTicket, DashboardError> {
        self.begin_go_to_page(self.state.page.saturating_add(1))
    }

    pub fn begin_prev_page(&mut self) -> Result<FetchTicket, DashboardError> {
        if !self.state.has_prev() {
            return Err(DashboardError::InvalidPageRequest {
                requested: 0,
                current: self.state.page,
                reason: "already on the first page",
            });
        }
        self.begin_go_to_page(self.state.page - 1)
    }

    /// Re-issues the fetch of the displayed page with its cached cursor.
    pub fn begin_refresh(&mut self) -> Result<FetchTicket, DashboardError> {
        let page = self.state.page;
        let cursor = self.cursors.get(page - 1)?.cloned();
        Ok(self.issue(page, cursor, FetchKind::Refresh))
    }

    fn issue(&mut self, page: usize, cursor: Option<Cursor>, kind: FetchKind) -> FetchTicket {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.latest_seq = Some(seq);
        self.in_flight = self.in_flight.saturating_add(1);
        self.state.loading = true;
        tracing::debug!(epoch = self.epoch, seq, page, ?kind, "fetch issued");
        FetchTicket {
            epoch: self.epoch,
            seq,
            page,
            kind,
            query: ListingQuery::page(self.state.filter.clone(), cursor),
        }
    }

    /// Hands back the response of a ticket.
    ///
    /// Stale responses are dropped silently, even failed ones. A failure of the
    /// current epoch is returned as [`DashboardError::TransportFailure`] and
    /// leaves the displayed records untouched.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<SignalPage, ClientError>,
    ) -> Result<Outcome, DashboardError> {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                page = ticket.page,
                "dropping response from previous filter"
            );
            return Ok(Outcome::Stale);
        }

        self.in_flight = self.in_flight.saturating_sub(1);
        self.state.loading = self.in_flight > 0;
        let latest = self.latest_seq == Some(ticket.seq);

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(page = ticket.page, kind = ?ticket.kind, error = %e, "page fetch failed");
                if latest {
                    self.state.last_error = Some(e.to_string());
                }
                return Err(DashboardError::TransportFailure(e));
            },
        };

        if let Some(next) = &page.next_cursor {
            self.cursors.append(ticket.page - 1, next.clone())?;
        }

        if !latest {
            tracing::debug!(page = ticket.page, seq = ticket.seq, "response superseded by a later request");
            return Ok(Outcome::Superseded);
        }

        tracing::info!(
            page = ticket.page,
            records = page.results.len(),
            has_next = page.next_cursor.is_some(),
            "page loaded"
        );
        self.state.has_next = page.next_cursor.is_some();
        self.state.records = page.results;
        self.state.page = ticket.page;
        self.state.initialized = true;
        self.state.last_error = None;
        Ok(Outcome::Applied)
    }
}
