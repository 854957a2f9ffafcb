//! Async driver binding a [`PageController`] to a [`SignalSource`].
//!
//! The controller lock is only held while a transition runs, never across a
//! request, so overlapping operations from the same task interleave the way
//! UI events do.

use tokio::sync::Mutex;
use wifi_dash_core::HouseOption;

use crate::controller::{FetchTicket, Outcome, PageController, Snapshot};
use crate::error::DashboardError;
use crate::source::SignalSource;

pub struct Dashboard<S> {
    source: S,
    controller: Mutex<PageController>,
    houses: Mutex<Vec<HouseOption>>,
}

impl<S: SignalSource> Dashboard<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            controller: Mutex::new(PageController::new()),
            houses: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Loads the house directory. Failures leave the selector empty.
    pub async fn load_houses(&self) -> Vec<HouseOption> {
        let houses = match self.source.list_houses().await {
            Ok(houses) => houses,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load house directory");
                Vec::new()
            },
        };
        *self.houses.lock().await = houses.clone();
        houses
    }

    pub async fn houses(&self) -> Vec<HouseOption> {
        self.houses.lock().await.clone()
    }

    /// Mount: loads the house directory, then the first page of all houses.
    pub async fn mount(&self) -> Result<Outcome, DashboardError> {
        self.load_houses().await;
        self.set_filter(None).await
    }

    pub async fn set_filter(&self, filter: Option<String>) -> Result<Outcome, DashboardError> {
        let ticket = self.controller.lock().await.begin_set_filter(filter);
        self.run(ticket).await
    }

    pub async fn go_to_page(&self, n: usize) -> Result<Outcome, DashboardError> {
        let ticket = self.controller.lock().await.begin_go_to_page(n)?;
        self.run(ticket).await
    }

    pub async fn next_page(&self) -> Result<Outcome, DashboardError> {
        let ticket = self.controller.lock().await.begin_next_page()?;
        self.run(ticket).await
    }

    pub async fn prev_page(&self) -> Result<Outcome, DashboardError> {
        let ticket = self.controller.lock().await.begin_prev_page()?;
        self.run(ticket).await
    }

    pub async fn refresh(&self) -> Result<Outcome, DashboardError> {
        let ticket = self.controller.lock().await.begin_refresh()?;
        self.run(ticket).await
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.controller.lock().await.snapshot()
    }

    /// Cursor cache length, sentinel included.
    pub async fn cached_cursors(&self) -> usize {
        self.controller.lock().await.cursors().len()
    }

    async fn run(&self, ticket: FetchTicket) -> Result<Outcome, DashboardError> {
        let result = self.source.fetch_page(ticket.query()).await;
        self.controller.lock().await.complete(ticket, result)
    }
}
