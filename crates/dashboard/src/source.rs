//! Data source abstraction for the dashboard.
//!
//! Implemented by [`ApiClient`] for the real API; tests substitute scripted sources.

use async_trait::async_trait;
use wifi_dash_client::{ApiClient, ClientError};
use wifi_dash_core::{HouseOption, ListingQuery, SignalPage};

#[async_trait]
pub trait SignalSource: Send + Sync {
    /// Fetch one page of the cursor-paginated listing.
    async fn fetch_page(&self, query: &ListingQuery) -> Result<SignalPage, ClientError>;

    /// Fetch the house directory for the filter selector.
    async fn list_houses(&self) -> Result<Vec<HouseOption>, ClientError>;
}

#[async_trait]
impl SignalSource for ApiClient {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<SignalPage, ClientError> {
        self.list_signals(query).await
    }

    async fn list_houses(&self) -> Result<Vec<HouseOption>, ClientError> {
        ApiClient::list_houses(self).await
    }
}
