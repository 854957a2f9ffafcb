use reqwest::StatusCode;
use wifi_dash_core::{HouseOption, ListingQuery, Recommendation, RoomMetrics, SignalPage};

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// Fetch one page of signal records.
    ///
    /// # Errors
    /// Transport failure, non-success status, or an undecodable body.
    pub async fn list_signals(&self, query: &ListingQuery) -> Result<SignalPage, ClientError> {
        let response = self.get_ok(&["signals"], &query.to_params()).await?;
        let page: SignalPage = Self::decode(response, "signal listing").await?;
        tracing::debug!(
            records = page.results.len(),
            has_next = page.next_cursor.is_some(),
            "signal page received"
        );
        Ok(page)
    }

    /// Fetch the house directory used by the filter selector.
    ///
    /// # Errors
    /// Transport failure, non-success status, or an undecodable body.
    pub async fn list_houses(&self) -> Result<Vec<HouseOption>, ClientError> {
        let response = self.get_ok(&["houses"], &[]).await?;
        Self::decode(response, "house directory").await
    }

    /// Fetch the latest per-room metrics of a house.
    ///
    /// # Errors
    /// Transport failure, non-success status, or an undecodable body.
    pub async fn house_metrics(&self, house_id: &str) -> Result<Vec<RoomMetrics>, ClientError> {
        let response = self.get_ok(&["houses", house_id, "metrics"], &[]).await?;
        Self::decode(response, "room metrics").await
    }

    /// Fetch the latest recommendation report of a house.
    ///
    /// `204 No Content` (no report yet) maps to `Ok(None)`.
    ///
    /// # Errors
    /// Transport failure, non-success status, or an undecodable body.
    pub async fn house_recommendation(
        &self,
        house_id: &str,
    ) -> Result<Option<Recommendation>, ClientError> {
        let response = self.get_ok(&["houses", house_id, "recommendations"], &[]).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let value: serde_json::Value = Self::decode(response, "recommendation").await?;
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ClientError::JsonParse { context: "recommendation".to_owned(), source: e })
    }
}
