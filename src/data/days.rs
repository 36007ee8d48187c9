//! Trip-planner days API client
//!
//! This module talks to the `/days` endpoints of the trip-planner server:
//! listing the trip's days, creating the next day, and deleting a day by
//! its server id.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use super::DayRecord;

/// Errors that can occur when talking to the days API
#[derive(Debug, Error)]
pub enum DaysError {
    /// HTTP request failed or the server returned an error status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Request body for creating a day
///
/// The client sends the next sequential number as a hint; the record the
/// server returns carries the authoritative id and number.
#[derive(Debug, Serialize)]
struct CreateDayBody {
    number: u32,
}

/// Client for the trip-planner days API
#[derive(Debug, Clone)]
pub struct DaysClient {
    client: Client,
    base_url: String,
}

impl DaysClient {
    /// Create a new DaysClient for the given server base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a new DaysClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The base URL this client talks to
    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the days collection endpoint
    fn days_url(&self) -> String {
        format!("{}/days", self.base_url.trim_end_matches('/'))
    }

    /// URL of a single day endpoint
    fn day_url(&self, id: u64) -> String {
        format!("{}/{}", self.days_url(), id)
    }

    /// Fetch all days of the trip, in server order
    ///
    /// # Returns
    /// * `Ok(Vec<DayRecord>)` - The trip's days as the server lists them
    /// * `Err(DaysError)` - If the request or parsing fails
    pub async fn list_days(&self) -> Result<Vec<DayRecord>, DaysError> {
        let response = self
            .client
            .get(self.days_url())
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let records: Vec<DayRecord> = serde_json::from_str(&text)?;
        Ok(records)
    }

    /// Create a new day at the end of the trip
    ///
    /// # Arguments
    /// * `number` - The next sequential day number as the client sees it
    ///
    /// # Returns
    /// * `Ok(DayRecord)` - The created day with its server-assigned id
    /// * `Err(DaysError)` - If the request or parsing fails
    pub async fn create_day(&self, number: u32) -> Result<DayRecord, DaysError> {
        let response = self
            .client
            .post(self.days_url())
            .json(&CreateDayBody { number })
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let record: DayRecord = serde_json::from_str(&text)?;
        Ok(record)
    }

    /// Delete a day by its server id
    ///
    /// Any 2xx response counts as success; the body is ignored.
    pub async fn delete_day(&self, id: u64) -> Result<(), DaysError> {
        self.client
            .delete(self.day_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
