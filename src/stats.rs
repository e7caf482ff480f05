//! Read-only summary endpoints

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{GroupStatistics, ServerStatus};

/// Typed client for statistics and the health probe
pub struct StatsApi {
    client: ApiClient,
}

impl StatsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Group-wide inventory totals
    pub async fn group_statistics(&self) -> Result<GroupStatistics> {
        self.client.get("/groups/statistics").await
    }

    /// Backend health probe; requires no authentication
    pub async fn status(&self) -> Result<ServerStatus> {
        self.client.get("/status").await
    }
}
