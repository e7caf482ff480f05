//! Maintenance endpoints
//!
//! Maintenance entries belong to exactly one item. Listings can be filtered
//! by whether an entry is still scheduled or already completed; an entry
//! counts as completed once its completed date is set.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    MaintenanceEntry, MaintenanceEntryCreate, MaintenanceEntryUpdate,
    MaintenanceEntryWithDetails, MaintenanceFilterStatus,
};

/// Sum of entry costs, as shown in maintenance overviews
pub fn total_cost(entries: &[MaintenanceEntry]) -> f64 {
    entries.iter().map(|entry| entry.cost).sum()
}

fn status_query(filter: Option<MaintenanceFilterStatus>) -> Vec<(String, String)> {
    match filter {
        Some(status) => vec![("status".to_string(), status.as_str().to_string())],
        None => Vec::new(),
    }
}

/// Typed client for the maintenance endpoints
pub struct MaintenanceApi {
    client: ApiClient,
}

impl MaintenanceApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List maintenance entries across the whole group, joined with the
    /// owning item's id and name
    pub async fn list_all(
        &self,
        filter: Option<MaintenanceFilterStatus>,
    ) -> Result<Vec<MaintenanceEntryWithDetails>> {
        self.client
            .get_with_query("/maintenance", &status_query(filter))
            .await
    }

    /// List maintenance entries for one item
    pub async fn list_for_item(
        &self,
        item_id: &str,
        filter: Option<MaintenanceFilterStatus>,
    ) -> Result<Vec<MaintenanceEntry>> {
        self.client
            .get_with_query(
                &format!("/items/{}/maintenance", item_id),
                &status_query(filter),
            )
            .await
    }

    /// Create a maintenance entry for an item
    pub async fn create(
        &self,
        item_id: &str,
        data: &MaintenanceEntryCreate,
    ) -> Result<MaintenanceEntry> {
        self.client
            .post(&format!("/items/{}/maintenance", item_id), data)
            .await
    }

    /// Replace a maintenance entry
    pub async fn update(
        &self,
        entry_id: &str,
        data: &MaintenanceEntryUpdate,
    ) -> Result<MaintenanceEntry> {
        self.client
            .put(&format!("/maintenance/{}", entry_id), data)
            .await
    }

    /// Delete a maintenance entry
    pub async fn delete(&self, entry_id: &str) -> Result<()> {
        self.client.delete(&format!("/maintenance/{}", entry_id)).await
    }
}
