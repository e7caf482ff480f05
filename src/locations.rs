//! Location endpoints
//!
//! Locations are hierarchical: each may have one parent and any number of
//! children, forming a forest. The backend rejects cycles.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Location, LocationCreate};

/// Typed client for the location endpoints
pub struct LocationsApi {
    client: ApiClient,
}

impl LocationsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all locations as a flat collection
    pub async fn list(&self) -> Result<Vec<Location>> {
        self.client.get("/locations").await
    }

    /// Fetch the location hierarchy as nested trees
    pub async fn tree(&self) -> Result<Vec<Location>> {
        self.client.get("/locations/tree").await
    }

    /// Fetch a single location with its parent and children
    pub async fn get(&self, id: &str) -> Result<Location> {
        self.client.get(&format!("/locations/{}", id)).await
    }

    /// Create a location, optionally under a parent
    pub async fn create(&self, data: &LocationCreate) -> Result<Location> {
        self.client.post("/locations", data).await
    }

    /// Update a location
    pub async fn update(&self, id: &str, data: &LocationCreate) -> Result<Location> {
        self.client.put(&format!("/locations/{}", id), data).await
    }

    /// Delete a location
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/locations/{}", id)).await
    }
}
