//! Label endpoints

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Label, LabelCreate};

/// Typed client for the label endpoints
pub struct LabelsApi {
    client: ApiClient,
}

impl LabelsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all labels
    pub async fn list(&self) -> Result<Vec<Label>> {
        self.client.get("/labels").await
    }

    /// Fetch a single label
    pub async fn get(&self, id: &str) -> Result<Label> {
        self.client.get(&format!("/labels/{}", id)).await
    }

    /// Create a label
    pub async fn create(&self, data: &LabelCreate) -> Result<Label> {
        self.client.post("/labels", data).await
    }

    /// Update a label
    pub async fn update(&self, id: &str, data: &LabelCreate) -> Result<Label> {
        self.client.put(&format!("/labels/{}", id), data).await
    }

    /// Delete a label
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/labels/{}", id)).await
    }
}
