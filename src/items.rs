//! Item endpoints: inventory records, attachments, and CSV export

use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Item, ItemCreate, ItemUpdate, ItemsPage};

/// Query parameters accepted by the item listing
#[derive(Debug, Clone, Default)]
pub struct ItemsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub order_by: Option<String>,
    pub search: Option<String>,
    pub locations: Vec<String>,
    pub labels: Vec<String>,
}

impl ItemsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number (1-based)
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the number of items per page
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the sort column hint
    pub fn order_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_string());
        self
    }

    /// Set the free-text search term
    pub fn search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    /// Restrict results to the given location ids
    pub fn locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    /// Restrict results to the given label ids
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Serialize to query pairs. Array filters repeat their key once per
    /// value; the search term travels as `q`.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("orderBy".to_string(), order_by.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("q".to_string(), search.clone()));
        }
        for location in &self.locations {
            pairs.push(("locations".to_string(), location.clone()));
        }
        for label in &self.labels {
            pairs.push(("labels".to_string(), label.clone()));
        }
        pairs
    }
}

/// Typed client for the item endpoints
pub struct ItemsApi {
    client: ApiClient,
}

impl ItemsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List items, paginated and filtered
    pub async fn list(&self, query: &ItemsQuery) -> Result<ItemsPage> {
        self.client
            .get_with_query("/items", &query.to_query())
            .await
    }

    /// Fetch a single item with its attachments and fields
    pub async fn get(&self, id: &str) -> Result<Item> {
        self.client.get(&format!("/items/{}", id)).await
    }

    /// Create an item
    pub async fn create(&self, data: &ItemCreate) -> Result<Item> {
        self.client.post("/items", data).await
    }

    /// Update an item; unset fields are left untouched
    pub async fn update(&self, id: &str, data: &ItemUpdate) -> Result<Item> {
        self.client.put(&format!("/items/{}", id), data).await
    }

    /// Delete an item
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/items/{}", id)).await
    }

    /// Upload an attachment as multipart form data.
    ///
    /// `kind` is the attachment type (e.g. `photo`); `primary` marks the
    /// item's main image. The multipart path sets no JSON Content-Type so
    /// the boundary header is generated by the HTTP client.
    pub async fn upload_attachment(
        &self,
        item_id: &str,
        file_name: &str,
        contents: Vec<u8>,
        kind: &str,
        primary: bool,
    ) -> Result<Item> {
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("name", file_name.to_string())
            .text("type", kind.to_string())
            .text("primary", primary.to_string());

        self.client
            .request_post(&format!("/items/{}/attachments", item_id))
            .multipart(form)
            .execute()
            .await
    }

    /// Delete an attachment from an item
    pub async fn delete_attachment(&self, item_id: &str, attachment_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/items/{}/attachments/{}", item_id, attachment_id))
            .await
    }

    /// Direct GET URL for an attachment, authenticated via query parameter
    /// so it can be used as an image source or download link.
    pub fn attachment_url(&self, item_id: &str, attachment_id: &str) -> String {
        format!(
            "{}/items/{}/attachments/{}?access_token={}",
            self.client.base_url(),
            item_id,
            attachment_id,
            self.client.token().unwrap_or_default(),
        )
    }

    /// Export the inventory as CSV
    pub async fn export(&self) -> Result<String> {
        self.client.request_get("/items/export").execute_text().await
    }
}
