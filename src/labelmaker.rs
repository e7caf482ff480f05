//! Label rendering and printing
//!
//! Label images are consumed as direct `<img src>` / navigation targets, so
//! these URLs authenticate with an `access_token` query parameter instead
//! of the Authorization header.

use crate::client::ApiClient;
use crate::error::Result;

/// Kind of record a label is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTarget {
    Item,
    Location,
    Asset,
}

impl LabelTarget {
    fn path_segment(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Location => "location",
            // the backend uses a plural segment for assets only
            Self::Asset => "assets",
        }
    }
}

/// Typed client for the labelmaker endpoints
pub struct LabelmakerApi {
    client: ApiClient,
}

impl LabelmakerApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Direct GET URL for a rendered label. With `print` set the backend
    /// sends the label to its configured printer instead of returning the
    /// image.
    pub fn url(&self, target: LabelTarget, id: &str, print: bool) -> String {
        format!(
            "{}/labelmaker/{}/{}?print={}&access_token={}",
            self.client.base_url(),
            target.path_segment(),
            id,
            print,
            self.client.token().unwrap_or_default(),
        )
    }

    /// Label image URL for an item
    pub fn item_url(&self, item_id: &str, print: bool) -> String {
        self.url(LabelTarget::Item, item_id, print)
    }

    /// Label image URL for a location
    pub fn location_url(&self, location_id: &str, print: bool) -> String {
        self.url(LabelTarget::Location, location_id, print)
    }

    /// Label image URL for an asset id
    pub fn asset_url(&self, asset_id: &str, print: bool) -> String {
        self.url(LabelTarget::Asset, asset_id, print)
    }

    async fn print(&self, target: LabelTarget, id: &str) -> Result<()> {
        self.client
            .request_get(&format!(
                "/labelmaker/{}/{}",
                target.path_segment(),
                id
            ))
            .query(&[("print".to_string(), "true".to_string())])
            .execute_empty()
            .await
    }

    /// Print an item's label on the backend's printer
    pub async fn print_item(&self, item_id: &str) -> Result<()> {
        self.print(LabelTarget::Item, item_id).await
    }

    /// Print a location's label
    pub async fn print_location(&self, location_id: &str) -> Result<()> {
        self.print(LabelTarget::Location, location_id).await
    }

    /// Print an asset label
    pub async fn print_asset(&self, asset_id: &str) -> Result<()> {
        self.print(LabelTarget::Asset, asset_id).await
    }
}
