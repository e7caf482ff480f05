//! HomeBox Rust Client Library
//!
//! A typed, async client for the HomeBox inventory management API: items,
//! locations, labels, maintenance records, attachments, label printing, and
//! session management over JSON-over-HTTP with bearer tokens.
//!
//! # Example
//!
//! ```no_run
//! use homebox_client::{Homebox, config::ClientOptions};
//!
//! # async fn run() -> homebox_client::error::Result<()> {
//! let homebox = Homebox::new_with_options(
//!     ClientOptions::default().with_base_url("http://localhost:7745/api/v1"),
//! );
//!
//! let mut session = homebox.session();
//! session.initialize().await;
//! if session.login("user@example.com", "secret").await {
//!     let page = homebox.items().list(&Default::default()).await?;
//!     println!("{} items", page.total);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod items;
pub mod labelmaker;
pub mod labels;
pub mod locations;
pub mod maintenance;
pub mod models;
pub mod stats;
pub mod token;

use crate::auth::{AuthApi, Session};
use crate::client::ApiClient;
use crate::config::ClientOptions;
use crate::items::ItemsApi;
use crate::labelmaker::LabelmakerApi;
use crate::labels::LabelsApi;
use crate::locations::LocationsApi;
use crate::maintenance::MaintenanceApi;
use crate::stats::StatsApi;

/// The main entry point for the HomeBox client.
///
/// Owns one [`ApiClient`] and hands out typed per-resource handles sharing
/// its session token. Two separately constructed `Homebox` values are fully
/// independent sessions.
pub struct Homebox {
    client: ApiClient,
    options: ClientOptions,
}

impl Homebox {
    /// Create a client using [`ClientOptions::default`], which reads the
    /// base URL from the `HOMEBOX_API_URL` environment variable.
    pub fn new() -> Self {
        Self::new_with_options(ClientOptions::default())
    }

    /// Create a client with custom options
    pub fn new_with_options(options: ClientOptions) -> Self {
        let client = ApiClient::new(&options);
        Self { client, options }
    }

    /// The options this client was built with
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// The shared HTTP core, for direct token inspection
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Authentication and user endpoints
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.client.clone())
    }

    /// A fresh session controller bound to this client's token
    pub fn session(&self) -> Session {
        Session::new(self.client.clone())
    }

    /// Item endpoints
    pub fn items(&self) -> ItemsApi {
        ItemsApi::new(self.client.clone())
    }

    /// Location endpoints
    pub fn locations(&self) -> LocationsApi {
        LocationsApi::new(self.client.clone())
    }

    /// Label endpoints
    pub fn labels(&self) -> LabelsApi {
        LabelsApi::new(self.client.clone())
    }

    /// Maintenance endpoints
    pub fn maintenance(&self) -> MaintenanceApi {
        MaintenanceApi::new(self.client.clone())
    }

    /// Labelmaker endpoints
    pub fn labelmaker(&self) -> LabelmakerApi {
        LabelmakerApi::new(self.client.clone())
    }

    /// Statistics and health endpoints
    pub fn stats(&self) -> StatsApi {
        StatsApi::new(self.client.clone())
    }
}

impl Default for Homebox {
    fn default() -> Self {
        Self::new()
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::auth::{Session, SessionState};
    pub use crate::config::ClientOptions;
    pub use crate::error::{Error, Result};
    pub use crate::items::ItemsQuery;
    pub use crate::models::*;
    pub use crate::Homebox;
}
