//! Shared HTTP core for the HomeBox API
//!
//! [`ApiClient`] owns the base URL, the HTTP connection pool, and the
//! current session token. It is a cheap cloneable handle: clones share the
//! same token cell, so a login performed through one handle is visible to
//! every resource client built from the same `Homebox` instance, while two
//! separately constructed clients remain fully independent sessions.

use std::sync::{Arc, RwLock};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientOptions;
use crate::error::Result;
use crate::fetch::{Fetch, FetchBuilder};
use crate::token::{normalize_token, FileTokenStore, MemoryTokenStore, TokenStore};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: Client,
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client from the given options, loading any persisted token
    pub fn new(options: &ClientOptions) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().expect("failed to build HTTP client");

        let store: Arc<dyn TokenStore> = match &options.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path.clone())),
            None => Arc::new(MemoryTokenStore::new()),
        };

        let token = store.load().unwrap_or_else(|err| {
            log::warn!("failed to load persisted token: {}", err);
            None
        });
        if token.is_some() {
            log::debug!("session token loaded from store");
        }

        Self {
            base_url: options.base_url.clone(),
            http_client,
            token: Arc::new(RwLock::new(token)),
            store,
        }
    }

    /// Base URL of the backend, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The raw session token currently held, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// True when a session token is held
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    /// Store a new session token, stripping any `Bearer ` prefix the
    /// backend attached. Only requests issued after this call carry the
    /// new credential; in-flight requests are unaffected.
    pub fn set_token(&self, token: &str) {
        let token = normalize_token(token);
        if let Err(err) = self.store.store(&token) {
            log::warn!("failed to persist token: {}", err);
        }
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// Drop the session token from memory and from the store
    pub fn clear_token(&self) {
        if let Err(err) = self.store.clear() {
            log::warn!("failed to clear persisted token: {}", err);
        }
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Absolute URL for an endpoint path like `/items`
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        match self.token() {
            Some(token) => builder.bearer_auth(&token),
            None => builder,
        }
    }

    pub(crate) fn request_get(&self, path: &str) -> FetchBuilder<'_> {
        self.authorize(Fetch::get(&self.http_client, &self.endpoint(path)))
    }

    pub(crate) fn request_post(&self, path: &str) -> FetchBuilder<'_> {
        self.authorize(Fetch::post(&self.http_client, &self.endpoint(path)))
    }

    pub(crate) fn request_put(&self, path: &str) -> FetchBuilder<'_> {
        self.authorize(Fetch::put(&self.http_client, &self.endpoint(path)))
    }

    pub(crate) fn request_delete(&self, path: &str) -> FetchBuilder<'_> {
        self.authorize(Fetch::delete(&self.http_client, &self.endpoint(path)))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request_get(path).execute().await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        self.request_get(path).query(query).execute().await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request_post(path).json(body)?.execute().await
    }

    /// POST whose success response carries no body (201/204)
    pub(crate) async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.request_post(path).json(body)?.execute_empty().await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request_put(path).json(body)?.execute().await
    }

    pub(crate) async fn put_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.request_put(path).json(body)?.execute_empty().await
    }

    /// DELETE; the backend answers 204 with no body
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.request_delete(path).execute_empty().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn persisted_token_is_loaded_at_construction() {
        tokio_test::block_on(async {
            let mock_server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path("/ping"))
                .and(header("Authorization", "Bearer persisted"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
                .expect(1)
                .mount(&mock_server)
                .await;

            let dir = tempfile::tempdir().unwrap();
            let token_file = dir.path().join("auth_token");
            std::fs::write(&token_file, "persisted").unwrap();

            let options = ClientOptions::default()
                .with_base_url(&mock_server.uri())
                .with_token_file(&token_file);
            let client = ApiClient::new(&options);

            assert!(client.has_token());
            let _: serde_json::Value = client.get("/ping").await.unwrap();
            mock_server.verify().await;
        });
    }

    #[test]
    fn clones_share_the_token_cell() {
        let options = ClientOptions::default().with_base_url("http://example.com/api/v1");
        let client = ApiClient::new(&options);
        let clone = client.clone();

        client.set_token("Bearer shared");

        assert_eq!(clone.token(), Some("shared".to_string()));

        clone.clear_token();
        assert!(!client.has_token());
    }
}
