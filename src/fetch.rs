//! HTTP request wrapper for the HomeBox API
//!
//! Builds requests, attaches the bearer token, and normalizes non-2xx
//! responses into [`Error::Api`]. Every failure leaving this module is a
//! typed [`Error`]; callers never see an unstructured one.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_pairs: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    multipart: Option<Form>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder for a JSON request
    pub fn new(client: &'a Client, url: &str, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            client,
            url: url.to_string(),
            method,
            headers,
            query_pairs: Vec::new(),
            body: None,
            multipart: None,
        }
    }

    /// Add bearer token authentication to the request
    pub fn bearer_auth(mut self, token: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
            self.headers.insert(AUTHORIZATION, value);
        }
        self
    }

    /// Add query parameters. Pairs are appended in order, so repeated keys
    /// serialize as repeated parameters (used by array filters).
    pub fn query(mut self, pairs: &[(String, String)]) -> Self {
        self.query_pairs.extend(pairs.iter().cloned());
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// Replace the JSON body with a multipart form. The Content-Type header
    /// is dropped so the HTTP client sets the multipart boundary itself.
    pub fn multipart(mut self, form: Form) -> Self {
        self.headers.remove(CONTENT_TYPE);
        self.multipart = Some(form);
        self
    }

    /// Build the request
    fn build(self) -> Result<RequestBuilder> {
        let mut url = Url::parse(&self.url)?;

        if !self.query_pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &self.query_pairs {
                query.append_pair(key, value);
            }
        }

        let mut req = self.client.request(self.method, url.as_str());
        req = req.headers(self.headers);

        if let Some(form) = self.multipart {
            req = req.multipart(form);
        } else if let Some(body) = self.body {
            req = req.body(body);
        }

        Ok(req)
    }

    /// Execute the request and return the checked response
    async fn send(self) -> Result<Response> {
        let response = self.build()?.send().await?;
        check_status(response).await
    }

    /// Execute the request and parse the 2xx response body as JSON
    pub async fn execute<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?;
        Ok(response.json::<T>().await?)
    }

    /// Execute the request, discarding any response body.
    ///
    /// This is the path for endpoints answering 204 No Content; the body is
    /// never parsed, whatever the verb was.
    pub async fn execute_empty(self) -> Result<()> {
        self.send().await?;
        Ok(())
    }

    /// Execute the request and return the raw 2xx body as text
    pub async fn execute_text(self) -> Result<String> {
        let response = self.send().await?;
        Ok(response.text().await?)
    }
}

/// Normalize a non-2xx response into `Error::Api`
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    log::debug!("request failed with status {}: {}", status, body);
    Err(Error::from_response(status, &body))
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::PUT)
    }

    /// Create a DELETE request
    pub fn delete<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::DELETE)
    }
}
