//! Thin HTTP client over `reqwest` that hands back fully buffered responses.
//!
//! Callers get a plain [`Response`] (status, final URL, body bytes)
//! and decide for themselves what counts as success. Every failure is mapped
//! to [`TransportError`] so the rest of the crate deals with a single error type.

use std::collections::HashMap;

use crate::error::{TransportError, TransportResult};

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Delete => "DELETE",
        }
    }
}

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body as bytes
    pub body: Vec<u8>,
    /// Final request URL, kept for error messages
    pub url: String,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into [`TransportError::Status`].
    pub fn error_for_status(self) -> TransportResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::status(self.status, self.url))
        }
    }

    /// Deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> TransportResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| TransportError::decode(e.to_string()))
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: reqwest::Client,
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(client: reqwest::Client, method: Method, url: impl Into<String>) -> Self {
        Self {
            client,
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
        }
    }

    /// Append a query string pair. Pairs are sent in insertion order.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Send the request and buffer the whole response.
    ///
    /// Any status is returned as `Ok`; use [`Response::error_for_status`] to
    /// reject non-2xx answers.
    pub async fn send(self) -> TransportResult<Response> {
        log::debug!("{} {} query={:?}", self.method.as_str(), self.url, self.query);

        let mut request = match self.method {
            Method::Get => self.client.get(&self.url),
            Method::Delete => self.client.delete(&self.url),
        };

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::connection(e.to_string()))?;

        let status = response.status().as_u16();
        let url = response.url().to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::connection(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            body,
            url,
        })
    }
}

/// Shared HTTP client. Cloning is cheap and reuses the connection pool.
#[derive(Debug, Clone, Default)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.inner.clone(), Method::Get, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.inner.clone(), Method::Delete, url)
    }
}
