//! HTTP transport seam between repositories and the backend.
//!
//! # Responsibility
//! - Describe one JSON request/response exchange independently of the client.
//! - Provide the production `reqwest` implementation.
//!
//! # Invariants
//! - Non-2xx statuses are returned as responses; only connection-level
//!   failures are `TransportError`.
//! - One `send` is one attempt. Nothing here retries.

use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Ordered query pairs; keys may repeat (`sort`).
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Correlation id written to every log line about this request.
    pub request_id: Uuid,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
            request_id: Uuid::new_v4(),
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// One received response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are lower-cased.
    pub headers: BTreeMap<String, String>,
    /// Raw body text; `None` when the body is empty.
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }
}

/// Connection-level failure: the backend produced no HTTP response.
#[derive(Debug)]
pub enum TransportError {
    Connect(String),
    Timeout(String),
    Client(reqwest::Error),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect(url) => write!(f, "cannot connect to `{url}`"),
            Self::Timeout(url) => write!(f, "request to `{url}` timed out"),
            Self::Client(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Client(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        let url = value
            .url()
            .map(|url| url.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        if value.is_timeout() {
            Self::Timeout(url)
        } else if value.is_connect() {
            Self::Connect(url)
        } else {
            Self::Client(value)
        }
    }
}

/// Sends requests to the backend.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with an optional per-request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = collect_headers(
            response
                .headers()
                .iter()
                .filter_map(|(name, value)| value.to_str().ok().map(|text| (name.as_str(), text))),
        );
        let text = response.text().await?;

        debug!(
            "event=http_exchange module=transport status=ok request_id={} method={} http_status={} body_bytes={}",
            request.request_id,
            request.method,
            status,
            text.len()
        );

        Ok(HttpResponse {
            status,
            headers,
            body: if text.is_empty() { None } else { Some(text) },
        })
    }
}

/// Lower-cases header names and joins repeated headers with `, `.
fn collect_headers<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in pairs {
        headers
            .entry(name.to_ascii_lowercase())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::{collect_headers, HttpMethod, HttpRequest, HttpResponse};
    use crate::repo::pagination::PageLinks;
    use std::collections::BTreeMap;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = BTreeMap::new();
        headers.insert("x-total-count".to_string(), "12".to_string());
        let response = HttpResponse {
            status: 200,
            headers,
            body: None,
        };
        assert_eq!(response.header("X-Total-Count"), Some("12"));
        assert!(response.is_success());
    }

    #[test]
    fn each_request_gets_its_own_correlation_id() {
        let first = HttpRequest::new(HttpMethod::Get, "http://localhost/api/a");
        let second = HttpRequest::new(HttpMethod::Get, "http://localhost/api/a");
        assert_ne!(first.request_id, second.request_id);
        assert_eq!(first.method.as_str(), "GET");
    }

    #[test]
    fn repeated_headers_are_joined_not_replaced() {
        let headers = collect_headers([
            ("Link", r#"<http://bi.test/api/a?page=1&size=20>; rel="next""#),
            ("X-Total-Count", "41"),
            ("link", r#"<http://bi.test/api/a?page=2&size=20>; rel="last""#),
        ]);
        let response = HttpResponse {
            status: 200,
            headers,
            body: None,
        };

        assert_eq!(response.header("x-total-count"), Some("41"));
        let links = PageLinks::parse(response.header("link").unwrap());
        assert_eq!(links.next, Some(1));
        assert_eq!(links.last, Some(2));
    }
}
