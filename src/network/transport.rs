use std::borrow::Cow;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use log::trace;
use url::Url;

use super::connection::Method;
use super::header::Header;

/// Body of an outgoing request. Text is sent verbatim, it is never parsed
/// or validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestPayload {
    #[default]
    Empty,
    Bytes(Bytes),
    Text(String),
}

impl RequestPayload {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RequestPayload::Empty => &[],
            RequestPayload::Bytes(bytes) => bytes.as_ref(),
            RequestPayload::Text(text) => text.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for RequestPayload {
    fn from(text: &str) -> Self {
        RequestPayload::Text(text.to_string())
    }
}

impl From<String> for RequestPayload {
    fn from(text: String) -> Self {
        RequestPayload::Text(text)
    }
}

impl From<Option<&str>> for RequestPayload {
    fn from(text: Option<&str>) -> Self {
        text.map_or(RequestPayload::Empty, RequestPayload::from)
    }
}

impl From<Vec<u8>> for RequestPayload {
    fn from(bytes: Vec<u8>) -> Self {
        RequestPayload::Bytes(Bytes::from(bytes))
    }
}

impl From<Bytes> for RequestPayload {
    fn from(bytes: Bytes) -> Self {
        RequestPayload::Bytes(bytes)
    }
}

/// A fully assembled request, ready to be put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebdavRequest {
    pub method: Method,
    pub url: Url,
    pub body: RequestPayload,
    pub headers: Vec<Header>,
}

impl WebdavRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name == name)
            .map(|h| h.value.as_str())
    }
}

/// The HTTP side of the client.
///
/// Implementations send the request and hand back whatever response type
/// they produce. Status codes are not interpreted: a 404 or 423 is still a
/// successful call at this level. Errors are reserved for failures to get
/// a response at all.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    type Response: Send;

    async fn request(&self, request: WebdavRequest) -> Result<Self::Response>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    type Response = T::Response;

    async fn request(&self, request: WebdavRequest) -> Result<Self::Response> {
        (**self).request(request).await
    }
}

/// Transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    credentials: Option<(String, Option<String>)>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            credentials: None,
        }
    }

    /// Builds a transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?))
    }

    /// Sends HTTP basic credentials with every request. Takes precedence
    /// over credentials embedded in the URL.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.credentials = Some((username.into(), password));
        self
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    type Response = reqwest::Response;

    async fn request(&self, request: WebdavRequest) -> Result<reqwest::Response> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())?;
        let (url, url_credentials) = split_userinfo(request.url);

        let mut builder = self.client.request(method, url);
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if let Some((username, password)) = self.credentials.as_ref().or(url_credentials.as_ref()) {
            builder = builder.basic_auth(username, password.as_ref());
        }
        builder = match request.body {
            RequestPayload::Empty => builder,
            RequestPayload::Bytes(bytes) => builder.body(bytes),
            RequestPayload::Text(text) => builder.body(text),
        };

        let response = builder.send().await?;
        trace!("{} answered {}", response.url(), response.status());
        Ok(response)
    }
}

/// Moves `user:password@` out of the URL so it can be sent as basic auth.
fn split_userinfo(mut url: Url) -> (Url, Option<(String, Option<String>)>) {
    if url.username().is_empty() {
        return (url, None);
    }
    let username = decode_userinfo(url.username());
    let password = url.password().map(decode_userinfo);
    // Only cannot-be-a-base URLs refuse userinfo, and those never carry a
    // username, so both calls succeed here.
    url.set_username("").ok();
    url.set_password(None).ok();
    (url, Some((username, password)))
}

fn decode_userinfo(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}
