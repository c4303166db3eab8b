use std::fmt;

use log::{debug, trace};
use url::Url;

use super::header::Header;
use super::transport::{HttpTransport, RequestPayload, WebdavRequest};
use crate::errors::Result;

/// Request methods understood by a [`WebdavConnection`].
///
/// The WebDAV extension methods come from RFC 2518 and RFC 3253; `GET`,
/// `HEAD` and `PUT` are plain HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Put,
    Propfind,
    Proppatch,
    Mkcol,
    Lock,
    Unlock,
    Copy,
    Move,
    Delete,
    Report,
    VersionControl,
}

impl Method {
    /// Exact wire token, case-sensitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Propfind => "PROPFIND",
            Method::Proppatch => "PROPPATCH",
            Method::Mkcol => "MKCOL",
            Method::Lock => "LOCK",
            Method::Unlock => "UNLOCK",
            Method::Copy => "COPY",
            Method::Move => "MOVE",
            Method::Delete => "DELETE",
            Method::Report => "REPORT",
            Method::VersionControl => "VERSION-CONTROL",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        let method = match token {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "PUT" => Method::Put,
            "PROPFIND" => Method::Propfind,
            "PROPPATCH" => Method::Proppatch,
            "MKCOL" => Method::Mkcol,
            "LOCK" => Method::Lock,
            "UNLOCK" => Method::Unlock,
            "COPY" => Method::Copy,
            "MOVE" => Method::Move,
            "DELETE" => Method::Delete,
            "REPORT" => Method::Report,
            "VERSION-CONTROL" => Method::VersionControl,
            _ => return None,
        };
        Some(method)
    }

    /// False for the plain HTTP verbs the transport handles natively.
    pub fn is_webdav(&self) -> bool {
        !matches!(self, Method::Get | Method::Head | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved resource address plus the transport used to reach it.
///
/// Every method issues exactly one request against `url` and returns the
/// transport's response as is. Nothing is retried and no status code is
/// looked at.
pub struct WebdavConnection<'a, T: HttpTransport + ?Sized> {
    transport: &'a T,
    url: Url,
}

impl<'a, T: HttpTransport + ?Sized> WebdavConnection<'a, T> {
    pub fn new(transport: &'a T, url: Url) -> Self {
        Self { transport, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends `method` with the given body and headers.
    pub async fn request(
        &self,
        method: Method,
        body: RequestPayload,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        debug!("{} {}", method, self.url);
        for header in &headers {
            trace!("  {}", header);
        }
        let request = WebdavRequest {
            method,
            url: self.url.clone(),
            body,
            headers,
        };
        Ok(self.transport.request(request).await?)
    }

    pub async fn get(&self) -> Result<T::Response> {
        self.request(Method::Get, RequestPayload::Empty, Vec::new())
            .await
    }

    pub async fn head(&self) -> Result<T::Response> {
        self.request(Method::Head, RequestPayload::Empty, Vec::new())
            .await
    }

    pub async fn put(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Put, body.into(), headers).await
    }

    pub async fn propfind(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Propfind, body.into(), headers).await
    }

    /// The body is always sent as a text payload, a missing body becomes an
    /// empty one.
    pub async fn proppatch(&self, body: Option<&str>, headers: Vec<Header>) -> Result<T::Response> {
        let body = RequestPayload::Text(body.unwrap_or_default().to_string());
        self.request(Method::Proppatch, body, headers).await
    }

    pub async fn mkcol(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Mkcol, body.into(), headers).await
    }

    pub async fn lock(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Lock, body.into(), headers).await
    }

    pub async fn unlock(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Unlock, body.into(), headers).await
    }

    pub async fn copy(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Copy, body.into(), headers).await
    }

    pub async fn move_resource(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Move, body.into(), headers).await
    }

    pub async fn delete(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Delete, body.into(), headers).await
    }

    /// Puts the resource under version control (`VERSION-CONTROL`).
    pub async fn version(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::VersionControl, body.into(), headers)
            .await
    }

    pub async fn report(
        &self,
        body: impl Into<RequestPayload>,
        headers: Vec<Header>,
    ) -> Result<T::Response> {
        self.request(Method::Report, body.into(), headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WebdavError;
    use crate::network::header::DEPTH;
    use async_trait::async_trait;

    mockall::mock! {
        pub Transport {}

        #[async_trait]
        impl HttpTransport for Transport {
            type Response = u16;

            async fn request(&self, request: WebdavRequest) -> anyhow::Result<u16>;
        }
    }

    fn resource_url() -> Url {
        Url::parse("http://example.com/dav/file.txt").unwrap()
    }

    #[test]
    fn test_method_tokens_round_trip() {
        for method in [
            Method::Get,
            Method::Head,
            Method::Put,
            Method::Propfind,
            Method::Proppatch,
            Method::Mkcol,
            Method::Lock,
            Method::Unlock,
            Method::Copy,
            Method::Move,
            Method::Delete,
            Method::Report,
            Method::VersionControl,
        ] {
            assert_eq!(Method::from_token(method.as_str()), Some(method));
        }
        assert_eq!(Method::VersionControl.as_str(), "VERSION-CONTROL");
        assert_eq!(Method::from_token("propfind"), None);
        assert!(Method::Mkcol.is_webdav());
        assert!(!Method::Head.is_webdav());
    }

    #[tokio::test]
    async fn test_propfind_forwards_body_and_headers() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .withf(|req| {
                req.method == Method::Propfind
                    && req.url.as_str() == "http://example.com/dav/file.txt"
                    && req.body == RequestPayload::Text("<propfind/>".to_string())
                    && req.headers == vec![Header::new(DEPTH, "0")]
            })
            .times(1)
            .returning(|_| Ok(207));

        let connection = WebdavConnection::new(&transport, resource_url());
        let status = connection
            .propfind("<propfind/>", vec![Header::new(DEPTH, "0")])
            .await
            .unwrap();
        assert_eq!(status, 207);
    }

    #[tokio::test]
    async fn test_proppatch_wraps_missing_body() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .withf(|req| {
                req.method == Method::Proppatch
                    && req.body == RequestPayload::Text(String::new())
                    && req.headers.is_empty()
            })
            .times(1)
            .returning(|_| Ok(207));

        let connection = WebdavConnection::new(&transport, resource_url());
        connection.proppatch(None, Vec::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_head_and_get_use_plain_verbs() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .withf(|req| req.method == Method::Head && req.body.is_empty())
            .times(1)
            .returning(|_| Ok(200));
        transport
            .expect_request()
            .withf(|req| req.method == Method::Get && req.headers.is_empty())
            .times(1)
            .returning(|_| Ok(200));

        let connection = WebdavConnection::new(&transport, resource_url());
        connection.head().await.unwrap();
        connection.get().await.unwrap();
    }

    #[tokio::test]
    async fn test_version_sends_version_control() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .withf(|req| req.method.as_str() == "VERSION-CONTROL")
            .times(1)
            .returning(|_| Ok(200));

        let connection = WebdavConnection::new(&transport, resource_url());
        connection
            .version(RequestPayload::Empty, Vec::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_status_is_not_interpreted() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .times(1)
            .returning(|_| Ok(423));

        let connection = WebdavConnection::new(&transport, resource_url());
        let status = connection
            .delete(RequestPayload::Empty, Vec::new())
            .await
            .unwrap();
        assert_eq!(status, 423);
    }

    #[tokio::test]
    async fn test_transport_error_is_propagated() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection refused")));

        let connection = WebdavConnection::new(&transport, resource_url());
        let err = connection
            .mkcol(RequestPayload::Empty, Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, WebdavError::Transport(_)));
        assert_eq!(err.to_string(), "connection refused");
    }
}
