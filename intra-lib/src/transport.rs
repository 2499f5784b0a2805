use std::time::Duration;

use async_trait::async_trait;
use futures::{stream::BoxStream, StreamExt, TryStreamExt};
use hyper::{
    body::{self, Bytes},
    client::connect::Connect,
    header::{self, HeaderMap, HeaderValue},
    Body, Client, Method, Request, Response, StatusCode,
};

use crate::session::SessionError;

/// Deadline applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Lazily streamed response body.
pub type ByteStream = BoxStream<'static, Result<Bytes, SessionError>>;

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// A response whose body is read lazily.
pub struct StreamResponse {
    pub status: StatusCode,
    pub body: ByteStream,
}

impl std::fmt::Debug for StreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// The HTTP capability the session is built upon.
///
/// Implementations receive absolute URIs. Statuses are never interpreted here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, uri: &str, headers: HeaderMap) -> Result<RawResponse, SessionError>;

    /// Sends `body`, already form-encoded, as a POST.
    async fn post(
        &self,
        uri: &str,
        body: String,
        headers: HeaderMap,
    ) -> Result<RawResponse, SessionError>;

    async fn get_stream(&self, uri: &str, headers: HeaderMap)
        -> Result<StreamResponse, SessionError>;
}

/// [`Transport`] over a hyper client, with a fixed timeout applied to every request.
#[derive(Debug, Clone)]
pub struct HyperTransport<C> {
    client: Client<C, Body>,
    timeout: Duration,
}

impl<C> HyperTransport<C> {
    pub fn new(client: Client<C, Body>) -> Self {
        Self::with_timeout(client, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(client: Client<C, Body>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<C> HyperTransport<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Sends the request, the deadline only covering the response head.
    async fn send(&self, request: Request<Body>) -> Result<Response<Body>, SessionError> {
        tokio::time::timeout(self.timeout, self.client.request(request))
            .await
            .map_err(|_| SessionError::Timeout(self.timeout))?
            .map_err(SessionError::from)
    }

    /// Sends the request and buffers the whole body within the deadline.
    async fn fetch(&self, request: Request<Body>) -> Result<RawResponse, SessionError> {
        tokio::time::timeout(self.timeout, async {
            let response = self.client.request(request).await.map_err(SessionError::from)?;
            buffer(response).await
        })
        .await
        .map_err(|_| SessionError::Timeout(self.timeout))?
    }
}

fn request(
    method: Method,
    uri: &str,
    body: Body,
    headers: HeaderMap,
) -> Result<Request<Body>, SessionError> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(request_headers) = builder.headers_mut() {
        request_headers.extend(headers);
    }
    Ok(builder.body(body)?)
}

#[async_trait]
impl<C> Transport for HyperTransport<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    async fn get(&self, uri: &str, headers: HeaderMap) -> Result<RawResponse, SessionError> {
        self.fetch(request(Method::GET, uri, Body::empty(), headers)?).await
    }

    async fn post(
        &self,
        uri: &str,
        body: String,
        mut headers: HeaderMap,
    ) -> Result<RawResponse, SessionError> {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        self.fetch(request(Method::POST, uri, Body::from(body), headers)?).await
    }

    async fn get_stream(
        &self,
        uri: &str,
        headers: HeaderMap,
    ) -> Result<StreamResponse, SessionError> {
        let response = self
            .send(request(Method::GET, uri, Body::empty(), headers)?)
            .await?;
        Ok(StreamResponse {
            status: response.status(),
            body: response.into_body().err_into().boxed(),
        })
    }
}

async fn buffer(response: Response<Body>) -> Result<RawResponse, SessionError> {
    let status = response.status();
    Ok(RawResponse {
        status,
        body: body::to_bytes(response.into_body()).await?,
    })
}
