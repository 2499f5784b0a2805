use std::time::Duration;

use cookie::Cookie;
use hyper::{
    body::Bytes,
    header::{self, HeaderMap, HeaderValue},
    StatusCode,
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::transport::{ByteStream, RawResponse, Transport};

pub const DEFAULT_HOST: &str = "https://intra.epitech.eu";

const JSON_FORMAT_QUERY: &str = "format=json";
// Present next to `message` when the intranet asks to log in again.
const AUTH_HINT_FIELD: &str = "redirect";

/// Issues requests against the intranet endpoint and screens responses for service
/// errors.
///
/// The endpoint is the host, followed by the autologin segment when one is used.
pub struct Session<T> {
    transport: T,
    endpoint: String,
    cookies: CookieJar,
    throw_intra_error: bool,
}

impl<T> Session<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into().trim_end_matches('/').to_owned(),
            cookies: CookieJar::default(),
            throw_intra_error: true,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    pub fn set_cookie(&mut self, key: &str, value: &str) {
        self.cookies.set(key, value);
    }

    /// Stops raising [`SessionError::Intra`] and [`SessionError::InvalidResponse`],
    /// letting the raw payloads through.
    pub fn disable_throw_intra_error(&mut self) {
        self.throw_intra_error = false;
    }

    pub fn throws_intra_error(&self) -> bool {
        self.throw_intra_error
    }
}

impl<T> Session<T>
where
    T: Transport,
{
    /// Fetches `path`, decoding the body as JSON when possible and as a string
    /// otherwise.
    pub async fn get(&self, path: &str) -> Result<Value, SessionError> {
        let response = self.fetch(path, "application/json").await?;
        self.screen(decode_payload(&response.body))
    }

    /// Like [`Session::get`], but asks for JSON and rejects string payloads.
    pub async fn get_json(&self, path: &str) -> Result<Value, SessionError> {
        let payload = self.get(&with_json_format(path)).await?;
        match payload {
            Value::String(page) if self.throw_intra_error => {
                Err(SessionError::InvalidResponse(page))
            }
            payload => Ok(payload),
        }
    }

    /// Fetches `path` as an HTML page.
    pub async fn get_html(&self, path: &str) -> Result<String, SessionError> {
        let response = self.fetch(path, "text/html").await?;
        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    /// Fetches `path` as plain text, still screening it for service errors.
    pub async fn get_text(&self, path: &str) -> Result<String, SessionError> {
        let response = self.fetch(path, "text/plain").await?;
        self.screen(decode_payload(&response.body))?;
        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    /// Posts `form` to `path`, asking for a JSON answer.
    pub async fn post(&self, path: &str, form: Option<Form>) -> Result<Value, SessionError> {
        let uri = self.uri(&with_json_format(path));
        debug!(method = "POST", %uri, "sending request");

        let body = form.map(Form::finish).unwrap_or_default();
        let response = self
            .transport
            .post(&uri, body, self.headers("application/json")?)
            .await?;
        check_status(response.status)?;
        self.screen(decode_payload(&response.body))
    }

    /// Requests `path` as a binary stream. The stream cannot be restarted.
    pub async fn get_stream(&self, path: &str) -> Result<ByteStream, SessionError> {
        let uri = self.uri(path);
        debug!(method = "GET", %uri, "opening stream");

        let mut headers = self.headers("application/octet-stream")?;
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        );
        let response = self.transport.get_stream(&uri, headers).await?;
        check_status(response.status)?;
        Ok(response.body)
    }

    async fn fetch(&self, path: &str, accept: &'static str) -> Result<RawResponse, SessionError> {
        let uri = self.uri(path);
        debug!(method = "GET", %uri, "sending request");

        let response = self.transport.get(&uri, self.headers(accept)?).await?;
        check_status(response.status)?;
        Ok(response)
    }

    fn headers(&self, accept: &'static str) -> Result<HeaderMap, SessionError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(accept));
        if !self.cookies.is_empty() {
            headers.insert(header::COOKIE, HeaderValue::from_str(&self.cookies.header())?);
        }
        Ok(headers)
    }

    fn uri(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.endpoint)
        } else {
            format!("{}/{path}", self.endpoint)
        }
    }

    fn screen(&self, payload: Value) -> Result<Value, SessionError> {
        match intra_error(&payload) {
            Some(err) if self.throw_intra_error => Err(err),
            Some(err) => {
                warn!(%err, "passing service error through");
                Ok(payload)
            }
            None => Ok(payload),
        }
    }
}

/// The insertion-ordered cookies sent with every request.
#[derive(Debug, Clone, Default)]
pub struct CookieJar(Vec<Cookie<'static>>);

impl CookieJar {
    /// Sets `key`, keeping its original position when it was already present.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|cookie| cookie.name() == key) {
            Some(cookie) => cookie.set_value(value.to_owned()),
            None => self.0.push(Cookie::new(key.to_owned(), value.to_owned())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|cookie| cookie.name() == key)
            .map(|cookie| cookie.value())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the `Cookie` header, names and values percent-encoded.
    pub fn header(&self) -> String {
        self.0
            .iter()
            .map(|cookie| cookie.encoded().to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A form-encoded request body, fields kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Form(Vec<(String, String)>);

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_owned(), value.to_string()));
        self
    }

    /// Omitted values are dropped from the body.
    pub fn optional_field(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Repeats `key` once per value.
    pub fn fields<I>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for value in values {
            self = self.field(key, value);
        }
        self
    }

    pub fn finish(self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0)
            .finish()
    }
}

fn with_json_format(path: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{JSON_FORMAT_QUERY}")
}

/// JSON when the body parses as JSON, the raw text otherwise.
fn decode_payload(body: &Bytes) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn check_status(status: StatusCode) -> Result<(), SessionError> {
    if status.is_server_error() {
        return Err(SessionError::ServerError(status));
    }
    Ok(())
}

/// Whether `payload` has the shape of a service error envelope.
pub fn looks_like_intra_error(payload: &Value) -> bool {
    intra_error(payload).is_some()
}

fn intra_error(payload: &Value) -> Option<SessionError> {
    let object = payload.as_object()?;
    if object.contains_key("error")
        || (object.contains_key("message") && object.contains_key(AUTH_HINT_FIELD))
    {
        return Some(SessionError::Intra {
            error: field_text(object, "error"),
            message: field_text(object, "message"),
        });
    }
    None
}

fn field_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Represents errors that can occur talking to the intranet.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An argument to build the HTTP request was invalid.
    /// See more [here](https://docs.rs/http/0.2.8/http/request/struct.Builder.html#errors)
    #[error("an argument while building an HTTP request was invalid")]
    MalformedHttpArgs(#[from] hyper::http::Error),
    /// Failed to send HTTP request.
    #[error("failed to send HTTP request")]
    HttpRequestFailed(#[from] hyper::Error),
    /// A cookie could not be turned into a header value.
    #[error("could not build the cookie header")]
    MalformedCookie(#[from] header::InvalidHeaderValue),
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// The intranet answered with a server error status.
    #[error("intranet responded with {0}")]
    ServerError(StatusCode),
    /// The payload was a service error envelope.
    #[error("intranet error: {}", .message.as_deref().or(.error.as_deref()).unwrap_or("unknown"))]
    Intra {
        error: Option<String>,
        message: Option<String>,
    },
    /// JSON was expected but the intranet returned a page.
    #[error("invalid response, expected JSON")]
    InvalidResponse(String),
    /// The autologin link or token is not in the `auth-<hex>` form.
    #[error("invalid autologin: {0}")]
    InvalidAutologin(String),
    /// The credential provider failed to produce a credential.
    #[error("could not refresh credentials: {0}")]
    CredentialRefresh(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use hyper::Method;

    const ENDPOINT: &str = "https://intra.epitech.eu/auth-abc123";

    fn session(transport: MockTransport) -> Session<MockTransport> {
        Session::new(transport, ENDPOINT)
    }

    #[test]
    fn cookie_header_keeps_insertion_order() {
        let mut jar = CookieJar::default();
        jar.set("a", "1");
        jar.set("b", "2");
        assert_eq!(jar.header(), "a=1; b=2");

        jar.set("tz", "Europe/Paris");
        jar.set("a", "3");
        assert_eq!(jar.header(), "a=3; b=2; tz=Europe%2FParis");
        assert_eq!(jar.get("tz"), Some("Europe/Paris"));
    }

    #[test]
    fn form_drops_omitted_fields() {
        let body = Form::new()
            .optional_field("codegroup", None::<String>)
            .fields("members", ["jane.doe", "john.doe"])
            .field("title", "Team rocket")
            .field("force", false)
            .finish();
        assert_eq!(
            body,
            "members=jane.doe&members=john.doe&title=Team+rocket&force=false"
        );
        assert_eq!(Form::new().finish(), "");
    }

    #[test]
    fn json_format_is_appended() {
        assert_eq!(with_json_format("/user/"), "/user/?format=json");
        assert_eq!(
            with_json_format("/planning/load?start=2021-9-1"),
            "/planning/load?start=2021-9-1&format=json"
        );
    }

    #[tokio::test]
    async fn get_json_returns_objects_unchanged() {
        let session = session(MockTransport::default().respond(200, r#"{"login":"jane"}"#));
        let payload = session.get_json("/user/").await.unwrap();
        assert_eq!(payload, serde_json::json!({ "login": "jane" }));

        let request = &session.transport().requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.uri, format!("{ENDPOINT}/user/?format=json"));
        assert_eq!(request.headers[header::ACCEPT], "application/json");
        assert!(request.headers.get(header::COOKIE).is_none());
    }

    #[tokio::test]
    async fn get_json_rejects_pages() {
        let session = session(MockTransport::default().respond(200, "<html>oops</html>"));
        match session.get_json("/user/").await {
            Err(SessionError::InvalidResponse(page)) => assert_eq!(page, "<html>oops</html>"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_json_raises_service_errors() {
        let session = session(
            MockTransport::default().respond(403, r#"{"error":"Forbidden","message":"nope"}"#),
        );
        match session.get_json("/module/board").await {
            Err(SessionError::Intra { error, message }) => {
                assert_eq!(error.as_deref(), Some("Forbidden"));
                assert_eq!(message.as_deref(), Some("nope"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn auth_redirect_is_a_service_error() {
        let body = r#"{"message":"Veuillez vous connecter","redirect":"/"}"#;
        let session = session(MockTransport::default().respond(200, body));
        assert!(matches!(
            session.get("/").await,
            Err(SessionError::Intra { error: None, .. })
        ));

        // A message alone is regular data.
        let session = session_with(r#"{"message":"hello"}"#);
        assert!(session.get("/").await.is_ok());
    }

    fn session_with(body: &str) -> Session<MockTransport> {
        session(MockTransport::default().respond(200, body))
    }

    #[tokio::test]
    async fn disabled_detection_passes_payloads_through() {
        let mut session = session(
            MockTransport::default()
                .respond(200, r#"{"error":"Forbidden"}"#)
                .respond(200, "<html></html>"),
        );
        session.disable_throw_intra_error();

        assert_eq!(
            session.get_json("/").await.unwrap(),
            serde_json::json!({ "error": "Forbidden" })
        );
        assert_eq!(
            session.get_json("/").await.unwrap(),
            Value::String("<html></html>".to_owned())
        );
    }

    #[tokio::test]
    async fn server_errors_are_not_soft() {
        let session = session(MockTransport::default().respond(502, "Bad gateway"));
        assert!(matches!(
            session.get("/").await,
            Err(SessionError::ServerError(StatusCode::BAD_GATEWAY))
        ));
    }

    #[tokio::test]
    async fn post_sends_form_and_cookies() {
        let mut session = session_with("{}");
        session.set_cookie("tz", "Indian/Reunion");
        session
            .post(
                "/module/2021/B-PRO-300/RUN-3-1/acti-1/project/destroygroup",
                Some(Form::new().field("code", "group-42")),
            )
            .await
            .unwrap();

        let request = &session.transport().requests()[0];
        assert_eq!(request.method, Method::POST);
        assert!(request.uri.ends_with("/destroygroup?format=json"));
        assert_eq!(request.body.as_deref(), Some("code=group-42"));
        assert_eq!(request.headers[header::COOKIE], "tz=Indian%2FReunion");
    }

    #[tokio::test]
    async fn stream_asks_for_octets() {
        use futures::TryStreamExt;

        let session = session_with("%PDF-1.4");
        let stream = session.get_stream("/module/2021/file.pdf").await.unwrap();
        let chunks: Vec<Bytes> = stream.try_collect().await.unwrap();
        assert_eq!(chunks.concat(), b"%PDF-1.4");

        let request = &session.transport().requests()[0];
        assert_eq!(request.headers[header::ACCEPT], "application/octet-stream");
        assert!(!request.uri.contains("format=json"));
    }

    #[tokio::test]
    async fn failed_streams_are_server_errors() {
        let session = session(MockTransport::default().respond(500, "<html>Internal error</html>"));
        assert!(matches!(
            session.get_stream("/module/2021/file.pdf").await,
            Err(SessionError::ServerError(StatusCode::INTERNAL_SERVER_ERROR))
        ));
    }
}
