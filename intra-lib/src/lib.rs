mod auth;
mod builder;
mod ids;
mod intra;
pub mod model;
mod parser;
mod path;
mod query;
mod resolver;
mod session;
mod transport;

pub use auth::{autologin_path, CredentialProvider, Credentials, CREDENTIAL_COOKIE};
pub use builder::{activity_path, escape_path, event_path, module_path, project_path};
pub use ids::{ActivityId, EventId, ModuleId};
pub use intra::{Intra, IntraConfig, IntraError};
pub use parser::{parse_educational_history, ParseError};
pub use path::{
    is_activity_path, is_event_path, is_module_path, is_project_file_path, is_project_path,
    ResourceKind, UnknownKindError,
};
pub use query::{sanitize_login, CourseFilters, DateRange};
pub use resolver::{normalize, resolve, ResolveError, ResolvedPath};
pub use session::{
    looks_like_intra_error, CookieJar, Form, Session, SessionError, DEFAULT_HOST,
};
pub use transport::{
    ByteStream, HyperTransport, RawResponse, StreamResponse, Transport, DEFAULT_TIMEOUT,
};

#[cfg(feature = "rustls")]
pub use https::{connect, HttpsTransport};

#[cfg(feature = "rustls")]
mod https {
    use hyper::{client::HttpConnector, Client};
    use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};

    use crate::{HyperTransport, Intra, IntraConfig, IntraError};

    pub type HttpsTransport = HyperTransport<HttpsConnector<HttpConnector>>;

    /// Builds a client over rustls, honoring the configured timeout.
    ///
    /// Plain `http` hosts are allowed so a local server can stand in for the intranet.
    pub fn connect(config: IntraConfig) -> Result<Intra<HttpsTransport>, IntraError> {
        let client = Client::builder().build(
            HttpsConnectorBuilder::new()
                .with_native_roots()
                .https_or_http()
                .enable_http1()
                .build(),
        );
        let timeout = config.timeout;
        Intra::new(HyperTransport::with_timeout(client, timeout), config)
    }
}
