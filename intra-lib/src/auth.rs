use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::session::SessionError;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^auth-[a-fA-F0-9]+$").unwrap());
static TOKEN_PATH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/auth-[a-fA-F0-9]+/?$").unwrap());

/// Name of the cookie holding a refreshed credential.
pub const CREDENTIAL_COOKIE: &str = "user";

/// Supplies a fresh authentication cookie on demand.
///
/// The client never calls [`CredentialProvider::refresh`] on its own, see
/// [`Intra::refresh_credentials`](crate::Intra::refresh_credentials).
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn refresh(&self) -> Result<String, SessionError>;
}

/// How a client authenticates against the intranet.
pub enum Credentials {
    /// An autologin link, or the bare `auth-<hex>` token.
    Autologin(String),
    Provider(Box<dyn CredentialProvider>),
}

impl Credentials {
    pub fn autologin(link: impl Into<String>) -> Self {
        Credentials::Autologin(link.into())
    }

    pub fn provider(provider: impl CredentialProvider + 'static) -> Self {
        Credentials::Provider(Box::new(provider))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Autologin tokens grant full access, keep them out of logs.
            Credentials::Autologin(_) => f.write_str("Autologin(..)"),
            Credentials::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Extracts the `/auth-<hex>` path from an autologin link or bare token.
///
/// The host of a full link is ignored, requests always go to the configured host.
pub fn autologin_path(autologin: &str) -> Result<String, SessionError> {
    let autologin = autologin.trim();
    if TOKEN_RE.is_match(autologin) {
        return Ok(format!("/{autologin}"));
    }

    let url = Url::parse(autologin)
        .map_err(|err| SessionError::InvalidAutologin(err.to_string()))?;
    if !TOKEN_PATH_RE.is_match(url.path()) {
        return Err(SessionError::InvalidAutologin("invalid path".to_owned()));
    }
    Ok(url.path().trim_end_matches('/').to_owned())
}
