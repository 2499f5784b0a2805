//! Resolution of arbitrary intranet URLs into canonical, classified paths.

use std::fmt::Display;

use thiserror::Error;
use tracing::trace;
use url::Url;

use crate::path::{
    is_activity_path, is_project_file_path, is_project_path, ResourceKind,
};

/// Only used to give relative URLs something to parse against, the host never reaches
/// the resolved path.
const PLACEHOLDER_HOST: &str = "intra.epitech.eu";
const AUTOLOGIN_PREFIX: &str = "/auth-";

/// A path that passed resolution, together with the kind it was accepted as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub kind: ResourceKind,
    pub path: String,
}

impl ResolvedPath {
    fn new(kind: ResourceKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn into_path(self) -> String {
        self.path
    }
}

impl Display for ResolvedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

/// Strips host, autologin segment, query and trailing slash from `url`.
///
/// Relative URLs (`/module/...`) and scheme-less URLs (`intra.epitech.eu/...` or
/// `module/...`) are both accepted.
pub fn normalize(url: &str) -> Result<String, ResolveError> {
    let absolute = if url.starts_with('/') {
        format!("https://{PLACEHOLDER_HOST}{url}")
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("http://{PLACEHOLDER_HOST}/{url}")
    } else {
        url.to_owned()
    };

    let parsed = Url::parse(&absolute)?;
    let mut path = parsed.path();

    // `/auth-<hex>/module/...` drops exactly its first segment.
    if path.starts_with(AUTOLOGIN_PREFIX) {
        if let Some(index) = path[1..].find('/') {
            path = &path[index + 1..];
        }
    }

    Ok(path.strip_suffix('/').unwrap_or(path).to_owned())
}

/// Resolves `url` into a canonical path of one of the `accepted` kinds.
///
/// An empty `accepted` set, or one containing [`ResourceKind::All`], returns the
/// normalized path unclassified. Otherwise the path is matched against the accepted
/// kinds, then broadened (an activity accepted as its project, a project accepted as
/// its file root), and finally truncated one segment at a time until something
/// matches.
pub fn resolve(url: &str, accepted: &[ResourceKind]) -> Result<ResolvedPath, ResolveError> {
    let normalized = normalize(url)?;

    if accepted.is_empty() || accepted.contains(&ResourceKind::All) {
        return Ok(ResolvedPath::new(ResourceKind::All, normalized));
    }

    let mut path = normalized.as_str();
    // Each pass removes one segment, so there are never more passes than segments.
    for _ in 0..=path.matches('/').count() {
        trace!(path, "resolving path");
        if let Some(resolved) = classify(path, accepted) {
            return Ok(resolved);
        }

        match path.rfind('/') {
            Some(index) if index > 0 => path = &path[..index],
            _ => break,
        }
    }

    Err(ResolveError::UnexpectedPath {
        path: normalized,
        expected: accepted.to_vec(),
    })
}

fn classify(path: &str, accepted: &[ResourceKind]) -> Option<ResolvedPath> {
    if let Some(kind) = ResourceKind::PRIORITY
        .into_iter()
        .find(|kind| accepted.contains(kind) && kind.matches(path))
    {
        return Some(ResolvedPath::new(kind, path));
    }

    if accepted.contains(&ResourceKind::Project) && is_activity_path(path) {
        return Some(ResolvedPath::new(
            ResourceKind::Project,
            format!("{path}/project"),
        ));
    }

    if accepted.contains(&ResourceKind::ProjectFile) {
        // `.../project/file` itself only matches as the file root.
        let suffix = if is_project_file_path(&format!("{path}/")) {
            "/"
        } else if is_project_path(path) {
            "/file/"
        } else if is_activity_path(path) {
            "/project/file/"
        } else {
            return None;
        };
        return Some(ResolvedPath::new(
            ResourceKind::ProjectFile,
            format!("{path}{suffix}"),
        ));
    }

    None
}

/// Represents errors that can occur resolving an intranet URL.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The URL could not be parsed, even after prefixing the intranet host.
    #[error("could not parse URL")]
    InvalidUrl(#[from] url::ParseError),
    /// No truncation of the path matched any of the accepted kinds.
    #[error("unexpected path: {path}. expected path type: {}", join_kinds(.expected))]
    UnexpectedPath {
        path: String,
        expected: Vec<ResourceKind>,
    },
}

fn join_kinds(kinds: &[ResourceKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
