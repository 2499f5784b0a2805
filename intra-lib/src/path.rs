//! Recognizers for the canonical intranet path grammar.
//!
//! ```text
//! /module/<year>/<module>/<instance>[/<acti>[/<event> | /project[/file/<subpath>]]]
//! ```
//!
//! Every recognizer expects a normalized path: leading `/`, no query string and no
//! trailing `/`. Classification is not mutually exclusive, a project file path also
//! starts like a project path, so callers that care about the most specific kind must
//! test the narrower kinds first.

use std::{fmt::Display, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

// Year, module code (`B-PRO-300`) and instance code (`RUN-3-1`).
macro_rules! MODULE_PATTERN {
    () => {
        r"/module/[0-9]{4}/[A-Z]-[A-Z]{3}-[0-9]{3}/[A-Z]{3}-[0-9]+-[0-9]+"
    };
}
macro_rules! ACTIVITY_PATTERN {
    () => {
        concat!(MODULE_PATTERN!(), r"/acti-[0-9]+")
    };
}
macro_rules! PROJECT_PATTERN {
    () => {
        concat!(ACTIVITY_PATTERN!(), r"/project")
    };
}

static MODULE_RE: Lazy<Regex> = Lazy::new(|| anchored(MODULE_PATTERN!()));
static ACTIVITY_RE: Lazy<Regex> = Lazy::new(|| anchored(ACTIVITY_PATTERN!()));
static PROJECT_RE: Lazy<Regex> = Lazy::new(|| anchored(PROJECT_PATTERN!()));
// Unreserved characters, RFC 3986 sub-delimiters, `:`, `@`, `/` and percent escapes.
static PROJECT_FILE_RE: Lazy<Regex> = Lazy::new(|| {
    anchored(concat!(
        PROJECT_PATTERN!(),
        r"/file/[a-zA-Z0-9.\- _~!$&'()*+,;=:@/%]*"
    ))
});
static EVENT_RE: Lazy<Regex> =
    Lazy::new(|| anchored(concat!(ACTIVITY_PATTERN!(), r"/event-[0-9]+")));

fn anchored(pattern: &str) -> Regex {
    // Patterns are literals above, they always compile.
    Regex::new(&format!("^{pattern}$")).unwrap()
}

pub fn is_module_path(path: &str) -> bool {
    MODULE_RE.is_match(path)
}

pub fn is_activity_path(path: &str) -> bool {
    ACTIVITY_RE.is_match(path)
}

pub fn is_project_path(path: &str) -> bool {
    PROJECT_RE.is_match(path)
}

/// A project file path may name a nested file or directory, `file/` alone included.
pub fn is_project_file_path(path: &str) -> bool {
    PROJECT_FILE_RE.is_match(path)
}

pub fn is_event_path(path: &str) -> bool {
    EVENT_RE.is_match(path)
}

/// The kind of resource a canonical path names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Module,
    Activity,
    Project,
    ProjectFile,
    Event,
    /// Accepts any syntactically valid path without classifying it.
    All,
}

impl ResourceKind {
    /// Kinds in the order the resolver tries them.
    pub const PRIORITY: [ResourceKind; 5] = [
        ResourceKind::Module,
        ResourceKind::Activity,
        ResourceKind::Project,
        ResourceKind::ProjectFile,
        ResourceKind::Event,
    ];

    /// Whether `path` belongs to this kind. [`ResourceKind::All`] matches anything.
    pub fn matches(self, path: &str) -> bool {
        match self {
            ResourceKind::Module => is_module_path(path),
            ResourceKind::Activity => is_activity_path(path),
            ResourceKind::Project => is_project_path(path),
            ResourceKind::ProjectFile => is_project_file_path(path),
            ResourceKind::Event => is_event_path(path),
            ResourceKind::All => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Module => "module",
            ResourceKind::Activity => "activity",
            ResourceKind::Project => "project",
            ResourceKind::ProjectFile => "projectfile",
            ResourceKind::Event => "event",
            ResourceKind::All => "all",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "module" => ResourceKind::Module,
            "activity" => ResourceKind::Activity,
            "project" => ResourceKind::Project,
            "projectfile" => ResourceKind::ProjectFile,
            "event" => ResourceKind::Event,
            "all" => ResourceKind::All,
            _ => return Err(UnknownKindError(s.to_owned())),
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown resource kind `{0}`")]
pub struct UnknownKindError(pub String);
