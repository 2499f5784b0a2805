use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use intra_lib::{ResourceKind, DEFAULT_HOST};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Options {
    #[command(flatten)]
    pub connection: Connection,
    /// Indent the JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct Connection {
    /// Autologin link or token (e.g. https://intra.epitech.eu/auth-0123abcd)
    #[arg(long, env = "INTRA_AUTOLOGIN", hide_env_values = true)]
    pub autologin: Option<String>,
    /// Timezone sent to the intranet (e.g. Europe/Paris)
    #[arg(long, env = "INTRA_TIMEZONE")]
    pub timezone: Option<String>,
    /// Intranet host
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,
    /// Request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
    /// Print service errors as data instead of failing
    #[arg(long)]
    pub no_throw: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an intranet URL into its canonical path, offline
    Resolve {
        url: String,
        /// Accepted resource kind, may be repeated (module, activity, project, projectfile,
        /// event or all)
        #[arg(long = "kind")]
        kinds: Vec<ResourceKind>,
    },
    #[command(flatten)]
    Request(Request),
}

/// Commands talking to the intranet.
#[derive(Debug, Subcommand)]
pub enum Request {
    /// Fetch the dashboard
    Dashboard,
    /// Fetch a user, the current one by default
    User { login: Option<String> },
    /// Fetch the module behind a URL
    Module { url: String },
    /// Fetch the activity behind a URL
    Activity { url: String },
    /// Fetch the project behind a URL
    Project { url: String },
    /// List the project files behind a URL
    Files { url: String },
    /// Download a file
    Download {
        url: String,
        /// File to write to
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Search the course catalogue
    Filter {
        /// Location (e.g. FR/RUN), may be repeated
        #[arg(long = "location")]
        locations: Vec<String>,
        /// Course (e.g. bachelor/classic), may be repeated
        #[arg(long = "course")]
        courses: Vec<String>,
        /// Scolar year (e.g. 2021), may be repeated
        #[arg(long = "year")]
        scolaryears: Vec<u32>,
        /// Also return the preload table
        #[arg(long)]
        preload: bool,
    },
    /// Compute the GPA from the grades of the current user's modules
    Gpa,
}
