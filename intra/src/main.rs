use std::time::Duration;

use clap::Parser;
use futures::TryStreamExt;
use intra_lib::{CourseFilters, HttpsTransport, Intra, IntraConfig, IntraError, ResourceKind};
use serde::Serialize;
use tokio::{fs::File, io::AsyncWriteExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::options::{Command, Connection, Options, Request};

mod gpa;
mod options;

const DEFAULT_LOG_FILTER: &str = "warn,intra=info,intra_lib=info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let args = Options::parse();

    // Logs go to stderr, stdout only carries JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Resolve { url, kinds } => {
            let resolved = intra_lib::resolve(&url, &kinds)?;
            print(&Resolved::from(resolved), args.pretty)
        }
        Command::Request(request) => {
            let intra = connect(&args.connection)?;
            run(&intra, request, args.pretty).await
        }
    }
}

async fn run(intra: &Intra<HttpsTransport>, request: Request, pretty: bool) -> Result<(), Error> {
    match request {
        Request::Dashboard => print(&intra.dashboard().await?, pretty),
        Request::User { login } => print(&intra.user(login.as_deref()).await?, pretty),
        Request::Module { url } => print(&intra.module_by_url(&url).await?, pretty),
        Request::Activity { url } => print(&intra.activity_by_url(&url).await?, pretty),
        Request::Project { url } => print(&intra.project_by_url(&url).await?, pretty),
        Request::Files { url } => print(&intra.project_files_by_url(&url).await?, pretty),
        Request::Download { url, output } => {
            let mut stream = intra.download_file(&url).await?;
            let mut file = File::create(&output).await?;
            let mut written = 0;
            while let Some(chunk) = stream.try_next().await.map_err(IntraError::from)? {
                file.write_all(&chunk).await?;
                written += chunk.len();
            }
            file.flush().await?;
            info!(bytes = written, path = %output.display(), "downloaded file");
            Ok(())
        }
        Request::Filter {
            locations,
            courses,
            scolaryears,
            preload,
        } => {
            let filters = CourseFilters {
                preload,
                locations,
                courses,
                scolaryears,
            };
            print(&intra.filter_courses(&filters).await?, pretty)
        }
        Request::Gpa => {
            let user = intra.user(None).await?;
            let details = intra.user_details(&user.login).await?;
            print(&gpa::compute(&user, &details.modules), pretty)
        }
    }
}

fn connect(args: &Connection) -> Result<Intra<HttpsTransport>, Error> {
    let autologin = args.autologin.clone().ok_or(Error::MissingAutologin)?;
    let mut config = IntraConfig::autologin(autologin)
        .host(args.host.clone())
        .timeout(Duration::from_secs(args.timeout))
        .throw_intra_error(!args.no_throw);
    if let Some(timezone) = &args.timezone {
        config = config.timezone(timezone.clone());
    }
    Ok(intra_lib::connect(config)?)
}

fn print<T: Serialize>(value: &T, pretty: bool) -> Result<(), Error> {
    let result = match pretty {
        true => serde_json::to_string_pretty(value)?,
        false => serde_json::to_string(value)?,
    };
    println!("{result}");
    Ok(())
}

#[derive(Debug, Serialize)]
struct Resolved {
    kind: &'static str,
    path: String,
}

impl From<intra_lib::ResolvedPath> for Resolved {
    fn from(resolved: intra_lib::ResolvedPath) -> Self {
        Self {
            kind: ResourceKind::as_str(resolved.kind),
            path: resolved.path,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IntraError(#[from] IntraError),
    #[error(transparent)]
    ResolveError(#[from] intra_lib::ResolveError),
    #[error(transparent)]
    JsonSerializeFailed(#[from] serde_json::Error),
    #[error("could not write the downloaded file")]
    WriteFailed(#[from] std::io::Error),
    #[error("no autologin given, pass `--autologin` or set `INTRA_AUTOLOGIN`")]
    MissingAutologin,
}
