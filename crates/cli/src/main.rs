use std::error::Error;
use std::io;
use std::time::Duration;

use clap::Parser;
use mapdump_core::{run, ExtractError, ExtractOptions, FetchConfig, Resource};

#[derive(Parser, Debug)]
#[command(version, about = "Restore the original sources embedded in a JavaScript source map")]
struct Cli {
    /// The location of a local source map to parse
    #[arg(short = 'f', long, value_name = "PATH")]
    file: Option<String>,

    /// The URL of a remote source map to parse
    #[arg(short = 'u', long, value_name = "URL")]
    url: Option<String>,

    /// Destination folder to output to
    #[arg(short = 'd', long, value_name = "DIR")]
    destination: Option<String>,

    /// Only print found source files and write nothing to disk
    #[arg(short = 'n', long)]
    no_output: bool,

    /// Request timeout in seconds for --url (no timeout by default)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
enum CliError {
    #[error("Must provide either a URL or local source map to parse")]
    NoSource,
    #[error("Must only provide one source map to parse")]
    BothSources,
    #[error("Must provide a destination directory for source files")]
    NoDestination,
}

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Everything a run needs, checked before any I/O happens.
#[derive(Debug)]
struct Request {
    resource: Resource,
    options: ExtractOptions,
    fetch: FetchConfig,
}

impl Cli {
    fn into_request(self) -> Result<Request, CliError> {
        // Empty strings count as not given.
        let file = self.file.filter(|f| !f.is_empty());
        let url = self.url.filter(|u| !u.is_empty());

        let resource = match (file, url) {
            (None, None) => return Err(CliError::NoSource),
            (Some(_), Some(_)) => return Err(CliError::BothSources),
            (Some(file), None) => Resource::Local(file.into()),
            (None, Some(url)) => Resource::Remote(url),
        };

        let destination = self
            .destination
            .filter(|d| !d.is_empty())
            .ok_or(CliError::NoDestination)?;

        let fetch = FetchConfig {
            timeout: self.timeout.map(Duration::from_secs),
            ..FetchConfig::default()
        };

        Ok(Request {
            resource,
            options: ExtractOptions::new(destination, !self.no_output),
            fetch,
        })
    }
}

async fn try_main() -> Result<(), AppError> {
    let request = Cli::parse().into_request()?;
    log::debug!("{request:?}");

    run(
        &request.resource,
        &request.options,
        &request.fetch,
        &mut io::stdout(),
    )
    .await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    if let Err(e) = try_main().await {
        println!("{e}");
        let mut cause = e.source();
        while let Some(c) = cause {
            log::error!("caused by: {c}");
            cause = c.source();
        }
        std::process::exit(1);
    }
}
