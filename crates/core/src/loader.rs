use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::{Client, Url};
use serde_json::Value;
use tokio::fs;

use crate::config::FetchConfig;
use crate::error::ExtractError;

/// The single source map a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Local(PathBuf),
    Remote(String),
}

impl Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Local(_) => "local",
            Resource::Remote(_) => "remote",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Local(path) => write!(f, "{}", path.display()),
            Resource::Remote(url) => f.write_str(url),
        }
    }
}

/// Load the raw JSON behind `resource`.
pub async fn load(resource: &Resource, config: &FetchConfig) -> Result<Value, ExtractError> {
    match resource {
        Resource::Local(path) => load_local(path).await,
        Resource::Remote(url) => load_remote(url, config).await,
    }
}

/// Read a source map from disk and parse it as JSON.
pub async fn load_local(path: &Path) -> Result<Value, ExtractError> {
    let label = path.display().to_string();

    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExtractError::NotFound { resource: label });
        }
        Err(source) => return Err(ExtractError::Read { resource: label, source }),
    };
    log::debug!("read {} bytes from {}", text.len(), path.display());

    serde_json::from_str(&text).map_err(|source| ExtractError::Parse { resource: label, source })
}

/// Check that `raw` is an absolute http(s) URL before any request is made.
pub fn parse_remote_url(raw: &str) -> Result<Url, ExtractError> {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(ExtractError::MissingSchema { resource: raw.to_string() });
        }
        Err(source) => {
            return Err(ExtractError::InvalidUrl { resource: raw.to_string(), source });
        }
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ExtractError::UnsupportedScheme {
            resource: raw.to_string(),
            scheme: other.to_string(),
        }),
    }
}

/// Fetch a source map with a single GET and parse the body as JSON.
///
/// The response status is not checked: whatever body comes back is parsed, so
/// an error page surfaces as a parse failure.
pub async fn load_remote(raw: &str, config: &FetchConfig) -> Result<Value, ExtractError> {
    let url = parse_remote_url(raw)?;
    let connection = |source: reqwest::Error| ExtractError::Connection {
        resource: raw.to_string(),
        source,
    };

    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(connection)?;

    let response = client.get(url).send().await.map_err(connection)?;
    let status = response.status();
    if !status.is_success() {
        log::warn!("{raw} answered with HTTP {status}");
    }
    let body = response.text().await.map_err(connection)?;
    log::debug!("fetched {} bytes from {raw}", body.len());

    serde_json::from_str(&body).map_err(|source| ExtractError::Parse {
        resource: raw.to_string(),
        source,
    })
}
