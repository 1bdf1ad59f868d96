use std::path::PathBuf;
use std::time::Duration;

/// Where extracted sources go, and whether they are written at all.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub destination: PathBuf,
    /// `false` is a dry run: paths are reported but nothing touches the disk.
    pub write: bool,
}

impl ExtractOptions {
    pub fn new(destination: impl Into<PathBuf>, write: bool) -> Self {
        Self {
            destination: destination.into(),
            write,
        }
    }
}

/// HTTP client settings for remote source maps.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    /// `None` leaves the client without a request timeout.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("mapdump/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}
