pub mod config;
pub mod error;
pub mod loader;
pub mod path;
pub mod pipeline;
pub mod sourcemap;
pub mod writer;

pub use config::{ExtractOptions, FetchConfig};
pub use error::{ErrorKind, ExtractError};
pub use loader::{load, load_local, load_remote, parse_remote_url, Resource};
pub use path::{clean_path, normalize_lexically, resolve_output_path, strip_parent_prefix};
pub use pipeline::run;
pub use sourcemap::{normalize, verify, RecordError, SourceMapRecord};
pub use writer::{ensure_output_dir, write_sources, ExtractSummary};
