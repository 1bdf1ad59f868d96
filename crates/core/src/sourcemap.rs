use serde_json::Value;
use thiserror::Error;

/// Keys a source map must carry before anything is extracted from it.
pub const REQUIRED_KEYS: [&str; 3] = ["version", "sources", "sourcesContent"];

/// The parts of a source map needed to restore the original files.
///
/// `sources` and `sources_content` are index-aligned. Their lengths are not
/// checked against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMapRecord {
    pub version: i128,
    pub sources: Vec<String>,
    /// `None` where the map holds null or a non-string value.
    pub sources_content: Vec<Option<String>>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("`version` is not an integer")]
    Version,
    #[error("`sources` is not an array of strings")]
    Sources,
    #[error("`sourcesContent` is not an array")]
    SourcesContent,
}

/// True iff `json` is an object holding every key in [`REQUIRED_KEYS`].
pub fn verify(json: &Value) -> bool {
    json.as_object()
        .map_or(false, |obj| REQUIRED_KEYS.iter().all(|key| obj.contains_key(*key)))
}

/// Build a [`SourceMapRecord`] from JSON that already passed [`verify`].
pub fn normalize(json: &Value) -> Result<SourceMapRecord, RecordError> {
    let version = coerce_version(&json["version"]).ok_or(RecordError::Version)?;

    let sources = json["sources"]
        .as_array()
        .ok_or(RecordError::Sources)?
        .iter()
        .map(|s| s.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()
        .ok_or(RecordError::Sources)?;

    let sources_content = json["sourcesContent"]
        .as_array()
        .ok_or(RecordError::SourcesContent)?
        .iter()
        .map(|c| c.as_str().map(str::to_owned))
        .collect();

    Ok(SourceMapRecord {
        version,
        sources,
        sources_content,
    })
}

// Integers pass through, floats truncate toward zero, numeric strings parse.
// Floats outside the i128 range are rejected rather than saturated.
fn coerce_version(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i128::MAX as f64)
                    .map(|f| f.trunc() as i128)
            }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i128::from(*b)),
        _ => None,
    }
}
