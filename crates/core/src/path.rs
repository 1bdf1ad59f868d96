use std::path::{Component, Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that are dropped from every declared source path.
pub const FORBIDDEN_CHARS: &str = "^*\":<>|?";

static FORBIDDEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[{}]", regex::escape(FORBIDDEN_CHARS))).unwrap());

// Matched literally, not as a regex, so it practically never occurs.
const LEGACY_PATTERN: &str = r" ^\.\/.*$";
const LEGACY_REPLACEMENT: &str = ".js";

/// Remove one leading `../` or `..\`. Deeper traversal is left in place.
pub fn strip_parent_prefix(path: &str) -> &str {
    path.strip_prefix("../")
        .or_else(|| path.strip_prefix("..\\"))
        .unwrap_or(path)
}

/// Turn a declared `sources` entry into a relative path fit for the local filesystem.
///
/// This is not a containment guarantee: `../../x` still comes out as `../x`,
/// and absolute paths stay absolute.
pub fn clean_path(path: &str) -> String {
    let path = strip_parent_prefix(path).replace(LEGACY_PATTERN, LEGACY_REPLACEMENT);
    FORBIDDEN_RE.replace_all(&path, "").into_owned()
}

/// Lexically normalize `path`: drop `.` segments and repeated separators, fold
/// `name/..` pairs, keep leading `..`. An empty result becomes `.`.
///
/// The filesystem is never consulted, so symlinks are not resolved.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

/// Join a cleaned source path onto the destination directory.
pub fn resolve_output_path(destination: &Path, cleaned: &str) -> PathBuf {
    destination.join(normalize_lexically(Path::new(cleaned)))
}
