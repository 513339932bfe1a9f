//! Version input for the documentation build.
//!
//! The project version comes from a plain-text VERSION file: the first line,
//! trimmed of surrounding whitespace. A missing or empty file aborts
//! resolution — there is no fallback version.

use std::path::Path;

use crate::error::{DocsmithError, Result};

/// Read the project version from a VERSION file.
///
/// Only the first line is used. A missing file propagates as an I/O error;
/// a file whose first line is empty is rejected.
pub fn read_version(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| DocsmithError::io(path, e))?;

    let version = content.lines().next().unwrap_or("").trim();
    if version.is_empty() {
        return Err(DocsmithError::version(format!(
            "version file {} has an empty first line",
            path.display()
        )));
    }

    Ok(version.to_string())
}

/// Derive the version-switcher token shown in the docs version dropdown.
///
/// Development versions (any `dev` substring) collapse to `"dev"`; released
/// versions are keyed by their `major.minor` prefix. Strings with fewer than
/// two dotted components are returned unchanged.
pub fn switcher_token(version: &str) -> String {
    if version.contains("dev") {
        return "dev".to_string();
    }

    let mut parts = version.splitn(3, '.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{major}.{minor}"),
        _ => version.to_string(),
    }
}
