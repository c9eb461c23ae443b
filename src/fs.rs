//! Filesystem utilities
//!
//! Reading identifier lists from disk for the `-g`/`-x` file mode.

use std::path::Path;

use crate::errors::{Result, TriplexqError};

/// Read an identifier list file: one identifier per line, trimmed.
///
/// Blank lines are skipped so trailing newlines and spacer lines never
/// produce empty identifiers. The file must exist; a read failure is
/// reported as [`TriplexqError::IdentifierFile`] so it is distinguishable
/// from the file simply not being there.
pub fn read_identifier_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| TriplexqError::IdentifierFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
