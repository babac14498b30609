//! In-place literal search and replace for text files.

use crate::error::{BuildTasksError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Replaces the given `(search, replacement)` pairs in a text file.
///
/// Pairs are applied in order and each one sees the output of the previous
/// one. The result is written back to `path` as UTF-8 without a byte-order
/// mark; a mark present in the input is dropped.
///
/// # Returns
/// * `Ok(usize)` - Number of pairs whose search term occurred at least once
/// * `Err` - If the file does not exist, a search term is empty, the content
///   is not valid UTF-8 or the write fails
pub fn replace_in_file<P: AsRef<Path>>(path: P, replacements: &[(&str, &str)]) -> Result<usize> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(BuildTasksError::FileNotFound(path.to_path_buf()));
    }

    if replacements.iter().any(|(search, _)| search.is_empty()) {
        return Err(BuildTasksError::invalid("Search term must not be empty"));
    }

    let mut content = fs::read_to_string(path)?;
    if content.starts_with(BYTE_ORDER_MARK) {
        content.remove(0);
    }

    let mut matched = 0;
    for (search, replacement) in replacements {
        if content.contains(search) {
            matched += 1;
            content = content.replace(search, replacement);
        }
    }

    fs::write(path, content)?;

    debug!(
        path = %path.display(),
        pairs = replacements.len(),
        matched,
        "replaced text in file"
    );

    Ok(matched)
}
