//! Reading input sources as UTF-8 text

use crate::error::{ContribError, Result};
use std::fs;
use std::path::Path;

/// Read a whole input file as UTF-8
///
/// A file that cannot be read is `Io`; bytes that are not UTF-8 are
/// `MalformedInput`, since every input format is defined as UTF-8 text.
pub fn read_utf8(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ContribError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|e| {
        ContribError::malformed(
            path.display().to_string(),
            format!("not valid UTF-8 (byte offset {})", e.utf8_error().valid_up_to()),
        )
    })
}
