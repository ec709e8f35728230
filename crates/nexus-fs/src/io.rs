//! Small local I/O helpers

use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Ensure a path exists, creating missing parents.
///
/// With `is_dir` the path itself is created as a directory; otherwise an
/// empty file is created if nothing is there yet. Existing content is left
/// untouched.
pub fn ensure_exists(path: &Path, is_dir: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    if is_dir {
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    } else {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;
    }

    Ok(())
}
