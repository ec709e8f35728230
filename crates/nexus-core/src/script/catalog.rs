//! On-disk script bodies

use std::path::{Path, PathBuf};

use crate::Result;

/// Extension of script body files.
const SCRIPT_EXTENSION: &str = "groovy";

/// A directory of script bodies named `<script_name>.groovy`.
#[derive(Debug, Clone)]
pub struct ScriptCatalog {
    root: PathBuf,
}

impl ScriptCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the body for `name`.
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{SCRIPT_EXTENSION}"))
    }

    /// Read the body for `name`.
    pub fn load(&self, name: &str) -> Result<String> {
        Ok(nexus_fs::io::read_text(&self.script_path(name))?)
    }
}
