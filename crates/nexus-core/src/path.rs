//! Remote component path resolution
//!
//! A component path addresses a location inside a Nexus repository:
//!
//! ```text
//! repository_name/directory[/subdir]*[/|filename]
//! ```
//!
//! A path ending in `/` addresses a directory; otherwise the last segment is
//! taken as a filename.

use serde::Serialize;

use crate::{Error, Result};

/// Separator between segments of a remote component path.
pub const REMOTE_PATH_SEPARATOR: char = '/';

/// A resolved remote component path.
///
/// `repository` is never empty nor `"."`. `directory` is absent when the
/// path has no intermediate segments, and `filename` is absent when the path
/// ends with [`REMOTE_PATH_SEPARATOR`] or has no segment after the
/// repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentLocation {
    repository: String,
    directory: Option<String>,
    filename: Option<String>,
}

impl ComponentLocation {
    /// Resolve a component path into repository, directory and filename.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepositoryPath`] when the first segment is
    /// empty or `"."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_core::ComponentLocation;
    ///
    /// let loc = ComponentLocation::parse("myrepo2/dir/subdir/file").unwrap();
    /// assert_eq!(loc.repository(), "myrepo2");
    /// assert_eq!(loc.directory(), Some("dir/subdir"));
    /// assert_eq!(loc.filename(), Some("file"));
    /// ```
    pub fn parse(component_path: &str) -> Result<Self> {
        let (repository, mut fragments) = pop_repository(component_path)?;
        let filename = pop_filename(component_path, &mut fragments);
        let directory = join_directory(&fragments);

        Ok(Self {
            repository: repository.to_string(),
            directory,
            filename,
        })
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Whether this location addresses a directory rather than a file.
    pub fn is_directory_target(&self) -> bool {
        self.filename.is_none()
    }

    /// The in-repository path, without the repository name.
    ///
    /// Directory targets keep a trailing separator so that the result can be
    /// used as a prefix when filtering listings. `None` when the location
    /// names only a repository.
    pub fn remote_path(&self) -> Option<String> {
        match (&self.directory, &self.filename) {
            (Some(dir), Some(file)) => Some(format!("{dir}{REMOTE_PATH_SEPARATOR}{file}")),
            (Some(dir), None) => Some(format!("{dir}{REMOTE_PATH_SEPARATOR}")),
            (None, Some(file)) => Some(file.clone()),
            (None, None) => None,
        }
    }

    /// The in-repository destination for uploading a local file.
    ///
    /// An explicit filename wins; a directory target receives the local
    /// file name.
    pub fn target_path(&self, local_file_name: &str) -> String {
        let name = self.filename.as_deref().unwrap_or(local_file_name);
        match &self.directory {
            Some(dir) => format!("{dir}{REMOTE_PATH_SEPARATOR}{name}"),
            None => name.to_string(),
        }
    }
}

impl std::str::FromStr for ComponentLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ComponentLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.repository)?;
        if let Some(dir) = &self.directory {
            write!(f, "{REMOTE_PATH_SEPARATOR}{dir}")?;
        }
        match &self.filename {
            Some(file) => write!(f, "{REMOTE_PATH_SEPARATOR}{file}"),
            None if self.directory.is_some() => write!(f, "{REMOTE_PATH_SEPARATOR}"),
            None => Ok(()),
        }
    }
}

/// Split a component path into `(repository, directory, filename)`.
pub fn split_component_path(component_path: &str) -> Result<(String, Option<String>, Option<String>)> {
    let location = ComponentLocation::parse(component_path)?;
    Ok((location.repository, location.directory, location.filename))
}

fn pop_repository(component_path: &str) -> Result<(&str, Vec<&str>)> {
    let mut fragments: Vec<&str> = component_path.split(REMOTE_PATH_SEPARATOR).collect();

    let repository = if fragments.is_empty() {
        None
    } else {
        Some(fragments.remove(0))
    };

    match repository {
        Some(repo) if !repo.is_empty() && repo != "." => Ok((repo, fragments)),
        _ => Err(Error::InvalidRepositoryPath {
            path: component_path.to_string(),
        }),
    }
}

/// A missing, empty or `"."` last segment silently yields no filename.
fn pop_filename(component_path: &str, fragments: &mut Vec<&str>) -> Option<String> {
    if component_path.ends_with(REMOTE_PATH_SEPARATOR) {
        return None;
    }

    fragments
        .pop()
        .filter(|name| !name.is_empty() && *name != ".")
        .map(str::to_string)
}

fn join_directory(fragments: &[&str]) -> Option<String> {
    let separator = REMOTE_PATH_SEPARATOR.to_string();
    let joined = fragments.join(separator.as_str());
    let directory = joined.strip_suffix(REMOTE_PATH_SEPARATOR).unwrap_or(&joined);

    if directory.is_empty() || directory == "." {
        None
    } else {
        Some(directory.to_string())
    }
}
