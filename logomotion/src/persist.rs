use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

/// Identity substituted when no user is known.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Opaque identifier of the user a compilation is made on behalf of. Only used to
/// namespace persisted artifacts.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identity(String);

impl Identity {
    /// An empty `name` yields the unknown identity.
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        if name.is_empty() {
            Identity::unknown()
        } else {
            Identity(name)
        }
    }

    pub fn from_optional(name: Option<&str>) -> Self {
        name.map_or_else(Identity::unknown, Identity::new)
    }

    pub fn unknown() -> Self {
        Identity(UNKNOWN_IDENTITY.to_owned())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_IDENTITY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Identity {
    fn default() -> Self {
        Identity::unknown()
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("`{0}` cannot be used as a path component")]
    InvalidComponent(String),
    #[error("failed to write artifact to `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Durable storage for compiled artifacts.
pub trait Sink {
    /// Stores an artifact for `source` and returns where it was written, or `None` if the
    /// sink keeps nothing.
    fn store(
        &self,
        identity: &Identity,
        file_name: &str,
        source: &str,
    ) -> Result<Option<PathBuf>, PersistError>;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn store(
        &self,
        identity: &Identity,
        file_name: &str,
        source: &str,
    ) -> Result<Option<PathBuf>, PersistError> {
        (**self).store(identity, file_name, source)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn store(
        &self,
        identity: &Identity,
        file_name: &str,
        source: &str,
    ) -> Result<Option<PathBuf>, PersistError> {
        (**self).store(identity, file_name, source)
    }
}

/// Sink that discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn store(&self, _: &Identity, _: &str, _: &str) -> Result<Option<PathBuf>, PersistError> {
        Ok(None)
    }
}

/// Sink writing the SHA-256 of each source to `<root>/<identity>/<file_name>`.
#[derive(Clone, Debug)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DirSink { root: root.into() }
    }

    /// Returns the path an artifact would be stored at.
    pub fn path_for(&self, identity: &Identity, file_name: &str) -> Result<PathBuf, PersistError> {
        let dir = check_component(identity.as_str())?;
        let file = check_component(file_name)?;
        Ok(self.root.join(dir).join(file))
    }
}

impl Sink for DirSink {
    fn store(
        &self,
        identity: &Identity,
        file_name: &str,
        source: &str,
    ) -> Result<Option<PathBuf>, PersistError> {
        let path = self.path_for(identity, file_name)?;
        let io_err = |source| PersistError::Io {
            path: path.clone(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        fs::write(&path, format!("{}\n", content_hash(source))).map_err(io_err)?;

        debug!(path = %path.display(), "stored artifact");
        Ok(Some(path))
    }
}

/// Lowercase hex SHA-256 of `source`.
pub fn content_hash(source: &str) -> String {
    format!("{:x}", Sha256::digest(source.as_bytes()))
}

fn check_component(component: &str) -> Result<&str, PersistError> {
    let invalid = component.is_empty()
        || component == "."
        || component == ".."
        || component.contains(|c| c == '/' || c == '\\' || c == '\0');

    if invalid {
        Err(PersistError::InvalidComponent(component.to_owned()))
    } else {
        Ok(component)
    }
}
